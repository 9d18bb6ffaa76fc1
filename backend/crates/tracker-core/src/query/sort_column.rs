use std::borrow::Cow;

/// An allow-listed column a list may be ordered by.
///
/// Client keys never reach the store; only `order_expression` output does.
pub trait SortColumn: Copy + Eq + std::fmt::Debug {
    /// Whether lists of this entity honor a status filter
    const FILTERS_BY_STATUS: bool;

    /// Resolve a client-supplied sort key. Unknown keys yield `None`.
    fn from_key(key: &str) -> Option<Self>;

    /// SQL expression to order by. Plain columns are their own name;
    /// closed-set columns rank values in declaration order.
    fn order_expression(self) -> Cow<'static, str>;
}

/// `CASE` expression ranking `column` by the position of its value in `values`
pub(crate) fn declaration_rank<I>(column: &str, values: I) -> String
where
    I: IntoIterator<Item = &'static str>,
{
    let arms: String = values
        .into_iter()
        .enumerate()
        .map(|(rank, value)| format!(" WHEN '{value}' THEN {rank}"))
        .collect();

    format!("CASE {column}{arms} END")
}
