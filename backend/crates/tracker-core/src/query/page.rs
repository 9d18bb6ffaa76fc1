/// Fixed number of records per page
pub const PAGE_SIZE: i64 = 10;

/// A 1-based page number. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Parse a raw page parameter. Absent, non-numeric and non-positive values yield page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|number| *number >= 1)
            .map(Page)
            .unwrap_or(Self::FIRST)
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// Records to skip before this page
    pub fn skip(&self) -> i64 {
        (self.0 - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn take(&self) -> i64 {
        PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}
