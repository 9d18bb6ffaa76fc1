/// Create requires every mandatory field; Patch treats every field as optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Patch,
}
