use serde::Deserialize;

/// How the outcome of a check maps onto the exit status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSection {
    /// Exit non-zero when any required route is missing.
    pub strict: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCheckSection {
    pub strict: Option<bool>,
}

pub fn parse_check_section(raw: Option<RawCheckSection>) -> CheckSection {
    let check_raw = raw.unwrap_or_default();
    CheckSection {
        strict: check_raw.strict.unwrap_or(false),
    }
}
