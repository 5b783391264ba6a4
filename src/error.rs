use thiserror::Error;

/// The errors that can occur while configuring the mapper or reading coordinates back from the
/// page.
///
/// Note that clicking itself never fails: missing elements and degenerate geometry are reported
/// through `ClickOutcome` instead.
#[derive(Debug, Error)]
pub enum CoordinateError {
    /// The JSON configuration couldn't be parsed into a `MapperConfig`
    #[error("invalid mapper configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The configuration asks for more decimals than `toFixed` supports
    #[error("at most {} decimals are supported, but {0} were configured", crate::MAX_FIXED_DIGITS)]
    TooManyDecimals(usize),

    /// One of the coordinate fields contains text that is not a number
    #[error("the {field} coordinate field contains {value:?}, which is not a number")]
    InvalidFieldValue { field: &'static str, value: String },
}
