//! Boolean flag parsing for environment values.

/// Error returned by [`parse_flag`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid boolean value {0:?}")]
pub struct ParseFlagError(pub String);

/// Parse a boolean flag.
///
/// Accepts `1`, `t`, `T`, `true`, `TRUE`, `True` and `0`, `f`, `F`,
/// `false`, `FALSE`, `False`. Anything else, including the empty string
/// and surrounding whitespace, is rejected.
///
/// # Errors
///
/// Returns [`ParseFlagError`] carrying the rejected input.
///
/// ```
/// use slack_relay_core::parse_flag;
///
/// assert_eq!(parse_flag("True"), Ok(true));
/// assert_eq!(parse_flag("0"), Ok(false));
/// assert!(parse_flag("yes").is_err());
/// ```
pub fn parse_flag(s: &str) -> Result<bool, ParseFlagError> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ParseFlagError(s.to_owned())),
    }
}
