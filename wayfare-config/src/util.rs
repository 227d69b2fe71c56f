//! Parsing helpers shared by the loader.

use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Parse an optional raw environment value, reporting which key was bad.
pub fn parse_env_value<T: FromStr>(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ConfigLoadError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigLoadError::InvalidEnv {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_treated_as_unset() {
        let parsed: Option<usize> = parse_env_value("K", Some("  ")).unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn bad_values_name_the_key() {
        let err = parse_env_value::<usize>("WAYFARE_X", Some("three"))
            .unwrap_err();
        assert!(err.to_string().contains("WAYFARE_X"));
    }
}
