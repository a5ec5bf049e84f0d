use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("location code must be exactly 3 ASCII letters, got `{0}`")]
pub struct InvalidLocationCode(pub String);

/// A 3-letter IATA location code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode(String);

impl LocationCode {
    pub fn parse(raw: &str) -> Result<Self, InvalidLocationCode> {
        let trimmed = raw.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(InvalidLocationCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocationCode {
    type Error = InvalidLocationCode;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<LocationCode> for String {
    fn from(code: LocationCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        assert_eq!(LocationCode::parse("jfk").unwrap().as_str(), "JFK");
        assert_eq!(LocationCode::parse(" LHR ").unwrap().as_str(), "LHR");
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(LocationCode::parse("").is_err());
        assert!(LocationCode::parse("JF").is_err());
        assert!(LocationCode::parse("JFKX").is_err());
        assert!(LocationCode::parse("J1K").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let code: LocationCode = serde_json::from_str("\"sfo\"").unwrap();
        assert_eq!(code.as_str(), "SFO");
        assert!(serde_json::from_str::<LocationCode>("\"TOOLONG\"").is_err());
    }
}
