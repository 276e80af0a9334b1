use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a learning unit within a module.
///
/// Unit `0` is the always-open introductory unit; every other unit is a
/// gradeable section whose access is granted per source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(u8);

impl UnitId {
    /// The always-open introductory unit.
    pub const INTRO: UnitId = UnitId(0);

    /// Creates a new `UnitId`
    #[must_use]
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for the introductory unit.
    #[must_use]
    pub fn is_intro(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a unit ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for UnitId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(UnitId::new)
            .map_err(|_| ParseIdError {
                kind: "UnitId".to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_id_display() {
        let id = UnitId::new(7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_unit_id_from_str() {
        let id: UnitId = "3".parse().unwrap();
        assert_eq!(id, UnitId::new(3));
    }

    #[test]
    fn test_unit_id_from_str_invalid() {
        let result = "not-a-number".parse::<UnitId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_id_from_str_out_of_range() {
        let result = "300".parse::<UnitId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_intro_unit() {
        assert!(UnitId::INTRO.is_intro());
        assert!(!UnitId::new(1).is_intro());
        assert_eq!(UnitId::INTRO, UnitId::new(0));
    }

    #[test]
    fn test_id_roundtrip() {
        let original = UnitId::new(5);
        let serialized = original.to_string();
        let deserialized: UnitId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
