use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::UnitId;

/// A skill module of the ITP test, each with a fixed number of units.
///
/// Unit `0` of every module is the always-open introduction; the remaining
/// units are gradeable sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Listening,
    Structure,
    Reading,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module name: {0}")]
pub struct ParseModuleError(String);

impl Module {
    /// Catalog order for the material-selection page.
    pub const ALL: [Module; 3] = [Module::Listening, Module::Structure, Module::Reading];

    /// Total units in the module, counting the introductory unit 0.
    #[must_use]
    pub fn unit_count(&self) -> u8 {
        match self {
            Module::Listening | Module::Structure => 11,
            Module::Reading => 7,
        }
    }

    /// Human-facing module title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Module::Listening => "Listening Comprehension",
            Module::Structure => "Structure and Written Expression",
            Module::Reading => "Reading Comprehension",
        }
    }

    /// Wire and route name of the module.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Listening => "listening",
            Module::Structure => "structure",
            Module::Reading => "reading",
        }
    }

    /// Iterate every unit of the module, including unit 0.
    pub fn units(&self) -> impl Iterator<Item = UnitId> {
        (0..self.unit_count()).map(UnitId::new)
    }

    /// Iterate the gradeable units, skipping the introductory unit 0.
    pub fn real_units(&self) -> impl Iterator<Item = UnitId> {
        (1..self.unit_count()).map(UnitId::new)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = ParseModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listening" => Ok(Module::Listening),
            "structure" => Ok(Module::Structure),
            "reading" => Ok(Module::Reading),
            other => Err(ParseModuleError(other.to_string())),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
