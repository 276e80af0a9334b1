//! Wire payloads of the platform API.
//!
//! Grant and eligibility fields all default when absent, so a sparse payload
//! degrades to empty grants or a generic denial instead of a decode failure.
//! History rows are the exception: a row without an id or timestamp is a
//! decode error, surfaced to the caller.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use itp_core::model::{
    AccessBreakdown, EligibilityCheck, Module, ReasonCode, SimulationAttempt, UnitId,
};

// ─── Unit access ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AccessBreakdownDto {
    #[serde(default)]
    pub from_rencana_belajar: GrantSourceDto,
    #[serde(default)]
    pub from_paket: GrantSourceDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct GrantSourceDto {
    #[serde(default)]
    pub units: HashMap<String, Vec<u8>>,
}

impl AccessBreakdownDto {
    /// Convert into the domain breakdown, skipping unknown module names.
    #[must_use]
    pub fn into_domain(self) -> AccessBreakdown {
        AccessBreakdown::new(
            convert_units(self.from_rencana_belajar.units),
            convert_units(self.from_paket.units),
        )
    }
}

fn convert_units(units: HashMap<String, Vec<u8>>) -> HashMap<Module, BTreeSet<UnitId>> {
    let mut converted = HashMap::new();
    for (name, ids) in units {
        let Ok(module) = name.parse::<Module>() else {
            tracing::warn!(module = %name, "skipping unknown module in access payload");
            continue;
        };
        converted
            .entry(module)
            .or_insert_with(BTreeSet::new)
            .extend(ids.into_iter().map(UnitId::new));
    }
    converted
}

// ─── Eligibility ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct EligibilityDto {
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_reason_code")]
    pub reason_code: Option<ReasonCode>,
    #[serde(default)]
    pub has_incomplete: bool,
}

impl EligibilityDto {
    #[must_use]
    pub fn into_check(self) -> EligibilityCheck {
        EligibilityCheck {
            eligible: self.eligible,
            reason: self.reason,
            reason_code: self.reason_code,
            has_incomplete: self.has_incomplete,
        }
    }
}

/// A `reason_code` value the client does not know decodes as absent, leaving
/// classification to the substring shim and the generic fallback.
fn lenient_reason_code<'de, D>(deserializer: D) -> Result<Option<ReasonCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        serde_json::from_value::<ReasonCode>(serde_json::Value::String(value)).ok()
    }))
}

// ─── Simulation history ────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SimulationHistoryDto {
    #[serde(default)]
    pub results: Vec<SimulationAttemptDto>,
}

#[derive(Debug, Deserialize)]
pub struct SimulationAttemptDto {
    pub id: i64,
    #[serde(default)]
    pub listening: u32,
    #[serde(default)]
    pub structure: u32,
    #[serde(default)]
    pub reading: u32,
    #[serde(default)]
    pub total: u32,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub finished: bool,
}

impl SimulationHistoryDto {
    #[must_use]
    pub fn into_domain(self) -> Vec<SimulationAttempt> {
        self.results
            .into_iter()
            .map(|row| SimulationAttempt {
                id: row.id,
                listening: row.listening,
                structure: row.structure,
                reading: row.reading,
                total: row.total,
                completed_at: row.completed_at,
                finished: row.finished,
            })
            .collect()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
