//! Crash outcome types: the per-crash hull condition and the crash report.
//!
//! The hull condition is computed once, at the start of a crash event,
//! from the material's durability coefficient minus accumulated damage:
//!
//! ```text
//! coeff     = durability_coefficient(material) - damage
//! volume    = width * length * depth
//! threshold = floor(5 + 2 * volume / (0.5 * coeff))
//! ```
//!
//! Each roll in `(0, 20]` that exceeds the threshold kills one passenger.
//! Once damage reaches the durability coefficient, `coeff` is no longer
//! positive and the formula would divide by zero or flip sign. That case is
//! [`HullCondition::Compromised`]: the threshold is zero, so every roll is
//! fatal and the crash claims every passenger aboard.
//!
//! The outcome is discontinuous at `coeff == 0`: a tiny positive `coeff`
//! drives the threshold toward infinity (saturating at `i64::MAX`) so nobody
//! dies, while `coeff` of exactly zero or below is `Compromised` and
//! everybody dies.

use serde::Serialize;

use crate::config::CrashConfig;
use crate::person::Person;

/// The state of the hull for one crash event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum HullCondition {
    /// Effective durability is positive; rolls above `threshold` are fatal.
    Seaworthy {
        /// Integer death-chance threshold.
        threshold: i64,
    },
    /// Damage has used up the hull's durability. Every roll is fatal.
    Compromised,
}

impl HullCondition {
    /// Evaluate the hull from its effective durability `coefficient` and
    /// its `volume`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn evaluate(coefficient: f64, volume: f64, config: &CrashConfig) -> Self {
        if coefficient.is_nan() || coefficient <= 0.0 {
            return Self::Compromised;
        }
        let raw = config.base_threshold
            + config.volume_factor * volume / (config.durability_factor * coefficient);
        // `as` saturates, so a vanishing coefficient pins the threshold at i64::MAX.
        Self::Seaworthy {
            threshold: raw.floor() as i64,
        }
    }

    /// The threshold a roll must exceed to be fatal.
    pub const fn threshold(self) -> i64 {
        match self {
            Self::Seaworthy { threshold } => threshold,
            Self::Compromised => 0,
        }
    }

    /// Whether the hull has been compromised.
    pub const fn is_compromised(self) -> bool {
        matches!(self, Self::Compromised)
    }

    /// Whether `roll` kills a passenger under this condition.
    #[allow(clippy::cast_precision_loss)]
    pub fn is_fatal(self, roll: f64) -> bool {
        roll > self.threshold() as f64
    }
}

/// Everything that happened during one crash event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrashReport {
    /// Hull condition used for every roll in this crash.
    pub hull: HullCondition,
    /// Effective durability coefficient (material coefficient minus damage).
    pub coefficient: f64,
    /// Hull volume (width x length x depth).
    pub volume: f64,
    /// Canoe damage when the crash began.
    pub damage_before: f64,
    /// Canoe damage when the crash resolved.
    pub damage_after: f64,
    /// Every survival roll drawn, in order. The last one failed unless the
    /// canoe emptied first.
    pub rolls: Vec<f64>,
    /// Passengers killed, in order of death. Each one is dead.
    pub casualties: Vec<Person>,
}

impl CrashReport {
    /// Number of passengers who died.
    pub fn deaths(&self) -> usize {
        self.casualties.len()
    }

    /// Names of the dead, in order of death.
    pub fn casualty_names(&self) -> Vec<&str> {
        self.casualties.iter().map(Person::name).collect()
    }

    /// A one-line notice per death, as printed by the runner.
    pub fn death_notices(&self) -> Vec<String> {
        self.casualties
            .iter()
            .map(|p| format!("[ ! ] {} has died", p.name()))
            .collect()
    }
}
