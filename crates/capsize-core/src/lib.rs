//! Canoe crash simulation for Capsize.
//!
//! A canoe with fixed dimensions and a hull material carries passengers.
//! Each crash rolls against a threshold derived from the hull's volume and
//! its remaining durability; every roll that beats the threshold throws a
//! passenger overboard (heavier passengers are proportionally more likely)
//! and damages the hull further. The crate is synchronous and
//! single-threaded, and deterministic for a given random source.
//!
//! # Modules
//!
//! - [`canoe`] -- The [`Canoe`]: construction, embark/disembark, and [`Canoe::crash`].
//! - [`config`] -- Crash constants and the YAML scenario config ([`SimulationConfig`]).
//! - [`crash`] -- [`HullCondition`] and the [`CrashReport`] returned by each crash.
//! - [`error`] -- Construction errors ([`CanoeError`]).
//! - [`ids`] -- [`PersonId`], the identity used to match passengers.
//! - [`material`] -- Hull [`Material`] and its durability coefficient.
//! - [`person`] -- [`Person`]: name, weight, alive or dead.
//! - [`random`] -- The [`RandomSource`] seam plus [`RngSource`] and [`ScriptedSource`].
//! - [`selection`] -- Weight-proportional passenger selection.
//! - [`status`] -- [`CanoeStatus`] snapshot and its text rendering.

pub mod canoe;
pub mod config;
pub mod crash;
pub mod error;
pub mod ids;
pub mod material;
pub mod person;
pub mod random;
pub mod selection;
pub mod status;

// Re-export primary types at crate root for convenience.
pub use canoe::Canoe;
pub use config::{ConfigError, CrashConfig, OutputFormat, SimulationConfig};
pub use crash::{CrashReport, HullCondition};
pub use error::{CanoeError, Dimension};
pub use ids::PersonId;
pub use material::Material;
pub use person::Person;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use selection::{pick_weighted, select_weighted};
pub use status::CanoeStatus;
