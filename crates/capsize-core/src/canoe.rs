//! The canoe: geometry, material, passengers, and the crash routine.
//!
//! A [`Canoe`] owns its passengers. [`embark`](Canoe::embark),
//! [`disembark`](Canoe::disembark) and [`crash`](Canoe::crash) are the only
//! ways the passenger list changes, and `crash` is the only way damage
//! changes. Readers get a borrowed slice from
//! [`passengers`](Canoe::passengers).

use tracing::{debug, info, warn};

use crate::config::CrashConfig;
use crate::crash::{CrashReport, HullCondition};
use crate::error::{CanoeError, Dimension, is_positive_finite};
use crate::ids::PersonId;
use crate::material::Material;
use crate::person::Person;
use crate::random::RandomSource;
use crate::selection::pick_weighted;
use crate::status::CanoeStatus;

/// A canoe that can carry passengers and crash.
#[derive(Debug, Clone, PartialEq)]
pub struct Canoe {
    length: f64,
    width: f64,
    depth: f64,
    material: Material,
    damage: f64,
    passengers: Vec<Person>,
    config: CrashConfig,
}

impl Canoe {
    /// Build an undamaged, empty canoe.
    ///
    /// The material is not validated: anything outside the known table
    /// crashes with the default durability coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`CanoeError::InvalidDimension`] for the first of length,
    /// width, depth that is zero, negative, or not finite.
    pub fn new(
        length: f64,
        width: f64,
        depth: f64,
        material: impl Into<Material>,
    ) -> Result<Self, CanoeError> {
        for (dimension, value) in [
            (Dimension::Length, length),
            (Dimension::Width, width),
            (Dimension::Depth, depth),
        ] {
            if !is_positive_finite(value) {
                return Err(CanoeError::InvalidDimension { dimension, value });
            }
        }
        Ok(Self {
            length,
            width,
            depth,
            material: material.into(),
            damage: 0.0,
            passengers: Vec::new(),
            config: CrashConfig::default(),
        })
    }

    /// Replace the crash constants used by this canoe.
    ///
    /// # Errors
    ///
    /// Returns [`CanoeError::InvalidCrashConfig`] if `config` fails
    /// [`CrashConfig::validate`]; the canoe is dropped in that case.
    pub fn with_config(mut self, config: CrashConfig) -> Result<Self, CanoeError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Put a person aboard, at the end of the passenger list.
    ///
    /// No uniqueness check is made: embarking the same person twice puts
    /// them aboard twice, and their weight counts twice in crash selection.
    pub fn embark(&mut self, person: Person) {
        debug!(passenger = person.name(), id = %person.id(), "Embarked");
        self.passengers.push(person);
    }

    /// Take the first passenger with the given id off the canoe.
    ///
    /// Returns the removed person, or `None` (leaving the canoe unchanged)
    /// if nobody aboard has that id. Remaining passengers keep their order.
    pub fn disembark(&mut self, id: PersonId) -> Option<Person> {
        let idx = self.passengers.iter().position(|p| p.id() == id)?;
        let person = self.passengers.remove(idx);
        debug!(passenger = person.name(), %id, "Disembarked");
        Some(person)
    }

    /// Passengers currently aboard, in boarding order.
    pub fn passengers(&self) -> &[Person] {
        &self.passengers
    }

    /// Whether a person with this id is aboard.
    pub fn is_aboard(&self, id: PersonId) -> bool {
        self.passengers.iter().any(|p| p.id() == id)
    }

    /// Length in meters.
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Width in meters.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Depth in meters.
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    /// Hull material.
    pub const fn material(&self) -> &Material {
        &self.material
    }

    /// Accumulated damage, a non-negative multiple of the per-death increment.
    pub const fn damage(&self) -> f64 {
        self.damage
    }

    /// Crash constants in use.
    pub const fn config(&self) -> &CrashConfig {
        &self.config
    }

    /// Hull volume: width x length x depth.
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.depth
    }

    /// Material durability coefficient minus accumulated damage.
    pub fn effective_durability(&self) -> f64 {
        self.material.durability_coefficient() - self.damage
    }

    /// Hull condition the next crash will use.
    pub fn hull_condition(&self) -> HullCondition {
        HullCondition::evaluate(self.effective_durability(), self.volume(), &self.config)
    }

    /// Crash the canoe.
    ///
    /// The hull condition is fixed for the whole event. While anyone is
    /// aboard, a roll is drawn from `(0, roll_ceiling]`; if it beats the
    /// threshold, a passenger chosen by weight is thrown out, killed, and
    /// the canoe takes `damage_per_death` damage. The first roll that fails
    /// (or an empty canoe) ends the crash.
    pub fn crash(&mut self, rng: &mut impl RandomSource) -> CrashReport {
        let damage_before = self.damage;
        let coefficient = self.effective_durability();
        let volume = self.volume();
        let hull = HullCondition::evaluate(coefficient, volume, &self.config);

        debug!(
            material = %self.material,
            coefficient,
            volume,
            threshold = hull.threshold(),
            aboard = self.passengers.len(),
            "Crash started"
        );
        if hull.is_compromised() && !self.passengers.is_empty() {
            warn!(
                material = %self.material,
                damage = self.damage,
                aboard = self.passengers.len(),
                "Hull compromised -- every passenger is lost"
            );
        }

        let mut rolls = Vec::new();
        let mut casualties = Vec::new();

        while !self.passengers.is_empty() {
            let roll = rng.draw_up_to(self.config.roll_ceiling);
            rolls.push(roll);
            if !hull.is_fatal(roll) {
                break;
            }
            let Some(idx) = pick_weighted(&self.passengers, rng) else {
                break;
            };
            let mut victim = self.passengers.remove(idx);
            info!(passenger = victim.name(), roll, "{} has died", victim.name());
            victim.kill();
            self.damage += self.config.damage_per_death;
            casualties.push(victim);
        }

        debug!(
            deaths = casualties.len(),
            damage = self.damage,
            survivors = self.passengers.len(),
            "Crash resolved"
        );

        CrashReport {
            hull,
            coefficient,
            volume,
            damage_before,
            damage_after: self.damage,
            rolls,
            casualties,
        }
    }

    /// Snapshot of material, dimensions, damage, and passenger names.
    pub fn status(&self) -> CanoeStatus {
        CanoeStatus {
            material: self.material.clone(),
            length: self.length,
            width: self.width,
            depth: self.depth,
            damage: self.damage,
            passengers: self
                .passengers
                .iter()
                .map(|p| p.name().to_owned())
                .collect(),
        }
    }
}
