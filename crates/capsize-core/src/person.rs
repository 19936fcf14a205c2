//! People who can ride in a canoe.
//!
//! A [`Person`] is passive data: a name, a weight, and whether they are
//! still alive. The only code that kills a person is the canoe's crash
//! routine, and death is never reversed.

use serde::Serialize;

use crate::error::{CanoeError, is_positive_finite};
use crate::ids::PersonId;

/// A passenger with a cosmetic name and a weight used for crash selection.
///
/// Cloning a person keeps the same [`PersonId`], so a clone is the same
/// person as far as [`Canoe::disembark`](crate::Canoe::disembark) is
/// concerned.
///
/// The id is left out of serialized output: it is minted fresh on every
/// run, so two runs with the same seed serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(skip_serializing)]
    id: PersonId,
    name: String,
    weight: f64,
    dead: bool,
}

impl Person {
    /// Create a living person with the given name and weight.
    ///
    /// # Errors
    ///
    /// Returns [`CanoeError::InvalidWeight`] if `weight` is zero, negative,
    /// or not finite.
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self, CanoeError> {
        let name = name.into();
        if !is_positive_finite(weight) {
            return Err(CanoeError::InvalidWeight { name, weight });
        }
        Ok(Self {
            id: PersonId::new(),
            name,
            weight,
            dead: false,
        })
    }

    /// Identity used to match passengers.
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's weight (mass proxy, typically pounds).
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether the person has died in a crash.
    pub const fn is_dead(&self) -> bool {
        self.dead
    }

    /// Mark the person as dead. Calling this again has no further effect.
    pub const fn kill(&mut self) {
        self.dead = true;
    }
}
