//! Passenger identity.
//!
//! Passengers are matched by identity when they disembark, so every
//! [`Person`](crate::Person) carries a [`PersonId`]. IDs use UUID v7
//! (time-ordered) so that people created in sequence sort in creation order.

use core::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a person who can ride in a canoe.
///
/// Only [`PersonId::new`] mints one; copies of a person's id are obtained
/// through [`Person::id`](crate::Person::id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Mint a fresh time-ordered identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = PersonId::new();
        let b = PersonId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_minted_later_sort_later() {
        let first = PersonId::new();
        let second = PersonId::new();
        assert!(first < second);
        assert_eq!(first.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn display_is_the_hyphenated_uuid() {
        let id = PersonId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
