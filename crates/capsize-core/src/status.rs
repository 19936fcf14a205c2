//! Read-only status snapshot of a canoe.

use core::fmt;

use serde::Serialize;

use crate::material::Material;

/// Material, dimensions, damage, and the names of everyone still aboard.
///
/// The [`Display`](fmt::Display) form is meant for people, not parsers:
///
/// ```text
///
/// Wood Canoe:
///   5.0 x 0.85 x 0.35
///   Damage: 0.5
///   Passengers:
///     Axel
///
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanoeStatus {
    /// Hull material.
    pub material: Material,
    /// Length in meters.
    pub length: f64,
    /// Width in meters.
    pub width: f64,
    /// Depth in meters.
    pub depth: f64,
    /// Accumulated damage.
    pub damage: f64,
    /// Names of passengers aboard, in boarding order.
    pub passengers: Vec<String>,
}

impl fmt::Display for CanoeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{} Canoe:", self.material)?;
        writeln!(f, "  {:?} x {:?} x {:?}", self.length, self.width, self.depth)?;
        writeln!(f, "  Damage: {:?}", self.damage)?;
        writeln!(f, "  Passengers:")?;
        for name in &self.passengers {
            writeln!(f, "    {name}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> CanoeStatus {
        CanoeStatus {
            material: Material::Wood,
            length: 5.0,
            width: 0.85,
            depth: 0.35,
            damage: 0.5,
            passengers: vec![String::from("Axel")],
        }
    }

    #[test]
    fn display_matches_status_block() {
        let expected = "\nWood Canoe:\n  5.0 x 0.85 x 0.35\n  Damage: 0.5\n  Passengers:\n    Axel\n\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn display_with_no_passengers() {
        let status = CanoeStatus {
            material: Material::parse("Titanium"),
            passengers: Vec::new(),
            damage: 0.0,
            ..sample()
        };
        let text = status.to_string();
        assert!(text.contains("Titanium Canoe:"));
        assert!(text.contains("  Damage: 0.0\n  Passengers:\n\n"));
    }

    #[test]
    fn serializes_to_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["material"], "Wood");
        assert_eq!(value["passengers"], serde_json::json!(["Axel"]));
        assert_eq!(value["damage"], 0.5);
    }
}
