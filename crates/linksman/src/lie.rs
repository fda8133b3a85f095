// ABOUTME: Lie classification: maps a course position to the surface the
// ABOUTME: ball rests on, via the game's priority cascade of zone rules.

use crate::course::{HoleMetadata, Position};
use crate::dice::DiceSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The surface the ball currently rests on. Determines which dice are
/// rolled, which clubs are legal, and which modifiers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Sand,
    Trees,
    Water,
    Green,
    Holed,
}

impl fmt::Display for Lie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lie::Tee => write!(f, "tee"),
            Lie::Fairway => write!(f, "fairway"),
            Lie::Rough => write!(f, "rough"),
            Lie::Sand => write!(f, "sand"),
            Lie::Trees => write!(f, "trees"),
            Lie::Water => write!(f, "water"),
            Lie::Green => write!(f, "green"),
            Lie::Holed => write!(f, "holed"),
        }
    }
}

/// Forward of this y line the ball is on the green.
pub const GREEN_Y: f64 = 95.0;

/// Beyond this offset from the centerline the ball is severely off line.
pub const OFFLINE_X: f64 = 25.0;

/// Chance a severely off-line ball finds rough rather than trees. The
/// original's engine copies disagreed (0.6 vs 0.7); 0.6 is canonical here.
pub const ROUGH_CHANCE: f64 = 0.6;

/// The greenside approach band where bunkers guard the green.
pub const SAND_BAND: (f64, f64) = (80.0, 95.0);

/// Chance an approach-band ball is bunkered. Canonical pick between the
/// original's 0.15 and 0.3 variants.
pub const SAND_CHANCE: f64 = 0.3;

/// Classify the lie for a position on the given hole.
///
/// The cascade order is deliberate and load-bearing: green, then severe
/// off-line, then greenside sand, then the hole's water region, then
/// fairway. A position can satisfy several of these loose conditions at
/// once; earlier checks win.
pub fn classify(position: Position, hole: &HoleMetadata, dice: &mut impl DiceSource) -> Lie {
    if position.y > GREEN_Y {
        return Lie::Green;
    }
    if (position.x - 50.0).abs() > OFFLINE_X {
        return if dice.fraction() < ROUGH_CHANCE {
            Lie::Rough
        } else {
            Lie::Trees
        };
    }
    if position.y > SAND_BAND.0 && position.y < SAND_BAND.1 && dice.fraction() < SAND_CHANCE {
        return Lie::Sand;
    }
    if hole.water.contains(position) {
        return Lie::Water;
    }
    Lie::Fairway
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{Course, WaterHazard};
    use crate::dice::TestDice;

    fn plain_hole() -> HoleMetadata {
        HoleMetadata {
            number: 1,
            par: 4,
            yardage: 410.0,
            water: WaterHazard::None,
            signature: false,
        }
    }

    #[test]
    fn test_green_takes_priority() {
        // Off-line and past the green line: green wins.
        let mut dice = TestDice::new();
        let lie = classify(Position::new(90.0, 96.0), &plain_hole(), &mut dice);
        assert_eq!(lie, Lie::Green);
    }

    #[test]
    fn test_offline_rough_or_trees() {
        let hole = plain_hole();

        let mut dice = TestDice::new().with_fractions(vec![0.5]);
        assert_eq!(classify(Position::new(80.0, 40.0), &hole, &mut dice), Lie::Rough);

        let mut dice = TestDice::new().with_fractions(vec![0.7]);
        assert_eq!(classify(Position::new(80.0, 40.0), &hole, &mut dice), Lie::Trees);

        // Left side as well.
        let mut dice = TestDice::new().with_fractions(vec![0.99]);
        assert_eq!(classify(Position::new(20.0, 40.0), &hole, &mut dice), Lie::Trees);
    }

    #[test]
    fn test_greenside_sand_band() {
        let hole = plain_hole();

        let mut dice = TestDice::new().with_fractions(vec![0.1]);
        assert_eq!(classify(Position::new(50.0, 88.0), &hole, &mut dice), Lie::Sand);

        let mut dice = TestDice::new().with_fractions(vec![0.9]);
        assert_eq!(classify(Position::new(50.0, 88.0), &hole, &mut dice), Lie::Fairway);

        // Outside the band no sand draw happens at all.
        let mut dice = TestDice::new().with_fractions(vec![0.0]);
        assert_eq!(classify(Position::new(50.0, 60.0), &hole, &mut dice), Lie::Fairway);
    }

    #[test]
    fn test_water_region() {
        let course = Course::championship();
        let island = course.hole(16).unwrap();

        // Splashdown short of the island.
        let mut dice = TestDice::new().with_fractions(vec![0.9]);
        assert_eq!(classify(Position::new(50.0, 82.0), island, &mut dice), Lie::Water);

        // Carried onto the green.
        let mut dice = TestDice::new();
        assert_eq!(classify(Position::new(50.0, 97.0), island, &mut dice), Lie::Green);
    }

    #[test]
    fn test_sand_beats_water_in_cascade() {
        // Inside both the sand band and the island's water region: the sand
        // draw runs first.
        let course = Course::championship();
        let island = course.hole(16).unwrap();

        let mut dice = TestDice::new().with_fractions(vec![0.1]);
        assert_eq!(classify(Position::new(50.0, 82.0), island, &mut dice), Lie::Sand);
    }

    #[test]
    fn test_centerline_fairway_default() {
        let mut dice = TestDice::new().with_fractions(vec![0.0]);
        assert_eq!(
            classify(Position::new(55.0, 50.0), &plain_hole(), &mut dice),
            Lie::Fairway
        );
    }
}
