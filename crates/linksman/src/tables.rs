// ABOUTME: Canonical shot tables from the 1987 board game: distance schedules,
// ABOUTME: the 12-entry direction table, hazard modifiers, and sand escapes.

use crate::error::{Error, Result};
use crate::Lie;
use std::fmt;

/// The nine clubs printed on the game's club cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Club {
    Driver,
    ThreeWood,
    FiveWood,
    ThreeIron,
    FiveIron,
    SevenIron,
    NineIron,
    Wedge,
    Putter,
}

impl Club {
    /// All clubs, longest to shortest.
    pub const ALL: [Club; 9] = [
        Club::Driver,
        Club::ThreeWood,
        Club::FiveWood,
        Club::ThreeIron,
        Club::FiveIron,
        Club::SevenIron,
        Club::NineIron,
        Club::Wedge,
        Club::Putter,
    ];

    fn index(self) -> usize {
        match self {
            Club::Driver => 0,
            Club::ThreeWood => 1,
            Club::FiveWood => 2,
            Club::ThreeIron => 3,
            Club::FiveIron => 4,
            Club::SevenIron => 5,
            Club::NineIron => 6,
            Club::Wedge => 7,
            Club::Putter => 8,
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Club::Driver => write!(f, "driver"),
            Club::ThreeWood => write!(f, "3-wood"),
            Club::FiveWood => write!(f, "5-wood"),
            Club::ThreeIron => write!(f, "3-iron"),
            Club::FiveIron => write!(f, "5-iron"),
            Club::SevenIron => write!(f, "7-iron"),
            Club::NineIron => write!(f, "9-iron"),
            Club::Wedge => write!(f, "wedge"),
            Club::Putter => write!(f, "putter"),
        }
    }
}

/// An inclusive yardage range printed in a full-shot table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

/// Carry and roll yardage for a chip or pitch table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarryRoll {
    pub carry: f64,
    pub roll: f64,
}

impl CarryRoll {
    pub fn total(&self) -> f64 {
        self.carry + self.roll
    }
}

/// A putt's travel, as fractions of the distance to the pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuttRoll {
    /// Fraction of the distance to the pin the ball travels.
    pub base: f64,
    /// Half-width of the uniform variation around `base`.
    pub variance: f64,
}

/// One entry of the 12-sided direction die table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    /// A fixed deviation in degrees; negative is left of target.
    Degrees(f64),
    /// Face 12: a secondary draw decides hook (left) or slice (right).
    HookSlice,
}

/// How a hazard lie modifies the shot, indexed by the problem die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardModifier {
    /// Multiplier applied to the resolved distance.
    pub distance_multiplier: f64,
    /// Extra deviation in degrees, applied away from the centerline.
    pub accuracy_penalty_degrees: f64,
    /// The lie permits only the wedge.
    pub forces_wedge: bool,
    /// Clubs legal from this lie, if restricted.
    pub limited_clubs: Option<&'static [Club]>,
    /// The lie costs a penalty stroke (water only).
    pub penalty_stroke: bool,
}

/// Outcome of the sand-trap escape roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandEscape {
    /// False on a 1: the ball stays in the bunker.
    pub escapes: bool,
    /// Fraction of normal distance retained on escape.
    pub distance_fraction: f64,
}

// Full-shot yardage ranges, [club][die - 1]. One authoritative set; the
// original shipped several divergent copies of this table.
const FULL_SHOT: [[(f64, f64); 6]; 9] = [
    // driver
    [(160.0, 180.0), (180.0, 200.0), (200.0, 215.0), (215.0, 230.0), (230.0, 250.0), (250.0, 275.0)],
    // 3-wood
    [(150.0, 170.0), (170.0, 185.0), (185.0, 200.0), (200.0, 210.0), (210.0, 225.0), (225.0, 240.0)],
    // 5-wood
    [(140.0, 155.0), (155.0, 170.0), (170.0, 185.0), (185.0, 195.0), (195.0, 210.0), (210.0, 220.0)],
    // 3-iron
    [(130.0, 145.0), (145.0, 160.0), (160.0, 170.0), (170.0, 180.0), (180.0, 190.0), (190.0, 200.0)],
    // 5-iron
    [(120.0, 135.0), (135.0, 145.0), (145.0, 155.0), (155.0, 165.0), (165.0, 175.0), (175.0, 185.0)],
    // 7-iron
    [(100.0, 115.0), (115.0, 125.0), (125.0, 135.0), (135.0, 145.0), (145.0, 155.0), (155.0, 165.0)],
    // 9-iron
    [(80.0, 95.0), (95.0, 105.0), (105.0, 115.0), (115.0, 125.0), (125.0, 135.0), (135.0, 145.0)],
    // wedge
    [(40.0, 55.0), (55.0, 65.0), (65.0, 75.0), (75.0, 85.0), (85.0, 95.0), (95.0, 110.0)],
    // putter (the "Texas wedge" row, rarely used off the green)
    [(5.0, 10.0), (10.0, 15.0), (15.0, 20.0), (20.0, 25.0), (25.0, 30.0), (30.0, 35.0)],
];

// Chip table: greenside shots, (carry, roll) by die.
const CHIP_WEDGE: [(f64, f64); 6] = [(4.0, 1.0), (7.0, 2.0), (10.0, 3.0), (13.0, 4.0), (16.0, 5.0), (20.0, 6.0)];
const CHIP_NINE: [(f64, f64); 6] = [(6.0, 4.0), (9.0, 5.0), (12.0, 7.0), (15.0, 9.0), (18.0, 11.0), (22.0, 13.0)];
const CHIP_SEVEN: [(f64, f64); 6] = [(8.0, 8.0), (11.0, 10.0), (14.0, 12.0), (17.0, 14.0), (20.0, 16.0), (24.0, 18.0)];

// Pitch table: higher-lofted shots from rough and sand.
const PITCH_WEDGE: [(f64, f64); 6] = [(12.0, 2.0), (18.0, 3.0), (24.0, 4.0), (30.0, 5.0), (36.0, 6.0), (42.0, 8.0)];
const PITCH_NINE: [(f64, f64); 6] = [(16.0, 6.0), (22.0, 8.0), (28.0, 10.0), (34.0, 12.0), (40.0, 14.0), (46.0, 16.0)];

// Putt travel as (base fraction, variance) of distance to pin.
const PUTT: [(f64, f64); 6] = [
    (0.60, 0.10),
    (0.75, 0.10),
    (0.90, 0.08),
    (1.00, 0.05),
    (1.05, 0.08),
    (1.15, 0.10),
];

// Direction die: faces 1-3 pull left, 4-8 are the straight band (5 of 12
// faces), 9-11 push right mirroring 1-3, face 12 is hook-or-slice.
const DIRECTION: [f64; 11] = [-30.0, -20.0, -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 20.0, 30.0];

/// Deviation magnitude for a hook or slice once face 12's secondary draw
/// picks a side.
pub const HOOK_SLICE_DEGREES: f64 = 45.0;

const ROUGH_MULT: [f64; 6] = [0.55, 0.62, 0.69, 0.76, 0.83, 0.90];
const ROUGH_PENALTY: [f64; 6] = [10.0, 8.0, 6.0, 4.0, 2.0, 0.0];

const TREES_MULT: [f64; 6] = [0.30, 0.40, 0.50, 0.60, 0.70, 0.80];
const TREES_PENALTY: [f64; 6] = [25.0, 20.0, 15.0, 10.0, 5.0, 0.0];

/// Punch-out clubs allowed from the trees.
pub const TREES_CLUBS: [Club; 4] = [Club::FiveIron, Club::SevenIron, Club::NineIron, Club::Wedge];

const SAND_ESCAPE_FRACTION: [f64; 6] = [0.0, 0.40, 0.55, 0.70, 0.85, 1.00];

/// Clubs legal for a chip shot.
pub const CHIP_CLUBS: [Club; 3] = [Club::Wedge, Club::NineIron, Club::SevenIron];

/// Clubs legal for a pitch shot.
pub const PITCH_CLUBS: [Club; 2] = [Club::Wedge, Club::NineIron];

fn check_die(value: u8) {
    assert!((1..=6).contains(&value), "die value {value} out of range; validate at the boundary");
}

/// Full-shot yardage range for a club and distance-die value.
pub fn full_shot_distance(club: Club, die: u8) -> DistanceRange {
    check_die(die);
    let (min, max) = FULL_SHOT[club.index()][(die - 1) as usize];
    DistanceRange { min, max }
}

/// Chip carry/roll for a club and die value. Only the wedge, 9-iron, and
/// 7-iron may chip.
pub fn chip_distance(club: Club, die: u8) -> Result<CarryRoll> {
    check_die(die);
    let table = match club {
        Club::Wedge => &CHIP_WEDGE,
        Club::NineIron => &CHIP_NINE,
        Club::SevenIron => &CHIP_SEVEN,
        _ => {
            return Err(Error::IllegalClub {
                club,
                lie: Lie::Fairway,
            })
        }
    };
    let (carry, roll) = table[(die - 1) as usize];
    Ok(CarryRoll { carry, roll })
}

/// Pitch carry/roll for a club and die value. Only the wedge and 9-iron may
/// pitch.
pub fn pitch_distance(club: Club, die: u8) -> Result<CarryRoll> {
    check_die(die);
    let table = match club {
        Club::Wedge => &PITCH_WEDGE,
        Club::NineIron => &PITCH_NINE,
        _ => {
            return Err(Error::IllegalClub {
                club,
                lie: Lie::Rough,
            })
        }
    };
    let (carry, roll) = table[(die - 1) as usize];
    Ok(CarryRoll { carry, roll })
}

/// Putt travel for a die value, as fractions of distance to the pin.
pub fn putt_distance(die: u8) -> PuttRoll {
    check_die(die);
    let (base, variance) = PUTT[(die - 1) as usize];
    PuttRoll { base, variance }
}

/// Direction-table entry for a 12-sided die value.
pub fn direction_deviation(die: u8) -> Deviation {
    assert!((1..=12).contains(&die), "direction die value {die} out of range");
    if die == 12 {
        Deviation::HookSlice
    } else {
        Deviation::Degrees(DIRECTION[(die - 1) as usize])
    }
}

/// Hazard modifier for a problem-die value from the given hazard lie.
///
/// Panics if `lie` is not a hazard lie; callers gate on
/// [`crate::needs_problem_dice`].
pub fn hazard_modifier(lie: Lie, problem: u8) -> HazardModifier {
    check_die(problem);
    let i = (problem - 1) as usize;
    match lie {
        Lie::Rough => HazardModifier {
            distance_multiplier: ROUGH_MULT[i],
            accuracy_penalty_degrees: ROUGH_PENALTY[i],
            forces_wedge: false,
            limited_clubs: None,
            penalty_stroke: false,
        },
        Lie::Trees => HazardModifier {
            distance_multiplier: TREES_MULT[i],
            accuracy_penalty_degrees: TREES_PENALTY[i],
            forces_wedge: false,
            limited_clubs: Some(&TREES_CLUBS),
            penalty_stroke: false,
        },
        Lie::Sand => HazardModifier {
            distance_multiplier: SAND_ESCAPE_FRACTION[i],
            accuracy_penalty_degrees: 0.0,
            forces_wedge: true,
            limited_clubs: None,
            penalty_stroke: false,
        },
        Lie::Water => HazardModifier {
            distance_multiplier: 0.0,
            accuracy_penalty_degrees: 0.0,
            forces_wedge: false,
            limited_clubs: None,
            penalty_stroke: true,
        },
        other => panic!("{other} is not a hazard lie"),
    }
}

/// Sand-trap escape outcome for a problem-die value. A 1 leaves the ball in
/// the bunker; 2-6 escape with increasing effectiveness.
pub fn sand_escape(problem: u8) -> SandEscape {
    check_die(problem);
    SandEscape {
        escapes: problem > 1,
        distance_fraction: SAND_ESCAPE_FRACTION[(problem - 1) as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_shot_defined_for_all_clubs() {
        for club in Club::ALL {
            for die in 1..=6 {
                let range = full_shot_distance(club, die);
                assert!(range.min <= range.max, "{club} die {die}");
                assert!(range.min > 0.0);
            }
        }
    }

    #[test]
    fn test_full_shot_ranges_increase_with_die() {
        for club in Club::ALL {
            for die in 1..6 {
                let lo = full_shot_distance(club, die);
                let hi = full_shot_distance(club, die + 1);
                assert!(hi.min >= lo.min, "{club} die {die}");
            }
        }
    }

    #[test]
    fn test_chip_legal_clubs() {
        for club in CHIP_CLUBS {
            assert!(chip_distance(club, 3).is_ok());
        }
        for club in [Club::Driver, Club::ThreeWood, Club::FiveIron, Club::Putter] {
            assert!(matches!(chip_distance(club, 3), Err(Error::IllegalClub { .. })));
        }
    }

    #[test]
    fn test_pitch_legal_clubs() {
        for club in PITCH_CLUBS {
            assert!(pitch_distance(club, 3).is_ok());
        }
        for club in [Club::SevenIron, Club::Driver, Club::Putter] {
            assert!(matches!(pitch_distance(club, 3), Err(Error::IllegalClub { .. })));
        }
    }

    #[test]
    fn test_direction_symmetry() {
        // Mirror pairs: 1/11, 2/10, 3/9. Face 12 is its own special case.
        for (left, right) in [(1, 11), (2, 10), (3, 9)] {
            let l = match direction_deviation(left) {
                Deviation::Degrees(d) => d,
                _ => panic!("face {left} should be fixed"),
            };
            let r = match direction_deviation(right) {
                Deviation::Degrees(d) => d,
                _ => panic!("face {right} should be fixed"),
            };
            assert_eq!(l, -r);
        }
    }

    #[test]
    fn test_direction_straight_band() {
        for die in 4..=8 {
            assert_eq!(direction_deviation(die), Deviation::Degrees(0.0));
        }
        assert_eq!(direction_deviation(12), Deviation::HookSlice);
    }

    #[test]
    fn test_sand_escape_outcomes() {
        assert!(!sand_escape(1).escapes);
        assert_eq!(sand_escape(1).distance_fraction, 0.0);
        for p in 2..=6 {
            assert!(sand_escape(p).escapes);
            assert!(sand_escape(p).distance_fraction > sand_escape(p - 1).distance_fraction);
        }
        assert_eq!(sand_escape(6).distance_fraction, 1.0);
    }

    #[test]
    fn test_hazard_modifier_shapes() {
        let sand = hazard_modifier(Lie::Sand, 3);
        assert!(sand.forces_wedge);

        let trees = hazard_modifier(Lie::Trees, 1);
        assert_eq!(trees.limited_clubs, Some(&TREES_CLUBS[..]));
        assert!(trees.distance_multiplier < hazard_modifier(Lie::Trees, 6).distance_multiplier);

        let water = hazard_modifier(Lie::Water, 2);
        assert!(water.penalty_stroke);

        let rough = hazard_modifier(Lie::Rough, 6);
        assert_eq!(rough.accuracy_penalty_degrees, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_die_fails_loudly() {
        full_shot_distance(Club::Driver, 7);
    }

    proptest! {
        #[test]
        fn prop_full_shot_range_invariant(club_idx in 0usize..9, die in 1u8..=6) {
            let club = Club::ALL[club_idx];
            let range = full_shot_distance(club, die);
            prop_assert!(range.min <= range.max);
        }

        #[test]
        fn prop_putt_fractions_sane(die in 1u8..=6) {
            let putt = putt_distance(die);
            prop_assert!(putt.base > 0.0 && putt.base <= 1.5);
            prop_assert!(putt.variance >= 0.0 && putt.variance < putt.base);
        }
    }
}
