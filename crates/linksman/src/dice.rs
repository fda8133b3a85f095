// ABOUTME: Dice abstraction for the three game dice and auxiliary random draws.
// ABOUTME: All randomness flows through DiceSource so tests can be deterministic.

use crate::error::{DieKind, Error, Result};
use crate::Lie;

/// Source of randomness for the game's dice and auxiliary draws.
///
/// The board game uses three dice: a white distance die (d6), a 12-sided
/// direction die, and a red "problem" die (d6) rolled only from hazard lies.
/// `fraction` backs everything that is not a printed die face: sampling
/// within a distance range, the stochastic lie-classification draws, and the
/// hook/slice coin flip.
pub trait DiceSource {
    /// Roll the white distance die: 1-6.
    fn roll_distance(&mut self) -> u8;

    /// Roll the 12-sided direction die: 1-12.
    fn roll_direction(&mut self) -> u8;

    /// Roll the red problem die: 1-6.
    fn roll_problem(&mut self) -> u8;

    /// A uniform draw in [0, 1).
    fn fraction(&mut self) -> f64;
}

/// Default dice source using fastrand.
pub struct FastDice(fastrand::Rng);

impl FastDice {
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSource for FastDice {
    fn roll_distance(&mut self) -> u8 {
        self.0.u8(1..=6)
    }

    fn roll_direction(&mut self) -> u8 {
        self.0.u8(1..=12)
    }

    fn roll_problem(&mut self) -> u8 {
        self.0.u8(1..=6)
    }

    fn fraction(&mut self) -> f64 {
        self.0.f64()
    }
}

/// The dice thrown for a single shot.
///
/// `problem` is present if and only if the pre-shot lie is a hazard lie
/// (see [`needs_problem_dice`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    /// Distance die: 1-6.
    pub distance: u8,
    /// Direction die: 1-12.
    pub direction: u8,
    /// Problem die: 1-6, hazard lies only.
    pub problem: Option<u8>,
}

impl DiceRoll {
    /// Build a validated roll. Out-of-range values are rejected here, at the
    /// input boundary; the tables themselves never clamp.
    pub fn new(distance: u8, direction: u8, problem: Option<u8>) -> Result<Self> {
        if !(1..=6).contains(&distance) {
            return Err(Error::InvalidDiceRoll {
                kind: DieKind::Distance,
                value: distance,
            });
        }
        if !(1..=12).contains(&direction) {
            return Err(Error::InvalidDiceRoll {
                kind: DieKind::Direction,
                value: direction,
            });
        }
        if let Some(p) = problem {
            if !(1..=6).contains(&p) {
                return Err(Error::InvalidDiceRoll {
                    kind: DieKind::Problem,
                    value: p,
                });
            }
        }
        Ok(Self {
            distance,
            direction,
            problem,
        })
    }
}

/// True iff the lie calls for the red problem die.
pub fn needs_problem_dice(lie: Lie) -> bool {
    matches!(lie, Lie::Rough | Lie::Sand | Lie::Trees | Lie::Water)
}

/// Roll the dice for a shot from the given lie, throwing the problem die
/// only when the lie calls for it.
pub fn roll_for_lie(lie: Lie, dice: &mut impl DiceSource) -> DiceRoll {
    let problem = if needs_problem_dice(lie) {
        Some(dice.roll_problem())
    } else {
        None
    };
    DiceRoll {
        distance: dice.roll_distance(),
        direction: dice.roll_direction(),
        problem,
    }
}

/// A deterministic dice source for tests: each channel cycles through its
/// queued values. Counts die rolls so tests can assert how many were consumed.
#[cfg(test)]
pub(crate) struct TestDice {
    distance: Vec<u8>,
    direction: Vec<u8>,
    problem: Vec<u8>,
    fractions: Vec<f64>,
    index: [usize; 4],
    pub rolls_consumed: usize,
}

#[cfg(test)]
impl TestDice {
    pub fn new() -> Self {
        Self {
            distance: vec![3],
            direction: vec![6],
            problem: vec![3],
            fractions: vec![0.5],
            index: [0; 4],
            rolls_consumed: 0,
        }
    }

    pub fn with_distance(mut self, values: Vec<u8>) -> Self {
        self.distance = values;
        self
    }

    pub fn with_direction(mut self, values: Vec<u8>) -> Self {
        self.direction = values;
        self
    }

    pub fn with_problem(mut self, values: Vec<u8>) -> Self {
        self.problem = values;
        self
    }

    pub fn with_fractions(mut self, values: Vec<f64>) -> Self {
        self.fractions = values;
        self
    }

    fn next<T: Copy>(values: &[T], index: &mut usize) -> T {
        let value = values[*index % values.len()];
        *index += 1;
        value
    }
}

#[cfg(test)]
impl DiceSource for TestDice {
    fn roll_distance(&mut self) -> u8 {
        self.rolls_consumed += 1;
        Self::next(&self.distance, &mut self.index[0])
    }

    fn roll_direction(&mut self) -> u8 {
        self.rolls_consumed += 1;
        Self::next(&self.direction, &mut self.index[1])
    }

    fn roll_problem(&mut self) -> u8 {
        self.rolls_consumed += 1;
        Self::next(&self.problem, &mut self.index[2])
    }

    fn fraction(&mut self) -> f64 {
        Self::next(&self.fractions, &mut self.index[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_dice_ranges() {
        let mut dice = FastDice::with_seed(7);
        for _ in 0..100 {
            let d = dice.roll_distance();
            assert!((1..=6).contains(&d));
            let dir = dice.roll_direction();
            assert!((1..=12).contains(&dir));
            let p = dice.roll_problem();
            assert!((1..=6).contains(&p));
            let f = dice.fraction();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_seeded_dice_reproducible() {
        let mut a = FastDice::with_seed(42);
        let mut b = FastDice::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.roll_direction(), b.roll_direction());
        }
    }

    #[test]
    fn test_dice_roll_validation() {
        assert!(DiceRoll::new(3, 6, None).is_ok());
        assert!(DiceRoll::new(3, 6, Some(1)).is_ok());

        let err = DiceRoll::new(0, 6, None).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDiceRoll {
                kind: DieKind::Distance,
                value: 0
            }
        );
        assert!(DiceRoll::new(7, 6, None).is_err());
        assert!(DiceRoll::new(3, 13, None).is_err());
        assert!(DiceRoll::new(3, 0, None).is_err());
        assert!(DiceRoll::new(3, 6, Some(0)).is_err());
        assert!(DiceRoll::new(3, 6, Some(7)).is_err());
    }

    #[test]
    fn test_problem_dice_gating() {
        for lie in [Lie::Rough, Lie::Sand, Lie::Trees, Lie::Water] {
            assert!(needs_problem_dice(lie), "{lie} should need problem dice");
        }
        for lie in [Lie::Tee, Lie::Fairway, Lie::Green, Lie::Holed] {
            assert!(!needs_problem_dice(lie), "{lie} should not need problem dice");
        }
    }

    #[test]
    fn test_roll_for_lie_gates_problem_die() {
        let mut dice = FastDice::with_seed(1);
        let fairway = roll_for_lie(Lie::Fairway, &mut dice);
        assert!(fairway.problem.is_none());

        let rough = roll_for_lie(Lie::Rough, &mut dice);
        assert!(rough.problem.is_some());
    }
}
