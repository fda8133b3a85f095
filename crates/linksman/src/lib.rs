// ABOUTME: Core library for the In Pursuit of Par shot-resolution rules engine.
// ABOUTME: Dice-driven golf shot outcomes, lie classification, and round state.

//! # Linksman
//!
//! The shot-resolution rules engine of the 1987 "In Pursuit of Par" tabletop
//! golf game: club and dice in, new ball position, lie, and stroke outcome
//! out. Rendering, UI, and persistence live elsewhere; this crate is only
//! the rules.
//!
//! ## Quick Start
//!
//! ```
//! use linksman::{Club, Course, FastDice, Lie, Position, Resolver};
//!
//! let course = Course::championship();
//! let hole = *course.hole(0).unwrap();
//! let mut dice = FastDice::with_seed(42);
//!
//! // Driver off the first tee.
//! let roll = linksman::roll_for_lie(Lie::Tee, &mut dice);
//! let result = Resolver::new()
//!     .resolve(Club::Driver, Lie::Tee, roll, Position::TEE, hole.yardage, &hole, &mut dice)
//!     .unwrap();
//! println!("{:.0} yards, {}", result.distance, result.direction);
//!
//! // Simulate scoring over many rounds.
//! let sim = linksman::simulate_seeded(&course, 100, 7).unwrap();
//! println!("Mean score: {:.1} (par {})", sim.mean, sim.par);
//! ```
//!
//! ## The dice
//!
//! - White distance die (1-6): selects the row of the club's distance table.
//! - 12-sided direction die: 5 of 12 faces are straight; 12 is hook-or-slice.
//! - Red problem die (1-6): rolled only from rough, sand, trees, or water.

pub mod course;
pub mod dice;
pub mod error;
pub mod lie;
pub mod resolver;
pub mod round;
pub mod sim;
pub mod tables;

pub use course::{Course, HoleMetadata, Position, WaterHazard};
pub use dice::{needs_problem_dice, roll_for_lie, DiceRoll, DiceSource, FastDice};
pub use error::{Error, Result};
pub use lie::Lie;
pub use resolver::{shot_kind, Direction, Resolver, ShotKind, ShotResult};
pub use round::{PlayerState, RoundPhase, RoundState};
pub use sim::{caddie, play_round, simulate, simulate_seeded, SimResult};
pub use tables::Club;

/// Resolve one shot with a fresh default resolver and unseeded dice.
///
/// For deterministic results, hold a [`Resolver`] and a seeded dice source
/// and call [`Resolver::resolve`] directly.
///
/// # Examples
///
/// ```
/// use linksman::{Club, Course, DiceRoll, Lie, Position};
///
/// let course = Course::championship();
/// let hole = *course.hole(0).unwrap();
/// let roll = DiceRoll::new(3, 6, None).unwrap();
/// let result = linksman::resolve_shot(
///     Club::NineIron, Lie::Fairway, roll, Position::new(50.0, 60.0), 150.0, &hole,
/// ).unwrap();
/// assert!(result.distance > 0.0);
/// ```
pub fn resolve_shot(
    club: Club,
    lie: Lie,
    roll: DiceRoll,
    position: Position,
    distance_to_pin: f64,
    hole: &HoleMetadata,
) -> Result<ShotResult> {
    Resolver::new().resolve(club, lie, roll, position, distance_to_pin, hole, &mut FastDice::new())
}

/// Classify the lie at a position with unseeded dice.
///
/// The stochastic branches of the cascade (rough-or-trees, greenside sand)
/// draw from the dice source; use [`lie::classify`] with a seeded source for
/// deterministic tests.
pub fn classify_lie(position: Position, hole: &HoleMetadata) -> Lie {
    lie::classify(position, hole, &mut FastDice::new())
}

/// Apply a shot result to the round, advancing the active player's state.
pub fn advance_round(round: &mut RoundState, result: &ShotResult) {
    round.apply(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shot_basic() {
        let course = Course::championship();
        let hole = *course.hole(0).unwrap();
        let roll = DiceRoll::new(3, 6, None).unwrap();
        let result =
            resolve_shot(Club::NineIron, Lie::Fairway, roll, Position::new(50.0, 20.0), 150.0, &hole)
                .unwrap();
        assert_eq!(result.kind, ShotKind::FullShot);
        assert!(result.distance >= 105.0 && result.distance <= 115.0);
    }

    #[test]
    fn test_resolve_shot_rejects_illegal_club() {
        let course = Course::championship();
        let hole = *course.hole(0).unwrap();
        let roll = DiceRoll::new(3, 6, Some(2)).unwrap();
        let err = resolve_shot(Club::Driver, Lie::Sand, roll, Position::new(50.0, 88.0), 30.0, &hole)
            .unwrap_err();
        assert!(matches!(err, Error::IllegalClub { .. }));
    }

    #[test]
    fn test_classify_lie_green() {
        let course = Course::championship();
        let hole = *course.hole(0).unwrap();
        assert_eq!(classify_lie(Position::new(50.0, 97.0), &hole), Lie::Green);
    }

    #[test]
    fn test_advance_round() {
        let course = Course::championship();
        let hole = *course.hole(0).unwrap();
        let mut round = RoundState::new(["arnie"]);
        let roll = roll_for_lie(Lie::Tee, &mut FastDice::with_seed(3));
        let result = Resolver::new()
            .resolve(
                Club::Driver,
                Lie::Tee,
                roll,
                Position::TEE,
                hole.yardage,
                &hole,
                &mut FastDice::with_seed(4),
            )
            .unwrap();
        advance_round(&mut round, &result);
        assert_eq!(round.current_player().strokes, 1);
    }

    #[test]
    fn test_simulate_integration() {
        let course = Course::championship();
        let result = simulate(&course, 20).unwrap();
        assert_eq!(result.n, 20);
        assert!(result.min >= 18);
    }
}
