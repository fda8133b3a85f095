// ABOUTME: Shot resolution: the state-transition engine that turns a club,
// ABOUTME: lie, and dice into a new ball position, lie, and stroke outcome.

use crate::course::{HoleMetadata, Position, LATERAL_SCALE};
use crate::dice::{needs_problem_dice, DiceRoll, DiceSource};
use crate::error::{Error, Result};
use crate::lie::{classify, Lie};
use crate::tables::{
    self, Club, Deviation, CHIP_CLUBS, HOOK_SLICE_DEGREES, PITCH_CLUBS, TREES_CLUBS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inside this distance a putt is conceded.
pub const GIMME_RANGE: f64 = 4.0;

/// Fairway shots inside this distance are chips.
pub const CHIP_RANGE: f64 = 30.0;

/// Rough and sand shots inside this distance are pitches.
pub const PITCH_RANGE: f64 = 50.0;

/// A putt drops only if it also finishes within 15 degrees of the line.
const PUTT_HOLE_OUT_DEGREES: f64 = 15.0;

/// Cap on how far past the pin a shot can fly, as a fraction of the
/// remaining distance.
const OVERSHOOT_CAP: f64 = 1.25;

/// The shot type the resolver selected from `(lie, distance_to_pin)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    Gimme,
    Putt,
    Chip,
    Pitch,
    FullShot,
    WaterDrop,
}

/// Which way the ball went, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Straight,
    Left,
    Right,
    Hook,
    Slice,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Straight => write!(f, "straight"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Hook => write!(f, "hook"),
            Direction::Slice => write!(f, "slice"),
        }
    }
}

/// Outcome of a resolved shot. Created fresh per shot and never mutated;
/// consumed once by the round state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    pub kind: ShotKind,
    /// Yards the ball traveled.
    pub distance: f64,
    pub direction: Direction,
    pub deviation_degrees: f64,
    pub position: Position,
    pub lie: Lie,
    pub holed_out: bool,
    pub penalty_stroke: bool,
    /// Carry portion, chips and pitches only.
    pub carry: Option<f64>,
    /// Roll-out portion, chips and pitches only.
    pub roll: Option<f64>,
}

/// Select the shot type for a lie and distance to the pin, in yards.
pub fn shot_kind(lie: Lie, distance_to_pin: f64) -> ShotKind {
    match lie {
        Lie::Water => ShotKind::WaterDrop,
        Lie::Green => {
            if distance_to_pin <= GIMME_RANGE {
                ShotKind::Gimme
            } else {
                ShotKind::Putt
            }
        }
        Lie::Fairway if distance_to_pin <= CHIP_RANGE => ShotKind::Chip,
        Lie::Rough | Lie::Sand if distance_to_pin <= PITCH_RANGE => ShotKind::Pitch,
        _ => ShotKind::FullShot,
    }
}

/// The shot resolver. Holds only configuration; all state comes in through
/// [`Resolver::resolve`] arguments.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    green_slope: bool,
}

impl Resolver {
    pub fn new() -> Self {
        Self { green_slope: true }
    }

    /// Disable the green-slope putt curve, an enhancement layered on the
    /// 1987 rules by a later engine revision.
    pub fn without_green_slope(mut self) -> Self {
        self.green_slope = false;
        self
    }

    /// Resolve one shot.
    ///
    /// `distance_to_pin` is in yards; `position` is the normalized
    /// course-relative coordinate. The dice source supplies the in-range
    /// sampling draws, the hook/slice coin flip, and the resulting lie's
    /// classification draws. Illegal club/lie combinations are rejected,
    /// never corrected.
    pub fn resolve(
        &self,
        club: Club,
        lie: Lie,
        roll: DiceRoll,
        position: Position,
        distance_to_pin: f64,
        hole: &HoleMetadata,
        dice: &mut impl DiceSource,
    ) -> Result<ShotResult> {
        let kind = shot_kind(lie, distance_to_pin);

        // A gimme is conceded before dice or club come into it.
        if kind == ShotKind::Gimme {
            return Ok(holed(kind, 0.0));
        }

        DiceRoll::new(roll.distance, roll.direction, roll.problem)?;
        if needs_problem_dice(lie) && roll.problem.is_none() {
            return Err(Error::MissingProblemDie(lie));
        }
        if !needs_problem_dice(lie) && roll.problem.is_some() {
            return Err(Error::UnexpectedProblemDie(lie));
        }
        check_club_legality(club, lie, kind)?;

        match kind {
            ShotKind::Gimme => unreachable!("handled above"),
            ShotKind::WaterDrop => Ok(self.resolve_water_drop(roll, position)),
            ShotKind::Putt => Ok(self.resolve_putt(roll, position, distance_to_pin, dice)),
            ShotKind::Chip => self.resolve_chip(club, roll, position, distance_to_pin, hole, dice),
            ShotKind::Pitch => self.resolve_pitch(club, lie, roll, position, distance_to_pin, hole, dice),
            ShotKind::FullShot => {
                self.resolve_full_shot(club, lie, roll, position, distance_to_pin, hole, dice)
            }
        }
    }

    fn resolve_water_drop(&self, roll: DiceRoll, position: Position) -> ShotResult {
        // Two-tier penalty: 1-3 drop straight back behind the hazard, 4-6
        // drop laterally toward the centerline.
        let problem = roll.problem.unwrap_or(1);
        let drop = if problem <= 3 {
            Position::new(position.x, position.y - 8.0)
        } else {
            let toward_center = (50.0 - position.x).clamp(-10.0, 10.0);
            Position::new(position.x + toward_center, position.y - 2.0)
        };
        ShotResult {
            kind: ShotKind::WaterDrop,
            distance: 0.0,
            direction: Direction::Straight,
            deviation_degrees: 0.0,
            position: drop.clamped(),
            lie: Lie::Rough,
            holed_out: false,
            penalty_stroke: true,
            carry: None,
            roll: None,
        }
    }

    fn resolve_putt(
        &self,
        roll: DiceRoll,
        position: Position,
        distance_to_pin: f64,
        dice: &mut impl DiceSource,
    ) -> ShotResult {
        let putt = tables::putt_distance(roll.distance);
        let spread = (dice.fraction() * 2.0 - 1.0) * putt.variance;
        let traveled = distance_to_pin * (putt.base + spread);

        let (dice_deviation, direction) = resolve_deviation(roll.direction, dice);
        // Putts read the table at a tenth scale; a 30-degree push on a putt
        // would be absurd.
        let mut deviation = dice_deviation * 0.1;
        if self.green_slope {
            deviation += green_slope_break(position, distance_to_pin);
        }

        let remaining = (distance_to_pin - traveled).abs();
        if remaining <= GIMME_RANGE && deviation.abs() < PUTT_HOLE_OUT_DEGREES {
            let mut result = holed(ShotKind::Putt, traveled);
            result.direction = direction;
            return result;
        }

        let new_position = advance(position, traveled, distance_to_pin, deviation);
        ShotResult {
            kind: ShotKind::Putt,
            distance: traveled,
            direction,
            deviation_degrees: deviation,
            position: new_position,
            lie: Lie::Green,
            holed_out: false,
            penalty_stroke: false,
            carry: None,
            roll: None,
        }
    }

    fn resolve_chip(
        &self,
        club: Club,
        roll: DiceRoll,
        position: Position,
        distance_to_pin: f64,
        hole: &HoleMetadata,
        dice: &mut impl DiceSource,
    ) -> Result<ShotResult> {
        let carry_roll = tables::chip_distance(club, roll.distance)?;
        let (deviation, direction) = resolve_deviation(roll.direction, dice);

        let distance = carry_roll.total();
        let new_position = advance(position, distance, distance_to_pin, deviation);
        let new_lie = classify(new_position, hole, dice);
        Ok(ShotResult {
            kind: ShotKind::Chip,
            distance,
            direction,
            deviation_degrees: deviation,
            position: new_position,
            lie: new_lie,
            holed_out: false,
            penalty_stroke: false,
            carry: Some(carry_roll.carry),
            roll: Some(carry_roll.roll),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_pitch(
        &self,
        club: Club,
        lie: Lie,
        roll: DiceRoll,
        position: Position,
        distance_to_pin: f64,
        hole: &HoleMetadata,
        dice: &mut impl DiceSource,
    ) -> Result<ShotResult> {
        let problem = roll.problem.ok_or(Error::MissingProblemDie(lie))?;

        // Sand escapes resolve before any distance scaling; a 1 leaves the
        // ball in the bunker.
        let multiplier;
        let mut deviation_penalty = 0.0;
        if lie == Lie::Sand {
            let escape = tables::sand_escape(problem);
            if !escape.escapes {
                return Ok(bunker_stay(position, dice));
            }
            multiplier = escape.distance_fraction;
        } else {
            let modifier = tables::hazard_modifier(lie, problem);
            multiplier = modifier.distance_multiplier;
            deviation_penalty = modifier.accuracy_penalty_degrees;
        }

        let carry_roll = tables::pitch_distance(club, roll.distance)?;
        let (dice_deviation, direction) = resolve_deviation(roll.direction, dice);
        let deviation = dice_deviation + deviation_penalty * offline_sign(position);

        let distance = carry_roll.total() * multiplier;
        let new_position = advance(position, distance, distance_to_pin, deviation);
        let new_lie = classify(new_position, hole, dice);
        Ok(ShotResult {
            kind: ShotKind::Pitch,
            distance,
            direction,
            deviation_degrees: deviation,
            position: new_position,
            lie: new_lie,
            holed_out: false,
            penalty_stroke: false,
            carry: Some(carry_roll.carry * multiplier),
            roll: Some(carry_roll.roll * multiplier),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_full_shot(
        &self,
        club: Club,
        lie: Lie,
        roll: DiceRoll,
        position: Position,
        distance_to_pin: f64,
        hole: &HoleMetadata,
        dice: &mut impl DiceSource,
    ) -> Result<ShotResult> {
        let range = tables::full_shot_distance(club, roll.distance);
        let mut distance = range.min + dice.fraction() * (range.max - range.min);

        let mut deviation_penalty = 0.0;
        if needs_problem_dice(lie) {
            let problem = roll.problem.ok_or(Error::MissingProblemDie(lie))?;
            if lie == Lie::Sand {
                let escape = tables::sand_escape(problem);
                if !escape.escapes {
                    return Ok(bunker_stay(position, dice));
                }
                distance *= escape.distance_fraction;
            } else {
                let modifier = tables::hazard_modifier(lie, problem);
                distance *= modifier.distance_multiplier;
                deviation_penalty = modifier.accuracy_penalty_degrees;
            }
        }

        let (dice_deviation, direction) = resolve_deviation(roll.direction, dice);
        let deviation = dice_deviation + deviation_penalty * offline_sign(position);

        let new_position = advance(position, distance, distance_to_pin, deviation);
        let new_lie = classify(new_position, hole, dice);
        Ok(ShotResult {
            kind: ShotKind::FullShot,
            distance,
            direction,
            deviation_degrees: deviation,
            position: new_position,
            lie: new_lie,
            holed_out: false,
            penalty_stroke: false,
            carry: None,
            roll: None,
        })
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Club legality for the selected shot type. The resolver is the authority
/// here; the UI preventing bad selections does not excuse it.
fn check_club_legality(club: Club, lie: Lie, kind: ShotKind) -> Result<()> {
    let illegal = Err(Error::IllegalClub { club, lie });
    match kind {
        ShotKind::Gimme | ShotKind::WaterDrop => Ok(()),
        ShotKind::Putt => {
            if club == Club::Putter {
                Ok(())
            } else {
                illegal
            }
        }
        ShotKind::Chip => {
            if CHIP_CLUBS.contains(&club) {
                Ok(())
            } else {
                illegal
            }
        }
        ShotKind::Pitch => {
            // Sand forces the wedge; rough allows wedge or 9-iron.
            let legal = if lie == Lie::Sand {
                club == Club::Wedge
            } else {
                PITCH_CLUBS.contains(&club)
            };
            if legal {
                Ok(())
            } else {
                illegal
            }
        }
        ShotKind::FullShot => {
            let legal = match lie {
                Lie::Sand => club == Club::Wedge,
                Lie::Trees => TREES_CLUBS.contains(&club),
                _ => true,
            };
            if legal {
                Ok(())
            } else {
                illegal
            }
        }
    }
}

/// Resolve the 12-sided direction die, including face 12's hook-or-slice
/// secondary draw.
fn resolve_deviation(die: u8, dice: &mut impl DiceSource) -> (f64, Direction) {
    match tables::direction_deviation(die) {
        Deviation::Degrees(d) if d < 0.0 => (d, Direction::Left),
        Deviation::Degrees(d) if d > 0.0 => (d, Direction::Right),
        Deviation::Degrees(d) => (d, Direction::Straight),
        Deviation::HookSlice => {
            if dice.fraction() < 0.5 {
                (-HOOK_SLICE_DEGREES, Direction::Hook)
            } else {
                (HOOK_SLICE_DEGREES, Direction::Slice)
            }
        }
    }
}

/// Hazard accuracy penalties push the ball further from the centerline.
fn offline_sign(position: Position) -> f64 {
    if position.x >= 50.0 {
        1.0
    } else {
        -1.0
    }
}

/// Convert distance and deviation into a new normalized position. The y
/// axis consumes the shot's share of the remaining distance proportionally;
/// the lateral component is damped so the narrow normalized course does not
/// produce absurd sideways swings.
fn advance(position: Position, distance: f64, distance_to_pin: f64, deviation_degrees: f64) -> Position {
    if distance_to_pin <= 0.0 {
        return position;
    }
    let fraction = (distance / distance_to_pin).min(OVERSHOOT_CAP);
    let theta = deviation_degrees.to_radians();
    let remaining_y = 100.0 - position.y;
    let dy = fraction * remaining_y * theta.cos();
    let dx = fraction * remaining_y * theta.sin() * LATERAL_SCALE;
    Position::new(position.x + dx, position.y + dy).clamped()
}

fn holed(kind: ShotKind, distance: f64) -> ShotResult {
    ShotResult {
        kind,
        distance,
        direction: Direction::Straight,
        deviation_degrees: 0.0,
        position: Position::PIN,
        lie: Lie::Holed,
        holed_out: true,
        penalty_stroke: false,
        carry: None,
        roll: None,
    }
}

/// Escape failure: the ball moves a yard or three inside the bunker and the
/// lie does not change. No distance or direction tables apply.
fn bunker_stay(position: Position, dice: &mut impl DiceSource) -> ShotResult {
    let distance = 1.0 + dice.fraction() * 2.0;
    let dx = (dice.fraction() - 0.5) * 2.0;
    let dy = (dice.fraction() - 0.5) * 2.0;
    ShotResult {
        kind: ShotKind::Pitch,
        distance,
        direction: Direction::Straight,
        deviation_degrees: 0.0,
        position: Position::new(position.x + dx, position.y + dy).clamped(),
        lie: Lie::Sand,
        holed_out: false,
        penalty_stroke: false,
        carry: None,
        roll: None,
    }
}

/// Green-slope break: grows with lateral offset and putt length. Breaks
/// toward the centerline.
fn green_slope_break(position: Position, distance_to_pin: f64) -> f64 {
    let severity = ((position.x - 50.0).abs() / 50.0) * (distance_to_pin / 30.0).min(1.0);
    severity * 10.0 * (50.0 - position.x).signum()
}
