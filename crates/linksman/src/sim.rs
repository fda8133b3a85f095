// ABOUTME: Full-round play and Monte Carlo simulation over the rules engine.
// ABOUTME: A simple caddie policy picks clubs; statistics come out per round.

use crate::course::Course;
use crate::dice::{roll_for_lie, DiceSource, FastDice};
use crate::error::Result;
use crate::lie::Lie;
use crate::course::Position;
use crate::resolver::{Direction, Resolver, ShotKind, ShotResult, CHIP_RANGE, PITCH_RANGE};
use crate::round::{RoundPhase, RoundState};
use crate::tables::{full_shot_distance, Club, TREES_CLUBS};
use std::collections::HashMap;

/// House rule for simulation: pick the ball up once a hole reaches this many
/// strokes, scoring it as played.
const PICKUP_STROKES: u32 = 12;

/// Pick a club for the lie and distance. Honors every legality rule the
/// resolver enforces; for full shots it takes the club whose typical
/// distance best fits what remains.
pub fn caddie(lie: Lie, distance_to_pin: f64) -> Club {
    match lie {
        Lie::Green | Lie::Holed => Club::Putter,
        Lie::Sand => Club::Wedge,
        Lie::Fairway if distance_to_pin <= CHIP_RANGE => Club::Wedge,
        Lie::Rough if distance_to_pin <= PITCH_RANGE => Club::Wedge,
        Lie::Trees => best_fit(&TREES_CLUBS, distance_to_pin),
        Lie::Water => Club::Wedge,
        _ => {
            // Everything but the putter is in play for a full shot.
            best_fit(&Club::ALL[..8], distance_to_pin)
        }
    }
}

fn best_fit(clubs: &[Club], distance_to_pin: f64) -> Club {
    let typical = |club: Club| {
        let low = full_shot_distance(club, 3);
        let high = full_shot_distance(club, 4);
        (low.min + high.max) / 2.0
    };
    *clubs
        .iter()
        .min_by(|a, b| {
            let da = (typical(**a) - distance_to_pin).abs();
            let db = (typical(**b) - distance_to_pin).abs();
            da.partial_cmp(&db).expect("club distances are finite")
        })
        .expect("club list is non-empty")
}

/// Play one complete 18-hole round and return the finished round state.
pub fn play_round<S: Into<String>>(
    course: &Course,
    names: impl IntoIterator<Item = S>,
    resolver: &Resolver,
    dice: &mut impl DiceSource,
) -> Result<RoundState> {
    let mut round = RoundState::new(names);

    loop {
        let hole = *course.hole(round.current_hole())?;

        while round.phase() == RoundPhase::Playing {
            let player = round.current_player();
            let position = player.position;
            let lie = player.lie;
            let distance_to_pin = position.distance_to_pin(hole.yardage);

            if player.strokes >= PICKUP_STROKES - 1 {
                round.apply(&conceded(position));
            } else {
                let club = caddie(lie, distance_to_pin);
                let roll = roll_for_lie(lie, dice);
                let result =
                    resolver.resolve(club, lie, roll, position, distance_to_pin, &hole, dice)?;
                round.apply(&result);
            }

            if round.phase() == RoundPhase::Playing {
                round.next_active_player();
            }
        }

        match round.phase() {
            RoundPhase::RoundComplete => return Ok(round),
            _ => round.next_hole()?,
        }
    }
}

/// A pick-up: the hole is scored where it stands.
fn conceded(position: Position) -> ShotResult {
    ShotResult {
        kind: ShotKind::Gimme,
        distance: 0.0,
        direction: Direction::Straight,
        deviation_degrees: 0.0,
        position,
        lie: Lie::Holed,
        holed_out: true,
        penalty_stroke: false,
        carry: None,
        roll: None,
    }
}

/// Result of a Monte Carlo simulation over many solo rounds.
#[derive(Debug, Clone)]
pub struct SimResult {
    /// Distribution of 18-hole totals: score -> count.
    pub distribution: HashMap<i64, usize>,
    /// Minimum total observed.
    pub min: i64,
    /// Maximum total observed.
    pub max: i64,
    /// Mean total.
    pub mean: f64,
    /// Standard deviation.
    pub std_dev: f64,
    /// Number of rounds played.
    pub n: usize,
    /// The course par, for scoring context.
    pub par: u32,
}

impl SimResult {
    /// Returns outcomes sorted by score for iteration.
    pub fn sorted_outcomes(&self) -> Vec<(i64, usize)> {
        let mut outcomes: Vec<_> = self.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by_key(|(k, _)| *k);
        outcomes
    }

    /// Returns the probability of each total.
    pub fn probabilities(&self) -> HashMap<i64, f64> {
        self.distribution
            .iter()
            .map(|(&k, &v)| (k, v as f64 / self.n as f64))
            .collect()
    }

    /// Returns the mode (most common total).
    pub fn mode(&self) -> Option<i64> {
        self.distribution
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&value, _)| value)
    }

    /// Returns the median total.
    pub fn median(&self) -> f64 {
        let mut values: Vec<i64> = Vec::with_capacity(self.n);
        for (&value, &count) in &self.distribution {
            for _ in 0..count {
                values.push(value);
            }
        }
        values.sort();

        if values.is_empty() {
            return 0.0;
        }

        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) as f64 / 2.0
        } else {
            values[mid] as f64
        }
    }
}

/// Simulate `n` solo rounds on the course.
pub fn simulate(course: &Course, n: usize) -> Result<SimResult> {
    run_simulation(course, n, &mut FastDice::new())
}

/// Simulate with a seeded dice source for reproducibility.
pub fn simulate_seeded(course: &Course, n: usize, seed: u64) -> Result<SimResult> {
    run_simulation(course, n, &mut FastDice::with_seed(seed))
}

fn run_simulation(course: &Course, n: usize, dice: &mut impl DiceSource) -> Result<SimResult> {
    let resolver = Resolver::new();

    let mut distribution: HashMap<i64, usize> = HashMap::new();
    let mut sum: i64 = 0;
    let mut sum_sq: i64 = 0;
    let mut min = i64::MAX;
    let mut max = i64::MIN;

    for _ in 0..n {
        let round = play_round(course, ["sim"], &resolver, dice)?;
        let total = round.players()[0].total_score() as i64;

        *distribution.entry(total).or_insert(0) += 1;
        sum += total;
        sum_sq += total * total;
        min = min.min(total);
        max = max.max(total);
    }

    let mean = sum as f64 / n as f64;
    let variance = (sum_sq as f64 / n as f64) - (mean * mean);
    let std_dev = variance.sqrt();

    Ok(SimResult {
        distribution,
        min,
        max,
        mean,
        std_dev,
        n,
        par: course.total_par(),
    })
}
