// ABOUTME: Round bookkeeping: per-player strokes, scores, and turn order
// ABOUTME: across 18 holes, with hole and round completion detection.

use crate::course::Position;
use crate::error::{Error, Result};
use crate::lie::Lie;
use crate::resolver::ShotResult;
use serde::{Deserialize, Serialize};

pub const HOLES_PER_ROUND: usize = 18;

/// One player's state. Owned exclusively by [`RoundState`], which is the
/// sole writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub position: Position,
    pub lie: Lie,
    pub strokes: u32,
    /// Per-hole scores, written once when the player holes out.
    pub scores: [Option<u32>; HOLES_PER_ROUND],
    pub holed_out: bool,
}

impl PlayerState {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::TEE,
            lie: Lie::Tee,
            strokes: 0,
            scores: [None; HOLES_PER_ROUND],
            holed_out: false,
        }
    }

    fn reset_for_hole(&mut self) {
        self.position = Position::TEE;
        self.lie = Lie::Tee;
        self.strokes = 0;
        self.holed_out = false;
    }

    /// Total strokes over the holes completed so far.
    pub fn total_score(&self) -> u32 {
        self.scores.iter().flatten().sum()
    }
}

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Playing,
    HoleComplete,
    RoundComplete,
}

/// Tracks a round in progress. One instance per round, owned by one caller;
/// undo is a caller-retained [`RoundState::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    players: Vec<PlayerState>,
    current_hole: usize,
    current_player: usize,
    phase: RoundPhase,
}

impl RoundState {
    /// Start a round on hole 1 with the given players.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let players: Vec<PlayerState> = names.into_iter().map(PlayerState::new).collect();
        assert!(!players.is_empty(), "a round needs at least one player");
        Self {
            players,
            current_hole: 0,
            current_player: 0,
            phase: RoundPhase::Playing,
        }
    }

    /// Zero-based index of the hole in play.
    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    /// One-based hole number, for display.
    pub fn hole_number(&self) -> usize {
        self.current_hole + 1
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// Apply a shot result to the player at the tee. Every result costs one
    /// stroke: a swing, or the penalty stroke on a water drop. If the player
    /// holed out, the hole score is recorded once, here.
    pub fn apply(&mut self, result: &ShotResult) {
        let hole = self.current_hole;
        let player = &mut self.players[self.current_player];
        player.strokes += 1;
        player.position = result.position;
        player.lie = result.lie;
        if result.holed_out {
            player.holed_out = true;
            player.scores[hole] = Some(player.strokes);
        }

        if self.players.iter().all(|p| p.holed_out) {
            self.phase = if self.current_hole + 1 == HOLES_PER_ROUND {
                RoundPhase::RoundComplete
            } else {
                RoundPhase::HoleComplete
            };
        }
    }

    /// Rotate to the next player still playing the hole, skipping anyone
    /// who has holed out. Returns `None` when the hole is complete.
    pub fn next_active_player(&mut self) -> Option<usize> {
        for offset in 1..=self.players.len() {
            let candidate = (self.current_player + offset) % self.players.len();
            if !self.players[candidate].holed_out {
                self.current_player = candidate;
                return Some(candidate);
            }
        }
        None
    }

    /// Advance to the next hole, resetting every player. Past hole 18 the
    /// round is over and this is an error.
    pub fn next_hole(&mut self) -> Result<()> {
        if self.phase == RoundPhase::RoundComplete || self.current_hole + 1 >= HOLES_PER_ROUND {
            return Err(Error::RoundComplete);
        }
        self.current_hole += 1;
        self.current_player = 0;
        for player in &mut self.players {
            player.reset_for_hole();
        }
        self.phase = RoundPhase::Playing;
        Ok(())
    }

    /// Snapshot for caller-driven undo: retain before resolving a shot,
    /// restore to take it back.
    pub fn snapshot(&self) -> RoundState {
        self.clone()
    }

    pub fn restore(&mut self, snapshot: RoundState) {
        *self = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Direction, ShotKind};

    fn shot(position: Position, lie: Lie, holed_out: bool) -> ShotResult {
        ShotResult {
            kind: ShotKind::FullShot,
            distance: 100.0,
            direction: Direction::Straight,
            deviation_degrees: 0.0,
            position,
            lie,
            holed_out,
            penalty_stroke: false,
            carry: None,
            roll: None,
        }
    }

    #[test]
    fn test_apply_updates_player() {
        let mut round = RoundState::new(["arnie"]);
        round.apply(&shot(Position::new(50.0, 60.0), Lie::Fairway, false));

        let player = round.current_player();
        assert_eq!(player.strokes, 1);
        assert_eq!(player.lie, Lie::Fairway);
        assert_eq!(player.position, Position::new(50.0, 60.0));
        assert!(!player.holed_out);
        assert_eq!(round.phase(), RoundPhase::Playing);
    }

    #[test]
    fn test_hole_out_records_score_once() {
        let mut round = RoundState::new(["arnie"]);
        round.apply(&shot(Position::new(50.0, 60.0), Lie::Fairway, false));
        round.apply(&shot(Position::new(50.0, 97.0), Lie::Green, false));
        round.apply(&shot(Position::PIN, Lie::Holed, true));

        let player = &round.players()[0];
        assert!(player.holed_out);
        assert_eq!(player.scores[0], Some(3));
        assert_eq!(round.phase(), RoundPhase::HoleComplete);
    }

    #[test]
    fn test_turn_rotation_skips_holed_out() {
        let mut round = RoundState::new(["a", "b", "c"]);

        // Player a holes out immediately.
        round.apply(&shot(Position::PIN, Lie::Holed, true));
        assert_eq!(round.next_active_player(), Some(1));

        round.apply(&shot(Position::new(50.0, 50.0), Lie::Fairway, false));
        assert_eq!(round.next_active_player(), Some(2));

        round.apply(&shot(Position::PIN, Lie::Holed, true));
        // c holed out; rotation skips both a and c.
        assert_eq!(round.next_active_player(), Some(1));

        round.apply(&shot(Position::PIN, Lie::Holed, true));
        assert_eq!(round.phase(), RoundPhase::HoleComplete);
        assert_eq!(round.next_active_player(), None);
    }

    #[test]
    fn test_next_hole_resets_players() {
        let mut round = RoundState::new(["a", "b"]);
        round.apply(&shot(Position::PIN, Lie::Holed, true));
        round.next_active_player();
        round.apply(&shot(Position::PIN, Lie::Holed, true));
        assert_eq!(round.phase(), RoundPhase::HoleComplete);

        round.next_hole().unwrap();
        assert_eq!(round.current_hole(), 1);
        assert_eq!(round.hole_number(), 2);
        assert_eq!(round.phase(), RoundPhase::Playing);
        for player in round.players() {
            assert_eq!(player.strokes, 0);
            assert_eq!(player.lie, Lie::Tee);
            assert_eq!(player.position, Position::TEE);
            assert!(!player.holed_out);
            // Hole 1 score survives the reset.
            assert_eq!(player.scores[0], Some(1));
        }
    }

    #[test]
    fn test_hole_completion_monotonic() {
        let mut round = RoundState::new(["a"]);
        for expected in 1..HOLES_PER_ROUND {
            round.apply(&shot(Position::PIN, Lie::Holed, true));
            round.next_hole().unwrap();
            assert_eq!(round.current_hole(), expected);
        }
    }

    #[test]
    fn test_round_completes_on_hole_18() {
        let mut round = RoundState::new(["a"]);
        for _ in 0..HOLES_PER_ROUND - 1 {
            round.apply(&shot(Position::PIN, Lie::Holed, true));
            round.next_hole().unwrap();
        }
        round.apply(&shot(Position::PIN, Lie::Holed, true));
        assert_eq!(round.phase(), RoundPhase::RoundComplete);
        assert_eq!(round.next_hole(), Err(Error::RoundComplete));

        let player = &round.players()[0];
        assert_eq!(player.total_score(), 18);
        assert!(player.scores.iter().all(|s| s.is_some()));
    }

    #[test]
    fn test_snapshot_restore_undo() {
        let mut round = RoundState::new(["a"]);
        round.apply(&shot(Position::new(50.0, 40.0), Lie::Fairway, false));

        let snapshot = round.snapshot();
        round.apply(&shot(Position::new(80.0, 60.0), Lie::Trees, false));
        assert_eq!(round.current_player().strokes, 2);

        round.restore(snapshot);
        assert_eq!(round.current_player().strokes, 1);
        assert_eq!(round.current_player().lie, Lie::Fairway);
    }
}
