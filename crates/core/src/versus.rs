//! Versus module - two sessions on one keyboard
//!
//! Both players get their own board, piece stream and garbage gap, all
//! derived from a single seed. Lines one player clears beyond the first are
//! handed to the other player's garbage queue right after the move that
//! earned them.

use tracing::info;

use crate::config::GameConfig;
use crate::rng::{PieceSource, SimpleRng};
use crate::session::{Outcome, Phase, Session};
use crate::types::{Command, PlayerSlot};

#[derive(Debug, Clone)]
pub struct Versus {
    players: [Session; 2],
}

impl Versus {
    /// Start a match. Each player draws from an independent fork of `seed`.
    pub fn new(config: &GameConfig, seed: u32) -> Self {
        let mut root = SimpleRng::new(seed);
        let one = PieceSource::from_rng(root.fork());
        let two = PieceSource::from_rng(root.fork());
        Self::from_sessions([
            Session::with_garbage(config, one),
            Session::with_garbage(config, two),
        ])
    }

    /// Match over prepared sessions (player one first)
    pub fn from_sessions(players: [Session; 2]) -> Self {
        Self { players }
    }

    pub fn player(&self, slot: PlayerSlot) -> &Session {
        &self.players[slot.index()]
    }

    pub fn players(&self) -> &[Session; 2] {
        &self.players
    }

    /// Over as soon as either board is
    pub fn is_over(&self) -> bool {
        self.players.iter().any(Session::is_game_over)
    }

    /// The surviving player, once the other has topped out.
    /// `None` while both play on, or when both went over together.
    pub fn winner(&self) -> Option<PlayerSlot> {
        match (self.players[0].phase(), self.players[1].phase()) {
            (Phase::Active, Phase::GameOver) => Some(PlayerSlot::One),
            (Phase::GameOver, Phase::Active) => Some(PlayerSlot::Two),
            _ => None,
        }
    }

    /// One gravity step for both boards
    pub fn gravity_tick(&mut self) -> [Outcome; 2] {
        if self.is_over() {
            return [Outcome::Halted; 2];
        }
        let outcomes = [self.players[0].gravity_tick(), self.players[1].gravity_tick()];
        self.exchange();
        outcomes
    }

    /// Route a command to one player's board
    pub fn apply(&mut self, slot: PlayerSlot, command: Command) -> Outcome {
        if command == Command::Quit {
            return Outcome::Quit;
        }
        if self.is_over() {
            return Outcome::Halted;
        }
        let outcome = self.players[slot.index()].apply(command);
        self.exchange();
        outcome
    }

    /// Move each player's earned rows into the opponent's queue.
    fn exchange(&mut self) {
        let [one, two] = &mut self.players;
        let to_two = one.take_outgoing_garbage();
        let to_one = two.take_outgoing_garbage();
        two.receive_garbage(to_two);
        one.receive_garbage(to_one);

        if let Some(slot) = self.winner() {
            info!(winner = ?slot, "match decided");
        }
    }
}
