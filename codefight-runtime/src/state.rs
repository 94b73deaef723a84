//! Player state

use codefight_spec::{Address, Glyphs, Instruction, Program};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot of a player within its match, in turn order.
///
/// Cells record the slot of their last writer; display maps it to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A program instance taking part in one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    instructions: Vec<Instruction>,
    glyphs: Option<Glyphs>,
    pointer: Address,
    moves: u64,
    alive: bool,
}

impl Player {
    /// Fresh player cloned from a registered program
    pub fn from_program(program: &Program) -> Self {
        Self::new(program.name(), program.instructions().to_vec())
    }

    pub fn new(name: impl Into<String>, instructions: Vec<Instruction>) -> Self {
        Self {
            id: PlayerId::default(),
            name: name.into(),
            instructions,
            glyphs: None,
            pointer: 0,
            moves: 0,
            alive: true,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name, including any `#k` suffix given at selection
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn glyphs(&self) -> Option<Glyphs> {
        self.glyphs
    }

    /// Address of the instruction this player executes next
    #[inline]
    pub fn pointer(&self) -> Address {
        self.pointer
    }

    /// Instructions executed by this player, not counting the final STOP
    #[inline]
    pub fn move_count(&self) -> u64 {
        self.moves
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Number of cells the program occupies once deployed
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Move the pointer to an already sanitized address
    pub fn set_pointer(&mut self, address: Address) {
        self.pointer = address;
    }

    /// Eliminate the player
    pub fn halt(&mut self) {
        self.alive = false;
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Bind the player to its slot and clear any state from a previous match
    pub(crate) fn enter_match(&mut self, id: PlayerId, glyphs: Option<Glyphs>, pointer: Address) {
        self.id = id;
        self.glyphs = glyphs;
        self.pointer = pointer;
        self.moves = 0;
        self.alive = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_program() {
        let program = Program::new("imp", vec![Instruction::MovR { a: 0, b: 1 }]);
        let player = Player::from_program(&program);
        assert_eq!(player.name(), "imp");
        assert_eq!(player.len(), 1);
        assert_eq!(player.pointer(), 0);
        assert_eq!(player.move_count(), 0);
        assert!(player.is_alive());
        assert_eq!(player.glyphs(), None);
    }

    #[test]
    fn test_enter_match_resets() {
        let mut player = Player::new("imp", vec![Instruction::MovR { a: 0, b: 1 }]);
        player.record_move();
        player.halt();

        player.enter_match(PlayerId(2), Some(Glyphs::new('i', 'I')), 14);
        assert_eq!(player.id(), PlayerId(2));
        assert_eq!(player.pointer(), 14);
        assert_eq!(player.move_count(), 0);
        assert!(player.is_alive());
        assert_eq!(player.glyphs(), Some(Glyphs::new('i', 'I')));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(3).to_string(), "#3");
    }
}
