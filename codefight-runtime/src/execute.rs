//! Instruction execution for Codefight
//!
//! Every address is computed relative to the acting player's pointer and
//! sanitized by the arena. Cells are accessed through the arena API only;
//! nothing holds a cell reference across two arena mutations.

use codefight_spec::Instruction;

use crate::memory::Arena;
use crate::state::Player;

/// Scheduler hook used by CMP
pub trait TurnControl {
    /// Ask the scheduler to consume the next turn without executing anything
    fn skip_next_turn(&mut self);
}

/// Pending-skip flag owned by the scheduler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipRequest {
    requested: bool,
}

impl SkipRequest {
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl TurnControl for SkipRequest {
    fn skip_next_turn(&mut self) {
        self.requested = true;
    }
}

/// Execute single instruction on behalf of `player`
pub fn execute(
    instr: &Instruction,
    arena: &mut Arena,
    player: &mut Player,
    turns: &mut impl TurnControl,
) {
    let p = player.pointer();
    let writer = Some(player.id());

    match *instr {
        Instruction::Stop { .. } => {
            player.halt();
            return;
        }

        Instruction::MovR { a, b } => {
            let origin = arena.offset(p, a);
            let dest = arena.offset(p, b);
            arena.clone_cell(origin, dest, writer);
        }

        Instruction::MovI { a, b } => {
            let origin = arena.offset(p, a);
            let dest = arena.offset(p, b);
            let dest = arena.offset(dest, arena.read(dest).b());
            arena.clone_cell(origin, dest, writer);
        }

        Instruction::Add { .. } => {
            let own = *arena.read(p);
            arena.set_b(p, own.a().wrapping_add(own.b()), writer);
        }

        Instruction::AddR { a, b } => {
            let target = arena.offset(p, b);
            let sum = a.wrapping_add(arena.read(target).b());
            arena.set_b(target, sum, writer);
        }

        Instruction::Jmp { a, .. } => {
            player.set_pointer(arena.offset(p, a));
            return;
        }

        Instruction::Jmz { a, b } => {
            if arena.read(arena.offset(p, b)).b() == 0 {
                player.set_pointer(arena.offset(p, a));
                return;
            }
        }

        Instruction::Cmp { a, b } => {
            let left = arena.read(arena.offset(p, a)).a();
            let right = arena.read(arena.offset(p, b)).b();
            if left == right {
                turns.skip_next_turn();
            }
        }

        Instruction::Swap { a, b } => {
            let first = arena.offset(p, a);
            let second = arena.offset(p, b);
            let first_a = arena.read(first).a();
            let second_b = arena.read(second).b();
            arena.set_a(first, second_b, writer);
            arena.set_b(second, first_a, writer);
        }
    }

    player.set_pointer(arena.offset(p, 1));
}
