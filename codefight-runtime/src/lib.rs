//! # Codefight Runtime
//!
//! Shared arena, instruction interpreter and round-robin scheduler for
//! Codefight matches.
//!
//! ## Features
//!
//! - **Circular arena**: every address wraps, cells remember their last writer
//! - **9 instructions**: STOP, MOV_R, MOV_I, ADD, ADD_R, JMP, JMZ, CMP, SWAP
//! - **Roster**: named program templates cloned into matches
//! - **Scheduler**: one instruction per tick, eliminations, turn skips
//!
//! ## Example
//!
//! ```rust,no_run
//! use codefight_runtime::{create_match, Roster};
//! use codefight_spec::{ArenaConfig, FillMode, Instruction, Program};
//!
//! let mut roster = Roster::new();
//! roster.register(Program::new("imp", vec![Instruction::MovR { a: 0, b: 1 }])).unwrap();
//! roster.register(Program::new("rock", vec![Instruction::Jmp { a: 0, b: 0 }])).unwrap();
//!
//! let config = ArenaConfig::new(100, FillMode::Stop).unwrap();
//! let mut game = create_match(&roster, &["imp", "rock"], &config, &[]).unwrap();
//! for out in game.run_turns(1_000) {
//!     println!("{} executed {} steps until stopping.", out.name, out.moves);
//! }
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod execute;
pub mod roster;
pub mod scheduler;

pub use error::{Result, RosterError, RuntimeError, SetupError};
pub use execute::{execute, SkipRequest, TurnControl};
pub use memory::{Arena, Cell};
pub use roster::Roster;
pub use scheduler::{Elimination, Match, TurnOutcome};
pub use state::{Player, PlayerId};

/// Select `names` from `roster` and set up a match in a fresh arena
pub fn create_match<S: AsRef<str>>(
    roster: &Roster,
    names: &[S],
    config: &codefight_spec::ArenaConfig,
    glyphs: &[codefight_spec::Glyphs],
) -> Result<Match> {
    Ok(Match::create(roster, names, config, glyphs)?)
}
