//! # Codefight Display
//!
//! Text rendering for a running match: the arena strip, detailed cell
//! listings, player status lines and the end-of-match summary.
//!
//! ## Example
//!
//! ```rust
//! use codefight_display::{render_arena, render_summary};
//! use codefight_runtime::{Match, Player};
//! use codefight_spec::{ArenaConfig, FillMode, Glyphs, Instruction, MarkerGlyphs};
//!
//! let markers = MarkerGlyphs { unmodified: '.', edge: '|', next: '>', other: '*' };
//! let players = vec![
//!     Player::new("imp", vec![Instruction::MovR { a: 0, b: 1 }]),
//!     Player::new("rock", vec![Instruction::Jmp { a: 0, b: 0 }]),
//! ];
//! let config = ArenaConfig::new(10, FillMode::Stop).unwrap();
//! let game = Match::start(&config, players, &[Glyphs::new('i', 'I'), Glyphs::new('r', 'R')]).unwrap();
//!
//! assert_eq!(render_arena(&game, &markers), ">....*....");
//! assert_eq!(render_summary(&game), "Running AIs: imp, rock");
//! ```

pub mod error;
pub mod formatter;
pub mod arena;
pub mod report;

pub use error::{DisplayError, Result};
pub use arena::{glyph_at, render_arena, render_arena_with_edges, render_detail, render_memory, DETAIL_LENGTH};
pub use formatter::{format_detail_line, format_instruction, DetailWidths};
pub use report::{render_elimination, render_player, render_summary};
