//! Command line arguments

use clap::Parser;
use codefight_spec::{ArenaConfig, DisplayConfig, FillMode, Glyphs, MarkerGlyphs};

use crate::error::ShellError;

#[derive(Debug, Parser)]
#[command(name = "codefight", about = "Codefight: AI programs battling in a shared circular memory")]
pub struct Cli {
    /// Number of memory cells (7 to 1337)
    pub size: usize,

    /// Glyph for cells no AI has written
    pub unmodified: char,

    /// Glyph framing a detailed memory section
    pub edge: char,

    /// Glyph for the address executed next
    pub next: char,

    /// Glyph for the addresses of the other AIs
    pub other: char,

    /// Default and bomb glyph for each AI slot, in pairs
    #[arg(required = true, num_args = 2.., value_name = "AI_GLYPHS")]
    pub players: Vec<char>,
}

impl Cli {
    /// Arena starts STOP-filled; `set-init-mode` changes that later
    pub fn arena_config(&self) -> Result<ArenaConfig, ShellError> {
        Ok(ArenaConfig::new(self.size, FillMode::Stop)?)
    }

    pub fn display_config(&self) -> Result<DisplayConfig, ShellError> {
        if self.players.len() % 2 != 0 {
            return Err(ShellError::UnpairedGlyph);
        }
        let markers = MarkerGlyphs {
            unmodified: self.unmodified,
            edge: self.edge,
            next: self.next,
            other: self.other,
        };
        let players = self
            .players
            .chunks_exact(2)
            .map(|pair| Glyphs::new(pair[0], pair[1]))
            .collect();
        Ok(DisplayConfig::new(markers, players)?)
    }
}
