//! # Configuration System for Codefight
//!
//! Arena geometry, arena fill mode and the display glyphs supplied once at
//! process start.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Smallest accepted arena
pub const MIN_ARENA_SIZE: usize = 7;

/// Largest accepted arena
pub const MAX_ARENA_SIZE: usize = 1337;

/// Seed bounds accepted for random fill
pub const MIN_FILL_SEED: i64 = -1337;
pub const MAX_FILL_SEED: i64 = 1337;

/// How arena cells not covered by a program are filled at match start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillMode {
    /// Every cell is `STOP,0,0`
    #[default]
    Stop,
    /// Opcode and both arguments drawn from a generator seeded with `seed`
    Random { seed: i64 },
}

impl FillMode {
    /// Random fill with a seed checked against [`MIN_FILL_SEED`, `MAX_FILL_SEED`]
    pub fn random(seed: i64) -> Result<Self, ConfigError> {
        if !(MIN_FILL_SEED..=MAX_FILL_SEED).contains(&seed) {
            return Err(ConfigError::SeedOutOfRange(seed));
        }
        Ok(FillMode::Random { seed })
    }

    /// Seed used for generation (0 for STOP fill)
    pub const fn seed(&self) -> i64 {
        match self {
            FillMode::Stop => 0,
            FillMode::Random { seed } => *seed,
        }
    }

    /// Mode name as accepted by `set-init-mode`
    pub const fn name(&self) -> &'static str {
        match self {
            FillMode::Stop => "INIT_MODE_STOP",
            FillMode::Random { .. } => "INIT_MODE_RANDOM",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillMode::Stop => write!(f, "{}", self.name()),
            FillMode::Random { seed } => write!(f, "{} {}", self.name(), seed),
        }
    }
}

/// Arena configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of cells, in [`MIN_ARENA_SIZE`, `MAX_ARENA_SIZE`]
    pub size: usize,
    /// Fill mode applied at match start
    pub fill: FillMode,
}

impl ArenaConfig {
    /// Create a new configuration with validation
    pub fn new(size: usize, fill: FillMode) -> Result<Self, ConfigError> {
        let config = Self { size, fill };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_ARENA_SIZE {
            return Err(ConfigError::ArenaTooSmall(self.size));
        }
        if self.size > MAX_ARENA_SIZE {
            return Err(ConfigError::ArenaTooLarge(self.size));
        }
        if let FillMode::Random { seed } = self.fill {
            FillMode::random(seed)?;
        }
        Ok(())
    }

    /// Longest program accepted at registration: half the arena, rounded up.
    ///
    /// A longer program would overwrite its opponent in every two-player match.
    #[inline]
    pub const fn max_program_len(&self) -> usize {
        self.size.div_ceil(2)
    }

    /// Same configuration with a different fill mode
    pub fn with_fill(self, fill: FillMode) -> Self {
        Self { fill, ..self }
    }
}

/// Default and bomb glyph of one player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Glyphs {
    pub default: char,
    pub bomb: char,
}

impl Glyphs {
    pub const fn new(default: char, bomb: char) -> Self {
        Self { default, bomb }
    }
}

/// Glyphs for cells that do not belong to any player's trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerGlyphs {
    /// Cell never written by a player
    pub unmodified: char,
    /// Boundary of a detailed listing
    pub edge: char,
    /// Address the next turn executes
    pub next: char,
    /// Pointer of any other live player
    pub other: char,
}

/// Display configuration: four marker glyphs plus one glyph pair per player slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub markers: MarkerGlyphs,
    pub players: Vec<Glyphs>,
}

impl DisplayConfig {
    /// Create a new display configuration with validation
    pub fn new(markers: MarkerGlyphs, players: Vec<Glyphs>) -> Result<Self, ConfigError> {
        let config = Self { markers, players };
        config.validate()?;
        Ok(config)
    }

    /// Every glyph must be visible and distinct from every other glyph
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayerGlyphs);
        }

        let mut seen = HashSet::new();
        for glyph in self.all_glyphs() {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::InvalidGlyph(glyph));
            }
            if !seen.insert(glyph) {
                return Err(ConfigError::DuplicateGlyph(glyph));
            }
        }
        Ok(())
    }

    fn all_glyphs(&self) -> impl Iterator<Item = char> + '_ {
        let m = &self.markers;
        [m.unmodified, m.edge, m.next, m.other]
            .into_iter()
            .chain(self.players.iter().flat_map(|g| [g.default, g.bomb]))
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena size below [`MIN_ARENA_SIZE`]
    ArenaTooSmall(usize),
    /// Arena size above [`MAX_ARENA_SIZE`]
    ArenaTooLarge(usize),
    /// Fill seed outside [`MIN_FILL_SEED`, `MAX_FILL_SEED`]
    SeedOutOfRange(i64),
    /// Glyph is whitespace or a control character
    InvalidGlyph(char),
    /// Glyph used more than once
    DuplicateGlyph(char),
    /// No player glyph pair was supplied
    NoPlayerGlyphs,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ArenaTooSmall(size) => {
                write!(f, "arena size {} is too small, minimum is {}", size, MIN_ARENA_SIZE)
            }
            ConfigError::ArenaTooLarge(size) => {
                write!(f, "arena size {} is too large, maximum is {}", size, MAX_ARENA_SIZE)
            }
            ConfigError::SeedOutOfRange(seed) => {
                write!(
                    f,
                    "seed {} must be between {} and {}",
                    seed, MIN_FILL_SEED, MAX_FILL_SEED
                )
            }
            ConfigError::InvalidGlyph(glyph) => {
                write!(f, "glyph {:?} must be a visible character", glyph)
            }
            ConfigError::DuplicateGlyph(glyph) => {
                write!(f, "glyph {:?} is used more than once, all glyphs must be unique", glyph)
            }
            ConfigError::NoPlayerGlyphs => {
                write!(f, "at least one player glyph pair is required")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
