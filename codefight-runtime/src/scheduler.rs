//! Round-robin match scheduler
//!
//! A match owns its arena and every participating player. Players are kept
//! in one vector in turn order and never reordered; the active rotation is a
//! list of indices into it that shrinks as players are eliminated.

use codefight_spec::{Address, ArenaConfig, Glyphs, Instruction};

use crate::error::SetupError;
use crate::execute::{execute, SkipRequest};
use crate::memory::Arena;
use crate::roster::Roster;
use crate::state::{Player, PlayerId};

/// What a single scheduler tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No player left; nothing happened
    Idle,
    /// A pending skip consumed this player's turn
    Skipped { player: PlayerId },
    /// The player executed an instruction and survived
    Executed {
        player: PlayerId,
        address: Address,
        instruction: Instruction,
    },
    /// The player executed STOP and left the rotation
    Eliminated { player: PlayerId, moves: u64 },
}

/// Elimination reported by [`Match::run_turns`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    pub player: PlayerId,
    pub name: String,
    pub moves: u64,
}

/// A running match
#[derive(Debug, Clone)]
pub struct Match {
    arena: Arena,
    players: Vec<Player>,
    active: Vec<usize>,
    turn_index: usize,
    pending_skip: SkipRequest,
}

impl Match {
    /// Select `names` from the roster and start a match with them.
    ///
    /// Player `i` gets `glyphs[i]` if present. Fails if any name is unknown.
    pub fn create<S: AsRef<str>>(
        roster: &Roster,
        names: &[S],
        config: &ArenaConfig,
        glyphs: &[Glyphs],
    ) -> Result<Self, SetupError> {
        if let Some(missing) = names.iter().find(|n| !roster.contains(n.as_ref())) {
            tracing::warn!("match declined, unknown AI {}", missing.as_ref());
            return Err(SetupError::UnknownPlayer {
                name: missing.as_ref().to_string(),
            });
        }
        Self::start(config, roster.select(names), glyphs)
    }

    /// Build a fresh arena and place `players` in it, in turn order.
    ///
    /// Nothing is kept if any placement check fails.
    pub fn start(
        config: &ArenaConfig,
        mut players: Vec<Player>,
        glyphs: &[Glyphs],
    ) -> Result<Self, SetupError> {
        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        let size = config.size;
        let count = players.len();
        let spacing = size / count;

        let mut entries = Vec::with_capacity(count);
        for (i, player) in players.iter().enumerate() {
            let len = player.len();
            if i + 1 < count && len > spacing {
                tracing::warn!("match declined, {} overflows its segment", player.name());
                return Err(SetupError::SegmentOverflow {
                    player: player.name().to_string(),
                    len,
                    spacing,
                });
            }
            let end = i * spacing + len;
            if end > size {
                tracing::warn!("match declined, {} overflows the arena", player.name());
                return Err(SetupError::ArenaOverflow {
                    player: player.name().to_string(),
                    end,
                    size,
                });
            }
            let entry = player
                .instructions()
                .iter()
                .position(|inst| !inst.is_stop())
                .ok_or_else(|| SetupError::NoExecutableInstruction {
                    player: player.name().to_string(),
                })?;
            entries.push(i * spacing + entry);
        }

        let mut arena = Arena::new(config);
        for (i, player) in players.iter_mut().enumerate() {
            let id = PlayerId(i);
            arena.populate(i * spacing, player.instructions(), id);
            player.enter_match(id, glyphs.get(i).copied(), entries[i]);
        }

        tracing::info!(
            "match started: {} players, {} cells, {}",
            count,
            size,
            config.fill
        );

        Ok(Self {
            arena,
            active: (0..count).collect(),
            players,
            turn_index: 0,
            pending_skip: SkipRequest::default(),
        })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Every participant in turn order, alive or not
    pub fn total_players(&self) -> &[Player] {
        &self.players
    }

    /// Survivors in rotation order
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.active.iter().map(|&i| &self.players[i])
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Look up a participant by its match name, alive or not
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// True once every player has been eliminated
    pub fn is_decided(&self) -> bool {
        self.active.is_empty()
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn has_pending_skip(&self) -> bool {
        self.pending_skip.is_requested()
    }

    /// Address the next tick executes, or `None` once the match is decided
    pub fn next_scheduled_address(&self) -> Option<Address> {
        if self.active.is_empty() {
            return None;
        }
        let index = if self.pending_skip.is_requested() {
            self.following_index()
        } else {
            self.turn_index
        };
        let player = &self.players[self.active[index]];
        Some(if player.move_count() == 0 {
            self.arena.first_non_stop(player.pointer())
        } else {
            player.pointer()
        })
    }

    /// Run one scheduler tick
    pub fn advance_one_turn(&mut self) -> TurnOutcome {
        if self.active.is_empty() {
            return TurnOutcome::Idle;
        }

        let slot = self.active[self.turn_index];
        let id = PlayerId(slot);

        if self.pending_skip.take() {
            tracing::debug!("{} skips its turn", self.players[slot].name());
            self.turn_index = self.following_index();
            return TurnOutcome::Skipped { player: id };
        }

        let player = &mut self.players[slot];
        if player.move_count() == 0 {
            player.set_pointer(self.arena.first_non_stop(player.pointer()));
        }

        let address = player.pointer();
        let instruction = self.arena.read(address).instruction();
        tracing::debug!("{} executes {} @{}", player.name(), instruction, address);
        execute(&instruction, &mut self.arena, player, &mut self.pending_skip);

        if !player.is_alive() {
            let moves = player.move_count();
            tracing::info!("{} executed {} steps until stopping", player.name(), moves);
            self.active.remove(self.turn_index);
            if self.turn_index >= self.active.len() {
                self.turn_index = 0;
            }
            return TurnOutcome::Eliminated { player: id, moves };
        }

        player.record_move();
        self.turn_index = self.following_index();
        TurnOutcome::Executed {
            player: id,
            address,
            instruction,
        }
    }

    /// Run up to `turns` ticks, stopping once no player is left.
    ///
    /// Returns the eliminations in the order they happened.
    pub fn run_turns(&mut self, turns: u64) -> Vec<Elimination> {
        let mut eliminated = Vec::new();
        for _ in 0..turns {
            if self.active.is_empty() {
                break;
            }
            if let TurnOutcome::Eliminated { player, moves } = self.advance_one_turn() {
                eliminated.push(Elimination {
                    player,
                    name: self.players[player.0].name().to_string(),
                    moves,
                });
            }
        }
        eliminated
    }

    fn following_index(&self) -> usize {
        if self.turn_index + 1 >= self.active.len() {
            0
        } else {
            self.turn_index + 1
        }
    }
}
