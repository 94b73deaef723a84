//! Shell command table

use std::fmt;

/// Game phase the shell is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Registering AIs and configuring the arena
    Initialization,
    /// A match is running
    InGame,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Initialization => f.write_str("INITIALIZATION"),
            Phase::InGame => f.write_str("INGAME"),
        }
    }
}

/// Shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    AddAi,
    RemoveAi,
    SetInitMode,
    StartGame,
    Next,
    ShowMemory,
    ShowAi,
    EndGame,
    Help,
    Quit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 10] = [
        CommandKind::AddAi,
        CommandKind::RemoveAi,
        CommandKind::SetInitMode,
        CommandKind::StartGame,
        CommandKind::Next,
        CommandKind::ShowMemory,
        CommandKind::ShowAi,
        CommandKind::EndGame,
        CommandKind::Help,
        CommandKind::Quit,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CommandKind::AddAi => "add-ai",
            CommandKind::RemoveAi => "remove-ai",
            CommandKind::SetInitMode => "set-init-mode",
            CommandKind::StartGame => "start-game",
            CommandKind::Next => "next",
            CommandKind::ShowMemory => "show-memory",
            CommandKind::ShowAi => "show-ai",
            CommandKind::EndGame => "end-game",
            CommandKind::Help => "help",
            CommandKind::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Minimum and maximum argument count; `None` means unbounded
    pub const fn arity(self) -> (usize, Option<usize>) {
        match self {
            CommandKind::AddAi => (2, Some(2)),
            CommandKind::RemoveAi | CommandKind::ShowAi => (1, Some(1)),
            CommandKind::SetInitMode => (1, Some(2)),
            CommandKind::StartGame => (2, None),
            CommandKind::Next | CommandKind::ShowMemory => (0, Some(1)),
            CommandKind::EndGame | CommandKind::Help | CommandKind::Quit => (0, Some(0)),
        }
    }

    pub fn accepts(self, count: usize) -> bool {
        let (min, max) = self.arity();
        count >= min && max.map_or(true, |max| count <= max)
    }

    pub const fn valid_in(self, phase: Phase) -> bool {
        match self {
            CommandKind::AddAi
            | CommandKind::RemoveAi
            | CommandKind::SetInitMode
            | CommandKind::StartGame => matches!(phase, Phase::Initialization),
            CommandKind::Next
            | CommandKind::ShowMemory
            | CommandKind::ShowAi
            | CommandKind::EndGame => matches!(phase, Phase::InGame),
            CommandKind::Help | CommandKind::Quit => true,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            CommandKind::AddAi => "add-ai: Adds a new AI. Format: add-ai <name> <CMD,argA,argB,...>",
            CommandKind::RemoveAi => "remove-ai: Removes an existing AI. Format: remove-ai <name>",
            CommandKind::SetInitMode => {
                "set-init-mode: Sets how free memory is filled at game start. \
                 Format: set-init-mode INIT_MODE_STOP | INIT_MODE_RANDOM <seed>"
            }
            CommandKind::StartGame => "start-game: Starts a game with the given AIs. Format: start-game <ai1> <ai2> ...",
            CommandKind::Next => "next: Executes the given number of steps (default 1). Format: next [steps]",
            CommandKind::ShowMemory => {
                "show-memory: Shows the memory and, if given, 10 cells in detail. Format: show-memory [address]"
            }
            CommandKind::ShowAi => "show-ai: Shows the current state of an AI. Format: show-ai <name>",
            CommandKind::EndGame => "end-game: Ends the game.",
            CommandKind::Help => "help: Lists the commands available in this phase.",
            CommandKind::Quit => "quit: Quits the application.",
        }
    }
}
