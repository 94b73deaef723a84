//! Line based shell
//!
//! The shell owns the roster, the arena configuration and, while in game,
//! the running match. Each input line is one command.

use std::io::{self, BufRead, Write};

use codefight_assembler::assemble;
use codefight_display::{render_elimination, render_memory, render_player, render_summary};
use codefight_runtime::{create_match, Match, Roster};
use codefight_spec::{ArenaConfig, DisplayConfig, FillMode};

use crate::command::{CommandKind, Phase};
use crate::error::{Result, ShellError};

/// What a successful command wants printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print the text on stdout
    Print(String),
    /// Nothing to print
    Silent,
    /// Stop reading input
    Quit,
}

pub struct Shell {
    roster: Roster,
    arena: ArenaConfig,
    display: DisplayConfig,
    game: Option<Match>,
}

impl Shell {
    pub fn new(arena: ArenaConfig, display: DisplayConfig) -> Self {
        Self {
            roster: Roster::new(),
            arena,
            display,
            game: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game.is_some() {
            Phase::InGame
        } else {
            Phase::Initialization
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn arena_config(&self) -> &ArenaConfig {
        &self.arena
    }

    pub fn game(&self) -> Option<&Match> {
        self.game.as_ref()
    }

    /// Execute one input line
    pub fn execute(&mut self, line: &str) -> Result<Response> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let kind = CommandKind::from_name(name)
            .ok_or_else(|| ShellError::CommandNotFound(name.to_string()))?;
        if !kind.valid_in(self.phase()) {
            return Err(ShellError::WrongPhase(self.phase()));
        }
        if !kind.accepts(args.len()) {
            return Err(ShellError::WrongArgumentCount(kind.name()));
        }

        tracing::debug!("{} {:?}", kind.name(), args);
        match kind {
            CommandKind::AddAi => self.add_ai(args[0], args[1]),
            CommandKind::RemoveAi => self.remove_ai(args[0]),
            CommandKind::SetInitMode => self.set_init_mode(args[0], args.get(1).copied()),
            CommandKind::StartGame => self.start_game(&args),
            CommandKind::Next => self.next(args.first().copied()),
            CommandKind::ShowMemory => self.show_memory(args.first().copied()),
            CommandKind::ShowAi => self.show_ai(args[0]),
            CommandKind::EndGame => self.end_game(),
            CommandKind::Help => Ok(self.help()),
            CommandKind::Quit => Ok(Response::Quit),
        }
    }

    fn add_ai(&mut self, name: &str, source: &str) -> Result<Response> {
        let program = assemble(name, source, self.arena.max_program_len())?;
        self.roster.register(program)?;
        Ok(Response::Print(name.to_string()))
    }

    fn remove_ai(&mut self, name: &str) -> Result<Response> {
        let program = self.roster.unregister(name)?;
        Ok(Response::Print(program.name().to_string()))
    }

    fn set_init_mode(&mut self, mode: &str, seed: Option<&str>) -> Result<Response> {
        let fill = match (mode, seed) {
            ("INIT_MODE_STOP", None) => FillMode::Stop,
            ("INIT_MODE_STOP", Some(_)) => {
                return Err(ShellError::WrongArgumentCount(CommandKind::SetInitMode.name()))
            }
            ("INIT_MODE_RANDOM", Some(seed)) => {
                let seed = seed.parse::<i64>().map_err(|_| {
                    ShellError::InvalidArgument(format!("The seed must be a number, found {}", seed))
                })?;
                FillMode::random(seed)?
            }
            ("INIT_MODE_RANDOM", None) => {
                return Err(ShellError::InvalidArgument(
                    "The random init mode requires a seed".to_string(),
                ))
            }
            (other, _) => return Err(ShellError::UnknownInitMode(other.to_string())),
        };

        let old = self.arena.fill;
        self.arena = self.arena.with_fill(fill);
        Ok(Response::Print(format!("Changed init mode from {} to {}", old, fill)))
    }

    fn start_game(&mut self, names: &[&str]) -> Result<Response> {
        let glyphs = &self.display.players;
        if names.len() > glyphs.len() {
            return Err(ShellError::NotEnoughGlyphs {
                players: names.len(),
                glyphs: glyphs.len(),
            });
        }
        self.game = Some(create_match(&self.roster, names, &self.arena, glyphs)?);
        Ok(Response::Print("Game started.".to_string()))
    }

    fn next(&mut self, steps: Option<&str>) -> Result<Response> {
        let steps = match steps {
            None => 1,
            Some(text) => text.parse::<u64>().map_err(|_| {
                ShellError::InvalidArgument(
                    "The steps must be specified as a non-negative integer.".to_string(),
                )
            })?,
        };

        let lines: Vec<String> = self
            .running()?
            .run_turns(steps)
            .iter()
            .map(render_elimination)
            .collect();
        Ok(print_lines(lines))
    }

    fn show_memory(&self, start: Option<&str>) -> Result<Response> {
        let start = start
            .map(|text| {
                text.parse::<i64>().map_err(|_| {
                    ShellError::InvalidArgument(
                        "The address to begin the detailed section must be a number.".to_string(),
                    )
                })
            })
            .transpose()?;
        let game = self.current()?;
        Ok(Response::Print(render_memory(game, &self.display.markers, start)?))
    }

    fn show_ai(&self, name: &str) -> Result<Response> {
        let game = self.current()?;
        let player = game
            .player(name)
            .ok_or_else(|| ShellError::UnknownAi(name.to_string()))?;
        Ok(Response::Print(render_player(game, player)))
    }

    fn end_game(&mut self) -> Result<Response> {
        let game = self
            .game
            .take()
            .ok_or(ShellError::WrongPhase(Phase::Initialization))?;
        tracing::info!("game ended");
        Ok(print_lines(vec![render_summary(&game)]))
    }

    fn help(&self) -> Response {
        let phase = self.phase();
        let lines = CommandKind::ALL
            .into_iter()
            .filter(|c| c.valid_in(phase))
            .map(|c| c.description().to_string())
            .collect();
        print_lines(lines)
    }

    fn current(&self) -> Result<&Match> {
        self.game
            .as_ref()
            .ok_or(ShellError::WrongPhase(Phase::Initialization))
    }

    fn running(&mut self) -> Result<&mut Match> {
        self.game
            .as_mut()
            .ok_or(ShellError::WrongPhase(Phase::Initialization))
    }
}

fn print_lines(lines: Vec<String>) -> Response {
    let text = lines.join("\n");
    if text.is_empty() {
        Response::Silent
    } else {
        Response::Print(text)
    }
}

/// Feed `input` to the shell line by line until it ends or `quit` is read
pub fn run<R: BufRead, W: Write, E: Write>(
    shell: &mut Shell,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    for line in input.lines() {
        match shell.execute(&line?) {
            Ok(Response::Print(text)) => writeln!(out, "{}", text)?,
            Ok(Response::Silent) => {}
            Ok(Response::Quit) => break,
            Err(e) => writeln!(err, "Error, {}", e)?,
        }
    }
    Ok(())
}
