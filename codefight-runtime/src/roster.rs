//! Registry of program templates
//!
//! Players are cloned out of the roster when a match is created, so changing
//! the roster never affects a match already in progress.

use codefight_spec::Program;
use std::collections::HashMap;

use crate::error::RosterError;
use crate::state::Player;

/// Registered programs, in registration order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    programs: Vec<Program>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a program under its name
    pub fn register(&mut self, program: Program) -> Result<(), RosterError> {
        if self.contains(program.name()) {
            return Err(RosterError::DuplicateName(program.name().to_string()));
        }
        tracing::debug!("registered {} ({} instructions)", program.name(), program.len());
        self.programs.push(program);
        Ok(())
    }

    /// Remove a program, returning it
    pub fn unregister(&mut self, name: &str) -> Result<Program, RosterError> {
        let index = self
            .programs
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| RosterError::UnknownName(name.to_string()))?;
        tracing::debug!("unregistered {}", name);
        Ok(self.programs.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter()
    }

    /// Clone one player per requested name, in request order.
    ///
    /// A name requested more than once gets `#0`, `#1`, ... suffixes on every
    /// occurrence. Unknown names are dropped; callers compare counts.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<Player> {
        let found: Vec<&Program> = names.iter().filter_map(|n| self.get(n.as_ref())).collect();

        let mut totals: HashMap<&str, usize> = HashMap::new();
        for program in &found {
            *totals.entry(program.name()).or_default() += 1;
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        found
            .into_iter()
            .map(|program| {
                let name = program.name();
                let occurrence = seen.entry(name).or_default();
                let mut player = Player::from_program(program);
                if totals[name] > 1 {
                    player.rename(format!("{}#{}", name, occurrence));
                }
                *occurrence += 1;
                player
            })
            .collect()
    }
}
