//! Player status and end-of-match reports

use codefight_runtime::{Elimination, Match, Player};

use crate::formatter::format_instruction;

/// `name (RUNNING@moves)` plus the next command, or `name (STOPPED@moves)`
pub fn render_player(game: &Match, player: &Player) -> String {
    if !player.is_alive() {
        return format!("{} (STOPPED@{})", player.name(), player.move_count());
    }
    let next = game.arena().read(player.pointer()).instruction();
    format!(
        "{} (RUNNING@{})\nNext Command: {} @{}",
        player.name(),
        player.move_count(),
        format_instruction(&next),
        player.pointer()
    )
}

/// `Running AIs: ...` and `Stopped AIs: ...`, omitting an empty list
pub fn render_summary(game: &Match) -> String {
    let (running, stopped): (Vec<&Player>, Vec<&Player>) =
        game.total_players().iter().partition(|p| p.is_alive());

    [("Running AIs", running), ("Stopped AIs", stopped)]
        .into_iter()
        .filter(|(_, players)| !players.is_empty())
        .map(|(label, players)| {
            let names: Vec<&str> = players.iter().map(|p| p.name()).collect();
            format!("{}: {}", label, names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<name> executed <moves> steps until stopping.`
pub fn render_elimination(elimination: &Elimination) -> String {
    format!(
        "{} executed {} steps until stopping.",
        elimination.name, elimination.moves
    )
}
