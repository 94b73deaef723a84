//! Arena rendering
//!
//! One glyph per cell. Pointer markers win over trail glyphs:
//! the next address to execute, then other live pointers, then the cell's
//! writer (bomb or default glyph), falling back to the unmodified marker.

use codefight_runtime::Match;
use codefight_spec::{Address, MarkerGlyphs};

use crate::error::{DisplayError, Result};
use crate::formatter::{format_detail_line, DetailWidths};

/// Number of cells in a detail listing
pub const DETAIL_LENGTH: usize = 10;

/// Glyph shown for the cell at `address`
pub fn glyph_at(game: &Match, markers: &MarkerGlyphs, address: Address) -> char {
    let arena = game.arena();
    let address = address % arena.size();

    if game.next_scheduled_address() == Some(address) {
        return markers.next;
    }
    if game.active_players().any(|p| p.pointer() == address) {
        return markers.other;
    }

    let cell = arena.read(address);
    let glyphs = cell
        .last_writer()
        .and_then(|id| game.total_players().get(id.0))
        .and_then(|player| player.glyphs());

    match glyphs {
        None => markers.unmodified,
        Some(g) if cell.is_bomb() => g.bomb,
        Some(g) => g.default,
    }
}

/// Whole arena, one glyph per cell
pub fn render_arena(game: &Match, markers: &MarkerGlyphs) -> String {
    (0..game.arena().size())
        .map(|addr| glyph_at(game, markers, addr))
        .collect()
}

/// Whole arena with the edge marker inserted before `start` and `end`
pub fn render_arena_with_edges(game: &Match, markers: &MarkerGlyphs, start: Address, end: Address) -> String {
    let mut out = String::with_capacity(game.arena().size() + 2);
    for addr in 0..game.arena().size() {
        if addr == start || addr == end {
            out.push(markers.edge);
        }
        out.push(glyph_at(game, markers, addr));
    }
    out
}

/// Detailed listing of up to [`DETAIL_LENGTH`] cells from `start`, wrapping
pub fn render_detail(game: &Match, markers: &MarkerGlyphs, start: i64) -> Result<String> {
    let start = checked_start(game, start)?;
    let arena = game.arena();

    let addresses: Vec<Address> = detail_addresses(arena.size(), start).collect();
    let widths = DetailWidths::measure(addresses.iter().map(|&a| (a, arena.read(a))));

    let lines: Vec<String> = addresses
        .iter()
        .map(|&addr| format_detail_line(glyph_at(game, markers, addr), addr, arena.read(addr), &widths))
        .collect();
    Ok(lines.join("\n"))
}

/// `show-memory` output: the plain arena, or the framed arena plus a listing
pub fn render_memory(game: &Match, markers: &MarkerGlyphs, start: Option<i64>) -> Result<String> {
    let Some(start) = start else {
        return Ok(render_arena(game, markers));
    };

    let first = checked_start(game, start)?;
    let size = game.arena().size();
    let last = (first + size.min(DETAIL_LENGTH) - 1) % size;
    Ok(format!(
        "{}\n{}",
        render_arena_with_edges(game, markers, first, last),
        render_detail(game, markers, start)?
    ))
}

fn checked_start(game: &Match, start: i64) -> Result<Address> {
    let size = game.arena().size();
    if start < 0 || start >= size as i64 {
        return Err(DisplayError::AddressOutOfRange { address: start, size });
    }
    Ok(start as Address)
}

fn detail_addresses(size: usize, start: Address) -> impl Iterator<Item = Address> {
    (0..size.min(DETAIL_LENGTH)).map(move |i| (start + i) % size)
}
