//! Integration tests for Codefight display
//!
//! Tests rendering of matches built from registration text:
//! - Arena strip glyph priority
//! - Detail listings
//! - Player and summary reports

use codefight_assembler::assemble;
use codefight_display::{render_arena, render_memory, render_player, render_summary, DisplayError};
use codefight_runtime::{create_match, Match, Roster};
use codefight_spec::{ArenaConfig, FillMode, Glyphs, MarkerGlyphs};

fn markers() -> MarkerGlyphs {
    MarkerGlyphs {
        unmodified: '.',
        edge: '|',
        next: '>',
        other: '*',
    }
}

fn glyphs() -> [Glyphs; 2] {
    [Glyphs::new('a', 'A'), Glyphs::new('b', 'B')]
}

fn start(size: usize, programs: &[(&str, &str)]) -> Match {
    let config = ArenaConfig::new(size, FillMode::Stop).unwrap();
    let mut roster = Roster::new();
    for (name, source) in programs {
        roster
            .register(assemble(name, source, config.max_program_len()).unwrap())
            .unwrap();
    }
    let names: Vec<&str> = programs.iter().map(|(n, _)| *n).collect();
    create_match(&roster, &names, &config, &glyphs()).unwrap()
}

// ============================================================================
// Arena Strip
// ============================================================================

#[test]
fn test_imp_trail() {
    let mut game = start(12, &[("imp", "MOV_R,0,1"), ("rock", "JMP,0,0")]);
    game.run_turns(6);
    // imp wrote cells 1..=3 and points at 3; rock sits at 6
    assert_eq!(render_arena(&game, &markers()), "aaa>..*.....");
}

#[test]
fn test_bombs_use_bomb_glyph() {
    // copies its own JMP,0,0 four cells ahead, which counts as a bomb
    let mut game = start(12, &[("bomber", "MOV_R,1,4,JMP,0,0"), ("rock", "JMP,0,0")]);
    game.run_turns(2);
    let strip = render_arena(&game, &markers());
    assert_eq!(strip.chars().nth(4), Some('A'));
    assert_eq!(strip.chars().nth(0), Some('a'));
}

#[test]
fn test_dead_player_pointer_not_marked() {
    let mut game = start(12, &[("rock", "JMP,0,0"), ("lemming", "JMP,1,0")]);
    game.run_turns(4);
    let strip = render_arena(&game, &markers());
    assert_eq!(strip.matches('*').count(), 0);
    assert_eq!(strip.matches('>').count(), 1);
}

// ============================================================================
// Detail Listing
// ============================================================================

#[test]
fn test_show_memory_with_detail() {
    let game = start(12, &[("imp", "MOV_R,0,1"), ("rock", "JMP,0,-100")]);
    let out = render_memory(&game, &markers(), Some(4)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], ">|...|..*.....");
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[1], ".  4:  STOP | 0 |    0");
    assert_eq!(lines[3], "*  6:   JMP | 0 | -100");
    assert_eq!(lines[9], ">  0: MOV_R | 0 |    1");
}

#[test]
fn test_show_memory_rejects_out_of_range() {
    let game = start(12, &[("imp", "MOV_R,0,1"), ("rock", "JMP,0,0")]);
    assert!(matches!(
        render_memory(&game, &markers(), Some(12)),
        Err(DisplayError::AddressOutOfRange { address: 12, size: 12 })
    ));
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_duplicate_names_in_reports() {
    let config = ArenaConfig::new(20, FillMode::Stop).unwrap();
    let mut roster = Roster::new();
    roster.register(assemble("imp", "MOV_R,0,1", 10).unwrap()).unwrap();
    let game = create_match(&roster, &["imp", "imp"], &config, &glyphs()).unwrap();

    assert_eq!(render_summary(&game), "Running AIs: imp#0, imp#1");
    let second = game.player("imp#1").unwrap();
    assert_eq!(
        render_player(&game, second),
        "imp#1 (RUNNING@0)\nNext Command: MOV_R|0|1 @10"
    );
}

#[test]
fn test_everyone_stopped() {
    let mut game = start(12, &[("x", "JMP,1,0"), ("y", "JMP,1,0")]);
    game.run_turns(10);
    assert_eq!(render_summary(&game), "Stopped AIs: x, y");
}
