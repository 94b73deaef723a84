//! End-to-end tests for Codefight
//!
//! Registration text goes through the assembler, the roster and the
//! scheduler, and the resulting match is checked through the display layer.

use codefight_assembler::assemble;
use codefight_display::{render_arena, render_elimination, render_player, render_summary};
use codefight_runtime::{create_match, Match, Roster};
use codefight_spec::{ArenaConfig, FillMode, Glyphs, MarkerGlyphs};

const MARKERS: MarkerGlyphs = MarkerGlyphs {
    unmodified: '.',
    edge: '|',
    next: '>',
    other: '*',
};

const GLYPHS: [Glyphs; 3] = [
    Glyphs::new('a', 'A'),
    Glyphs::new('b', 'B'),
    Glyphs::new('c', 'C'),
];

fn game(size: usize, programs: &[(&str, &str)], names: &[&str]) -> Match {
    let config = ArenaConfig::new(size, FillMode::Stop).unwrap();
    let mut roster = Roster::new();
    for (name, source) in programs {
        roster
            .register(assemble(name, source, config.max_program_len()).unwrap())
            .unwrap();
    }
    create_match(&roster, names, &config, &GLYPHS).unwrap()
}

// ============================================================================
// Complete Matches
// ============================================================================

#[test]
fn test_bomber_wins_against_rock() {
    let mut game = game(
        20,
        &[("rock", "JMP,0,0"), ("bomber", "MOV_R,2,10,JMP,0,0,STOP,0,0")],
        &["rock", "bomber"],
    );

    let eliminated = game.run_turns(100);
    let reports: Vec<String> = eliminated.iter().map(render_elimination).collect();
    assert_eq!(reports, vec!["rock executed 1 steps until stopping."]);
    assert_eq!(render_summary(&game), "Running AIs: bomber\nStopped AIs: rock");

    // the STOP dropped on the rock is drawn with the bomber's bomb glyph
    assert!(render_arena(&game, &MARKERS).starts_with('B'));
}

#[test]
fn test_three_player_match_until_decided() {
    let mut game = game(
        30,
        &[("lemming", "JMP,1,0"), ("runner", "JMP,1,0,JMP,1,0,JMP,1,0")],
        &["lemming", "runner", "lemming"],
    );

    let eliminated = game.run_turns(1_000);
    let names: Vec<&str> = eliminated.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["lemming#0", "lemming#1", "runner"]);
    assert_eq!(eliminated[2].moves, 3);
    assert!(game.is_decided());
    assert_eq!(render_summary(&game), "Stopped AIs: lemming#0, runner, lemming#1");
}

#[test]
fn test_player_report_tracks_pointer() {
    let mut game = game(20, &[("imp", "MOV_R,0,1"), ("rock", "JMP,0,0")], &["imp", "rock"]);
    game.run_turns(10);

    let imp = game.player("imp").unwrap();
    assert_eq!(render_player(&game, imp), "imp (RUNNING@5)\nNext Command: MOV_R|0|1 @5");
}

// ============================================================================
// Configuration Effects
// ============================================================================

#[test]
fn test_tiny_arena_limits_program_length() {
    let config = ArenaConfig::new(7, FillMode::Stop).unwrap();
    assert!(assemble("four", "JMP,0,0,JMP,0,0,JMP,0,0,JMP,0,0", config.max_program_len()).is_ok());
    assert!(assemble("five", "JMP,0,0,JMP,0,0,JMP,0,0,JMP,0,0,JMP,0,0", config.max_program_len()).is_err());
}

#[test]
fn test_random_fill_leaves_programs_intact() {
    let config = ArenaConfig::new(40, FillMode::random(12).unwrap()).unwrap();
    let mut roster = Roster::new();
    roster.register(assemble("rock", "JMP,0,0", 20).unwrap()).unwrap();
    let game = create_match(&roster, &["rock", "rock"], &config, &GLYPHS).unwrap();

    assert_eq!(game.arena().read(0).instruction().to_string(), "JMP,0,0");
    assert_eq!(game.arena().read(20).instruction().to_string(), "JMP,0,0");
    assert_eq!(game.arena().fill_seed(), 12);
}
