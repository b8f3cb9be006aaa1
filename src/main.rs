//! Quadfall terminal runner (default binary).
//!
//! Reads `RunConfig` from the environment, loads the high-score file, and drives the
//! game from crossterm key events plus two timers: gravity at the level speed and a
//! one-second playtime clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use quadfall::core::{GameSnapshot, GameState, Leaderboard};
use quadfall::input::{handle_key_event, should_quit};
use quadfall::io::{HighScores, Journal, RunConfig, ScoreFile};
use quadfall::term::{FrameBuffer, GameView, SidePanel, TerminalRenderer, Viewport};
use quadfall::types::{GameCommand, GameEvent, CLOCK_TICK_MS};

/// Submit the current game's result (at most once) and rewrite the score file.
fn finish_game(scores: &mut HighScores, game: &GameState, journal: &mut Journal) {
    if game.started() {
        let entry = game.result();
        if let Some(rank) = scores.submit(entry.clone()) {
            journal.ranked(rank, &entry);
        }
    }
    if let Err(e) = scores.store() {
        eprintln!("[Scores] {:#}", e);
    }
}

fn load_scores(file: ScoreFile) -> HighScores {
    let board = match file.load() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("[Scores] {:#}; starting with an empty board", e);
            Leaderboard::new()
        }
    };
    HighScores::new(file, board)
}

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut journal = match Journal::open(config.log_path.as_deref()) {
        Ok(journal) => journal,
        Err(e) => {
            eprintln!("[Journal] {:#}; journal disabled", e);
            Journal::disabled()
        }
    };
    let mut scores = load_scores(ScoreFile::new(config.scores_path.clone()));

    let mut game = GameState::new(config.resolve_seed());
    game.set_mode(config.mode);
    game.set_player_name(&config.player);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut scores, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    finish_game(&mut scores, &game, &mut journal);
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    scores: &mut HighScores,
    journal: &mut Journal,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut message = String::new();

    let clock = Duration::from_millis(CLOCK_TICK_MS as u64);
    let mut last_clock = Instant::now();
    let mut last_fall = Instant::now();

    loop {
        for event in game.take_events() {
            journal.event(&event);
            match event {
                GameEvent::Notice(notice) => message = notice.to_string(),
                GameEvent::Started { .. } => scores.rearm(),
                GameEvent::GameOver { .. } => finish_game(scores, game, journal),
                _ => {}
            }
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let panel = SidePanel {
            player: game.player_name(),
            message: &message,
            leaderboard: scores.board(),
        };
        view.render_into(&snap, &panel, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next timer fires.
        let fall = Duration::from_millis(game.speed_ms() as u64);
        let until_fall = if game.wants_gravity() {
            fall.saturating_sub(last_fall.elapsed())
        } else {
            clock
        };
        let timeout = until_fall.min(clock.saturating_sub(last_clock.elapsed()));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        if command == GameCommand::NewGame && game.started() && !game.game_over() {
                            // An abandoned game still counts.
                            finish_game(scores, game, journal);
                        }
                        let accepted = game.apply(command);
                        journal.command(command, accepted);
                    }
                }
            }
        }

        if !game.wants_gravity() {
            last_fall = Instant::now();
        } else if last_fall.elapsed() >= fall {
            last_fall = Instant::now();
            game.tick_gravity();
        }

        if last_clock.elapsed() >= clock {
            last_clock = Instant::now();
            game.tick_clock();
        }
    }
}
