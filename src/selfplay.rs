//! Headless matches between two players.
//!
//! Plays full matches from the opening position: the first seat moves first,
//! a `None` proposal is a pass, and a match ends when the mover has
//! `win_threshold` pieces in its goal or when `max_moves` moves (passes
//! included) have been played. At the cap the side with strictly more pieces
//! home wins; equal counts are a draw.

use std::fmt;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::board::{build_board, BoardState, Move, Side};
use crate::config::{ConfigError, MatchConfig};
use crate::player::Player;
use crate::search::Strategy;

/// Applies `proposal` to `state` and returns the move actually played. A move
/// the board rejects is treated as a pass.
fn apply_proposal(state: &mut BoardState, proposal: Option<Move>) -> Option<Move> {
    proposal.filter(|&mv| state.apply_move(mv))
}

/// Side identifiers for the two seats.
pub const SEAT_SIDES: [Side; 2] = [Side(1), Side(2)];

#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write records: {0}")]
    Io(#[from] std::io::Error),
}

/// How many matches to play and how.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub games: usize,
    /// Matches are played concurrently with rayon when above 1.
    pub threads: usize,
    /// Match `i` is seeded with `seed + i`. 0 seeds every match from entropy.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            games: 10,
            threads: 4,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The mover reached the win threshold.
    Goal,
    /// The move cap was hit.
    MoveCap,
}

/// Result of one match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub match_id: usize,
    pub players: [String; 2],
    pub strategies: [Strategy; 2],
    /// Winning seat, `None` for a draw.
    pub winner: Option<usize>,
    pub termination: Termination,
    /// Moves played, passes included.
    pub moves: u32,
    pub passes: u32,
    /// Pieces each seat had in its goal at the end.
    pub in_goal: [usize; 2],
    /// Every proposal in order; `None` marks a pass.
    pub history: Vec<Option<Move>>,
}

/// Play one match. Player RNGs are seeded from `rng`.
pub fn play_match(
    config: &MatchConfig,
    match_id: usize,
    rng: &mut SmallRng,
) -> Result<MatchRecord, ConfigError> {
    let setup = build_board(config.board, SEAT_SIDES[0], SEAT_SIDES[1])?;
    let goals = [setup.goal_a, setup.goal_b];
    let mut state = setup.state;

    let mut players = Vec::with_capacity(2);
    for (seat, (pc, goal)) in config.players.iter().zip(goals).enumerate() {
        let player = Player::new(
            pc.name.clone(),
            SEAT_SIDES[seat],
            goal,
            pc.strategy,
            pc.search,
            Some(rng.gen()),
        )
        .map_err(|source| ConfigError::Search {
            player: pc.name.clone(),
            source,
        })?;
        players.push(player);
    }

    let mut history = Vec::new();
    let mut moves = 0u32;
    let mut passes = 0u32;
    let mut winner = None;
    let mut termination = Termination::MoveCap;
    let mut seat = 0usize;

    while moves < config.max_moves {
        let player = &mut players[seat];
        let proposal = player.propose(&state);
        let played = apply_proposal(&mut state, proposal);
        if played.is_none() {
            passes += 1;
            warn!(
                match_id,
                player = player.name(),
                move_number = moves,
                "no playable move, passing"
            );
        }
        history.push(played);
        moves += 1;

        if player.has_won(&state, config.win_threshold) {
            winner = Some(seat);
            termination = Termination::Goal;
            break;
        }
        seat = 1 - seat;
    }

    let in_goal = [
        players[0].count_owned_in_goal(&state),
        players[1].count_owned_in_goal(&state),
    ];
    if termination == Termination::MoveCap {
        winner = match in_goal[0].cmp(&in_goal[1]) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        };
    }

    let record = MatchRecord {
        match_id,
        players: [players[0].name().to_string(), players[1].name().to_string()],
        strategies: [players[0].strategy(), players[1].strategy()],
        winner,
        termination,
        moves,
        passes,
        in_goal,
        history,
    };
    info!(
        match_id,
        winner = ?record.winner.map(|s| record.players[s].as_str()),
        termination = ?record.termination,
        moves,
        in_goal = ?record.in_goal,
        "match finished"
    );
    Ok(record)
}

fn match_rng(seed: u64, index: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(index as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Play `options.games` matches, in parallel when `options.threads > 1`.
/// Records come back ordered by match id.
pub fn run_matches(
    config: &MatchConfig,
    options: &SelfPlayConfig,
) -> Result<Vec<MatchRecord>, SelfPlayError> {
    config.validate()?;
    if options.threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()?;
        let records = pool.install(|| {
            (0..options.games)
                .into_par_iter()
                .map(|i| play_match(config, i, &mut match_rng(options.seed, i)))
                .collect::<Result<Vec<_>, _>>()
        })?;
        Ok(records)
    } else {
        let records = (0..options.games)
            .map(|i| play_match(config, i, &mut match_rng(options.seed, i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

/// Writes match records as JSONL (one JSON object per match, one per line).
pub fn write_jsonl<W: Write>(records: &[MatchRecord], out: &mut W) -> Result<(), SelfPlayError> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Win/draw counts over a set of matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tally {
    pub players: [String; 2],
    pub games: usize,
    pub wins: [usize; 2],
    pub draws: usize,
    pub goal_wins: usize,
    pub total_moves: u64,
}

impl Tally {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut tally = Tally::default();
        for record in records {
            tally.add(record);
        }
        tally
    }

    pub fn add(&mut self, record: &MatchRecord) {
        if self.games == 0 {
            self.players = record.players.clone();
        }
        self.games += 1;
        self.total_moves += record.moves as u64;
        match record.winner {
            Some(seat) => self.wins[seat] += 1,
            None => self.draws += 1,
        }
        if record.termination == Termination::Goal {
            self.goal_wins += 1;
        }
    }

    pub fn win_rate(&self, seat: usize) -> f64 {
        self.wins[seat] as f64 / self.games.max(1) as f64
    }

    pub fn draw_rate(&self) -> f64 {
        self.draws as f64 / self.games.max(1) as f64
    }

    pub fn average_moves(&self) -> f64 {
        self.total_moves as f64 / self.games.max(1) as f64
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Match Summary ===")?;
        writeln!(f, "Games: {}", self.games)?;
        writeln!(f, "Avg moves/game: {:.1}", self.average_moves())?;
        writeln!(f, "Decided by goal: {}", self.goal_wins)?;
        for seat in 0..2 {
            writeln!(
                f,
                "  {:>8}: {} ({:.1}%)",
                self.players[seat],
                self.wins[seat],
                100.0 * self.win_rate(seat)
            )?;
        }
        write!(f, "  {:>8}: {} ({:.1}%)", "draws", self.draws, 100.0 * self.draw_rate())
    }
}
