//! Session leaderboard
//!
//! Keeps the best finished runs for the lifetime of the process. Nothing is
//! written to disk; a fresh process starts with an empty board.

use serde::{Deserialize, Serialize};

/// Maximum number of runs kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u64,
    /// Recipes finished before the run ended
    pub recipes_completed: usize,
    /// Length of the run in ticks
    pub ticks: u64,
}

/// Finished runs of this process, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionScores {
    runs: Vec<ScoreEntry>,
}

impl SessionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a finished run. Returns its 1-indexed rank, or None when it
    /// scored nothing or fell off the bottom of a full board.
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        if entry.score == 0 {
            return None;
        }
        // Earlier runs stay ahead on ties
        let index = self.runs.partition_point(|run| run.score >= entry.score);
        if index >= MAX_HIGH_SCORES {
            return None;
        }
        self.runs.insert(index, entry);
        self.runs.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn runs(&self) -> &[ScoreEntry] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Best final score so far
    pub fn top_score(&self) -> Option<u64> {
        self.runs.first().map(|run| run.score)
    }
}
