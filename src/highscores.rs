//! High score table
//!
//! Persisted as a plain text file, one score per line, top 5 kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score table already holds {} scores", MAX_HIGH_SCORES)]
    CapacityExceeded,
    #[error("failed to write high scores to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scores in the order they were read or recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u16>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load up to `MAX_HIGH_SCORES` lines from `path`
    ///
    /// A missing or unreadable file yields an empty table. Lines that are
    /// not a valid score count as 0.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("No high scores loaded from {}: {}", path.display(), err);
                return Self::new();
            }
        };

        let scores: Vec<u16> = text
            .lines()
            .take(MAX_HIGH_SCORES)
            .map(|line| line.trim().parse().unwrap_or(0))
            .collect();
        log::info!("Loaded {} high scores from {}", scores.len(), path.display());
        Self { scores }
    }

    /// Write the table as descending lines, always `MAX_HIGH_SCORES` of them
    pub fn save(&self, path: &Path) -> Result<(), HighScoreError> {
        let io_err = |source| HighScoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut text = String::new();
        for score in self.descending() {
            text.push_str(&score.to_string());
            text.push('\n');
        }
        fs::write(path, text).map_err(io_err)?;

        log::info!("High scores saved to {}", path.display());
        Ok(())
    }

    /// Store a score; fails once the table is full
    pub fn add_high_score(&mut self, score: u16) -> Result<(), HighScoreError> {
        if self.scores.len() >= MAX_HIGH_SCORES {
            return Err(HighScoreError::CapacityExceeded);
        }
        self.scores.push(score);
        Ok(())
    }

    /// Stored scores, highest first, padded with zeros
    pub fn descending(&self) -> [u16; MAX_HIGH_SCORES] {
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));

        let mut out = [0; MAX_HIGH_SCORES];
        for (slot, score) in out.iter_mut().zip(sorted) {
            *slot = score;
        }
        out
    }

    /// Table after a finished round: `score` inserted, sorted, cut to the top 5
    pub fn with_recorded_score(&self, score: u16) -> Self {
        let mut scores = self.scores.clone();
        scores.push(score);
        scores.sort_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { scores }
    }

    pub fn top_score(&self) -> u16 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_descending_pads_with_zeros() {
        let mut scores = HighScores::new();
        scores.add_high_score(50).unwrap();
        scores.add_high_score(200).unwrap();
        assert_eq!(scores.descending(), [200, 50, 0, 0, 0]);
    }

    #[test]
    fn test_sixth_score_rejected() {
        let mut scores = HighScores::new();
        for s in [1, 2, 3, 4, 5] {
            scores.add_high_score(s).unwrap();
        }
        assert!(matches!(
            scores.add_high_score(6),
            Err(HighScoreError::CapacityExceeded)
        ));
        assert_eq!(scores.len(), 5);
    }

    #[test]
    fn test_recorded_score_keeps_top_five() {
        let mut scores = HighScores::new();
        for s in [500, 400, 300, 200, 100] {
            scores.add_high_score(s).unwrap();
        }
        let updated = scores.with_recorded_score(350);
        assert_eq!(updated.descending(), [500, 400, 350, 300, 200]);

        let unchanged = scores.with_recorded_score(10);
        assert_eq!(unchanged.descending(), [500, 400, 300, 200, 100]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let scores = HighScores::load(&dir.path().join("nope.txt"));
        assert!(scores.is_empty());
        assert_eq!(scores.top_score(), 0);
    }

    #[test]
    fn test_load_tolerates_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highScores.txt");
        fs::write(&path, "300\nabc\n 120 \n70000\n5\n9\n8\n").unwrap();

        let scores = HighScores::load(&path);
        assert_eq!(scores.len(), 5);
        assert_eq!(scores.descending(), [300, 120, 5, 0, 0]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("res").join("highScores.txt");

        let scores = HighScores::new().with_recorded_score(900).with_recorded_score(40);
        scores.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "900\n40\n0\n0\n0\n");
        let loaded = HighScores::load(&path);
        assert_eq!(loaded.descending(), scores.descending());
        assert_eq!(loaded.top_score(), 900);
    }

    proptest! {
        #[test]
        fn prop_descending_is_sorted(values in proptest::collection::vec(any::<u16>(), 0..5)) {
            let mut scores = HighScores::new();
            for v in &values {
                scores.add_high_score(*v).unwrap();
            }
            let sorted = scores.descending();
            prop_assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
            prop_assert_eq!(sorted[0], values.iter().copied().max().unwrap_or(0));
        }

        #[test]
        fn prop_recording_never_grows_past_capacity(
            values in proptest::collection::vec(any::<u16>(), 0..20),
        ) {
            let mut scores = HighScores::new();
            for v in values {
                scores = scores.with_recorded_score(v);
                prop_assert!(scores.len() <= MAX_HIGH_SCORES);
            }
        }
    }
}
