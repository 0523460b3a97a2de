//! Per-subtask progress tracking and aggregate completion.

/// One independently-progressing element of a multi-entity task.
///
/// Progress is clamped to `[0, 100]` and monotonically non-decreasing; the
/// `done` flag latches when 100 is reached and never reverts until an
/// explicit reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtask {
    name: String,
    progress: f64,
    done: bool,
}

impl Subtask {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            progress: 0.0,
            done: false,
        }
    }

    /// Applies an absolute progress observation.
    ///
    /// Lower or repeated values are ignored so a stale update can never move
    /// progress backwards. Returns true only on the call that reaches 100.
    pub fn update(&mut self, progress: f64) -> bool {
        if self.done {
            return false;
        }

        let clamped = progress.clamp(0.0, 100.0);
        if clamped > self.progress {
            self.progress = clamped;
        }

        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.done = true;
            return true;
        }

        false
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.done = false;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Aggregates N independent subtasks into one overall percentage and one
/// all-done flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBoard {
    subtasks: Vec<Subtask>,
}

impl ProgressBoard {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subtasks: names.into_iter().map(Subtask::new).collect(),
        }
    }

    /// Applies a progress observation to one subtask.
    ///
    /// Out-of-range indices are ignored. Returns true when this call
    /// completed the subtask.
    pub fn update(&mut self, index: usize, progress: f64) -> bool {
        match self.subtasks.get_mut(index) {
            Some(subtask) => subtask.update(progress),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for subtask in &mut self.subtasks {
            subtask.reset();
        }
    }

    /// Unrounded mean of subtask progress, clamped to `[0, 100]`.
    ///
    /// Rounding for display is a presentation concern.
    #[must_use]
    pub fn overall(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.subtasks.iter().map(Subtask::progress).sum();
        (sum / self.subtasks.len() as f64).min(100.0)
    }

    /// True only when every subtask's terminal flag is set.
    ///
    /// Checked per flag, never via `overall() == 100`, so floating-point
    /// rounding can not produce a false completion.
    #[must_use]
    pub fn all_done(&self) -> bool {
        self.subtasks.iter().all(Subtask::is_done)
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.subtasks.iter().filter(|s| s.is_done()).count()
    }

    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subtasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subtasks.is_empty()
    }
}

/// Discrete-layer progress: ordered breaches counted against a fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerBoard {
    total: usize,
    breached: usize,
}

impl LayerBoard {
    /// Creates a board over `total` layers (minimum 1).
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total: total.max(1),
            breached: 0,
        }
    }

    /// Records the breach of `layer`, which must be the next unbroken layer.
    ///
    /// Out-of-order or repeated observations are ignored so replayed events
    /// can not double-count.
    pub fn record_breach(&mut self, layer: usize) -> bool {
        if layer == self.breached && self.breached < self.total {
            self.breached += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.breached = 0;
    }

    #[must_use]
    pub fn breached(&self) -> usize {
        self.breached
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of breached layers.
    #[must_use]
    pub fn overall(&self) -> f64 {
        self.breached as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.breached == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerBoard, ProgressBoard, Subtask};

    #[test]
    fn subtask_progress_is_monotonic_and_freezes_at_100() {
        let mut subtask = Subtask::new("database.sql.enc");

        assert!(!subtask.update(40.0));
        assert!(!subtask.update(25.0));
        assert_eq!(subtask.progress(), 40.0);

        assert!(subtask.update(140.0));
        assert_eq!(subtask.progress(), 100.0);
        assert!(subtask.is_done());

        assert!(!subtask.update(55.0));
        assert!(!subtask.update(100.0));
        assert_eq!(subtask.progress(), 100.0);
    }

    #[test]
    fn subtask_completion_fires_exactly_once() {
        let mut subtask = Subtask::new("config.json.enc");
        assert!(subtask.update(100.0));
        assert!(!subtask.update(100.0));
    }

    #[test]
    fn overall_is_the_unrounded_mean_and_all_done_tracks_flags() {
        let mut board = ProgressBoard::new(vec!["a", "b", "c"]);
        board.update(0, 100.0);
        board.update(1, 100.0);
        board.update(2, 99.0);

        let overall = board.overall();
        assert!((overall - 299.0 / 3.0).abs() < 1e-9);
        assert!(!board.all_done());
        assert_eq!(board.completed(), 2);

        board.update(2, 100.0);
        assert!(board.all_done());
        assert_eq!(board.overall(), 100.0);
    }

    #[test]
    fn out_of_range_updates_are_ignored() {
        let mut board = ProgressBoard::new(vec!["only"]);
        assert!(!board.update(5, 80.0));
        assert_eq!(board.overall(), 0.0);
    }

    #[test]
    fn reset_returns_every_subtask_to_not_yet_done() {
        let mut board = ProgressBoard::new(vec!["a", "b"]);
        board.update(0, 100.0);
        board.update(1, 100.0);
        assert!(board.all_done());

        board.reset();
        assert!(!board.all_done());
        assert_eq!(board.overall(), 0.0);
        assert_eq!(board.completed(), 0);
    }

    #[test]
    fn layer_board_counts_ordered_breaches_only() {
        let mut board = LayerBoard::new(4);

        assert!(board.record_breach(0));
        assert!(!board.record_breach(0));
        assert!(!board.record_breach(2));
        assert_eq!(board.breached(), 1);
        assert_eq!(board.overall(), 25.0);

        assert!(board.record_breach(1));
        assert!(board.record_breach(2));
        assert!(board.record_breach(3));
        assert!(board.is_done());
        assert_eq!(board.overall(), 100.0);

        assert!(!board.record_breach(4));
        assert_eq!(board.breached(), 4);
    }

    #[test]
    fn layer_board_reset_restores_all_layers() {
        let mut board = LayerBoard::new(2);
        board.record_breach(0);
        board.record_breach(1);
        assert!(board.is_done());

        board.reset();
        assert_eq!(board.breached(), 0);
        assert!(!board.is_done());
    }
}
