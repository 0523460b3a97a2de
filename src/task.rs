//! Shared contract for one simulated-command playback.
//!
//! This module defines only run lifecycle types: identifiers, status, the
//! delta events a playback emits, and the blocking routine interface. It
//! excludes pacing, canned data, and multi-run orchestration concerns.

use std::fmt;
use std::sync::{atomic::AtomicBool, Arc};

/// Identifier for one playback run.
pub type RunId = u64;

/// Shared cancellation flag for a run.
pub type CancelSignal = Arc<AtomicBool>;

/// Lifecycle status of one simulated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Ready,
    Running,
    Complete,
}

impl TaskStatus {
    /// Returns true when a start request may begin a new run.
    ///
    /// A `Running` task rejects a second start as a silent no-op; a
    /// `Complete` task may be restarted.
    #[must_use]
    pub fn can_start(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Error raised while constructing a playback spec before any run starts.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskSpecError {
    /// Every script entry was empty after trimming.
    EmptyScript,
    /// The tick cadence was zero.
    ZeroCadence,
    /// A meter step bound fell outside `(0, 100]`.
    InvalidStep { max_step: f64 },
    /// A layer task was declared with no layers.
    ZeroLayers,
}

impl fmt::Display for TaskSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScript => f.write_str("script has no playable lines"),
            Self::ZeroCadence => f.write_str("tick cadence must be non-zero"),
            Self::InvalidStep { max_step } => {
                write!(f, "meter step bound {max_step} is outside (0, 100]")
            }
            Self::ZeroLayers => f.write_str("layer playback requires at least one layer"),
        }
    }
}

impl std::error::Error for TaskSpecError {}

/// Input required to start a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRun {
    pub run_id: RunId,
}

/// Delta emitted by a running playback.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    Started { run_id: RunId },
    Line { run_id: RunId, text: String },
    Meter { run_id: RunId, progress: f64 },
    LayerBreached { run_id: RunId, layer: usize },
    Finished { run_id: RunId },
    Failed { run_id: RunId, error: String },
    Cancelled { run_id: RunId },
}

impl TaskEvent {
    /// Returns the run identifier associated with this event.
    #[must_use]
    pub fn run_id(&self) -> RunId {
        match self {
            Self::Started { run_id }
            | Self::Line { run_id, .. }
            | Self::Meter { run_id, .. }
            | Self::LayerBreached { run_id, .. }
            | Self::Finished { run_id }
            | Self::Failed { run_id, .. }
            | Self::Cancelled { run_id } => *run_id,
        }
    }

    /// Returns true when this event terminates the run lifecycle.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished { .. } | Self::Failed { .. } | Self::Cancelled { .. }
        )
    }
}

/// Blocking playback routine executed on a worker thread.
///
/// A routine emits `Started` first, zero or more deltas in script order, and
/// exactly one terminal event. Once `cancel` is observed set, no further
/// delta may be emitted; the routine finishes with `Cancelled`.
pub trait TaskRoutine: Send + Sync + 'static {
    fn play(
        &self,
        run: TaskRun,
        cancel: CancelSignal,
        emit: &mut dyn FnMut(TaskEvent),
    ) -> Result<(), String>;
}
