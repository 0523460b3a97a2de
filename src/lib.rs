//! Scripted playback engine for terminal-style simulators.
//!
//! Invariant: a routine that has observed its cancel flag set emits no
//! further delta; the terminal `Cancelled` event is the last thing a
//! cancelled playback produces.
//!
//! # Public API Overview
//! - Describe a playback with [`TaskSpec`] (tick cadence plus a [`TaskBody`]).
//! - Drive it through the blocking [`TaskRoutine`] seam; consume [`TaskEvent`]
//!   deltas on the host side.
//! - Track revealed output in a bounded [`ScrollbackBuffer`] and classify
//!   lines with [`Severity`].
//! - Aggregate multi-entity work with [`ProgressBoard`] and [`LayerBoard`].
//! - Bind optional transition hooks on an [`EffectDispatcher`].

pub mod effects;
pub mod progress;
pub mod script;
pub mod scrollback;
pub mod spec;
pub mod task;

/// Run lifecycle contract types.
pub use crate::task::{
    CancelSignal, RunId, TaskEvent, TaskRoutine, TaskRun, TaskSpecError, TaskStatus,
};

/// Construction-validated output scripts.
pub use crate::script::LineScript;

/// Bounded console log and severity classification.
pub use crate::scrollback::{ScrollbackBuffer, Severity, DEFAULT_CAPACITY};

/// Progress aggregation over independent subtasks and discrete layers.
pub use crate::progress::{LayerBoard, ProgressBoard, Subtask};

/// Playback pacing and bodies.
pub use crate::spec::{TaskBody, TaskSpec};

/// Transition notification hooks.
pub use crate::effects::EffectDispatcher;
