//! Fire-and-forget notification hooks for playback transitions.

use std::fmt;

type EffectHook = Box<dyn Fn() + Send>;

/// Optional notification hooks fired on playback transitions.
///
/// The hosting screen binds whichever hooks it cares about (sound, haptics,
/// render nudges); unbound events are skipped. Hooks are invoked inline and
/// must not block.
#[derive(Default)]
pub struct EffectDispatcher {
    on_task_started: Option<EffectHook>,
    on_line_revealed: Option<EffectHook>,
    on_task_completed: Option<EffectHook>,
}

impl EffectDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_task_started(&mut self, hook: impl Fn() + Send + 'static) {
        self.on_task_started = Some(Box::new(hook));
    }

    pub fn on_line_revealed(&mut self, hook: impl Fn() + Send + 'static) {
        self.on_line_revealed = Some(Box::new(hook));
    }

    pub fn on_task_completed(&mut self, hook: impl Fn() + Send + 'static) {
        self.on_task_completed = Some(Box::new(hook));
    }

    pub fn task_started(&self) {
        if let Some(hook) = self.on_task_started.as_ref() {
            hook();
        }
    }

    pub fn line_revealed(&self) {
        if let Some(hook) = self.on_line_revealed.as_ref() {
            hook();
        }
    }

    pub fn task_completed(&self) {
        if let Some(hook) = self.on_task_completed.as_ref() {
            hook();
        }
    }
}

impl fmt::Debug for EffectDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectDispatcher")
            .field("on_task_started", &self.on_task_started.is_some())
            .field("on_line_revealed", &self.on_line_revealed.is_some())
            .field("on_task_completed", &self.on_task_completed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::EffectDispatcher;

    #[test]
    fn unbound_hooks_are_skipped_without_panicking() {
        let dispatcher = EffectDispatcher::new();
        dispatcher.task_started();
        dispatcher.line_revealed();
        dispatcher.task_completed();
    }

    #[test]
    fn bound_hooks_fire_once_per_event() {
        let started = Arc::new(AtomicUsize::new(0));
        let revealed = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));

        let mut dispatcher = EffectDispatcher::new();
        let counter = Arc::clone(&started);
        dispatcher.on_task_started(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&revealed);
        dispatcher.on_line_revealed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&completed);
        dispatcher.on_task_completed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.task_started();
        dispatcher.line_revealed();
        dispatcher.line_revealed();
        dispatcher.task_completed();

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(revealed.load(Ordering::SeqCst), 2);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rebinding_a_hook_replaces_the_previous_binding() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut dispatcher = EffectDispatcher::new();
        let counter = Arc::clone(&first);
        dispatcher.on_task_completed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        dispatcher.on_task_completed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.task_completed();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
