//! Caller-supplied lifecycle hooks for one playback attempt.

type Hook = Box<dyn FnOnce() + Send + 'static>;

/// Optional `on_start` / `on_end` / `on_error` notifications.
///
/// Each hook fires at most once. The terminal hooks consume the callbacks,
/// so at most one of `on_end` and `on_error` can ever run.
#[derive(Default)]
pub struct PlaybackCallbacks {
    on_start: Option<Hook>,
    on_end: Option<Hook>,
    on_error: Option<Hook>,
}

impl std::fmt::Debug for PlaybackCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackCallbacks")
            .field("on_start", &self.on_start.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

impl PlaybackCallbacks {
    /// Creates callbacks with no hooks set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when playback actually begins.
    #[must_use]
    pub fn on_start(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    /// Called after the session finished normally and left the registry.
    #[must_use]
    pub fn on_end(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_end = Some(Box::new(hook));
        self
    }

    /// Called when resolution, probing or playback failed.
    #[must_use]
    pub fn on_error(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    pub(crate) fn started(&mut self) {
        if let Some(hook) = self.on_start.take() {
            hook();
        }
    }

    pub(crate) fn ended(self) {
        if let Some(hook) = self.on_end {
            hook();
        }
    }

    pub(crate) fn failed(self) {
        if let Some(hook) = self.on_error {
            hook();
        }
    }
}
