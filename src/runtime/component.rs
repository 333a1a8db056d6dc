//! The chat cell: live response, transcript and callback slot

use super::traits::{InputControl, RenderTarget};
use crate::config::ChatConfig;
use crate::error::CallbackError;
use crate::markup::{render_entry, render_live};
use crate::state_machine::{transition, Effect, Event, LiveState};
use crate::transcript::{Transcript, TranscriptEntry};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A registered submission handler
pub type Callback = Arc<dyn Fn(&str) -> Result<(), CallbackError> + Send + Sync>;

/// Interactive chat display with a streamed live response
///
/// Cloning is cheap and yields another handle to the same cell, which is how
/// an asynchronous producer keeps feeding `append`/`commit` after the
/// submission callback has returned.
pub struct ChatCell<T, C>
where
    T: RenderTarget,
    C: InputControl,
{
    inner: Arc<Inner<T, C>>,
}

struct Inner<T, C> {
    config: ChatConfig,
    /// Live state and transcript share a lock so a commit is never observed
    /// half-applied.
    view: Mutex<View>,
    callback: Mutex<Option<Callback>>,
    /// Set while a submission callback is running
    submitting: AtomicBool,
    transcript_target: T,
    live_target: T,
    input: C,
}

#[derive(Default)]
struct View {
    live: LiveState,
    transcript: Transcript,
}

impl<T, C> Clone for ChatCell<T, C>
where
    T: RenderTarget,
    C: InputControl,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

pub(crate) fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T, C> ChatCell<T, C>
where
    T: RenderTarget,
    C: InputControl,
{
    /// Build the cell and show its three regions: transcript, live response
    /// and input.
    #[must_use]
    pub fn new(transcript_target: T, live_target: T, input: C, config: ChatConfig) -> Self {
        transcript_target.show();
        live_target.show();
        input.set_value("");
        input.set_enabled(true);
        input.show(config.placeholder());
        tracing::debug!(
            blank_submissions = ?config.blank_submissions,
            "Chat cell displayed"
        );

        Self {
            inner: Arc::new(Inner {
                config,
                view: Mutex::new(View::default()),
                callback: Mutex::new(None),
                submitting: AtomicBool::new(false),
                transcript_target,
                live_target,
                input,
            }),
        }
    }

    /// Register the submission handler, replacing any previous one.
    ///
    /// A submission already in flight keeps the handler it started with.
    pub fn connect<F, E>(&self, callback: F)
    where
        F: Fn(&str) -> Result<(), E> + Send + Sync + 'static,
        E: Into<CallbackError>,
    {
        let handler: Callback = Arc::new(move |message: &str| callback(message).map_err(Into::into));
        let replaced = lock(&self.inner.callback).replace(handler).is_some();
        tracing::debug!(replaced, "Chat callback connected");
    }

    /// Empty the callback slot. Returns whether a callback was registered.
    pub fn disconnect(&self) -> bool {
        lock(&self.inner.callback).take().is_some()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        lock(&self.inner.callback).is_some()
    }

    pub(crate) fn current_callback(&self) -> Option<Callback> {
        lock(&self.inner.callback).clone()
    }

    pub(crate) fn submitting_flag(&self) -> &AtomicBool {
        &self.inner.submitting
    }

    /// Add a fragment to the live response and redraw it
    pub fn append(&self, fragment: &str) {
        self.dispatch(Event::append(fragment));
    }

    /// Replace the live response wholesale and redraw it
    pub fn rewrite(&self, text: &str) {
        self.dispatch(Event::rewrite(text));
    }

    /// Discard the uncommitted response
    pub fn clear(&self) {
        self.dispatch(Event::Clear);
    }

    /// Move the live response into the transcript.
    ///
    /// Returns `None` and changes nothing when no response is in flight.
    pub fn commit(&self) -> Option<TranscriptEntry> {
        self.dispatch(Event::Commit)
    }

    /// Markup for the current live response
    #[must_use]
    pub fn render_live(&self) -> String {
        let view = lock(&self.inner.view);
        render_live(view.live.text(), &self.inner.config.labels)
    }

    /// Record a user turn and draw it below the existing transcript
    pub fn append_user(&self, text: &str) -> TranscriptEntry {
        let mut view = lock(&self.inner.view);
        let entry = view.transcript.append_user(text).clone();
        self.inner
            .transcript_target
            .append(&render_entry(&entry, &self.inner.config.labels));
        entry
    }

    /// Snapshot of the live response state
    #[must_use]
    pub fn live_state(&self) -> LiveState {
        lock(&self.inner.view).live.clone()
    }

    /// Snapshot of the committed turns
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        lock(&self.inner.view).transcript.entries().to_vec()
    }

    /// Live state and transcript read under one lock, so they always agree
    /// about whether the last response has been committed
    #[must_use]
    pub fn snapshot(&self) -> (LiveState, Vec<TranscriptEntry>) {
        let view = lock(&self.inner.view);
        (view.live.clone(), view.transcript.entries().to_vec())
    }

    /// Markup for the full transcript, as a complete redraw would show it
    #[must_use]
    pub fn transcript_markup(&self) -> String {
        lock(&self.inner.view)
            .transcript
            .render_all(&self.inner.config.labels)
    }

    #[must_use]
    pub fn input(&self) -> &C {
        &self.inner.input
    }

    #[must_use]
    pub fn config(&self) -> &ChatConfig {
        &self.inner.config
    }

    fn dispatch(&self, event: Event) -> Option<TranscriptEntry> {
        let kind = event.kind();
        let mut view = lock(&self.inner.view);
        let result = transition(&view.live, &self.inner.config.labels, event);
        let committed = result.committed().cloned();
        view.live = result.new_state;

        for effect in result.effects {
            self.apply_effect(&mut view, effect);
        }

        if let Some(entry) = &committed {
            tracing::debug!(len = entry.text().len(), "Live response committed");
        } else {
            tracing::trace!(event = kind, len = view.live.text().len(), "Live response updated");
        }
        committed
    }

    fn apply_effect(&self, view: &mut View, effect: Effect) {
        match effect {
            Effect::RenderLive { markup } => self.inner.live_target.replace(&markup),
            Effect::ClearLive => self.inner.live_target.clear(),
            Effect::CommitEntry { entry } => {
                let entry = view.transcript.append_assistant(entry);
                self.inner
                    .transcript_target
                    .append(&render_entry(entry, &self.inner.config.labels));
            }
        }
    }
}
