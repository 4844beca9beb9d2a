//! Async driver around the state machine.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use vitrans_media::{EncodingError, SelectedImage, encode_file};
use vitrans_translate::{TranslationFailure, Translator};
use vitrans_types::{TranslationRequest, ValidationError};

use crate::state::{Effect, Event, ModeInput, ModeState, reduce};

/// Why a dispatched submission produced no result.
#[derive(Debug, Error)]
pub enum SubmitFailure {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Translation(#[from] TranslationFailure),
}

/// Mode input that knows how to turn itself into a translation.
#[async_trait]
pub trait Submission: ModeInput {
    async fn run(self, translator: &Translator) -> Result<String, SubmitFailure>;
}

#[async_trait]
impl Submission for String {
    async fn run(self, translator: &Translator) -> Result<String, SubmitFailure> {
        let req = TranslationRequest::text(self)?;
        Ok(translator.translate(&req).await?)
    }
}

#[async_trait]
impl Submission for Option<SelectedImage> {
    async fn run(self, translator: &Translator) -> Result<String, SubmitFailure> {
        let image = self.ok_or(ValidationError::NoImage)?;
        let encoded = encode_file(&image).await?;
        let req = TranslationRequest::image(encoded.encoded_bytes, encoded.media_type)?;
        Ok(translator.translate(&req).await?)
    }
}

/// One mode's state plus the translator it submits to.
pub struct InteractionController<I: Submission> {
    translator: Arc<Translator>,
    state: Mutex<ModeState<I>>,
}

pub type TextController = InteractionController<String>;
pub type ImageController = InteractionController<Option<SelectedImage>>;

impl<I: Submission> InteractionController<I> {
    pub fn new(translator: Arc<Translator>) -> Self {
        Self {
            translator,
            state: Mutex::new(ModeState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ModeState<I>> {
        // State stays consistent even if a holder panicked; every
        // transition is a single `reduce` call.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn dispatch(&self, event: Event<I>) -> Effect<I> {
        reduce(&mut self.lock(), event)
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> ModeState<I> {
        self.lock().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.lock().can_submit()
    }

    pub fn copyable_result(&self) -> Option<String> {
        self.lock().copyable_result().map(String::from)
    }

    /// Replace the input (typing or picking a new file).
    pub fn edit(&self, input: I) {
        self.dispatch(Event::Edited(input));
    }

    /// Handle one submit click and return the resulting state.
    ///
    /// A click while a call is in flight changes nothing and returns at once.
    pub async fn submit(&self) -> ModeState<I> {
        let Effect::Dispatch(input) = self.dispatch(Event::Submitted) else {
            return self.snapshot();
        };

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("submit", mode = ?I::MODE, %request_id);
        let outcome = input.run(&self.translator).instrument(span).await;

        let event = match outcome {
            Ok(text) => Event::Succeeded(text),
            Err(failure) => {
                match &failure {
                    SubmitFailure::Encoding(e) => {
                        tracing::error!(%request_id, "Error encoding image: {e}")
                    }
                    SubmitFailure::Translation(e) => {
                        tracing::warn!(%request_id, "Translation failed: {e}")
                    }
                    SubmitFailure::Validation(e) => {
                        tracing::warn!(%request_id, "Submission rejected: {e}")
                    }
                }
                Event::Failed
            }
        };
        self.dispatch(event);
        self.snapshot()
    }
}
