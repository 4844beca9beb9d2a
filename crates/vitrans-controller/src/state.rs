//! Interaction state machine.

use vitrans_media::SelectedImage;
use vitrans_types::TranslationMode;

/// Where a mode's interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A remote call is in flight; submit is disabled.
    AwaitingResult,
    ShowingResult,
    ShowingError,
}

/// Input owned by one mode.
pub trait ModeInput: Clone + Default + Send + Sync + 'static {
    const MODE: TranslationMode;

    /// Nothing to translate.
    fn is_blank(&self) -> bool;
}

impl ModeInput for String {
    const MODE: TranslationMode = TranslationMode::Text;

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl ModeInput for Option<SelectedImage> {
    const MODE: TranslationMode = TranslationMode::Image;

    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

/// Everything the view needs to render one mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeState<I> {
    pub input: I,
    pub phase: Phase,
    /// Last successful translation, empty otherwise.
    pub result: String,
    /// Validation or generic failure message.
    pub error: Option<String>,
}

impl<I: ModeInput> ModeState<I> {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::AwaitingResult
    }

    /// Mirrors the submit affordance: disabled while loading or blank.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.is_blank()
    }

    /// The result the copy affordance operates on, if any.
    pub fn copyable_result(&self) -> Option<&str> {
        (self.phase == Phase::ShowingResult && !self.result.is_empty())
            .then_some(self.result.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<I> {
    /// New text typed or a new file picked.
    Edited(I),
    Submitted,
    Succeeded(String),
    Failed,
}

/// What the driver must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<I> {
    None,
    /// Start one translation for this input snapshot.
    Dispatch(I),
}

/// Apply one event to `state`.
pub fn reduce<I: ModeInput>(state: &mut ModeState<I>, event: Event<I>) -> Effect<I> {
    match event {
        Event::Edited(input) => {
            state.input = input;
            // The in-flight call still owns the display until it finishes.
            if state.phase != Phase::AwaitingResult {
                state.phase = Phase::Idle;
                state.result.clear();
                state.error = None;
            }
            Effect::None
        }
        Event::Submitted => {
            if state.phase == Phase::AwaitingResult {
                return Effect::None;
            }
            state.result.clear();
            if state.input.is_blank() {
                state.phase = Phase::Idle;
                state.error = I::MODE.validation_message().map(String::from);
                return Effect::None;
            }
            state.error = None;
            state.phase = Phase::AwaitingResult;
            Effect::Dispatch(state.input.clone())
        }
        Event::Succeeded(text) => {
            if state.phase == Phase::AwaitingResult {
                state.result = text;
                state.error = None;
                state.phase = Phase::ShowingResult;
            }
            Effect::None
        }
        Event::Failed => {
            if state.phase == Phase::AwaitingResult {
                state.result.clear();
                state.error = I::MODE.failure_message().map(String::from);
                state.phase = Phase::ShowingError;
            }
            Effect::None
        }
    }
}
