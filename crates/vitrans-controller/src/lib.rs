//! vitrans-controller: Per-mode interaction state and submit handling.
//!
//! [`state::reduce`] is a pure transition function over explicit events;
//! [`InteractionController`] drives it around one remote call per submit.

pub mod controller;
pub mod state;

pub use controller::{
    ImageController, InteractionController, Submission, SubmitFailure, TextController,
};
pub use state::{Effect, Event, ModeInput, ModeState, Phase, reduce};
