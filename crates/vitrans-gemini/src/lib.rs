//! vitrans-gemini: Remote generative service boundary.
//!
//! Provides:
//! - [`GenerativeService`], the single "generate content" operation
//! - Wire types for the Gemini `generateContent` REST endpoint
//! - [`GeminiService`], the reqwest-based implementation

pub mod client;
pub mod service;
pub mod types;

pub use client::GeminiService;
pub use service::{Contents, GenerateRequest, GenerativeService, ServiceError};
pub use types::{InlineData, Part};
