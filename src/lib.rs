//! Pageforge: prompt-driven landing page generation.
//!
//! A natural-language prompt becomes a structured landing-page document
//! via a primary generation endpoint with an automatic generative-AI
//! fallback; a defensive normalization layer lets the renderer display
//! the document no matter how loosely the generator followed the schema.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod orchestrator;
pub mod primary;
pub mod prompt;
pub mod provider;
pub mod render;
