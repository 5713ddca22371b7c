//! Remote generative-model clients for mangrovechat
//!
//! This crate provides the `ModelClient` trait and the Gemini REST
//! implementation used by the web layer.

mod gemini_client;

pub use gemini_client::{GeminiClient, GEMINI_API_URL};

use anyhow::Result;
use async_trait::async_trait;

/// A remote generative-language service: takes a text prompt, returns
/// generated text. May fail or time out; callers decide how to surface that.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
