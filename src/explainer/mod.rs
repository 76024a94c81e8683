//! Natural-language game explanations from a hosted completion model.
//!
//! The HTTP layer only sees the [`Explainer`] trait. Failures inside an
//! explainer never surface as errors: the OpenAI implementation answers with
//! a fixed apology instead, and returns an empty string when the model
//! produced no content at all.

mod openai;
pub mod prompt;

use crate::data_fetcher::models::Game;
use async_trait::async_trait;

pub use openai::OpenAiExplainer;
pub use prompt::build_prompt;

#[async_trait]
pub trait Explainer: Send + Sync {
    /// Describes `game` in prose. Empty when nothing could be generated.
    async fn explain(&self, game: &Game) -> String;
}
