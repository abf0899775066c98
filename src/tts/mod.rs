//! TTS (Text-to-Speech) Module
//!
//! Speech is an injected capability: callers hold an `Arc<dyn TtsEngine>`
//! and never care whether a real voice or the log fallback answers.

use crate::config::Config;
use crate::core::number_words::to_german;
use crate::error::TrainerResult;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod log;
pub mod system;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text
    async fn speak(&self, text: &str) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
pub fn create_engine(config: &Config) -> Arc<dyn TtsEngine> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "system" => match system::SystemEngine::detect(&config.tts_voice) {
            Some(engine) => {
                info!("  - Using System TTS (Voice: {})", config.tts_voice);
                Arc::new(engine)
            }
            None => {
                warn!("  - No speech command installed, falling back to log output");
                Arc::new(log::LogEngine::new())
            }
        },
        "log" => Arc::new(log::LogEngine::new()),
        _ => {
            warn!(
                "  - Unknown engine '{}', falling back to log output",
                config.tts_engine
            );
            Arc::new(log::LogEngine::new())
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    engine
}

/// Speak the German word for `n`. Speech failures are logged, not returned.
pub async fn speak_number(engine: &dyn TtsEngine, n: u16) -> TrainerResult<String> {
    let word = to_german(n.into())?;
    debug!("🔊 Number: {} = {}", n, word);
    if let Err(e) = engine.speak(&word).await {
        warn!("⚠️ {} could not speak '{}': {}", engine.name(), word, e);
    }
    Ok(word)
}
