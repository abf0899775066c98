//! Recording speech engine
//!
//! Keeps every word handed to it so tests can assert what a learner heard.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockTts {
    heard: Arc<Mutex<Vec<String>>>,
    fail_once: Arc<Mutex<bool>>,
}

impl MockTts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words spoken so far, oldest first
    pub fn get_spoken(&self) -> Vec<String> {
        self.heard.lock().unwrap().clone()
    }

    /// Make the next `speak` call fail as if the voice were missing
    pub fn fail_next(&self) {
        *self.fail_once.lock().unwrap() = true;
    }
}

#[async_trait]
impl zahlentrainer::tts::TtsEngine for MockTts {
    async fn speak(&self, text: &str) -> Result<()> {
        if std::mem::take(&mut *self.fail_once.lock().unwrap()) {
            return Err(anyhow::anyhow!("voice unavailable"));
        }
        self.heard.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
