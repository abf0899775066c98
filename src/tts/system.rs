//! System TTS engine
//!
//! Shells out to espeak-ng or speech-dispatcher with a German voice.

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Speech commands in order of preference, with their voice flag
const COMMANDS: &[(&str, &str)] = &[("espeak-ng", "-v"), ("spd-say", "-l")];

#[derive(Debug)]
pub struct SystemEngine {
    program: &'static str,
    voice_flag: &'static str,
    voice: String,
}

impl SystemEngine {
    /// Pick the first speech command found on `PATH`
    pub fn detect(voice: &str) -> Option<Self> {
        let path = std::env::var_os("PATH")?;
        let dirs: Vec<_> = std::env::split_paths(&path).collect();
        COMMANDS
            .iter()
            .find(|(program, _)| dirs.iter().any(|dir| dir.join(program).is_file()))
            .map(|&(program, voice_flag)| Self {
                program,
                voice_flag,
                voice: voice.to_string(),
            })
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        debug!("System speaking via {}: {}", self.program, text);

        let status = Command::new(self.program)
            .arg(self.voice_flag)
            .arg(&self.voice)
            .arg(text)
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("{} exited with {}", self.program, status))
        }
    }

    fn name(&self) -> &str {
        "system"
    }
}
