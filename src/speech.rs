use std::io::ErrorKind;
use std::process::{Child, Command, Stdio};

use log::{debug, warn};

/// Fire-and-forget text-to-speech. Implementations never report failure
/// to the caller.
pub trait Speaker {
    fn speak(&mut self, text: &str);

    /// Housekeeping between utterances, called on every tick.
    fn poll(&mut self) {}
}

pub struct Silent;

impl Speaker for Silent {
    fn speak(&mut self, _text: &str) {}
}

/// Fixed voice settings handed to the speech program.
#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    pub program: String,
    pub language: String,
    pub rate: f32,
}

// espeak's default speaking speed in words per minute.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Speaks through an espeak-compatible program (`-v <voice> -s <wpm> <text>`).
/// A new utterance kills the one still playing.
pub struct CommandSpeaker {
    voice: Voice,
    child: Option<Child>,
    unavailable: bool,
}

impl CommandSpeaker {
    pub fn new(voice: Voice) -> Self {
        Self {
            voice,
            child: None,
            unavailable: false,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.unavailable
    }

    fn args(&self, text: &str) -> Vec<String> {
        let wpm = (BASE_WORDS_PER_MINUTE * self.voice.rate).round() as u32;
        vec![
            "-v".to_string(),
            self.voice.language.clone(),
            "-s".to_string(),
            wpm.to_string(),
            text.to_string(),
        ]
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
                let _ = child.wait();
                debug!("cancelled in-flight utterance");
            }
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) {
        if self.unavailable {
            return;
        }
        self.cancel();

        let spawned = Command::new(&self.voice.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.child = Some(child),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "speech program '{}' not found, speech disabled",
                    self.voice.program
                );
                self.unavailable = true;
            }
            Err(err) => warn!("failed to start '{}': {err}", self.voice.program),
        }
    }

    /// Reap the previous utterance once it has finished playing.
    fn poll(&mut self) {
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(Some(_)) => self.child = None,
                Ok(None) => {}
                Err(err) => {
                    debug!("lost track of speech process: {err}");
                    self.child = None;
                }
            }
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}
