//! # swahili-tts-rs
//!
//! A Rust library that makes Swahili text speakable by an Indonesian
//! text-to-speech voice.
//!
//! ## Features
//!
//! - **Syllabification**: Splits Swahili words into syllables with nasal-prefix and coda rules
//! - **Phonetic Rewriting**: Respells the syllable stream so Indonesian phonology reads it as Swahili
//! - **Playback Seam**: Drives any host synthesizer through the [`SpeechSynthesizer`] trait
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! swahili-tts-rs = "2026.10"
//! ```
//!
//! ```
//! use swahili_tts_rs::engines::swahili::{syllabify, to_speech_text};
//!
//! assert_eq!(syllabify("jambo"), vec!["jam", "bo"]);
//! assert_eq!(to_speech_text("niko hapa"), "  ni koh  ha pa  ");
//! ```

pub mod engines;

use serde::{Deserialize, Serialize};

/// A voice reported by the host speech synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Display name of the voice
    pub name: String,
    /// BCP 47 language tag (e.g. `"id-ID"`)
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// A request to speak, handed to the host synthesizer.
///
/// Serializes to the same shape a browser `SpeechSynthesisUtterance` is
/// configured with, so hosts can forward it as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Text to read aloud, already respelled for the target voice
    pub text: String,
    /// Locale of the voice that should read it
    pub lang: String,
    /// Playback rate (1.0 is normal speed)
    pub rate: f32,
}

impl Utterance {
    /// Serialize the utterance as a JSON message.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Common interface for host speech synthesizers.
///
/// The library never produces audio itself. A host (browser, OS speech API,
/// a local engine) implements this trait and the engines in [`engines`]
/// decide what to say and when.
pub trait SpeechSynthesizer {
    /// Voices currently available on the host.
    fn voices(&self) -> Vec<Voice>;

    /// Stop any audio that is still playing or queued.
    fn cancel(&mut self);

    /// Queue an utterance for playback.
    fn speak(&mut self, utterance: &Utterance) -> Result<(), Box<dyn std::error::Error>>;

    /// Cancel whatever is playing, then speak the utterance.
    ///
    /// Default implementation calls `cancel()` then `speak()`.
    fn interrupt_with(&mut self, utterance: &Utterance) -> Result<(), Box<dyn std::error::Error>> {
        self.cancel();
        self.speak(utterance)
    }
}
