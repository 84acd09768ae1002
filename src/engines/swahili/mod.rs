//! Swahili-through-Indonesian pronunciation engine.
//!
//! Swahili has no widely shipped speech voice, but its syllable structure is
//! close to Indonesian. This engine splits Swahili words into syllables,
//! spaces them out, and respells the stream so an Indonesian voice says it
//! with Swahili sounds.
//!
//! # Pipeline
//!
//! ```text
//! "Ninapenda Kiswahili"
//!   └─ sentence::syllable_stream ──▶ " ni na pen da  ki swa hi li  "
//!        └─ rewriter::rewrite ────▶ "  ni na pen da  kih sua hih li  "
//! ```
//!
//! # Syllable Rules
//!
//! | Rule | Pattern | Example |
//! |---|---|---|
//! | Nasal prefix | `n` + consonant other than `g`, or `m` + consonant | `mtu` → `m·tu` |
//! | Nasal coda | vowel + `n` + consonant other than `g`/`y` | `penda` → `pen·da` |
//! | Bilabial coda | vowel + `m` + consonant | `jambo` → `jam·bo` |
//! | Lateral coda | `a` + `l` + consonant | `alhamisi` → `al·ha·mi·si` |
//! | Open | anything else | `kiswahili` → `ki·swa·hi·li` |
//!
//! # Target Voices
//!
//! Output is tuned for voices whose language is `id` or `id-ID`. Use
//! [`voices::find_target_locale`] to check a host's voice list, or let
//! [`SwahiliEngine`] do it.
//!
//! # Examples
//!
//! ## Text Only
//!
//! ```
//! use swahili_tts_rs::engines::swahili::{syllabify, to_speech_text};
//!
//! assert_eq!(syllabify("kiswahili"), vec!["ki", "swa", "hi", "li"]);
//! let text = to_speech_text("Habari");
//! assert_eq!(text, "  ha ba ri  ");
//! ```
//!
//! ## With a Host Synthesizer
//!
//! ```rust,no_run
//! use swahili_tts_rs::engines::swahili::{SwahiliEngine, SwahiliParamsBuilder};
//! # use swahili_tts_rs::{SpeechSynthesizer, Utterance, Voice};
//! # struct Host;
//! # impl SpeechSynthesizer for Host {
//! #     fn voices(&self) -> Vec<Voice> { vec![Voice::new("Damayanti", "id-ID")] }
//! #     fn cancel(&mut self) {}
//! #     fn speak(&mut self, _: &Utterance) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
//! # }
//!
//! let params = SwahiliParamsBuilder::default().rate(0.9).build()?;
//! let mut engine = SwahiliEngine::with_params(Host, params);
//! engine.speak("Habari yako")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod rewriter;
pub mod sentence;
pub mod syllabifier;
pub mod voices;

pub use engine::{Delivery, SwahiliEngine, SwahiliParams, SwahiliParamsBuilder};
pub use error::SwahiliError;
pub use rewriter::rewrite;
pub use sentence::{syllable_stream, to_speech_text};
pub use syllabifier::syllabify;
