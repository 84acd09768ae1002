use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{SpeechSynthesizer, Utterance};

use super::error::SwahiliError;
use super::sentence::to_speech_text;
use super::voices::{find_target_locale, TARGET_LOCALES};

/// Default playback rate. Slower than normal so each spaced-out syllable is heard.
pub const DEFAULT_RATE: f32 = 0.80;

/// Parameters for configuring a Swahili speech engine.
///
/// ```
/// use swahili_tts_rs::engines::swahili::SwahiliParamsBuilder;
///
/// let params = SwahiliParamsBuilder::default().rate(1.0).build()?;
/// assert_eq!(params.locales, vec!["id", "id-ID"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default, build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct SwahiliParams {
    /// Playback rate handed to the synthesizer. Range: (0, 10], default 0.80.
    pub rate: f32,
    /// Voice locales the engine accepts, default `["id", "id-ID"]`.
    #[builder(setter(into))]
    pub locales: Vec<String>,
}

impl Default for SwahiliParams {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            locales: TARGET_LOCALES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl SwahiliParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(rate) = self.rate {
            if !rate.is_finite() || rate <= 0.0 || rate > 10.0 {
                return Err(format!("rate must be in (0, 10], got {rate}"));
            }
        }
        if let Some(locales) = &self.locales {
            if locales.is_empty() {
                return Err("at least one voice locale is required".to_string());
            }
        }
        Ok(())
    }
}

impl SwahiliParams {
    /// Run the builder's validation over parameters that bypassed it (e.g. deserialized ones).
    pub fn validated(self) -> Result<Self, SwahiliError> {
        Ok(SwahiliParamsBuilder::default()
            .rate(self.rate)
            .locales(self.locales)
            .build()?)
    }
}

/// The message a host sends to have text read aloud: `{"toSay": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakRequest {
    pub to_say: String,
}

/// What [`SwahiliEngine::speak`] did with a sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// The utterance was handed to the synthesizer.
    Spoken(Utterance),
    /// Same sentence as last time; nothing was said.
    Repeated,
    /// The host has no voice for the target locales; nothing was said.
    Unsupported,
}

/// Swahili speech engine on top of a host synthesizer.
///
/// Probes the host's voices for an Indonesian one, respells each sentence
/// with [`to_speech_text`], and cuts off the previous sentence's audio when a
/// new one arrives. A sentence identical to the last one is not repeated.
///
/// ```rust,no_run
/// use swahili_tts_rs::engines::swahili::{Delivery, SwahiliEngine};
/// # use swahili_tts_rs::{SpeechSynthesizer, Utterance, Voice};
/// # struct Host;
/// # impl SpeechSynthesizer for Host {
/// #     fn voices(&self) -> Vec<Voice> { vec![Voice::new("Damayanti", "id-ID")] }
/// #     fn cancel(&mut self) {}
/// #     fn speak(&mut self, _: &Utterance) -> Result<(), Box<dyn std::error::Error>> { Ok(()) }
/// # }
///
/// let mut engine = SwahiliEngine::new(Host);
/// if let Delivery::Spoken(utterance) = engine.speak("Habari gani")? {
///     println!("{}", utterance.text);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SwahiliEngine<S: SpeechSynthesizer> {
    synth: S,
    params: SwahiliParams,
    locale: Option<String>,
    last_sentence: Option<String>,
}

impl<S: SpeechSynthesizer> SwahiliEngine<S> {
    /// Create an engine with default parameters.
    pub fn new(synth: S) -> Self {
        Self::with_params(synth, SwahiliParams::default())
    }

    /// Create an engine with explicit parameters.
    pub fn with_params(synth: S, params: SwahiliParams) -> Self {
        let mut engine = Self {
            synth,
            params,
            locale: None,
            last_sentence: None,
        };
        engine.refresh_voices();
        engine
    }

    /// Probe the host's voices again.
    ///
    /// Hosts that load voices asynchronously should call this once they
    /// report being ready. Returns whether a target voice is available.
    pub fn refresh_voices(&mut self) -> bool {
        self.locale = find_target_locale(&self.synth.voices(), &self.params.locales);
        match &self.locale {
            Some(locale) => log::info!("Using voice locale {locale}"),
            None => log::warn!(
                "No voice for locales {:?}; Swahili speech is disabled",
                self.params.locales
            ),
        }
        self.locale.is_some()
    }

    pub fn is_supported(&self) -> bool {
        self.locale.is_some()
    }

    /// Locale of the voice that will be used, if one was found.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn params(&self) -> &SwahiliParams {
        &self.params
    }

    pub fn synthesizer(&self) -> &S {
        &self.synth
    }

    pub fn synthesizer_mut(&mut self) -> &mut S {
        &mut self.synth
    }

    pub fn into_synthesizer(self) -> S {
        self.synth
    }

    /// Speak a Swahili sentence.
    pub fn speak(&mut self, sentence: &str) -> Result<Delivery, SwahiliError> {
        let Some(lang) = self.locale.clone() else {
            log::warn!("Dropping {sentence:?}: no target voice");
            return Ok(Delivery::Unsupported);
        };

        if !sentence.is_empty() && self.last_sentence.as_deref() == Some(sentence) {
            return Ok(Delivery::Repeated);
        }
        self.last_sentence = Some(sentence.to_string());

        let utterance = Utterance {
            text: to_speech_text(sentence),
            lang,
            rate: self.params.rate,
        };

        let result = if sentence.is_empty() {
            self.synth.speak(&utterance)
        } else {
            self.synth.interrupt_with(&utterance)
        };
        result.map_err(|e| SwahiliError::Synthesizer(e.to_string()))?;

        Ok(Delivery::Spoken(utterance))
    }

    /// Parse a raw `{"toSay": "..."}` message and speak it.
    pub fn handle_message(&mut self, payload: &[u8]) -> Result<Delivery, SwahiliError> {
        let request: SpeakRequest = serde_json::from_slice(payload)
            .map_err(|e| SwahiliError::InvalidMessage(e.to_string()))?;
        self.speak(&request.to_say)
    }
}

#[cfg(test)]
mod tests {
    use super::{Delivery, SwahiliEngine, SwahiliParams, SwahiliParamsBuilder, DEFAULT_RATE};
    use crate::engines::swahili::SwahiliError;
    use crate::{SpeechSynthesizer, Utterance, Voice};

    #[derive(Default)]
    struct Recorder {
        voices: Vec<Voice>,
        events: Vec<String>,
        spoken: Vec<Utterance>,
        reject: bool,
    }

    impl Recorder {
        fn indonesian() -> Self {
            Self {
                voices: vec![Voice::new("Damayanti", "id-ID")],
                ..Default::default()
            }
        }
    }

    impl SpeechSynthesizer for Recorder {
        fn voices(&self) -> Vec<Voice> {
            self.voices.clone()
        }

        fn cancel(&mut self) {
            self.events.push("cancel".to_string());
        }

        fn speak(&mut self, utterance: &Utterance) -> Result<(), Box<dyn std::error::Error>> {
            if self.reject {
                return Err("voice busy".into());
            }
            self.events.push("speak".to_string());
            self.spoken.push(utterance.clone());
            Ok(())
        }
    }

    #[test]
    fn speaks_with_detected_locale_and_rate() {
        let mut engine = SwahiliEngine::new(Recorder::indonesian());
        assert!(engine.is_supported());
        assert_eq!(engine.locale(), Some("id-ID"));

        let delivery = engine.speak("Niko hapa").expect("speak should succeed");
        let expected = Utterance {
            text: "  ni koh  ha pa  ".to_string(),
            lang: "id-ID".to_string(),
            rate: DEFAULT_RATE,
        };
        assert_eq!(delivery, Delivery::Spoken(expected.clone()));
        assert_eq!(engine.synthesizer().spoken, vec![expected]);
        assert_eq!(engine.synthesizer().events, vec!["cancel", "speak"]);
    }

    #[test]
    fn stays_silent_without_target_voice() {
        let synth = Recorder {
            voices: vec![Voice::new("Samantha", "en-US")],
            ..Default::default()
        };
        let mut engine = SwahiliEngine::new(synth);
        assert!(!engine.is_supported());
        assert_eq!(engine.speak("jambo").unwrap(), Delivery::Unsupported);
        assert!(engine.synthesizer().events.is_empty());
    }

    #[test]
    fn refresh_picks_up_late_voices() {
        let mut engine = SwahiliEngine::new(Recorder::default());
        assert!(!engine.is_supported());

        engine.synthesizer_mut().voices.push(Voice::new("Local", "id"));
        assert!(engine.refresh_voices());
        assert_eq!(engine.locale(), Some("id"));
        assert!(matches!(engine.speak("jambo").unwrap(), Delivery::Spoken(_)));
    }

    #[test]
    fn skips_repeated_sentence() {
        let mut engine = SwahiliEngine::new(Recorder::indonesian());
        assert!(matches!(engine.speak("jambo").unwrap(), Delivery::Spoken(_)));
        assert_eq!(engine.speak("jambo").unwrap(), Delivery::Repeated);
        assert!(matches!(engine.speak("habari").unwrap(), Delivery::Spoken(_)));
        assert!(matches!(engine.speak("jambo").unwrap(), Delivery::Spoken(_)));
        assert_eq!(engine.synthesizer().spoken.len(), 3);
    }

    #[test]
    fn empty_sentence_is_spoken_without_cancelling() {
        let mut engine = SwahiliEngine::new(Recorder::indonesian());
        assert!(matches!(engine.speak("").unwrap(), Delivery::Spoken(_)));
        assert!(matches!(engine.speak("").unwrap(), Delivery::Spoken(_)));
        assert_eq!(engine.synthesizer().events, vec!["speak", "speak"]);
    }

    #[test]
    fn uses_configured_rate_and_locales() {
        let params = SwahiliParamsBuilder::default()
            .rate(1.25)
            .locales(vec!["ms-MY".to_string()])
            .build()
            .unwrap();
        let synth = Recorder {
            voices: vec![Voice::new("Damayanti", "id-ID"), Voice::new("Amira", "ms-MY")],
            ..Default::default()
        };
        let mut engine = SwahiliEngine::with_params(synth, params);
        match engine.speak("mtu").unwrap() {
            Delivery::Spoken(utterance) => {
                assert_eq!(utterance.lang, "ms-MY");
                assert_eq!(utterance.rate, 1.25);
                assert_eq!(utterance.text, "  mh tu  ");
            }
            other => panic!("expected speech, got {other:?}"),
        }
    }

    #[test]
    fn synthesizer_errors_are_reported() {
        let mut synth = Recorder::indonesian();
        synth.reject = true;
        let mut engine = SwahiliEngine::new(synth);
        let err = engine.speak("jambo").unwrap_err();
        assert!(matches!(err, SwahiliError::Synthesizer(ref msg) if msg == "voice busy"));
    }

    #[test]
    fn handles_speak_messages() {
        let mut engine = SwahiliEngine::new(Recorder::indonesian());
        let delivery = engine
            .handle_message(br#"{"toSay": "Kiswahili"}"#)
            .expect("message should be accepted");
        match delivery {
            Delivery::Spoken(utterance) => assert_eq!(utterance.text, "  kih sua hih li  "),
            other => panic!("expected speech, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_text_messages() {
        let mut engine = SwahiliEngine::new(Recorder::indonesian());
        let payloads: [&[u8]; 3] = [br#"{"toSay": 42}"#, br#"{"say": "jambo"}"#, b"not json"];
        for payload in payloads {
            let err = engine.handle_message(payload).unwrap_err();
            assert!(matches!(err, SwahiliError::InvalidMessage(_)), "{payload:?}");
        }
        assert!(engine.synthesizer().events.is_empty());
    }

    #[test]
    fn builder_validates_parameters() {
        assert!(SwahiliParamsBuilder::default().rate(0.0).build().is_err());
        assert!(SwahiliParamsBuilder::default().rate(f32::NAN).build().is_err());
        assert!(SwahiliParamsBuilder::default().rate(11.0).build().is_err());
        assert!(SwahiliParamsBuilder::default()
            .locales(Vec::<String>::new())
            .build()
            .is_err());
        assert_eq!(
            SwahiliParamsBuilder::default().build().unwrap(),
            SwahiliParams::default()
        );
    }

    #[test]
    fn validated_rejects_bad_deserialized_params() {
        let params = SwahiliParams {
            rate: -1.0,
            ..Default::default()
        };
        assert!(matches!(params.validated(), Err(SwahiliError::Params(_))));
    }
}
