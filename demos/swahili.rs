use std::time::Instant;

use swahili_tts_rs::{
    engines::swahili::{syllabify, Delivery, SwahiliEngine, SwahiliParams},
    SpeechSynthesizer, Utterance, Voice,
};

/// Stands in for a real speech API: prints each utterance as the JSON a host would receive.
struct ConsoleSynthesizer;

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn voices(&self) -> Vec<Voice> {
        vec![
            Voice::new("Samantha", "en-US"),
            Voice::new("Damayanti", "id-ID"),
        ]
    }

    fn cancel(&mut self) {
        println!("(cancel)");
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), Box<dyn std::error::Error>> {
        println!("{}", utterance.to_json()?);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        "Habari yako? Ninapenda kujifunza Kiswahili".to_string()
    } else {
        args.join(" ")
    };

    for word in text.split(' ') {
        println!("{word:>16} -> {}", syllabify(word).join("·"));
    }

    let params = match std::env::var("SWAHILI_TTS_PARAMS") {
        Ok(path) => swahili_tts_rs::engines::swahili::config::load_params(path.as_ref())?,
        Err(_) => SwahiliParams::default(),
    };
    let mut engine = SwahiliEngine::with_params(ConsoleSynthesizer, params);

    let start = Instant::now();
    let delivery = engine.speak(&text)?;
    println!("Prepared in {:.2?}", start.elapsed());

    if let Delivery::Spoken(_) = engine.speak(&text)? {
        println!("unexpected: repeated sentence was spoken again");
    }
    if matches!(delivery, Delivery::Unsupported) {
        println!("No Indonesian voice available");
    }
    Ok(())
}
