use crate::Voice;

/// Locales of the Indonesian voices the respelling rules are tuned for.
pub const TARGET_LOCALES: [&str; 2] = ["id", "id-ID"];

/// Find the locale to speak with among the host's voices.
///
/// Returns the `lang` of the last voice whose language is one of `accepted`,
/// or `None` when the host has no suitable voice. Without one, the host would
/// fall back to a voice that cannot read the respelled text.
pub fn find_target_locale<S: AsRef<str>>(voices: &[Voice], accepted: &[S]) -> Option<String> {
    voices
        .iter()
        .rev()
        .find(|voice| accepted.iter().any(|lang| lang.as_ref() == voice.lang))
        .map(|voice| voice.lang.clone())
}

/// Whether any of the host's voices can read the respelled text.
pub fn has_target_voice(voices: &[Voice]) -> bool {
    find_target_locale(voices, &TARGET_LOCALES).is_some()
}
