use super::rewriter::rewrite;
use super::syllabifier::syllabify;

/// Separator between syllables. Two in a row mark a word boundary.
pub const DELIMITER: char = ' ';

/// Lay out a sentence as a delimited syllable stream.
///
/// The result starts with one delimiter, every syllable is followed by one,
/// and every word is closed by an extra one, e.g. `"niko hapa"` becomes
/// `" ni ko  ha pa  "`.
pub fn syllable_stream(sentence: &str) -> String {
    let sentence = sentence.to_lowercase();
    let mut stream = String::with_capacity(sentence.len() * 2 + 1);
    stream.push(DELIMITER);

    for word in sentence.split(DELIMITER) {
        for syllable in syllabify(word) {
            stream.push_str(&syllable);
            stream.push(DELIMITER);
        }
        stream.push(DELIMITER);
    }
    stream
}

/// Convert a Swahili sentence into text for an Indonesian voice to read.
pub fn to_speech_text(sentence: &str) -> String {
    let stream = syllable_stream(sentence);
    let text = rewrite(&stream);
    log::debug!("speech text for {sentence:?}: stream={stream:?} text={text:?}");
    text
}
