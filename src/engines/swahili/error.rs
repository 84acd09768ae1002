use super::engine::SwahiliParamsBuilderError;

#[derive(thiserror::Error, Debug)]
pub enum SwahiliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid speak message: {0}")]
    InvalidMessage(String),
    #[error("Invalid parameter file: {0}")]
    Config(String),
    #[error("Invalid parameters: {0}")]
    Params(#[from] SwahiliParamsBuilderError),
    #[error("Speech synthesizer rejected the utterance: {0}")]
    Synthesizer(String),
}
