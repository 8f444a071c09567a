use thiserror::Error;

///
/// The pattern text is not valid for the pattern engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pattern {pattern:?}: {reason}")]
pub struct CompileError {
    pub pattern: String,
    pub reason: String,
}

impl CompileError {
    pub fn new(pattern: &str, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

///
/// Internal failure of the pattern engine, never a legitimate "no match"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot compute start state: {0}")]
    Start(String),
    #[error("engine gave up on byte 0x{byte:02x} at offset {offset}")]
    Quit { byte: u8, offset: usize },
}

///
/// Errors reported by `Matcher::find_match`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("match attempted before a pattern was successfully compiled")]
    NotCompiled,
    #[error("input of {len} symbols exceeds the limit of {max}")]
    InputTooLarge { len: usize, max: usize },
    #[error("{found:?} at offset {offset} is not a DTMF symbol")]
    InvalidSymbol { found: char, offset: usize },
    #[error(transparent)]
    Engine(#[from] EngineError),
}
