use crate::error::{CompileError, EngineError};

///
/// Result of running an automaton over an input in partial mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialOutcome {
    ///
    /// The whole input matches
    Full,
    ///
    /// The input is a strict prefix of some matching input
    Partial,
    ///
    /// No extension of the input can match
    None,
}

///
/// A compiled pattern engine.
///
/// Implementations must track every alternative at once: `Partial` is only sound if the
/// engine knows that *some* continuation of the live alternatives still reaches a match.
/// Executing never mutates the automaton, so one compiled value may be shared between threads.
pub trait Automaton: Sized {
    ///
    /// Compile a pattern. A failure never yields a half-built automaton.
    fn compile(pattern: &str) -> Result<Self, CompileError>;
    ///
    /// Classify `input` as a full match, a valid prefix or a dead end
    fn partial_exec(&self, input: &[u8]) -> Result<PartialOutcome, EngineError>;
    ///
    /// Does the whole `input` match ?
    fn full_exec(&self, input: &[u8]) -> Result<bool, EngineError>;
}
