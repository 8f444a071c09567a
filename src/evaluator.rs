//! Three-way evaluation of a buffer against a compiled pattern.

use crate::automaton::{Automaton, PartialOutcome};
use crate::compiled_pattern::CompiledPattern;
use crate::error::EngineError;

///
/// Outcome of the partial evaluation, before finality is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    NoMatch,
    PotentialMatch,
    ///
    /// The whole input matches; whether it may still grow is decided by the finality classifier
    FullMatch,
}

///
/// Run the pattern in partial mode over `input`.
/// A full match wins even when longer continuations are also possible.
pub fn evaluate<A: Automaton>(
    pattern: &CompiledPattern<A>,
    input: &[u8],
) -> Result<Evaluation, EngineError> {
    let evaluation = match pattern.automaton().partial_exec(input)? {
        PartialOutcome::Full => Evaluation::FullMatch,
        PartialOutcome::Partial => Evaluation::PotentialMatch,
        PartialOutcome::None => Evaluation::NoMatch,
    };
    trace!(
        "Evaluate {:?} against {:?} : {:?}",
        String::from_utf8_lossy(input),
        pattern.as_str(),
        evaluation
    );
    Ok(evaluation)
}
