//! Decides whether a full match can still grow by one more key press.

use crate::automaton::Automaton;
use crate::compiled_pattern::CompiledPattern;
use crate::error::EngineError;
use crate::symbol::Symbol;

///
/// Return `true` when no symbol of the alphabet can be appended to `input` while keeping a
/// full match. Only meaningful when `input` already fully matches.
///
/// Inputs longer than `max_len` are reported final without probing.
pub fn is_final<A: Automaton>(
    pattern: &CompiledPattern<A>,
    input: &[Symbol],
    max_len: usize,
) -> Result<bool, EngineError> {
    if input.len() > max_len {
        warn!(
            "Input of {} symbols exceeds {}, reported as final without probing",
            input.len(),
            max_len
        );
        return Ok(true);
    }

    let mut candidate = Vec::with_capacity(input.len() + 1);
    candidate.extend(input.iter().map(|s| s.as_byte()));
    candidate.push(0);
    let last = candidate.len() - 1;

    for symbol in Symbol::cycle_after(input.last().copied()) {
        candidate[last] = symbol.as_byte();
        if pattern.automaton().full_exec(&candidate)? {
            trace!("{:?} still matches after appending {}", pattern.as_str(), symbol);
            return Ok(false);
        }
    }
    Ok(true)
}
