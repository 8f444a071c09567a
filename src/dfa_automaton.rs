use core::fmt;

use regex_automata::{
    dfa::{dense, Automaton as _, StartKind},
    util::primitives::StateID,
    Anchored, Input, MatchKind,
};

use crate::automaton::{Automaton, PartialOutcome};
use crate::error::{CompileError, EngineError};

///
/// Pattern engine backed by a fully compiled `regex-automata` DFA.
///
/// The DFA is anchored, reports every match (`MatchKind::All`) and is minimized: any
/// state from which no match can be reached collapses into the dead state, so a walk that
/// did not die is always the prefix of some match.
///
/// Building a DFA can be exponential in the pattern size, so both determinization and the
/// final table are capped; a pattern over either limit is a `CompileError`.
pub struct DfaAutomaton {
    dfa: dense::DFA<Vec<u32>>,
}

impl DfaAutomaton {
    ///
    /// Heap used while determinizing, in bytes
    pub const DETERMINIZE_SIZE_LIMIT: usize = 256 * 1024;
    ///
    /// Size of the built transition table, in bytes
    pub const DFA_SIZE_LIMIT: usize = 256 * 1024;

    ///
    /// Walk the DFA over the whole input.
    /// Return `None` as soon as the dead state is reached.
    fn walk(&self, input: &[u8]) -> Result<Option<StateID>, EngineError> {
        let search = Input::new(input).anchored(Anchored::Yes);
        let mut sid = self
            .dfa
            .start_state_forward(&search)
            .map_err(|err| EngineError::Start(err.to_string()))?;

        for (offset, &byte) in input.iter().enumerate() {
            sid = self.dfa.next_state(sid, byte);
            if self.dfa.is_special_state(sid) {
                if self.dfa.is_dead_state(sid) {
                    return Ok(None);
                }
                if self.dfa.is_quit_state(sid) {
                    return Err(EngineError::Quit { byte, offset });
                }
            }
        }
        if self.dfa.is_dead_state(sid) {
            return Ok(None);
        }
        Ok(Some(sid))
    }

    ///
    /// A match state after the end-of-input transition means a match ending at the end of input
    fn accepts_at_end(&self, sid: StateID) -> bool {
        let eoi = self.dfa.next_eoi_state(sid);
        self.dfa.is_match_state(eoi)
    }
}

impl Automaton for DfaAutomaton {
    fn compile(pattern: &str) -> Result<Self, CompileError> {
        let config = dense::Config::new()
            .match_kind(MatchKind::All)
            .start_kind(StartKind::Anchored)
            // Input is ASCII only: non-ASCII bytes become quit bytes
            .unicode_word_boundary(true)
            .determinize_size_limit(Some(Self::DETERMINIZE_SIZE_LIMIT))
            .dfa_size_limit(Some(Self::DFA_SIZE_LIMIT))
            .minimize(true);
        let dfa = dense::Builder::new()
            .configure(config)
            .build(pattern)
            .map_err(|err| CompileError::new(pattern, err.to_string()))?;
        Ok(Self { dfa })
    }

    fn partial_exec(&self, input: &[u8]) -> Result<PartialOutcome, EngineError> {
        let outcome = match self.walk(input)? {
            None => PartialOutcome::None,
            Some(sid) if self.accepts_at_end(sid) => PartialOutcome::Full,
            Some(_) => PartialOutcome::Partial,
        };
        Ok(outcome)
    }

    fn full_exec(&self, input: &[u8]) -> Result<bool, EngineError> {
        Ok(self.walk(input)?.is_some_and(|sid| self.accepts_at_end(sid)))
    }
}

impl fmt::Debug for DfaAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DfaAutomaton(memory_usage={})", self.dfa.memory_usage())
    }
}
