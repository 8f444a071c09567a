use core::fmt;
use std::sync::Arc;

use crate::automaton::Automaton;
use crate::dfa_automaton::DfaAutomaton;
use crate::error::CompileError;

///
/// A pattern compiled once and never mutated afterwards.
///
/// Cloning shares the same automaton, so one pattern can serve several matchers,
/// across threads when the automaton is `Send + Sync`.
pub struct CompiledPattern<A = DfaAutomaton> {
    text: Arc<str>,
    automaton: Arc<A>,
}

impl<A: Automaton> CompiledPattern<A> {
    ///
    /// Compile `text`. On failure nothing is kept.
    pub fn compile(text: &str) -> Result<Self, CompileError> {
        let automaton = A::compile(text)?;
        debug!("Compiled pattern {:?}", text);
        Ok(Self {
            text: Arc::from(text),
            automaton: Arc::new(automaton),
        })
    }
}

impl<A> CompiledPattern<A> {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn automaton(&self) -> &A {
        &self.automaton
    }
}

impl<A> Clone for CompiledPattern<A> {
    fn clone(&self) -> Self {
        Self {
            text: Arc::clone(&self.text),
            automaton: Arc::clone(&self.automaton),
        }
    }
}

impl<A> fmt::Debug for CompiledPattern<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.text).finish()
    }
}
