use core::fmt;

use crate::automaton::Automaton;
use crate::compiled_pattern::CompiledPattern;
use crate::dfa_automaton::DfaAutomaton;
use crate::error::{CompileError, MatchError};
use crate::evaluator::{evaluate, Evaluation};
use crate::finality::is_final;
use crate::match_verdict::MatchVerdict;
use crate::options::{OversizePolicy, Options};
use crate::symbol::{self, Symbol};

///
/// Matches DTMF buffers against one compiled pattern.
///
/// The matcher keeps no state between calls : the caller hands over the whole buffer
/// collected so far each time a key is pressed.
///
/// ```
/// use dtmf_matcher::{Matcher, MatchVerdict};
///
/// let matcher: Matcher = Matcher::compiled(r"^(?:[0-9]{4}#|\*9)$").unwrap();
/// assert_eq!(matcher.find_match_str("12").unwrap(), MatchVerdict::PotentialMatch);
/// assert_eq!(
///     matcher.find_match_str("1234#").unwrap(),
///     MatchVerdict::Match { is_final: true }
/// );
/// assert_eq!(matcher.find_match_str("*7").unwrap(), MatchVerdict::NoMatch);
/// ```
pub struct Matcher<A = DfaAutomaton> {
    pattern: Option<CompiledPattern<A>>,
    options: Options,
}

impl<A: Automaton> Matcher<A> {
    ///
    /// Create a matcher without any pattern : `compile` has to be called before matching
    pub fn new(options: Options) -> Self {
        Self {
            pattern: None,
            options,
        }
    }
    ///
    /// Create a matcher sharing an already compiled pattern
    pub fn with_pattern(pattern: CompiledPattern<A>, options: Options) -> Self {
        Self {
            pattern: Some(pattern),
            options,
        }
    }
    ///
    /// Create a matcher with default options and compile `pattern`
    pub fn compiled(pattern: &str) -> Result<Self, CompileError> {
        let mut matcher = Self::new(Options::default());
        matcher.compile(pattern)?;
        Ok(matcher)
    }
    ///
    /// Compile the pattern used by next matches.
    /// On failure the matcher is left without any pattern, even if one was compiled before.
    pub fn compile(&mut self, pattern: &str) -> Result<(), CompileError> {
        self.pattern = None;
        self.pattern = Some(CompiledPattern::compile(pattern)?);
        Ok(())
    }

    pub fn is_compiled(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn pattern(&self) -> Option<&CompiledPattern<A>> {
        self.pattern.as_ref()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
    ///
    /// Check the buffer collected so far against the pattern
    pub fn find_match(&self, input: &[Symbol]) -> Result<MatchVerdict, MatchError> {
        let pattern = self.pattern.as_ref().ok_or(MatchError::NotCompiled)?;

        let max = self.options.max_input_len;
        let oversized = input.len() > max;
        if oversized && self.options.oversize == OversizePolicy::Reject {
            return Err(MatchError::InputTooLarge {
                len: input.len(),
                max,
            });
        }

        let verdict = match evaluate(pattern, &symbol::to_bytes(input))? {
            Evaluation::NoMatch => MatchVerdict::NoMatch,
            Evaluation::PotentialMatch => MatchVerdict::PotentialMatch,
            Evaluation::FullMatch => MatchVerdict::Match {
                is_final: is_final(pattern, input, max)?,
            },
        };
        trace!("{:?} : {}", symbol::to_text(input), verdict);
        Ok(verdict)
    }
    ///
    /// Same as `find_match`, parsing the buffer from its text form first
    pub fn find_match_str(&self, input: &str) -> Result<MatchVerdict, MatchError> {
        self.find_match(&symbol::parse_buffer(input)?)
    }
}

impl<A: Automaton> Default for Matcher<A> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<A> fmt::Debug for Matcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("options", &self.options)
            .finish()
    }
}
