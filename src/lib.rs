//! Incremental matching of DTMF buffers against a digit-grammar pattern.
//!
//! After each key press the caller hands the whole buffer to a [`Matcher`] and gets back one of :
//!  - `NoMatch` : nothing appended to this buffer can ever match
//!  - `PotentialMatch` : valid so far, keep collecting
//!  - `Match { is_final }` : matched; `is_final` tells whether one more key could still match
//!
//! Example :
//! ```
//! use dtmf_matcher::{Matcher, MatchVerdict};
//!
//! let matcher: Matcher = Matcher::compiled("^[0-9]{2,4}$").unwrap();
//! assert_eq!(matcher.find_match_str("1").unwrap(), MatchVerdict::PotentialMatch);
//! assert_eq!(matcher.find_match_str("12").unwrap(), MatchVerdict::Match { is_final: false });
//! assert_eq!(matcher.find_match_str("1234").unwrap(), MatchVerdict::Match { is_final: true });
//! ```
//!
//! To debug purpose, enable the feature "log"
//!
#[macro_use]
mod logging;

pub mod automaton;
pub mod compiled_pattern;
pub mod dfa_automaton;
pub mod error;
pub mod evaluator;
pub mod finality;
pub mod match_verdict;
pub mod matcher;
pub mod options;
pub mod symbol;

pub use automaton::{Automaton, PartialOutcome};
pub use compiled_pattern::CompiledPattern;
pub use dfa_automaton::DfaAutomaton;
pub use error::{CompileError, EngineError, MatchError};
pub use match_verdict::MatchVerdict;
pub use matcher::Matcher;
pub use options::{Options, OversizePolicy};
pub use symbol::Symbol;
