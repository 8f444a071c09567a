use core::fmt;

///
/// Returned by a matcher for each buffer it is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchVerdict {
    ///
    /// No continuation of the buffer can ever match
    NoMatch,
    ///
    /// The buffer is valid but incomplete : keep collecting input
    PotentialMatch,
    ///
    /// The buffer matches. When `is_final`, no further symbol can be accepted
    /// and the caller should act now.
    Match { is_final: bool },
}

impl MatchVerdict {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchVerdict::Match { .. })
    }

    pub fn is_final(&self) -> bool {
        matches!(self, MatchVerdict::Match { is_final: true })
    }

    pub fn is_potential(&self) -> bool {
        matches!(self, MatchVerdict::PotentialMatch)
    }
}

impl fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchVerdict::NoMatch => "no match",
            MatchVerdict::PotentialMatch => "potential match",
            MatchVerdict::Match { is_final: false } => "match",
            MatchVerdict::Match { is_final: true } => "max match",
        };
        f.write_str(text)
    }
}
