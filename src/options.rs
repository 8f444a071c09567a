use core::fmt;

///
/// What a matcher does with a buffer longer than `max_input_len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OversizePolicy {
    ///
    /// Refuse the buffer with `MatchError::InputTooLarge`
    Reject,
    ///
    /// Evaluate it, but report any full match as final without probing
    AssumeFinal,
}

///
/// Options for a Matcher
#[derive(Clone)]
pub struct Options {
    pub(crate) max_input_len: usize,
    pub(crate) oversize: OversizePolicy,
}

impl Options {
    pub const DEFAULT_MAX_INPUT_LEN: usize = 128;

    ///
    /// Set the longest buffer evaluated normally
    pub fn set_max_input_len(&mut self, len: usize) -> &mut Self {
        self.max_input_len = len;
        self
    }
    ///
    /// Set the behaviour for buffers over the limit
    pub fn set_oversize_policy(&mut self, policy: OversizePolicy) -> &mut Self {
        self.oversize = policy;
        self
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub fn oversize_policy(&self) -> OversizePolicy {
        self.oversize
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
            oversize: OversizePolicy::Reject,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max_input_len={}, oversize={:?}",
            self.max_input_len, self.oversize
        )
    }
}
