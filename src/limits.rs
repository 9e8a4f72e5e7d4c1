use crate::common::{UInt, MAX_SAFE_INTEGER};

/// Upper bounds applied to every expression, so that adversarial input
/// such as `99999999d6` is rejected instead of exhausting memory.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    /// Longest accepted input, in bytes.
    pub max_input_len: usize,
    /// Deepest accepted nesting of parentheses.
    pub max_depth: usize,
    /// Most dice a single term may roll.
    pub max_count: UInt,
    /// Most faces a single die may have. Never above `2^53 - 1`.
    pub max_faces: UInt,
    /// Most dice rolled across a whole expression, nested terms included.
    pub max_rolls: usize,
}

impl Limits {
    pub const fn new() -> Self {
        Self {
            max_input_len: 1000,
            max_depth: 32,
            max_count: 1000,
            max_faces: MAX_SAFE_INTEGER,
            max_rolls: 1000,
        }
    }

    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    pub fn with_max_count(mut self, max: UInt) -> Self {
        self.max_count = max;
        self
    }

    pub fn with_max_faces(mut self, max: UInt) -> Self {
        self.max_faces = max.min(MAX_SAFE_INTEGER);
        self
    }

    pub fn with_max_rolls(mut self, max: usize) -> Self {
        self.max_rolls = max;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
