use std::fmt;
use std::num::NonZeroUsize;

/// A 1-based position in a displayed list.
///
/// Always positive. Whether it is in bounds is only known once it is
/// resolved against the list the user is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Returns `None` for 0
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Self)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
