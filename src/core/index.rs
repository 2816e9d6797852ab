use std::fmt;

/// A display position in the currently shown supplier list. Users type
/// 1-based indices; the value is stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Builds an index from user input. Returns `None` for zero, which has
    /// no zero-based counterpart.
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Index)
    }

    pub fn from_zero_based(value: usize) -> Self {
        Index(value)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_conversion() {
        let index = Index::from_one_based(1).unwrap();
        assert_eq!(index.zero_based(), 0);
        assert_eq!(index.one_based(), 1);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Index::from_zero_based(4).to_string(), "5");
    }
}
