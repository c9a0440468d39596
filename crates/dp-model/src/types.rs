//! Semantic column types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The semantic type assigned to a column by the classifier.
///
/// Exactly one tag is assigned per column. `Empty`, `Constant` and `Unique`
/// are the degenerate cases and only carry the common statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassifiedType {
    /// No non-missing value at all.
    Empty,
    /// A single distinct value and no missing entries.
    Constant,
    /// Every value distinct in a non-numeric column (identifier-like).
    Unique,
    /// Two categories, where missingness may act as the second one.
    Binary,
    /// Numeric, non-binary.
    Interval,
    /// Temporal, either stored as such or parsed from text.
    Datetime,
    /// Categorical, non-binary.
    Nominal,
}

impl ClassifiedType {
    /// Returns the type name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ClassifiedType::Empty => "Empty",
            ClassifiedType::Constant => "Constant",
            ClassifiedType::Unique => "Unique",
            ClassifiedType::Binary => "Binary",
            ClassifiedType::Interval => "Interval",
            ClassifiedType::Datetime => "Datetime",
            ClassifiedType::Nominal => "Nominal",
        }
    }

    /// Returns the table statistics key counting columns of this type,
    /// e.g. `n_Binary_var`.
    pub fn count_key(self) -> String {
        format!("n_{}_var", self.as_str())
    }

    /// Returns true for the types that only carry common statistics.
    pub fn is_degenerate(self) -> bool {
        matches!(
            self,
            ClassifiedType::Empty | ClassifiedType::Constant | ClassifiedType::Unique
        )
    }
}

impl fmt::Display for ClassifiedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_key() {
        assert_eq!(ClassifiedType::Binary.count_key(), "n_Binary_var");
        assert_eq!(ClassifiedType::Interval.count_key(), "n_Interval_var");
    }

    #[test]
    fn test_degenerate_types() {
        assert!(ClassifiedType::Empty.is_degenerate());
        assert!(ClassifiedType::Unique.is_degenerate());
        assert!(!ClassifiedType::Binary.is_degenerate());
        assert!(!ClassifiedType::Nominal.is_degenerate());
    }
}
