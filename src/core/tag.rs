//! The `Tag` trait shared by every closed identifier enum in the crate.
//!
//! Component kinds, connection states and connection phases are all small,
//! fixed sets of values known at compile time. They share this trait so the
//! lookup tables, the phase history and the console output can treat them
//! uniformly.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed, compile-time set of identifiers.
///
/// All methods are pure. Implementations are normally generated with
/// [`tag_enum!`](crate::tag_enum), which also provides `Display` in terms of
/// [`Tag::name`].
///
/// # Example
///
/// ```rust
/// use neural_adapter::core::Tag;
/// use neural_adapter::tag_enum;
///
/// tag_enum! {
///     enum Lobe {
///         Occipital => "Occipital",
///         Parietal => "Parietal",
///     }
/// }
///
/// assert_eq!(Lobe::Occipital.name(), "Occipital");
/// assert_eq!(Lobe::ALL.len(), 2);
/// ```
pub trait Tag:
    Copy + Eq + Hash + Debug + Display + Serialize + DeserializeOwned + Send + Sync
{
    /// Human-readable label used in console output and logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::tag_enum! {
        enum TestTag {
            First => "First tag",
            Second => "Second tag",
            Last => "Last tag",
        }
    }

    #[test]
    fn name_returns_label() {
        assert_eq!(TestTag::First.name(), "First tag");
        assert_eq!(TestTag::Second.name(), "Second tag");
        assert_eq!(TestTag::Last.name(), "Last tag");
    }

    #[test]
    fn display_matches_name() {
        for tag in TestTag::ALL {
            assert_eq!(tag.to_string(), tag.name());
        }
    }

    #[test]
    fn all_lists_variants_in_declaration_order() {
        assert_eq!(
            TestTag::ALL,
            &[TestTag::First, TestTag::Second, TestTag::Last]
        );
    }

    #[test]
    fn tag_serializes_by_variant_name() {
        let json = serde_json::to_string(&TestTag::Second).unwrap();
        assert_eq!(json, "\"Second\"");
        let back: TestTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestTag::Second);
    }
}
