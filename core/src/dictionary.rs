//! This module contains the concept of a DICOS data dictionary.
//!
//! The standard dictionary lives in the `dicos-dictionary-std` crate.
//! Decoders take any [`DataDictionary`]
//! to resolve the value representation of attributes
//! encoded with an implicit VR transfer syntax.

use crate::header::{Tag, VR};
use std::fmt;

/** Type trait for a dictionary of DICOS attributes. Attribute dictionaries provide the
 * means to convert a tag to an alias and vice versa, as well as a form of retrieving
 * additional information about the attribute.
 *
 * The methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait DataDictionary: fmt::Debug {
    /// The type of the dictionary entry.
    type Entry: DictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "SOPInstanceUID").
    /// Aliases are case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Resolve a tag to its value representation and alias.
    ///
    /// A miss is not an error:
    /// it signals a private or otherwise unrecognized attribute.
    fn lookup(&self, tag: Tag) -> Option<(VR, &str)> {
        self.by_tag(tag).map(|e| (e.vr(), e.alias()))
    }
}

/// The dictionary entry data type, representing a DICOS attribute.
pub trait DictionaryEntry {
    /// The range of tags covered by this entry.
    fn tag_range(&self) -> TagRange;
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;
    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
    /// The admitted value multiplicity of the attribute.
    fn vm(&self) -> ValueMultiplicity;
}

/// The tags matched by a dictionary entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// A single tag.
    Single(Tag),
    /// Any group length element `(gggg,0000)`.
    GroupLength,
    /// Any private creator element `(gggg,0010-00FF)` with `gggg` odd.
    PrivateCreator,
}

impl TagRange {
    /// Check whether the given tag falls in this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::GroupLength => tag.is_group_length(),
            TagRange::PrivateCreator => tag.is_private_creator(),
        }
    }
}

/// The value multiplicity admitted by an attribute,
/// in the form `min`, `min-max`, or `min-n` with an optional step
/// (as in `2-2n`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValueMultiplicity {
    min: u32,
    max: Option<u32>,
    step: u32,
}

impl ValueMultiplicity {
    /// VM `1`.
    pub const ONE: ValueMultiplicity = ValueMultiplicity::exactly(1);
    /// VM `1-n`.
    pub const ONE_OR_MORE: ValueMultiplicity = ValueMultiplicity::at_least(1);

    /// Exactly `n` values.
    pub const fn exactly(n: u32) -> Self {
        ValueMultiplicity {
            min: n,
            max: Some(n),
            step: 1,
        }
    }

    /// Between `min` and `max` values, inclusive.
    pub const fn range(min: u32, max: u32) -> Self {
        ValueMultiplicity {
            min,
            max: Some(max),
            step: 1,
        }
    }

    /// At least `min` values.
    pub const fn at_least(min: u32) -> Self {
        ValueMultiplicity {
            min,
            max: None,
            step: 1,
        }
    }

    /// Any positive multiple of `step` values (`step-step*n`).
    pub const fn multiple_of(step: u32) -> Self {
        ValueMultiplicity {
            min: step,
            max: None,
            step,
        }
    }

    /// Check whether a value of multiplicity `vm` conforms.
    ///
    /// An empty value (VM 0) is always accepted here,
    /// since whether it may be empty is a matter of the attribute's requirement type.
    pub fn contains(self, vm: u32) -> bool {
        if vm == 0 {
            return true;
        }
        vm >= self.min && self.max.map_or(true, |max| vm <= max) && vm % self.step == 0
    }
}

impl fmt::Display for ValueMultiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{}-{}", self.min, max),
            None if self.step > 1 => write!(f, "{}-{}n", self.min, self.step),
            None => write!(f, "{}-n", self.min),
        }
    }
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
    /// The value multiplicity of the attribute
    pub vm: ValueMultiplicity,
}

impl<'a> DictionaryEntry for DictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
    fn vm(&self) -> ValueMultiplicity {
        self.vm
    }
}

/// An empty attribute dictionary.
///
/// With this dictionary, every attribute of an implicit VR data set
/// is read as an unrecognized one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_name(&self, _: &str) -> Option<&DictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DictionaryEntryRef<'static>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicity_rules() {
        assert!(ValueMultiplicity::ONE.contains(1));
        assert!(!ValueMultiplicity::ONE.contains(2));
        assert!(ValueMultiplicity::ONE.contains(0));
        assert!(ValueMultiplicity::range(1, 3).contains(3));
        assert!(!ValueMultiplicity::range(1, 3).contains(4));
        assert!(ValueMultiplicity::multiple_of(2).contains(4));
        assert!(!ValueMultiplicity::multiple_of(2).contains(3));
        assert!(ValueMultiplicity::ONE_OR_MORE.contains(100));
    }

    #[test]
    fn multiplicity_display() {
        assert_eq!(ValueMultiplicity::ONE.to_string(), "1");
        assert_eq!(ValueMultiplicity::range(1, 3).to_string(), "1-3");
        assert_eq!(ValueMultiplicity::ONE_OR_MORE.to_string(), "1-n");
        assert_eq!(ValueMultiplicity::multiple_of(2).to_string(), "2-2n");
    }

    #[test]
    fn tag_ranges() {
        assert!(TagRange::GroupLength.contains(Tag(0x0002, 0x0000)));
        assert!(TagRange::PrivateCreator.contains(Tag(0x0009, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0008, 0x0010)));
        assert!(StubDataDictionary.lookup(Tag(0x0008, 0x0018)).is_none());
    }
}
