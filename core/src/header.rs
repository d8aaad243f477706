//! This module contains an assortment of types required for interpreting
//! DICOS attributes: the attribute tag, the value length,
//! and the attribute and sequence item headers.

use snafu::{Backtrace, Snafu};
use std::fmt;

pub use crate::vr::VR;

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOS entity (attribute or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the attribute or
    /// item, in bytes.
    ///
    /// The concrete value size may be undefined,
    /// which can be the case for sequences and encapsulated binary values.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing an attribute header.
pub trait Header: HasLength {
    /// Retrieve the attribute's tag.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOS attribute tags.
///
/// Tags are totally ordered by group and then by element,
/// which is also the canonical order of attributes in an encoded data set.
/// A `(u16, u16)` pair converts to this type.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Sequence item tag.
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item delimitation tag.
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence delimitation tag.
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Check whether this tag belongs to a private group
    /// (the group number is odd).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Check whether this tag is a private creator tag,
    /// of the form `(gggg,00xx)` with an odd group and `xx` in `10..=FF`.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Check whether this is a group length tag `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Check whether this tag is one of the item/delimitation tags
    /// in group `FFFE`, which never carry a value representation.
    #[inline]
    pub fn is_delimitation(self) -> bool {
        self.0 == 0xFFFE
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// Two undefined lengths are not equal.
///
/// ```
/// # use dicos_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert_eq!(Length::UNDEFINED.get(), None);
/// assert_eq!(Length(64).get(), Some(64));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

/// A data structure for an attribute header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AttributeHeader {
    /// Attribute tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Value length
    pub len: Length,
}

impl HasLength for AttributeHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for AttributeHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl AttributeHeader {
    /// Create a new attribute header with the given properties.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> AttributeHeader {
        AttributeHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the attribute's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ,
    /// or if it is UN with an undefined length.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.vr == VR::SQ || (self.vr == VR::UN && self.len.is_undefined())
    }

    /// Check whether the header announces encapsulated binary data:
    /// an OB or OW value of undefined length.
    #[inline]
    pub fn is_encapsulated(&self) -> bool {
        matches!(self.vr, VR::OB | VR::OW) && self.len.is_undefined()
    }
}

impl From<SequenceItemHeader> for AttributeHeader {
    fn from(value: SequenceItemHeader) -> AttributeHeader {
        AttributeHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

/// Data type for describing a sequence item header.
/// If the header represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be 0xFFFFFFFF if undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the raw header properties.
    /// An error is raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER => {
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_ordering_is_group_then_element() {
        let mut tags = vec![
            Tag(0x4010, 0x1010),
            Tag(0x0008, 0x0018),
            Tag(0x0008, 0x0016),
            Tag(0x0010, 0x0000),
        ];
        tags.sort();
        assert_eq!(
            tags,
            vec![
                Tag(0x0008, 0x0016),
                Tag(0x0008, 0x0018),
                Tag(0x0010, 0x0000),
                Tag(0x4010, 0x1010),
            ]
        );
    }

    #[test]
    fn private_tags_have_odd_groups() {
        assert!(Tag(0x0009, 0x1001).is_private());
        assert!(Tag(0x6001, 0x0010).is_private_creator());
        assert!(!Tag(0x4010, 0x1011).is_private());
        assert!(!Tag(0x6001, 0x1010).is_private_creator());
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x4010, 0x101a).to_string(), "(4010,101A)");
    }

    #[test]
    fn item_headers() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(16)).unwrap(),
            SequenceItemHeader::Item { len: Length(16) }
        );
        assert!(SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(2)).is_err());
        assert!(SequenceItemHeader::new(Tag(0x0008, 0x0018), Length(0)).is_err());
    }

    #[test]
    fn undefined_length_is_never_equal() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length(12), Length(12));
        assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }
}
