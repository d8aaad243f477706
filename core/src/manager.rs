//! The attribute manager: an ordered map of attributes by tag,
//! the in-memory form of a DICOS data set and of each sequence item.

use crate::attribute::{Attribute, SetValueError};
use crate::header::{Tag, VR};
use crate::value::{Item, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A DICOS data set held in memory,
/// as an ordered mapping from tag to attribute.
///
/// Attributes are kept in tag order regardless of insertion order,
/// and at most one attribute exists per tag.
/// Each entry is either owned by the manager
/// ([`set_attribute`](Self::set_attribute))
/// or a borrowed reference to an attribute owned elsewhere
/// ([`set_reference`](Self::set_reference)),
/// in which case the borrow checker ties the manager's lifetime `'a`
/// to the referenced attribute.
/// Sequence items are always fully owned (`AttributeManager<'static>`).
///
/// # Example
///
/// ```
/// # use dicos_core::{Attribute, AttributeManager, Tag, VR};
/// let uid = Attribute::from_text(Tag(0x0008, 0x0018), VR::UI, "1.2").unwrap();
/// let mut mgr = AttributeManager::new();
/// mgr.set_reference(&uid);
/// assert!(mgr.is_reference(Tag(0x0008, 0x0018)));
/// assert_eq!(mgr.find_attribute(Tag(0x0008, 0x0018)), Some(&uid));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeManager<'a> {
    entries: BTreeMap<Tag, Cow<'a, Attribute>>,
}

/// One entry of a tag listing, see [`AttributeManager::tag_listing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagListing {
    /// Nesting depth: 0 for attributes of the listed manager,
    /// 1 for attributes of its sequence items, and so on.
    pub depth: usize,
    /// Index of the enclosing item within its sequence,
    /// `None` at depth 0.
    pub item: Option<usize>,
    /// The attribute tag.
    pub tag: Tag,
    /// The attribute value representation.
    pub vr: VR,
}

impl<'a> AttributeManager<'a> {
    /// Create a new empty attribute manager.
    pub fn new() -> Self {
        AttributeManager {
            entries: BTreeMap::new(),
        }
    }

    /// Insert an attribute owned by the manager,
    /// replacing any attribute with the same tag.
    pub fn set_attribute(&mut self, attr: Attribute) {
        self.entries.insert(attr.tag(), Cow::Owned(attr));
    }

    /// Insert a non-owning reference to an attribute,
    /// replacing any attribute with the same tag.
    ///
    /// Reads through the manager observe the referenced storage.
    pub fn set_reference(&mut self, attr: &'a Attribute) {
        self.entries.insert(attr.tag(), Cow::Borrowed(attr));
    }

    /// Create and insert a text attribute from a backslash delimited string.
    pub fn put_str(&mut self, tag: Tag, vr: VR, text: &str) -> Result<(), SetValueError> {
        self.set_attribute(Attribute::from_text(tag, vr, text)?);
        Ok(())
    }

    /// Create and insert an attribute with the given value.
    pub fn put<T>(&mut self, tag: Tag, vr: VR, value: T) -> Result<(), SetValueError>
    where
        T: Into<Value>,
    {
        self.set_attribute(Attribute::new(tag, vr, value)?);
        Ok(())
    }

    /// Look up an attribute by tag.
    pub fn find_attribute(&self, tag: Tag) -> Option<&Attribute> {
        self.entries.get(&tag).map(|e| e.as_ref())
    }

    /// Look up an attribute by tag for modification.
    ///
    /// A referenced attribute is copied into the manager first,
    /// so that the caller's attribute is never modified through the manager.
    pub fn find_attribute_mut(&mut self, tag: Tag) -> Option<&mut Attribute> {
        self.entries.get_mut(&tag).map(|e| e.to_mut())
    }

    /// Check whether an attribute with the given tag is present.
    pub fn has_attribute(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Check whether the attribute with the given tag
    /// is a non-owning reference.
    pub fn is_reference(&self, tag: Tag) -> bool {
        matches!(self.entries.get(&tag), Some(Cow::Borrowed(_)))
    }

    /// Remove the attribute with the given tag,
    /// returning whether it was present.
    pub fn remove_attribute(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Remove the attribute with the given tag and return an owned copy of it.
    pub fn take_attribute(&mut self, tag: Tag) -> Option<Attribute> {
        self.entries.remove(&tag).map(Cow::into_owned)
    }

    /// The number of attributes at this level (not counting nested items).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manager holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the attributes in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> + '_ {
        self.entries.values().map(|e| e.as_ref())
    }

    /// Iterate over the tags in order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Remove all attributes, releasing owned values.
    pub fn free_memory(&mut self) {
        self.entries.clear();
    }

    /// Obtain the first string component of a text attribute.
    pub fn string(&self, tag: Tag) -> Option<&str> {
        self.find_attribute(tag).and_then(|a| a.string().ok())
    }

    /// Obtain the items of a sequence attribute.
    pub fn items(&self, tag: Tag) -> Option<&[Item]> {
        self.find_attribute(tag).and_then(Attribute::items)
    }

    /// Produce a listing of the tags in this manager.
    ///
    /// If `recursive`, the items of every sequence are visited depth-first
    /// right after the sequence attribute itself.
    pub fn tag_listing(&self, recursive: bool) -> Vec<TagListing> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_listing(recursive, 0, None, &mut out);
        out
    }

    fn collect_listing(
        &self,
        recursive: bool,
        depth: usize,
        item: Option<usize>,
        out: &mut Vec<TagListing>,
    ) {
        for attr in self.iter() {
            out.push(TagListing {
                depth,
                item,
                tag: attr.tag(),
                vr: attr.vr(),
            });
            if recursive {
                if let Some(items) = attr.items() {
                    for (i, nested) in items.iter().enumerate() {
                        nested.collect_listing(true, depth + 1, Some(i), out);
                    }
                }
            }
        }
    }

    /// Copy every attribute of `other` into this manager,
    /// replacing attributes with the same tag and keeping all others.
    pub fn merge_from(&mut self, other: &AttributeManager<'_>) {
        for attr in other.iter() {
            self.set_attribute(attr.clone());
        }
    }

    /// Turn this manager into one which owns all of its attributes,
    /// copying the referenced ones.
    pub fn into_owned(self) -> AttributeManager<'static> {
        AttributeManager {
            entries: self
                .entries
                .into_iter()
                .map(|(tag, e)| (tag, Cow::Owned(e.into_owned())))
                .collect(),
        }
    }

    /// Create a copy of this manager which owns all of its attributes.
    pub fn to_owned_manager(&self) -> AttributeManager<'static> {
        AttributeManager {
            entries: self
                .entries
                .iter()
                .map(|(tag, e)| (*tag, Cow::Owned(e.as_ref().clone())))
                .collect(),
        }
    }
}

impl<'a, 'b> PartialEq<AttributeManager<'b>> for AttributeManager<'a> {
    /// Structural equality: the same tags holding equal attributes,
    /// recursing into sequence items in order.
    /// Whether an entry is owned or referenced does not matter.
    fn eq(&self, other: &AttributeManager<'b>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Extend<Attribute> for AttributeManager<'_> {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attr in iter {
            self.set_attribute(attr);
        }
    }
}

impl FromIterator<Attribute> for AttributeManager<'_> {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut mgr = AttributeManager::new();
        mgr.extend(iter);
        mgr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicos_value;

    fn uid(text: &str) -> Attribute {
        Attribute::from_text(Tag(0x0008, 0x0018), VR::UI, text).unwrap()
    }

    fn threat_sequence(ids: &[u16]) -> Attribute {
        let items = ids
            .iter()
            .map(|id| {
                let mut item = AttributeManager::new();
                item.put(Tag(0x4010, 0x1010), VR::US, *id).unwrap();
                item
            })
            .collect();
        Attribute::sequence(Tag(0x4010, 0x1011), items)
    }

    #[test]
    fn one_attribute_per_tag() {
        let mut mgr = AttributeManager::new();
        mgr.set_attribute(uid("1.2"));
        mgr.set_attribute(uid("1.3"));
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.string(Tag(0x0008, 0x0018)), Some("1.3"));
    }

    #[test]
    fn canonical_order_is_tag_order() {
        let mut mgr = AttributeManager::new();
        mgr.set_attribute(threat_sequence(&[1]));
        mgr.set_attribute(uid("1.2"));
        mgr.put_str(Tag(0x0008, 0x0016), VR::UI, "1.2.3").unwrap();
        let tags: Vec<_> = mgr.tags().collect();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0016), Tag(0x0008, 0x0018), Tag(0x4010, 0x1011)]
        );
    }

    #[test]
    fn missing_attribute() {
        let mgr = AttributeManager::new();
        assert!(mgr.find_attribute(Tag(0x0008, 0x0018)).is_none());
        assert!(!mgr.has_attribute(Tag(0x0008, 0x0018)));
    }

    #[test]
    fn references_observe_caller_storage_and_detach_on_write() {
        let shared = uid("1.2");
        let mut mgr = AttributeManager::new();
        mgr.set_reference(&shared);
        assert!(mgr.is_reference(Tag(0x0008, 0x0018)));

        mgr.find_attribute_mut(Tag(0x0008, 0x0018))
            .unwrap()
            .set_str("1.9")
            .unwrap();
        assert!(!mgr.is_reference(Tag(0x0008, 0x0018)));
        assert_eq!(shared.string().unwrap(), "1.2");
        assert_eq!(mgr.string(Tag(0x0008, 0x0018)), Some("1.9"));
    }

    #[test]
    fn equality_ignores_ownership_and_recurses() {
        let shared = uid("1.2");
        let mut a = AttributeManager::new();
        a.set_reference(&shared);
        a.set_attribute(threat_sequence(&[1, 2]));

        let mut b = AttributeManager::new();
        b.set_attribute(threat_sequence(&[1, 2]));
        b.set_attribute(uid("1.2"));
        assert_eq!(a, b);

        b.set_attribute(threat_sequence(&[2, 1]));
        assert_ne!(a, b);
    }

    #[test]
    fn recursive_listing() {
        let mut mgr = AttributeManager::new();
        mgr.set_attribute(uid("1.2"));
        mgr.set_attribute(threat_sequence(&[4, 5]));

        let flat = mgr.tag_listing(false);
        assert_eq!(flat.len(), 2);

        let deep = mgr.tag_listing(true);
        assert_eq!(deep.len(), 4);
        assert_eq!(deep[2].depth, 1);
        assert_eq!(deep[2].item, Some(0));
        assert_eq!(deep[3].item, Some(1));
        assert_eq!(deep[3].tag, Tag(0x4010, 0x1010));
    }

    #[test]
    fn merge_overwrites_only_present_tags() {
        let mut base = AttributeManager::new();
        base.set_attribute(uid("1.2"));
        base.put(Tag(0x4010, 0x1033), VR::US, dicos_value!(U16, [3])).unwrap();

        let mut update = AttributeManager::new();
        update.put(Tag(0x4010, 0x1033), VR::US, 4u16).unwrap();
        base.merge_from(&update);

        assert_eq!(base.string(Tag(0x0008, 0x0018)), Some("1.2"));
        assert_eq!(
            base.find_attribute(Tag(0x4010, 0x1033)).unwrap().to_int::<u16>().unwrap(),
            4
        );
    }
}
