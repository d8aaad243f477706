//! Data element dictionary implementation

use crate::tags::ENTRIES;
use dicos_core::dictionary::{
    DataDictionary, DictionaryEntryRef, TagRange::*, ValueMultiplicity,
};
use dicos_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 2),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        if let Single(tag) = entry.tag {
            self.by_tag.insert(tag, entry);
        }
        self
    }

    /// The number of attributes with a specific tag in the registry.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: GroupLength,
    alias: "GenericGroupLength",
    vr: VR::UL,
    vm: ValueMultiplicity::ONE,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: PrivateCreator,
    alias: "PrivateCreator",
    vr: VR::LO,
    vm: ValueMultiplicity::ONE,
};

/// A data element dictionary which consults
/// the library's global DICOS attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when reading DICOS objects.
///
/// The dictionary index is automatically initialized upon the first use,
/// and is immutable from then on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DictionaryEntryRef<'static>> {
        registry().by_tag.get(&tag).copied().or_else(|| {
            // check for private creator
            if tag.is_private_creator() {
                return Some(&PRIVATE_CREATOR_ENTRY);
            }
            // check for group length
            if tag.is_group_length() {
                return Some(&GROUP_LENGTH_ENTRY);
            }

            None
        })
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOS Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // the generic entries are not listed,
    // inserting them manually for name lookup
    d.by_name.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d.by_name.insert("PrivateCreator", &PRIVATE_CREATOR_ENTRY);
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dicos_core::dictionary::{
        DataDictionary, DictionaryEntryRef, TagRange::*, ValueMultiplicity,
    };
    use dicos_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("SOPInstanceUID"),
            Some(&DictionaryEntryRef {
                tag: Single(Tag(0x0008, 0x0018)),
                alias: "SOPInstanceUID",
                vr: VR::UI,
                vm: ValueMultiplicity::ONE,
            })
        );

        let threats = dict
            .by_tag(Tag(0x4010, 0x1011))
            .expect("Threat Sequence attribute should exist");
        assert_eq!(threats.alias, "ThreatSequence");
        assert_eq!(threats.vr, VR::SQ);

        assert_eq!(
            dict.lookup(Tag(0x4010, 0x1010)),
            Some((VR::US, "PotentialThreatObjectID"))
        );
        assert_eq!(
            dict.by_tag(Tag(0x4010, 0x101D)).map(|e| e.vm),
            Some(ValueMultiplicity::at_least(6))
        );
    }

    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(SOP_INSTANCE_UID, Tag(0x0008, 0x0018));
        assert_eq!(THREAT_SEQUENCE, Tag(0x4010, 0x1011));
        assert_eq!(POTENTIAL_THREAT_OBJECT_ID, Tag(0x4010, 0x1010));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(TRANSFER_SYNTAX_UID, Tag(0x0002, 0x0010));
    }

    #[test]
    fn has_group_length_tags() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_tag(crate::tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .map(|e| e.alias),
            Some("FileMetaInformationGroupLength"),
        );

        // generic group length
        assert_eq!(
            dict.by_tag(Tag(0x4010, 0x0000)),
            Some(&DictionaryEntryRef {
                tag: GroupLength,
                alias: "GenericGroupLength",
                vr: VR::UL,
                vm: ValueMultiplicity::ONE,
            }),
        );
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary::default();

        assert_eq!(dict.lookup(Tag(0x0009, 0x0010)), Some((VR::LO, "PrivateCreator")));
        assert_eq!(dict.lookup(Tag(0x00ED, 0x00FF)), Some((VR::LO, "PrivateCreator")));
        // private data elements are not known
        assert_eq!(dict.lookup(Tag(0x0009, 0x1010)), None);
    }
}
