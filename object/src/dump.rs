//! Human readable text dump of DICOS data sets.
//!
//! Each attribute is printed on one line with its tag, dictionary name,
//! value representation, value multiplicity and a summary of its value.
//! Sequence items are printed below their sequence,
//! indented according to their depth.
//!
//! ```text
//! (0008,0018) SOPInstanceUID               UI (1): "1.2.3.4"
//! (4010,1011) ThreatSequence               SQ (1 Item)
//!   (FFFE,E000) na Item
//!     (4010,1010) PotentialThreatObjectID      US (1): 0
//!   (FFFE,E00D) ItemDelimitationItem
//! (FFFE,E0DD) SequenceDelimitationItem
//! ```
use crate::{FileDicosObject, FileMetaTable};
use dicos_core::value::trim_padding;
use dicos_core::{Attribute, AttributeManager, DataDictionary, Value, VR};
use dicos_dictionary_std::{uids, StandardDataDictionary};
use dicos_encoding::TransferSyntax;
use itertools::{FoldWhile, Itertools};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Result as IoResult, Write};
use std::path::Path;

/// Options and flags to configure how to dump a DICOS data set.
///
/// This is a builder which exposes the various options
/// for dumping a data set into a writer.
///
/// # Example
///
/// ```
/// # use dicos_core::AttributeManager;
/// # use dicos_object::dump::DumpOptions;
/// # let obj = AttributeManager::new();
/// let mut out = Vec::new();
/// DumpOptions::new().width(80).dump_object_to(&mut out, &obj)?;
/// # Result::<(), std::io::Error>::Ok(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// The maximum number of characters per line.
    pub width: u32,
    /// Whether to print complete values, regardless of the width.
    pub no_limit: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            width: 120,
            no_limit: false,
        }
    }
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of characters per line.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = width;
        self
    }

    /// Set whether to print complete values.
    pub fn no_limit(&mut self, no_limit: bool) -> &mut Self {
        self.no_limit = no_limit;
        self
    }

    /// Dump the file meta group and the data set of a DICOS file
    /// to the given writer.
    pub fn dump_file_to(&self, mut to: impl Write, obj: &FileDicosObject) -> IoResult<()> {
        meta_dump(&mut to, obj.meta(), self.width)?;
        writeln!(to, "{:-<1$}", "", self.width as usize)?;
        self.dump_object_to(to, obj.dataset())
    }

    /// Dump the attributes of a data set to the given writer.
    pub fn dump_object_to(&self, mut to: impl Write, obj: &AttributeManager<'_>) -> IoResult<()> {
        dump(&mut to, obj, self, 0)
    }
}

/// Write the attribute tree of a data set as text to the given writer.
pub fn write_as_text(to: impl Write, obj: &AttributeManager<'_>) -> IoResult<()> {
    DumpOptions::new().dump_object_to(to, obj)
}

/// Write the attribute tree of a data set as text into a new file.
pub fn dump_to_file(path: impl AsRef<Path>, obj: &AttributeManager<'_>) -> IoResult<()> {
    let mut to = BufWriter::new(File::create(path)?);
    DumpOptions::new().no_limit(true).dump_object_to(&mut to, obj)?;
    to.flush()
}

/// Dump the contents of a DICOS file to the given writer.
///
/// Both file meta table and main data set are dumped.
pub fn dump_file_to(to: impl Write, obj: &FileDicosObject) -> IoResult<()> {
    DumpOptions::new().dump_file_to(to, obj)
}

fn translate_sop_class(uid: &str) -> Option<&'static str> {
    match uid {
        uids::DICOS_CT_IMAGE_STORAGE => Some("DICOS CT Image Storage"),
        uids::DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION => {
            Some("DICOS Digital X-Ray Image Storage - For Presentation")
        }
        uids::DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING => {
            Some("DICOS Digital X-Ray Image Storage - For Processing")
        }
        uids::DICOS_THREAT_DETECTION_REPORT_STORAGE => Some("DICOS Threat Detection Report Storage"),
        uids::DICOS_2D_AIT_STORAGE => Some("DICOS 2D AIT Storage"),
        uids::DICOS_3D_AIT_STORAGE => Some("DICOS 3D AIT Storage"),
        uids::DICOS_QUADRUPOLE_RESONANCE_STORAGE => Some("DICOS Quadrupole Resonance Storage"),
        _ => None,
    }
}

fn meta_dump<W>(to: &mut W, meta: &FileMetaTable, width: u32) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let sop_class_uid = trim_padding(&meta.media_storage_sop_class_uid);
    match translate_sop_class(sop_class_uid) {
        Some(name) => writeln!(to, "Media Storage SOP Class UID: {} ({})", sop_class_uid, name)?,
        None => writeln!(to, "Media Storage SOP Class UID: {}", sop_class_uid)?,
    }
    writeln!(
        to,
        "Media Storage SOP Instance UID: {}",
        trim_padding(&meta.media_storage_sop_instance_uid),
    )?;
    match TransferSyntax::from_uid(&meta.transfer_syntax) {
        Some(ts) => writeln!(to, "Transfer Syntax: {} ({})", ts.uid(), ts.name())?,
        None => writeln!(
            to,
            "Transfer Syntax: {} («UNKNOWN»)",
            trim_padding(&meta.transfer_syntax)
        )?,
    }
    writeln!(
        to,
        "Implementation Class UID: {}",
        trim_padding(&meta.implementation_class_uid),
    )?;

    if let Some(v) = &meta.implementation_version_name {
        writeln!(to, "Implementation version name: {}", v.trim_end())?;
    }
    if let Some(v) = &meta.source_application_entity_title {
        writeln!(to, "Source Application Entity Title: {}", v.trim_end())?;
    }
    if let Some(v) = &meta.private_information_creator_uid {
        writeln!(to, "Private Information Creator UID: {}", trim_padding(v))?;
    }
    if let Some(v) = &meta.private_information {
        writeln!(
            to,
            "Private Information: {}",
            format_value_list(v.iter().map(|n| format!("{:02X}", n)), Some(width), false)
        )?;
    }

    Ok(())
}

fn dump<W>(to: &mut W, obj: &AttributeManager<'_>, options: &DumpOptions, depth: u32) -> IoResult<()>
where
    W: ?Sized + Write,
{
    for attr in obj.iter() {
        dump_attribute(&mut *to, attr, options, depth)?;
    }
    Ok(())
}

/// Dump a single attribute, including the items of a sequence.
pub fn dump_attribute<W>(
    to: &mut W,
    attr: &Attribute,
    options: &DumpOptions,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let indent = "  ".repeat(depth as usize);
    let tag_alias = StandardDataDictionary
        .by_tag(attr.tag())
        .map(|e| e.alias)
        .unwrap_or("«Unknown Attribute»");
    let max_characters = Some(options.width)
        .filter(|_| !options.no_limit)
        .map(|w| w.saturating_sub(50 + depth * 2));

    match attr.value() {
        Value::Sequence(items) => {
            let n = items.len();
            writeln!(
                to,
                "{}{} {:28} {} ({} Item{})",
                indent,
                attr.tag(),
                tag_alias,
                attr.vr(),
                n,
                if n == 1 { "" } else { "s" },
            )?;
            for item in items {
                writeln!(to, "{}  (FFFE,E000) na Item", indent)?;
                dump(&mut *to, item, options, depth + 2)?;
                writeln!(to, "{}  (FFFE,E00D) ItemDelimitationItem", indent)?;
            }
            writeln!(to, "{}(FFFE,E0DD) SequenceDelimitationItem", indent)?;
        }
        Value::Fragments(fragments) => {
            let n = fragments.len();
            writeln!(
                to,
                "{}{} {:28} {} (PixelSequence, {} Item{})",
                indent,
                attr.tag(),
                tag_alias,
                attr.vr(),
                n,
                if n == 1 { "" } else { "s" },
            )?;
            for fragment in fragments {
                writeln!(
                    to,
                    "{}  (FFFE,E000) pi ({:>3} bytes): {}",
                    indent,
                    fragment.len(),
                    format_value_list(
                        fragment.iter().map(|n| format!("{:02X}", n)),
                        max_characters,
                        false
                    ),
                )?;
            }
            writeln!(to, "{}(FFFE,E0DD) SequenceDelimitationItem", indent)?;
        }
        value => {
            writeln!(
                to,
                "{}{} {:28} {} ({}): {}",
                indent,
                attr.tag(),
                tag_alias,
                attr.vr(),
                value.multiplicity(),
                value_summary(value, attr.vr(), max_characters),
            )?;
        }
    }

    Ok(())
}

fn value_summary(value: &Value, vr: VR, max_characters: Option<u32>) -> String {
    if value.is_empty() {
        return "(no value)".to_string();
    }
    match (value, vr) {
        (Value::Strs(_), VR::DA) if value.multiplicity() == 1 => match value.to_date() {
            Ok(date) => date.to_string(),
            Err(_) => text_summary(value, max_characters),
        },
        (Value::Strs(_), VR::TM) if value.multiplicity() == 1 => match value.to_time() {
            Ok(time) => time.to_string(),
            Err(_) => text_summary(value, max_characters),
        },
        (Value::Strs(_), _) => text_summary(value, max_characters),
        (Value::Tags(values), _) => format_value_list(values, max_characters, false),
        (Value::I16(values), _) => format_value_list(values, max_characters, false),
        (Value::U16(values), VR::OW) => format_value_list(
            values.iter().map(|n| format!("{:04X}", n)),
            max_characters,
            false,
        ),
        (Value::U16(values), _) => format_value_list(values, max_characters, false),
        (Value::I32(values), _) => format_value_list(values, max_characters, false),
        (Value::U32(values), _) => format_value_list(values, max_characters, false),
        (Value::I64(values), _) => format_value_list(values, max_characters, false),
        (Value::U64(values), _) => format_value_list(values, max_characters, false),
        (Value::F32(values), _) => format_value_list(values, max_characters, false),
        (Value::F64(values), _) => format_value_list(values, max_characters, false),
        (Value::Bytes(bytes), _) => format_value_list(
            bytes.iter().map(|n| format!("{:02X}", n)),
            max_characters,
            false,
        ),
        // handled by the caller
        (Value::Fragments(_), _) | (Value::Sequence(_), _) => String::new(),
    }
}

fn text_summary(value: &Value, max_characters: Option<u32>) -> String {
    let values = value.strings().unwrap_or_default();
    format_value_list(values.iter().map(|s| trim_padding(s)), max_characters, true)
}

fn sanitize(piece: &str) -> String {
    piece
        .replace('\n', "␊")
        .replace('\r', "␍")
        .replace('\0', "␀")
        .replace(|c: char| c.is_control(), "�")
}

fn format_value_list<I>(values: I, max_characters: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: std::fmt::Display,
{
    let values = values.into_iter();
    let multiple = values.len() > 1;
    let pieces = values
        .map(|piece| {
            let piece = sanitize(&piece.to_string());
            if quoted {
                format!("\"{}\"", piece.replace('"', "\\\""))
            } else {
                piece
            }
        })
        .fold_while(String::new(), |mut acc, piece| {
            if !acc.is_empty() {
                acc.push_str(", ");
            }
            acc.push_str(&piece);
            // stop earlier if applicable
            match max_characters {
                Some(max) if (max as usize) < acc.len() => FoldWhile::Done(acc),
                _ => FoldWhile::Continue(acc),
            }
        })
        .into_inner();
    let pieces = if multiple {
        format!("[{}]", pieces)
    } else {
        pieces
    };
    match max_characters {
        Some(max) => cut_str(&pieces, max).into_owned(),
        None => pieces,
    }
}

fn cut_str(s: &str, max_characters: u32) -> Cow<str> {
    let max = (max_characters.saturating_sub(3)) as usize;
    let len = s.chars().count();

    if len > max {
        s.chars()
            .take(max)
            .chain("...".chars())
            .collect::<String>()
            .into()
    } else {
        s.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileMetaTableBuilder;
    use dicos_core::{dicos_value, Tag};
    use dicos_dictionary_std::tags;

    fn check_line(line: &str, expected: (&str, &str, &str, &str)) {
        let parts: Vec<&str> = line.split(' ').filter(|p| !p.is_empty()).collect();
        let value = line.split_once(": ").unwrap().1.trim();
        assert_eq!(&parts[..3], &[expected.0, expected.1, expected.2]);
        assert_eq!(value, expected.3);
    }

    fn report() -> AttributeManager<'static> {
        let mut obj = AttributeManager::new();
        obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.888.123").unwrap();
        obj.put_str(tags::INSTANCE_CREATION_DATE, VR::DA, "20170101").unwrap();
        obj.set_attribute(Attribute::empty(tags::CONTENT_DATE, VR::DA));
        obj.put_str(tags::INSTITUTION_NAME, VR::LO, "Airport").unwrap();
        obj.put_str(tags::ABORT_REASON, VR::CS, "NOT_REVIEWED\\OVERSIZE")
            .unwrap();
        let mut item = AttributeManager::new();
        item.put(tags::POTENTIAL_THREAT_OBJECT_ID, VR::US, 0_u16).unwrap();
        obj.set_attribute(Attribute::sequence(tags::THREAT_SEQUENCE, vec![item]));
        obj.put(tags::BOUNDING_POLYGON, VR::FL, dicos_value!(F32, [0.5, 1.0]))
            .unwrap();
        obj.put(Tag(0x0009, 0x1002), VR::OB, vec![0xAB_u8, 0x01]).unwrap();
        obj
    }

    #[test]
    fn dump_object_covers_properties() {
        let mut out = Vec::new();
        write_as_text(&mut out, &report()).unwrap();
        let text = std::str::from_utf8(&out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        check_line(lines[0], ("(0008,0012)", "InstanceCreationDate", "DA", "2017-01-01"));
        check_line(lines[1], ("(0008,0018)", "SOPInstanceUID", "UI", "\"1.2.888.123\""));
        check_line(lines[2], ("(0008,0023)", "ContentDate", "DA", "(no value)"));
        check_line(lines[3], ("(0008,0080)", "InstitutionName", "LO", "\"Airport\""));
        check_line(lines[4], ("(0009,1002)", "«Unknown", "Attribute»", "[AB, 01]"));
        assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), [
            "(4010,1011)",
            "ThreatSequence",
            "SQ",
            "(1",
            "Item)"
        ]);
        assert_eq!(lines[6], "  (FFFE,E000) na Item");
        check_line(lines[7], ("(4010,1010)", "PotentialThreatObjectID", "US", "0"));
        assert!(lines[7].starts_with("    (4010,1010)"));
        assert_eq!(lines[8], "  (FFFE,E00D) ItemDelimitationItem");
        assert_eq!(lines[9], "(FFFE,E0DD) SequenceDelimitationItem");
        check_line(lines[10], ("(4010,101D)", "BoundingPolygon", "FL", "[0.5, 1]"));
        check_line(
            lines[11],
            ("(4010,1021)", "AbortReason", "CS", "[\"NOT_REVIEWED\", \"OVERSIZE\"]"),
        );
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn long_values_are_cut() {
        let mut obj = AttributeManager::new();
        obj.put(tags::PIXEL_DATA, VR::OB, vec![0x55_u8; 200]).unwrap();
        let mut out = Vec::new();
        DumpOptions::new().width(80).dump_object_to(&mut out, &obj).unwrap();
        let text = String::from_utf8(out).unwrap();
        let value = text.trim_end().split_once(": ").unwrap().1;
        assert!(value.ends_with("..."));
        assert_eq!(value.chars().count(), 30);

        let mut out = Vec::new();
        DumpOptions::new()
            .width(80)
            .no_limit(true)
            .dump_object_to(&mut out, &obj)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("..."));
    }

    #[test]
    fn dump_file_includes_meta() {
        let mut dataset = AttributeManager::new();
        dataset
            .put_str(tags::SOP_CLASS_UID, VR::UI, uids::DICOS_THREAT_DETECTION_REPORT_STORAGE)
            .unwrap();
        dataset.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4").unwrap();
        let obj = FileDicosObject::with_meta(
            dataset,
            FileMetaTableBuilder::new().transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
        )
        .unwrap();

        let mut out = Vec::new();
        dump_file_to(&mut out, &obj).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Media Storage SOP Class UID: 1.2.840.10008.5.1.4.1.1.501.3 (DICOS Threat Detection Report Storage)"
        );
        assert_eq!(lines[1], "Media Storage SOP Instance UID: 1.2.3.4");
        assert_eq!(
            lines[2],
            "Transfer Syntax: 1.2.840.10008.1.2.1 (Explicit VR Little Endian)"
        );
        assert!(text.contains("SOPInstanceUID"));
    }
}
