//! Value representations and the encoding rules attached to each of them.
//!
//! Every rule needed by the codec and by value validation
//! is a `match` over [`VR`]: the width of the length field
//! in explicit VR transfer syntaxes, the padding byte,
//! whether an undefined length is admitted,
//! and the length and character repertoire of each value component.

use chrono::NaiveDate;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// An enum type for a DICOS value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

/// The broad family of values that a value representation admits.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum ValueFamily {
    /// Backslash delimited character strings.
    Text,
    /// Fixed width binary numbers (including attribute tags).
    Numeric,
    /// Opaque byte buffers.
    Blob,
    /// Nested items.
    Sequence,
}

/// The reason why a single string component is not admissible
/// for a value representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentViolation {
    /// The component exceeds the maximum number of characters.
    TooLong {
        /// number of characters in the component
        len: usize,
        /// maximum number of characters admitted
        max: usize,
    },
    /// The component contains a character outside of the repertoire.
    InvalidCharacter(char),
    /// The component does not follow the required format.
    Malformed(&'static str),
}

impl fmt::Display for ComponentViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComponentViolation::TooLong { len, max } => {
                write!(f, "{} characters exceed the maximum of {}", len, max)
            }
            ComponentViolation::InvalidCharacter(c) => {
                write!(f, "character {:?} is not allowed", c)
            }
            ComponentViolation::Malformed(what) => write!(f, "malformed value: {}", what),
        }
    }
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// The family of values held by attributes of this VR.
    pub fn family(self) -> ValueFamily {
        use VR::*;
        match self {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR
            | UT => ValueFamily::Text,
            AT | FL | FD | OD | OF | OL | OV | SL | SS | SV | UL | US | UV => {
                ValueFamily::Numeric
            }
            OB | OW | UN => ValueFamily::Blob,
            SQ => ValueFamily::Sequence,
        }
    }

    /// Whether the value length field in explicit VR transfer syntaxes
    /// is 32 bits wide (preceded by two reserved bytes).
    ///
    /// Per PS3.5 7.1.2, the VRs AE, AS, AT, CS, DA, DS, DT, FL, FD, IS, LO,
    /// LT, PN, SH, SL, SS, ST, TM, UI, UL and US use a 16-bit length field;
    /// all the others use the reserved bytes and a 32-bit length.
    pub fn has_long_length(self) -> bool {
        use VR::*;
        !matches!(
            self,
            AE | AS | AT | CS | DA | DS | DT | FL | FD | IS | LO | LT | PN | SH | SL | SS | ST
                | TM | UI | UL | US
        )
    }

    /// Whether an attribute of this VR may be encoded with an
    /// undefined length and delimiter based framing.
    pub fn allows_undefined_length(self) -> bool {
        matches!(self, VR::SQ | VR::OB | VR::OW | VR::UN)
    }

    /// The byte used to pad values to an even length.
    ///
    /// UIDs and binary values are padded with `0x00`,
    /// all other text values with a space.
    pub fn padding(self) -> u8 {
        match self.family() {
            ValueFamily::Text if self != VR::UI => b' ',
            _ => 0,
        }
    }

    /// The width in bytes of each value of a numeric VR.
    pub fn numeric_width(self) -> Option<usize> {
        use VR::*;
        match self {
            SS | US => Some(2),
            AT | FL | OF | OL | SL | UL => Some(4),
            FD | OD | OV | SV | UV => Some(8),
            _ => None,
        }
    }

    /// Whether this text VR is restricted to a single value,
    /// in which case backslashes are part of the text.
    pub fn is_single_valued(self) -> bool {
        matches!(self, VR::LT | VR::ST | VR::UT | VR::UR)
    }

    /// The maximum number of characters of each component of a text VR.
    pub fn max_component_len(self) -> Option<usize> {
        use VR::*;
        match self {
            AE | CS | DS | SH => Some(16),
            AS => Some(4),
            DA => Some(8),
            DT => Some(26),
            IS => Some(12),
            LO | UI => Some(64),
            LT => Some(10240),
            PN => Some(64 * 3 + 2),
            ST => Some(1024),
            TM => Some(14),
            _ => None,
        }
    }

    /// Check a single value component against this VR's
    /// length and character repertoire.
    ///
    /// Trailing padding is expected to be removed already.
    /// Non-text VRs admit any component.
    pub fn check_component(self, component: &str) -> Result<(), ComponentViolation> {
        use VR::*;
        if self.family() != ValueFamily::Text {
            return Ok(());
        }

        let len = component.chars().count();
        if let Some(max) = self.max_component_len() {
            if len > max {
                return Err(ComponentViolation::TooLong { len, max });
            }
        }

        if !self.is_single_valued() {
            if let Some(c) = component.chars().find(|c| *c == '\\') {
                return Err(ComponentViolation::InvalidCharacter(c));
            }
        }

        let check_chars = |pred: &dyn Fn(char) -> bool| -> Result<(), ComponentViolation> {
            match component.chars().find(|c| !pred(*c)) {
                Some(c) => Err(ComponentViolation::InvalidCharacter(c)),
                None => Ok(()),
            }
        };

        match self {
            AE | LO | SH | UC | PN => check_chars(&|c| !c.is_control() || c == '\x1b'),
            LT | ST | UT => {
                check_chars(&|c| !c.is_control() || matches!(c, '\r' | '\n' | '\t' | '\x0c' | '\x1b'))
            }
            UR => check_chars(&|c| !c.is_control()),
            CS => check_chars(&|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ' || c == '_'),
            UI => check_chars(&|c| c.is_ascii_digit() || c == '.'),
            IS => {
                check_chars(&|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')?;
                let trimmed = component.trim();
                if trimmed.is_empty() {
                    return Ok(());
                }
                match trimmed.parse::<i64>() {
                    Ok(v) if i32::try_from(v).is_ok() => Ok(()),
                    Ok(_) => Err(ComponentViolation::Malformed("integer string out of range")),
                    Err(_) => Err(ComponentViolation::Malformed("not an integer string")),
                }
            }
            DS => {
                check_chars(&|c| {
                    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E' | ' ')
                })?;
                let trimmed = component.trim();
                if trimmed.is_empty() || trimmed.parse::<f64>().is_ok() {
                    Ok(())
                } else {
                    Err(ComponentViolation::Malformed("not a decimal string"))
                }
            }
            AS => {
                let bytes = component.as_bytes();
                if component.is_empty()
                    || (bytes.len() == 4
                        && bytes[..3].iter().all(u8::is_ascii_digit)
                        && matches!(bytes[3], b'D' | b'W' | b'M' | b'Y'))
                {
                    Ok(())
                } else {
                    Err(ComponentViolation::Malformed("age string must be nnnD, nnnW, nnnM or nnnY"))
                }
            }
            DA => {
                check_chars(&|c| c.is_ascii_digit())?;
                if component.is_empty() {
                    return Ok(());
                }
                if component.len() != 8 {
                    return Err(ComponentViolation::Malformed("date must be YYYYMMDD"));
                }
                parse_date(component)
                    .map(|_| ())
                    .ok_or(ComponentViolation::Malformed("not a calendar date"))
            }
            TM => {
                check_chars(&|c| c.is_ascii_digit() || c == '.' || c == ':')?;
                if component.is_empty() || component.len() >= 2 {
                    Ok(())
                } else {
                    Err(ComponentViolation::Malformed("time must start with HH"))
                }
            }
            DT => check_chars(&|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-')),
            _ => Ok(()),
        }
    }
}

/// Parse a `YYYYMMDD` date string.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let y = s[0..4].parse().ok()?;
    let m = s[4..6].parse().ok()?;
    let d = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_round_trip() {
        assert_eq!(VR::from_binary(*b"SQ"), Some(VR::SQ));
        assert_eq!(VR::from_binary(*b"sq"), None);
        assert_eq!(VR::from_binary([0, 0]), None);
        assert_eq!(VR::UV.to_bytes(), *b"UV");
    }

    #[test]
    fn length_field_widths() {
        for vr in [VR::US, VR::UI, VR::SH, VR::FD, VR::AT, VR::PN] {
            assert!(!vr.has_long_length(), "{} should use a 16-bit length", vr);
        }
        for vr in [VR::OB, VR::OW, VR::SQ, VR::UT, VR::UN, VR::UC, VR::SV, VR::OF] {
            assert!(vr.has_long_length(), "{} should use a 32-bit length", vr);
        }
    }

    #[test]
    fn padding_bytes() {
        assert_eq!(VR::UI.padding(), 0);
        assert_eq!(VR::SH.padding(), b' ');
        assert_eq!(VR::OB.padding(), 0);
    }

    #[test]
    fn short_string_components() {
        assert!(VR::SH.check_component("BAG 01").is_ok());
        assert_eq!(
            VR::SH.check_component("A\\B"),
            Err(ComponentViolation::InvalidCharacter('\\'))
        );
        assert_eq!(
            VR::SH.check_component("0123456789ABCDEFG"),
            Err(ComponentViolation::TooLong { len: 17, max: 16 })
        );
    }

    #[test]
    fn numeric_strings() {
        assert!(VR::DS.check_component("-1.5E3").is_ok());
        assert!(VR::DS.check_component("1.2.3").is_err());
        assert!(VR::IS.check_component("+42").is_ok());
        assert!(VR::IS.check_component("9999999999").is_err());
    }

    #[test]
    fn dates_and_codes() {
        assert!(VR::DA.check_component("20240229").is_ok());
        assert!(VR::DA.check_component("20230229").is_err());
        assert!(VR::CS.check_component("ABORT").is_ok());
        assert!(VR::CS.check_component("abort").is_err());
        assert!(VR::UI.check_component("1.2.840.10008.1.2.1").is_ok());
        assert!(VR::UI.check_component("1.2.a").is_err());
    }
}
