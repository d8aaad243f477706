//! The DICOS attribute: a tag, a fixed value representation, and a value.

use crate::header::{Tag, VR};
use crate::value::{CastValueError, ConvertValueError, Item, Value, ValueType};
use crate::vr::{ComponentViolation, ValueFamily};
use num_traits::NumCast;
use snafu::{ensure, Snafu};
use std::borrow::Cow;
use std::str::FromStr;

/// The reason why a value was rejected for an attribute.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum SetValueError {
    /// The value variant does not match the value representation.
    #[snafu(display("{} value is not compatible with VR {}", got, vr))]
    IncompatibleValue { vr: VR, got: ValueType },
    /// A string component violates the value representation's rules.
    #[snafu(display("component #{} of VR {} is invalid: {}", index, vr, violation))]
    InvalidComponent {
        vr: VR,
        index: usize,
        violation: ComponentViolation,
    },
    /// The value representation admits a single value only.
    #[snafu(display("VR {} admits a single value, got {}", vr, vm))]
    Multiplicity { vr: VR, vm: u32 },
    /// A byte buffer of odd length was given to a word-oriented VR.
    #[snafu(display("VR {} requires an even number of bytes, got {}", vr, len))]
    OddLength { vr: VR, len: usize },
}

/// A data type that represents and owns a DICOS attribute.
///
/// The value representation is set on construction and never changes.
/// Values passed through [`Attribute::new`] and [`Attribute::set_value`]
/// are checked against the VR's rules;
/// values decoded from a stream are kept as read
/// and can be re-checked with [`Attribute::is_valid`].
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    tag: Tag,
    vr: VR,
    value: Value,
}

impl Attribute {
    /// Create an attribute after validating the value against the VR.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Result<Self, SetValueError>
    where
        T: Into<Value>,
    {
        let value = normalize(vr, value.into());
        check_value(vr, &value)?;
        Ok(Attribute { tag, vr, value })
    }

    /// Create an attribute without checking the value.
    ///
    /// The value variant should still belong to the VR's family,
    /// as the encoder relies on it.
    pub fn new_unchecked(tag: Tag, vr: VR, value: Value) -> Self {
        Attribute { tag, vr, value }
    }

    /// Create an attribute with an empty value,
    /// as emitted for Type 2 attributes without a value.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        Attribute {
            tag,
            vr,
            value: empty_value(vr),
        }
    }

    /// Create a text attribute from a backslash delimited string.
    ///
    /// Single valued VRs (LT, ST, UT, UR) take the string as a whole.
    pub fn from_text(tag: Tag, vr: VR, text: &str) -> Result<Self, SetValueError> {
        let value = if vr.is_single_valued() {
            Value::from_single_text(text)
        } else {
            Value::from_text(text)
        };
        Attribute::new(tag, vr, value)
    }

    /// Create a sequence attribute holding the given items.
    pub fn sequence(tag: Tag, items: Vec<Item>) -> Self {
        Attribute {
            tag,
            vr: VR::SQ,
            value: Value::Sequence(items),
        }
    }

    /// Retrieve the attribute's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the attribute's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the attribute's value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Move the value out of the attribute.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The value multiplicity (VM).
    pub fn multiplicity(&self) -> u32 {
        self.value.multiplicity()
    }

    /// Whether the attribute holds no value (VM 0).
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the attribute's value.
    ///
    /// The new value is checked against the value representation;
    /// on failure the attribute is left unchanged.
    pub fn set_value<T>(&mut self, value: T) -> Result<(), SetValueError>
    where
        T: Into<Value>,
    {
        let value = normalize(self.vr, value.into());
        check_value(self.vr, &value)?;
        self.value = value;
        Ok(())
    }

    /// Replace the attribute's value with the given backslash delimited text.
    pub fn set_str(&mut self, text: &str) -> Result<(), SetValueError> {
        let value = if self.vr.is_single_valued() {
            Value::from_single_text(text)
        } else {
            Value::from_text(text)
        };
        self.set_value(value)
    }

    /// Check the current value against the value representation.
    pub fn validate(&self) -> Result<(), SetValueError> {
        check_value(self.vr, &self.value)
    }

    /// Check whether the current value follows the value representation's rules.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get the items of a sequence attribute.
    pub fn items(&self) -> Option<&[Item]> {
        self.value.items()
    }

    /// Get mutable access to the items of a sequence attribute.
    pub fn items_mut(&mut self) -> Option<&mut Vec<Item>> {
        self.value.items_mut()
    }

    /// Replace the items of a sequence attribute.
    pub fn set_items(&mut self, items: Vec<Item>) -> Result<(), SetValueError> {
        self.set_value(Value::Sequence(items))
    }

    /// Retrieve the value as a single string,
    /// joining multiple components with a backslash.
    pub fn to_str(&self) -> Result<Cow<'_, str>, CastValueError> {
        self.value.to_str()
    }

    /// Get the first string component.
    pub fn string(&self) -> Result<&str, CastValueError> {
        self.value.string()
    }

    /// Get all string components.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        self.value.strings()
    }

    /// Retrieve and convert the first value into an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        self.value.to_int()
    }

    /// Retrieve and convert all values into integers.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        self.value.to_multi_int()
    }

    /// Retrieve and convert the first value into a double precision float.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.value.to_float64()
    }

    /// Retrieve and convert all values into double precision floats.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        self.value.to_multi_float64()
    }
}

/// The empty value in the variant the decoder produces for the VR.
fn empty_value(vr: VR) -> Value {
    match vr {
        VR::AT => Value::Tags(Default::default()),
        VR::SS => Value::I16(Default::default()),
        VR::SL => Value::I32(Default::default()),
        VR::UL | VR::OL => Value::U32(Default::default()),
        VR::SV => Value::I64(Default::default()),
        VR::UV | VR::OV => Value::U64(Default::default()),
        VR::FL | VR::OF => Value::F32(Default::default()),
        VR::FD | VR::OD => Value::F64(Default::default()),
        vr => Value::empty(vr.family()),
    }
}

/// Bring a value into the form it takes once encoded and decoded again:
/// OB buffers are padded to an even length,
/// text components lose their trailing padding,
/// and empty numeric values take the VR's own variant.
fn normalize(vr: VR, value: Value) -> Value {
    match (vr, value) {
        (VR::OB, Value::Bytes(mut bytes)) if bytes.len() % 2 == 1 => {
            bytes.push(0);
            Value::Bytes(bytes)
        }
        (_, Value::Strs(components)) => Value::from_strings(components),
        (vr, value)
            if vr.family() == ValueFamily::Numeric
                && value.family() == ValueFamily::Numeric
                && value.is_empty() =>
        {
            empty_value(vr)
        }
        (_, value) => value,
    }
}

/// Check whether the value variant is the one expected for the VR.
fn variant_matches(vr: VR, value: &Value) -> bool {
    match (vr.family(), value) {
        (ValueFamily::Text, Value::Strs(_)) => true,
        (ValueFamily::Blob, Value::Bytes(_)) => true,
        (ValueFamily::Blob, Value::Fragments(_)) => matches!(vr, VR::OB | VR::OW),
        (ValueFamily::Sequence, Value::Sequence(_)) => true,
        (ValueFamily::Numeric, value) => matches!(
            (vr, value),
            (VR::AT, Value::Tags(_))
                | (VR::SS, Value::I16(_))
                | (VR::US, Value::U16(_))
                | (VR::SL, Value::I32(_))
                | (VR::UL | VR::OL, Value::U32(_))
                | (VR::SV, Value::I64(_))
                | (VR::UV | VR::OV, Value::U64(_))
                | (VR::FL | VR::OF, Value::F32(_))
                | (VR::FD | VR::OD, Value::F64(_))
        ),
        _ => false,
    }
}

fn check_value(vr: VR, value: &Value) -> Result<(), SetValueError> {
    ensure!(
        variant_matches(vr, value),
        IncompatibleValueSnafu {
            vr,
            got: value.value_type()
        }
    );

    match value {
        Value::Strs(components) => {
            let vm = components.len() as u32;
            ensure!(
                !vr.is_single_valued() || vm <= 1,
                MultiplicitySnafu { vr, vm }
            );
            for (index, component) in components.iter().enumerate() {
                vr.check_component(component)
                    .map_err(|violation| SetValueError::InvalidComponent {
                        vr,
                        index,
                        violation,
                    })?;
            }
            Ok(())
        }
        Value::Bytes(bytes) if vr == VR::OW => {
            ensure!(
                bytes.len() % 2 == 0,
                OddLengthSnafu {
                    vr,
                    len: bytes.len()
                }
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicos_value;
    use crate::manager::AttributeManager;

    #[test]
    fn short_string_rejects_backslash_and_keeps_value() {
        let mut attr = Attribute::from_text(Tag(0x4010, 0x101A), VR::SH, "BP-1").unwrap();

        assert!(attr.set_value(dicos_value!(Str, "A\\B")).is_err());
        assert!(attr.set_value(dicos_value!(Str, "0123456789ABCDEFG")).is_err());
        assert_eq!(attr.string().unwrap(), "BP-1");
        assert_eq!(attr.multiplicity(), 1);
    }

    #[test]
    fn decimal_string_with_two_components() {
        let mut attr = Attribute::empty(Tag(0x0028, 0x0030), VR::DS);
        attr.set_str("0.5\\0.75").unwrap();
        assert_eq!(attr.multiplicity(), 2);
        assert_eq!(attr.strings().unwrap()[0], "0.5");
        assert_eq!(attr.strings().unwrap()[1], "0.75");
        assert_eq!(attr.to_multi_float64().unwrap(), vec![0.5, 0.75]);
    }

    #[test]
    fn single_valued_text_keeps_backslashes() {
        let attr = Attribute::from_text(Tag(0x4010, 0x1013), VR::LT, "a\\b").unwrap();
        assert_eq!(attr.multiplicity(), 1);
        assert_eq!(attr.string().unwrap(), "a\\b");

        let err = Attribute::new(Tag(0x4010, 0x1013), VR::LT, dicos_value!(Strs, ["a", "b"]));
        assert!(matches!(err, Err(SetValueError::Multiplicity { vm: 2, .. })));
    }

    #[test]
    fn variant_must_match_vr() {
        let err = Attribute::new(Tag(0x4010, 0x1010), VR::US, dicos_value!(I32, [1]));
        assert!(matches!(err, Err(SetValueError::IncompatibleValue { .. })));
        assert!(Attribute::new(Tag(0x4010, 0x1010), VR::US, 5u16).is_ok());
        assert!(Attribute::new(Tag(0x0028, 0x0120), VR::SS, -1i16).is_ok());
    }

    #[test]
    fn byte_buffers_are_padded_or_rejected() {
        let ob = Attribute::new(Tag(0x4010, 0x1006), VR::OB, vec![1u8, 2, 3]).unwrap();
        assert_eq!(ob.value().bytes().unwrap(), &[1, 2, 3, 0]);
        let ow = Attribute::new(Tag(0x7FE0, 0x0010), VR::OW, vec![1u8, 2, 3]);
        assert!(matches!(ow, Err(SetValueError::OddLength { len: 3, .. })));
    }

    #[test]
    fn sequence_items() {
        let mut item = AttributeManager::new();
        item.set_attribute(Attribute::new(Tag(0x4010, 0x1010), VR::US, 0u16).unwrap());
        let mut seq = Attribute::sequence(Tag(0x4010, 0x1011), vec![]);
        assert_eq!(seq.multiplicity(), 0);
        seq.set_items(vec![item.clone()]).unwrap();
        assert_eq!(seq.items().unwrap().len(), 1);
        assert_eq!(seq.items().unwrap()[0], item);
    }

    #[test]
    fn decoded_values_can_be_rechecked() {
        let attr = Attribute::new_unchecked(
            Tag(0x4010, 0x1027),
            VR::CS,
            dicos_value!(Str, "not upper"),
        );
        assert!(!attr.is_valid());
    }

    #[test]
    fn empty_numeric_value_takes_the_variant_of_the_vr() {
        let attr = Attribute::new(Tag(0x4010, 0x1017), VR::FL, Value::empty(ValueFamily::Numeric))
            .unwrap();
        assert!(matches!(attr.value(), Value::F32(v) if v.is_empty()));
        assert_eq!(attr, Attribute::empty(Tag(0x4010, 0x1017), VR::FL));
        assert!(attr.is_valid());

        // a non-empty value of the wrong variant is still refused
        let err = Attribute::new(Tag(0x4010, 0x1017), VR::FL, dicos_value!(U16, [1]));
        assert!(matches!(err, Err(SetValueError::IncompatibleValue { .. })));
    }

    #[test]
    fn trailing_padding_is_not_stored() {
        let attr = Attribute::new(Tag(0x4010, 0x101A), VR::SH, dicos_value!(Str, "A ")).unwrap();
        assert_eq!(attr.string().unwrap(), "A");

        let attr = Attribute::from_text(Tag(0x0008, 0x0060), VR::CS, r"CT \DX").unwrap();
        assert_eq!(attr.strings().unwrap()[0], "CT");
        assert_eq!(attr.strings().unwrap()[1], "DX");

        let attr = Attribute::new(Tag(0x4010, 0x101A), VR::SH, dicos_value!(Str, " ")).unwrap();
        assert_eq!(attr.multiplicity(), 0);
    }
}
