//! Attribute values: the sum type over the four value families
//! (text, numeric, binary blob, sequence),
//! with strongly checked getters and lenient conversions.

use crate::header::Tag;
use crate::manager::AttributeManager;
use crate::vr::{parse_date, ValueFamily};
use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;
use num_traits::NumCast;
use smallvec::SmallVec;
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// An aggregation of one or more values.
pub type C<T> = SmallVec<[T; 2]>;

/// An item of a sequence: a nested attribute manager
/// which always owns its attributes.
pub type Item = AttributeManager<'static>;

/// Representation of a full DICOS attribute value.
///
/// The variant in use is fixed by the attribute's value representation
/// (see [`VR::family`](crate::VR::family)).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Zero or more string components.
    /// Used for AE, AS, CS, DA, DS, DT, IS, LO, LT, PN, SH, ST, TM, UC, UI, UR and UT.
    Strs(C<String>),
    /// A sequence of attribute tags. Used for AT.
    Tags(C<Tag>),
    /// Signed 16-bit integers. Used for SS.
    I16(C<i16>),
    /// Unsigned 16-bit integers. Used for US.
    U16(C<u16>),
    /// Signed 32-bit integers. Used for SL.
    I32(C<i32>),
    /// Unsigned 32-bit integers. Used for UL and OL.
    U32(C<u32>),
    /// Signed 64-bit integers. Used for SV.
    I64(C<i64>),
    /// Unsigned 64-bit integers. Used for UV and OV.
    U64(C<u64>),
    /// Single precision floating point numbers. Used for FL and OF.
    F32(C<f32>),
    /// Double precision floating point numbers. Used for FD and OD.
    F64(C<f64>),
    /// An opaque byte buffer. Used for OB, OW and UN.
    Bytes(Vec<u8>),
    /// Encapsulated binary data: OB or OW of undefined length,
    /// kept as the sequence of raw fragments.
    Fragments(Vec<Vec<u8>>),
    /// The items of a sequence. Used for SQ.
    Sequence(Vec<Item>),
}

/// An enum representing the variant of a value,
/// used for error reporting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ValueType {
    /// string components
    Strs,
    /// attribute tags
    Tags,
    /// i16 values
    I16,
    /// u16 values
    U16,
    /// i32 values
    I32,
    /// u32 values
    U32,
    /// i64 values
    I64,
    /// u64 values
    U64,
    /// f32 values
    F32,
    /// f64 values
    F64,
    /// byte buffer
    Bytes,
    /// encapsulated fragments
    Fragments,
    /// sequence items
    Sequence,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An error type for an attempt of accessing a value
/// in one internal representation as another.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// An error type for a failed attempt at converting a value
/// into another representation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConvertValueError {
    /// The value is empty.
    #[snafu(display("cannot convert an empty value to {}", requested))]
    Empty {
        requested: &'static str,
        backtrace: Backtrace,
    },
    /// The value is of a variant which cannot be converted.
    #[snafu(display("cannot convert {} to {}", original, requested))]
    Incompatible {
        requested: &'static str,
        original: ValueType,
        backtrace: Backtrace,
    },
    /// The textual value could not be parsed.
    #[snafu(display("could not parse {:?} as {}", text, requested))]
    Parse {
        text: String,
        requested: &'static str,
        backtrace: Backtrace,
    },
    /// The number does not fit in the requested type.
    #[snafu(display("number out of range for {}", requested))]
    OutOfRange {
        requested: &'static str,
        backtrace: Backtrace,
    },
}

/// Construct a DICOS value.
///
/// ```
/// # use dicos_core::{dicos_value, value::Value};
/// let v = dicos_value!(U16, [1, 2, 3]);
/// assert_eq!(v.multiplicity(), 3);
/// let s = dicos_value!(Strs, ["BAG", "CT"]);
/// assert_eq!(s.multiplicity(), 2);
/// ```
#[macro_export]
macro_rules! dicos_value {
    (Strs, [ $($elem: expr),* ]) => {
        $crate::value::Value::Strs($crate::smallvec::smallvec![$(String::from($elem),)*])
    };
    ($typ: ident, [ $($elem: expr),* ]) => {
        $crate::value::Value :: $typ ($crate::smallvec::smallvec![$($elem,)*])
    };
    (Str, $elem: expr) => {
        $crate::value::Value::Strs($crate::value::C::from_elem(String::from($elem), 1))
    };
    ($typ: ident, $elem: expr) => {
        $crate::value::Value :: $typ ($crate::value::C::from_elem($elem, 1))
    };
}

macro_rules! impl_from_for_value {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for Value {
            fn from(value: $typ) -> Self {
                Value::$variant(C::from_elem(value, 1))
            }
        }

        impl From<Vec<$typ>> for Value {
            fn from(value: Vec<$typ>) -> Self {
                Value::$variant(C::from_vec(value))
            }
        }
    };
}

impl_from_for_value!(Tag, Tags);
impl_from_for_value!(i16, I16);
impl_from_for_value!(u16, U16);
impl_from_for_value!(i32, I32);
impl_from_for_value!(u32, U32);
impl_from_for_value!(i64, I64);
impl_from_for_value!(u64, U64);
impl_from_for_value!(f32, F32);
impl_from_for_value!(f64, F64);

impl From<&str> for Value {
    /// Split the string into components by backslash.
    fn from(value: &str) -> Self {
        Value::from_text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::from_text(&value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Item>> for Value {
    fn from(items: Vec<Item>) -> Self {
        Value::Sequence(items)
    }
}

/// Macro for implementing getters to single and multi-values of each variant.
macro_rules! impl_value_getters {
    ($name_single: ident, $name_multi: ident, $variant: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        /// If it contains multiple values, only the first one is returned.
        /// An error is returned if the variant is not compatible.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            match self {
                Value::$variant(c) if !c.is_empty() => Ok(c[0]),
                value => Err(CastValueError {
                    requested: stringify!($name_single),
                    got: value.value_type(),
                }),
            }
        }

        /// Get a sequence of values of the requested type without copying.
        /// An error is returned if the variant is not compatible.
        pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
            match self {
                Value::$variant(c) => Ok(c),
                value => Err(CastValueError {
                    requested: stringify!($name_multi),
                    got: value.value_type(),
                }),
            }
        }
    };
}

/// Macro for implementing bit-level integer accessors,
/// which reinterpret the stored binary width as the requested width.
macro_rules! impl_width_getters {
    ($($name: ident -> $ret: ty),*) => {
        $(
            /// Read the value at `index` as the requested integer width.
            ///
            /// Stored integers are sign-extended (signed) or zero-extended
            /// (unsigned) when widened and truncated when narrowed,
            /// as with an `as` conversion from the stored width.
            /// Floating point values are truncated towards zero.
            /// Returns `None` for non-numeric values or an index out of bounds.
            #[allow(clippy::unnecessary_cast, trivial_numeric_casts)]
            pub fn $name(&self, index: usize) -> Option<$ret> {
                match self {
                    Value::I16(c) => c.get(index).map(|v| *v as $ret),
                    Value::U16(c) => c.get(index).map(|v| *v as $ret),
                    Value::I32(c) => c.get(index).map(|v| *v as $ret),
                    Value::U32(c) => c.get(index).map(|v| *v as $ret),
                    Value::I64(c) => c.get(index).map(|v| *v as $ret),
                    Value::U64(c) => c.get(index).map(|v| *v as $ret),
                    Value::F32(c) => c.get(index).map(|v| *v as $ret),
                    Value::F64(c) => c.get(index).map(|v| *v as $ret),
                    _ => None,
                }
            }
        )*
    };
}

impl Value {
    /// Build a text value out of a backslash delimited string.
    ///
    /// Trailing padding (spaces and null characters) is removed from each
    /// component, and an empty string yields no components at all.
    pub fn from_text(text: &str) -> Self {
        let trimmed = trim_padding(text);
        if trimmed.is_empty() {
            return Value::Strs(C::new());
        }
        Value::Strs(trimmed.split('\\').map(|s| trim_padding(s).to_owned()).collect())
    }

    /// Build a text value out of a single component
    /// without interpreting backslashes,
    /// as used by single valued text VRs (LT, ST, UT, UR).
    pub fn from_single_text(text: &str) -> Self {
        let trimmed = trim_padding(text);
        if trimmed.is_empty() {
            Value::Strs(C::new())
        } else {
            Value::Strs(C::from_elem(trimmed.to_owned(), 1))
        }
    }

    /// Build a text value out of its components.
    pub fn from_strings<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: C<String> = components
            .into_iter()
            .map(|s| {
                let s = s.into();
                trim_padding(&s).to_owned()
            })
            .collect();
        if components.len() == 1 && components[0].is_empty() {
            Value::Strs(C::new())
        } else {
            Value::Strs(components)
        }
    }

    /// Create an empty value of the given family.
    pub fn empty(family: ValueFamily) -> Self {
        match family {
            ValueFamily::Text => Value::Strs(C::new()),
            ValueFamily::Numeric => Value::U16(C::new()),
            ValueFamily::Blob => Value::Bytes(Vec::new()),
            ValueFamily::Sequence => Value::Sequence(Vec::new()),
        }
    }

    /// The family of this value.
    pub fn family(&self) -> ValueFamily {
        match self {
            Value::Strs(_) => ValueFamily::Text,
            Value::Bytes(_) | Value::Fragments(_) => ValueFamily::Blob,
            Value::Sequence(_) => ValueFamily::Sequence,
            _ => ValueFamily::Numeric,
        }
    }

    /// Retrieve the variant of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Strs(_) => ValueType::Strs,
            Value::Tags(_) => ValueType::Tags,
            Value::I16(_) => ValueType::I16,
            Value::U16(_) => ValueType::U16,
            Value::I32(_) => ValueType::I32,
            Value::U32(_) => ValueType::U32,
            Value::I64(_) => ValueType::I64,
            Value::U64(_) => ValueType::U64,
            Value::F32(_) => ValueType::F32,
            Value::F64(_) => ValueType::F64,
            Value::Bytes(_) => ValueType::Bytes,
            Value::Fragments(_) => ValueType::Fragments,
            Value::Sequence(_) => ValueType::Sequence,
        }
    }

    /// Obtain the value multiplicity:
    /// the number of string components, numbers, tags or sequence items.
    /// A non-empty byte buffer counts as a single value.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Strs(c) => c.len() as u32,
            Value::Tags(c) => c.len() as u32,
            Value::I16(c) => c.len() as u32,
            Value::U16(c) => c.len() as u32,
            Value::I32(c) => c.len() as u32,
            Value::U32(c) => c.len() as u32,
            Value::I64(c) => c.len() as u32,
            Value::U64(c) => c.len() as u32,
            Value::F32(c) => c.len() as u32,
            Value::F64(c) => c.len() as u32,
            Value::Bytes(b) => <u32 as From<bool>>::from(!b.is_empty()),
            Value::Fragments(f) => <u32 as From<bool>>::from(!f.is_empty()),
            Value::Sequence(items) => items.len() as u32,
        }
    }

    /// Whether the value holds no data.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Get the string components of a text value.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            Value::Strs(c) => Ok(c),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    /// Get the first string component of a text value.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            Value::Strs(c) if !c.is_empty() => Ok(&c[0]),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Get the byte buffer of a blob value.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            Value::Bytes(b) => Ok(b),
            value => Err(CastValueError {
                requested: "bytes",
                got: value.value_type(),
            }),
        }
    }

    /// Get the fragments of an encapsulated value.
    pub fn fragments(&self) -> Result<&[Vec<u8>], CastValueError> {
        match self {
            Value::Fragments(f) => Ok(f),
            value => Err(CastValueError {
                requested: "fragments",
                got: value.value_type(),
            }),
        }
    }

    /// Get the items of a sequence value.
    pub fn items(&self) -> Option<&[Item]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get mutable access to the items of a sequence value.
    pub fn items_mut(&mut self) -> Option<&mut Vec<Item>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    impl_value_getters!(tag, tags, Tags, Tag);
    impl_value_getters!(int16, int16_slice, I16, i16);
    impl_value_getters!(uint16, uint16_slice, U16, u16);
    impl_value_getters!(int32, int32_slice, I32, i32);
    impl_value_getters!(uint32, uint32_slice, U32, u32);
    impl_value_getters!(int64, int64_slice, I64, i64);
    impl_value_getters!(uint64, uint64_slice, U64, u64);
    impl_value_getters!(float32, float32_slice, F32, f32);
    impl_value_getters!(float64, float64_slice, F64, f64);

    impl_width_getters!(
        get_u16 -> u16,
        get_i16 -> i16,
        get_u32 -> u32,
        get_i32 -> i32,
        get_u64 -> u64,
        get_i64 -> i64,
        get_f32 -> f32,
        get_f64 -> f64
    );

    /// Retrieve the full value as a single string.
    ///
    /// Text components are joined with a backslash,
    /// numbers and tags are printed and joined likewise.
    /// Binary data and sequences cannot be converted.
    pub fn to_str(&self) -> Result<Cow<'_, str>, CastValueError> {
        match self {
            Value::Strs(c) if c.len() == 1 => Ok(Cow::from(c[0].as_str())),
            Value::Strs(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::Tags(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::I16(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::U16(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::I32(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::U32(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::I64(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::U64(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::F32(c) => Ok(Cow::from(c.iter().join("\\"))),
            Value::F64(c) => Ok(Cow::from(c.iter().join("\\"))),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Retrieve and convert the first value into an integer.
    ///
    /// Integer strings (IS) are parsed, binary numbers are cast
    /// with a range check.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
        T: FromStr,
    {
        self.to_multi_int::<T>()?
            .into_iter()
            .next()
            .ok_or_else(|| EmptySnafu { requested: "integer" }.build())
    }

    /// Retrieve and convert all values into integers.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast,
        T: FromStr,
    {
        fn cast<T: NumCast, N: num_traits::ToPrimitive>(v: N) -> Result<T, ConvertValueError> {
            T::from(v).ok_or_else(|| OutOfRangeSnafu { requested: "integer" }.build())
        }

        match self {
            Value::Strs(c) => c
                .iter()
                .map(|s| {
                    let trimmed = s.trim();
                    trimmed.parse::<T>().map_err(|_| {
                        ParseSnafu {
                            text: trimmed.to_owned(),
                            requested: "integer",
                        }
                        .build()
                    })
                })
                .collect(),
            Value::I16(c) => c.iter().map(|v| cast(*v)).collect(),
            Value::U16(c) => c.iter().map(|v| cast(*v)).collect(),
            Value::I32(c) => c.iter().map(|v| cast(*v)).collect(),
            Value::U32(c) => c.iter().map(|v| cast(*v)).collect(),
            Value::I64(c) => c.iter().map(|v| cast(*v)).collect(),
            Value::U64(c) => c.iter().map(|v| cast(*v)).collect(),
            value => IncompatibleSnafu {
                requested: "integer",
                original: value.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve and convert the first value into a double precision float.
    ///
    /// Decimal strings (DS) and integer strings (IS) are parsed.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.to_multi_float64()?
            .into_iter()
            .next()
            .ok_or_else(|| EmptySnafu { requested: "float64" }.build())
    }

    /// Retrieve and convert all values into double precision floats.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        match self {
            Value::Strs(c) => c
                .iter()
                .map(|s| {
                    let trimmed = s.trim();
                    trimmed.parse::<f64>().map_err(|_| {
                        ParseSnafu {
                            text: trimmed.to_owned(),
                            requested: "float64",
                        }
                        .build()
                    })
                })
                .collect(),
            Value::F32(c) => Ok(c.iter().map(|v| <f64 as From<_>>::from(*v)).collect()),
            Value::F64(c) => Ok(c.to_vec()),
            Value::I16(c) => Ok(c.iter().map(|v| <f64 as From<_>>::from(*v)).collect()),
            Value::U16(c) => Ok(c.iter().map(|v| <f64 as From<_>>::from(*v)).collect()),
            Value::I32(c) => Ok(c.iter().map(|v| <f64 as From<_>>::from(*v)).collect()),
            Value::U32(c) => Ok(c.iter().map(|v| <f64 as From<_>>::from(*v)).collect()),
            Value::I64(c) => Ok(c.iter().map(|v| *v as f64).collect()),
            Value::U64(c) => Ok(c.iter().map(|v| *v as f64).collect()),
            value => IncompatibleSnafu {
                requested: "float64",
                original: value.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve the first component as a calendar date (`YYYYMMDD`).
    pub fn to_date(&self) -> Result<NaiveDate, ConvertValueError> {
        let text = self.first_text("date")?;
        parse_date(text).ok_or_else(|| {
            ParseSnafu {
                text: text.to_owned(),
                requested: "date",
            }
            .build()
        })
    }

    /// Retrieve the first component as a time of day
    /// (`HH`, `HHMM`, `HHMMSS` or `HHMMSS.FFFFFF`).
    pub fn to_time(&self) -> Result<NaiveTime, ConvertValueError> {
        let text = self.first_text("time")?;
        let fail = || {
            ParseSnafu {
                text: text.to_owned(),
                requested: "time",
            }
            .build()
        };
        let (hms, frac) = match text.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (text, None),
        };
        let field = |range: std::ops::Range<usize>| -> Result<u32, ConvertValueError> {
            match hms.get(range) {
                Some(s) => s.parse().map_err(|_| fail()),
                None => Ok(0),
            }
        };
        if hms.len() < 2 || hms.len() % 2 != 0 || hms.len() > 6 {
            return Err(fail());
        }
        let micro = match frac {
            Some(f) if !f.is_empty() && f.len() <= 6 => {
                let digits: u32 = f.parse().map_err(|_| fail())?;
                digits * 10u32.pow(6 - f.len() as u32)
            }
            Some(_) => return Err(fail()),
            None => 0,
        };
        NaiveTime::from_hms_micro_opt(field(0..2)?, field(2..4)?, field(4..6)?, micro)
            .ok_or_else(fail)
    }

    fn first_text(&self, requested: &'static str) -> Result<&str, ConvertValueError> {
        match self {
            Value::Strs(c) if c.is_empty() => EmptySnafu { requested }.fail(),
            Value::Strs(c) => Ok(c[0].as_str()),
            value => IncompatibleSnafu {
                requested,
                original: value.value_type(),
            }
            .fail(),
        }
    }
}

/// Remove trailing padding (spaces and null characters) from a string.
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c| c == ' ' || c == '\0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicos_value;

    #[test]
    fn text_components() {
        let v = Value::from_text("1.5\\-2 ");
        assert_eq!(v.multiplicity(), 2);
        assert_eq!(v.strings().unwrap(), &["1.5".to_string(), "-2".to_string()]);
        assert_eq!(v.to_multi_float64().unwrap(), vec![1.5, -2.]);
        assert_eq!(Value::from_text("").multiplicity(), 0);
        assert_eq!(Value::from_strings([""]), Value::from_text(""));
    }

    #[test]
    fn width_reinterpretation() {
        let v = dicos_value!(I16, [-1]);
        assert_eq!(v.get_i32(0), Some(-1));
        assert_eq!(v.get_u16(0), Some(0xFFFF));
        assert_eq!(v.get_u32(0), Some(0xFFFF_FFFF));

        let v = dicos_value!(U16, [0xFFFF]);
        assert_eq!(v.get_i32(0), Some(0xFFFF));
        assert_eq!(v.get_i16(0), Some(-1));

        let v = dicos_value!(U32, [0x0001_0002]);
        assert_eq!(v.get_u16(0), Some(2));
        assert_eq!(v.get_u16(1), None);
    }

    #[test]
    fn integer_conversion() {
        assert_eq!(Value::from_text("42").to_int::<u16>().unwrap(), 42);
        assert_eq!(dicos_value!(U32, [7, 8]).to_multi_int::<i64>().unwrap(), vec![7, 8]);
        assert!(matches!(
            dicos_value!(I32, [-5]).to_int::<u16>(),
            Err(ConvertValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            Value::Bytes(vec![1, 2]).to_int::<u16>(),
            Err(ConvertValueError::Incompatible { .. })
        ));
    }

    #[test]
    fn date_and_time() {
        let v = Value::from_text("20231125");
        assert_eq!(v.to_date().unwrap(), NaiveDate::from_ymd_opt(2023, 11, 25).unwrap());
        let t = Value::from_text("101530.25");
        assert_eq!(
            t.to_time().unwrap(),
            NaiveTime::from_hms_micro_opt(10, 15, 30, 250_000).unwrap()
        );
        assert!(Value::from_text("1015301").to_time().is_err());
    }

    #[test]
    fn joined_string() {
        assert_eq!(dicos_value!(Strs, ["A", "B"]).to_str().unwrap(), "A\\B");
        assert_eq!(dicos_value!(U16, [1, 2]).to_str().unwrap(), "1\\2");
    }
}
