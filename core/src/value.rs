//! Decoded field values
//!
//! Reads primitives out of a bounded byte view. The view is the target's own
//! memory, so multi-byte values are decoded in native byte order.

use std::fmt;

use structdump_shared::FieldType;

/// A single decoded primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    I8(i8),
    I16(i16),
    I32(i32),
    F32(f32),
    F64(f64),
}

impl FieldValue {
    /// Decode one value of `field_type` from the start of `data`
    ///
    /// Returns `None` for non-primitive tags or when `data` is too short.
    pub fn decode(data: &[u8], field_type: FieldType) -> Option<Self> {
        let value = match field_type {
            FieldType::U8 => FieldValue::U8(*data.first()?),
            FieldType::I8 => FieldValue::I8(*data.first()? as i8),
            FieldType::U16 => FieldValue::U16(u16::from_ne_bytes(read_array(data)?)),
            FieldType::I16 => FieldValue::I16(i16::from_ne_bytes(read_array(data)?)),
            FieldType::U32 => FieldValue::U32(u32::from_ne_bytes(read_array(data)?)),
            FieldType::I32 => FieldValue::I32(i32::from_ne_bytes(read_array(data)?)),
            FieldType::F32 => FieldValue::F32(f32::from_ne_bytes(read_array(data)?)),
            FieldType::F64 => FieldValue::F64(f64::from_ne_bytes(read_array(data)?)),
            FieldType::Array | FieldType::String | FieldType::Struct => return None,
        };
        Some(value)
    }

    /// Get the field type for this value
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::U8(_) => FieldType::U8,
            FieldValue::U16(_) => FieldType::U16,
            FieldValue::U32(_) => FieldType::U32,
            FieldValue::I8(_) => FieldType::I8,
            FieldValue::I16(_) => FieldType::I16,
            FieldValue::I32(_) => FieldType::I32,
            FieldValue::F32(_) => FieldType::F32,
            FieldValue::F64(_) => FieldType::F64,
        }
    }

    /// Raw bit pattern, zero-extended (signed values are not sign-extended)
    pub fn raw_bits(&self) -> u64 {
        match self {
            FieldValue::U8(v) => *v as u64,
            FieldValue::U16(v) => *v as u64,
            FieldValue::U32(v) => *v as u64,
            FieldValue::I8(v) => *v as u8 as u64,
            FieldValue::I16(v) => *v as u16 as u64,
            FieldValue::I32(v) => *v as u32 as u64,
            FieldValue::F32(v) => v.to_bits() as u64,
            FieldValue::F64(v) => v.to_bits(),
        }
    }

    /// Scalar rendering: decimal plus zero-padded hex for integers, six
    /// fraction digits for floats
    pub fn scalar(&self) -> Scalar<'_> {
        Scalar(self)
    }
}

fn read_array<const N: usize>(data: &[u8]) -> Option<[u8; N]> {
    data.get(..N)?.try_into().ok()
}

/// Decimal rendering, used for array elements
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::U8(v) => write!(f, "{}", v),
            FieldValue::U16(v) => write!(f, "{}", v),
            FieldValue::U32(v) => write!(f, "{}", v),
            FieldValue::I8(v) => write!(f, "{}", v),
            FieldValue::I16(v) => write!(f, "{}", v),
            FieldValue::I32(v) => write!(f, "{}", v),
            FieldValue::F32(v) => write!(f, "{:.6}", v),
            FieldValue::F64(v) => write!(f, "{:.6}", v),
        }
    }
}

/// See [`FieldValue::scalar`]
pub struct Scalar<'a>(&'a FieldValue);

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        match value.field_type().byte_size() {
            Some(width) if !value.field_type().is_float() => write!(
                f,
                "{} (0x{:0digits$X})",
                value,
                value.raw_bits(),
                digits = width * 2
            ),
            _ => write!(f, "{}", value),
        }
    }
}
