//! Declarative descriptor construction
//!
//! Offsets and sizes come from `offset_of!` / `size_of`, so a descriptor
//! built here always matches the compiling target's layout.

/// Build a [`CompositeDescriptor`](crate::CompositeDescriptor) for a type.
///
/// Each field is written as `name: kind`, where `kind` is one of
///
/// - a primitive: `u8`, `u16`, `u32`, `i8`, `i16`, `i32`, `f32`, `f64`
/// - a fixed text buffer: `[char; N]`
/// - a primitive array: `[i16; N]`
/// - a nested composite: `Inner => INNER_DESCRIPTOR`
///
/// ```rust
/// use structdump_shared::{composite, CompositeDescriptor};
///
/// #[repr(C)]
/// struct SensorData {
///     sensor_id: u16,
///     value: i16,
///     label: [u8; 4],
/// }
///
/// static SENSOR_DATA: CompositeDescriptor = composite!(SensorData {
///     sensor_id: u16,
///     value: i16,
///     label: [char; 4],
/// });
///
/// assert_eq!(SENSOR_DATA.total_size, 8);
/// assert_eq!(SENSOR_DATA.fields[2].offset, 4);
/// ```
#[macro_export]
macro_rules! composite {
    ($ty:ident { $($field:ident : $kind:tt $(=> $nested:path)?),* $(,)? }) => {
        $crate::CompositeDescriptor {
            type_name: ::core::stringify!($ty),
            total_size: ::core::mem::size_of::<$ty>(),
            fields: &[$($crate::__composite_field!($ty, $field, $kind $(=> $nested)?)),*],
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __composite_field {
    ($ty:ident, $field:ident, [char; $len:expr]) => {
        $crate::FieldDescriptor::string(
            ::core::stringify!($field),
            ::core::mem::offset_of!($ty, $field),
            $len,
        )
    };
    ($ty:ident, $field:ident, [$elem:ident; $len:expr]) => {
        $crate::FieldDescriptor::array(
            ::core::stringify!($field),
            ::core::mem::offset_of!($ty, $field),
            $crate::__primitive_tag!($elem),
            ::core::mem::size_of::<$elem>(),
            $len,
        )
    };
    ($ty:ident, $field:ident, $inner:ident => $nested:path) => {
        $crate::FieldDescriptor::nested(
            ::core::stringify!($field),
            ::core::mem::offset_of!($ty, $field),
            ::core::mem::size_of::<$inner>(),
            &$nested,
        )
    };
    ($ty:ident, $field:ident, $prim:ident) => {
        $crate::FieldDescriptor::array(
            ::core::stringify!($field),
            ::core::mem::offset_of!($ty, $field),
            $crate::__primitive_tag!($prim),
            ::core::mem::size_of::<$prim>(),
            0,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __primitive_tag {
    (u8) => {
        $crate::FieldType::U8
    };
    (u16) => {
        $crate::FieldType::U16
    };
    (u32) => {
        $crate::FieldType::U32
    };
    (i8) => {
        $crate::FieldType::I8
    };
    (i16) => {
        $crate::FieldType::I16
    };
    (i32) => {
        $crate::FieldType::I32
    };
    (f32) => {
        $crate::FieldType::F32
    };
    (f64) => {
        $crate::FieldType::F64
    };
}
