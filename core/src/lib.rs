//! structdump Core - descriptor-driven composite dumps
//!
//! Renders a human-readable dump of a composite value from its raw bytes and
//! a static layout descriptor: every field's name, offset, decoded value and
//! memory, recursing into nested composites.
//!
//! # Architecture
//!
//! - [`CompositeDescriptor`] - static layout metadata (see `structdump-shared`)
//! - [`print`] / [`print_with_config`] - render a byte view against a descriptor
//! - [`Sink`] - injected output destination
//! - [`Describe`] / [`DescriptorRegistry`] - type to descriptor lookup
//! - [`PrintConfig`] - output toggles, loadable from TOML
//!
//! # Usage
//!
//! ```rust
//! use structdump_core::{Describe, CompositeDescriptor, composite, print_struct};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, bytemuck::NoUninit)]
//! struct SensorData {
//!     sensor_id: u16,
//!     value: i16,
//!     status: u8,
//!     flags: u8,
//! }
//!
//! static SENSOR_DATA: CompositeDescriptor = composite!(SensorData {
//!     sensor_id: u16,
//!     value: i16,
//!     status: u8,
//!     flags: u8,
//! });
//!
//! impl Describe for SensorData {
//!     fn descriptor() -> &'static CompositeDescriptor {
//!         &SENSOR_DATA
//!     }
//! }
//!
//! let sensor = SensorData { sensor_id: 1001, value: -150, status: 1, flags: 0 };
//! let mut out = String::new();
//! print_struct!(sensor, &mut out);
//! # #[cfg(feature = "enabled")]
//! assert!(out.contains("value: -150 (0xFF6A)"));
//! ```
//!
//! # Disabled builds
//!
//! Without the default `enabled` feature every print entry point keeps its
//! signature but does nothing, so call sites need no `cfg` of their own.

pub mod config;
#[cfg(not(feature = "enabled"))]
mod disabled;
#[cfg(feature = "enabled")]
mod printer;
pub mod registry;
pub mod sink;
pub mod text;
pub mod value;

pub use config::{ConfigError, PrintConfig};
pub use registry::{Describe, DescriptorRegistry, RegistryError};
pub use sink::{FmtSink, FnSink, IoSink, Sink, TracingSink};
pub use value::FieldValue;

#[cfg(not(feature = "enabled"))]
pub use disabled::{print, print_described, print_registered, print_value, print_with_config};
#[cfg(feature = "enabled")]
pub use printer::{print, print_described, print_registered, print_value, print_with_config};

// Re-export the descriptor model
pub use structdump_shared::{
    CompositeDescriptor, FieldDescriptor, FieldType, LayoutError, composite,
};

/// Print a value under its own expression as the display name.
///
/// `print_struct!(value, sink)` uses the type's [`Describe`] impl;
/// `print_struct!(value, sink, registry)` looks the type up in a
/// [`DescriptorRegistry`]. The value's type must be `bytemuck::NoUninit`, so
/// any padding has to be declared as explicit fields.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! print_struct {
    ($value:expr, $sink:expr, $registry:expr $(,)?) => {
        $crate::print_registered(::core::stringify!($value), &$value, $registry, $sink)
    };
    ($value:expr, $sink:expr $(,)?) => {
        $crate::print_described(::core::stringify!($value), &$value, $sink)
    };
}

/// Print a value under its own expression as the display name (disabled: no-op).
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! print_struct {
    ($value:expr, $sink:expr, $registry:expr $(,)?) => {
        ()
    };
    ($value:expr, $sink:expr $(,)?) => {
        ()
    };
}
