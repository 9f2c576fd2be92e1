//! Layout descriptor model for structdump.
//!
//! A [`CompositeDescriptor`] is immutable, `'static` metadata describing the
//! byte layout of one composite type: its name, declared size, and an ordered
//! table of [`FieldDescriptor`]s. Descriptors are built once, either as const
//! literals or with the [`composite!`] macro, and are shared read-only for the
//! rest of the process.
//!
//! Nested composites reference each other by `&'static` pointer, so the
//! descriptor graph has no owner and must be acyclic. Run
//! [`CompositeDescriptor::validate`] before rendering a hand-written graph.

mod layout;
mod macros;
mod validate;

pub use layout::{CompositeDescriptor, FieldDescriptor, FieldType};
pub use validate::LayoutError;
