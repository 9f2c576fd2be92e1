//! Recursive composite printer
//!
//! Walks a descriptor in declaration order and renders every field of a
//! borrowed byte view. Reads are bounds-checked against both the view and
//! the declared size; nothing here allocates, all text goes straight to the
//! sink as `fmt::Arguments`.

mod field;
mod hexdump;

use std::fmt;

use bytemuck::NoUninit;
use structdump_shared::{CompositeDescriptor, FieldType};

use crate::config::PrintConfig;
use crate::registry::{Describe, DescriptorRegistry};
use crate::sink::Sink;

const DELIMITER: &str = "========================================";

/// Print a composite with the default [`PrintConfig`].
///
/// `base` is the composite's memory and must hold at least
/// `descriptor.total_size` bytes. A missing `base` or `descriptor` produces a
/// single error line and nothing else.
pub fn print<S: Sink + ?Sized>(
    name: Option<&str>,
    base: Option<&[u8]>,
    descriptor: Option<&CompositeDescriptor>,
    sink: &mut S,
) {
    print_with_config(name, base, descriptor, &PrintConfig::default(), sink);
}

/// Print a composite with explicit rendering options.
pub fn print_with_config<S: Sink + ?Sized>(
    name: Option<&str>,
    base: Option<&[u8]>,
    descriptor: Option<&CompositeDescriptor>,
    config: &PrintConfig,
    sink: &mut S,
) {
    let (Some(base), Some(descriptor)) = (base, descriptor) else {
        sink.emit(format_args!("Error: NULL pointer!\n"));
        return;
    };

    if base.len() < descriptor.total_size {
        sink.emit(format_args!(
            "Error: buffer of {} bytes is smaller than {} ({} bytes)\n",
            base.len(),
            descriptor.type_name,
            descriptor.total_size
        ));
        return;
    }

    let mut printer = Printer { config, sink };
    printer.composite(
        name.unwrap_or(""),
        &base[..descriptor.total_size],
        descriptor,
        0,
    );
}

/// Print a typed value against an explicit descriptor.
///
/// `T: NoUninit` rules out types with implicit padding, which covers most
/// `repr(C)` structs mixing field widths. Spell the padding out as named
/// `_pad` byte fields to use the typed entry points, or view the value as
/// bytes yourself and call [`print`].
pub fn print_value<T: NoUninit, S: Sink + ?Sized>(
    name: Option<&str>,
    value: &T,
    descriptor: &CompositeDescriptor,
    sink: &mut S,
) {
    print(name, Some(bytemuck::bytes_of(value)), Some(descriptor), sink);
}

/// Print a value using the descriptor its type declares via [`Describe`].
///
/// Same padding restriction as [`print_value`].
pub fn print_described<T: Describe + NoUninit, S: Sink + ?Sized>(
    name: &str,
    value: &T,
    sink: &mut S,
) {
    print_value(Some(name), value, T::descriptor(), sink);
}

/// Print a value using the descriptor registered for its type.
///
/// An unregistered type is reported like a missing descriptor. Same padding
/// restriction as [`print_value`].
pub fn print_registered<T: NoUninit + 'static, S: Sink + ?Sized>(
    name: &str,
    value: &T,
    registry: &DescriptorRegistry,
    sink: &mut S,
) {
    print(
        Some(name),
        Some(bytemuck::bytes_of(value)),
        registry.get::<T>(),
        sink,
    );
}

/// Widest indent written before a line, in columns
const MAX_INDENT: usize = 1024;

const SPACES: &str = "                                                                ";

/// Leading whitespace for one nesting level, capped at [`MAX_INDENT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Indent(usize);

impl Indent {
    pub(crate) fn new(depth: usize, indent_spaces: usize) -> Self {
        Self(depth.saturating_mul(indent_spaces).min(MAX_INDENT))
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0;
        while remaining > 0 {
            let chunk = remaining.min(SPACES.len());
            f.write_str(&SPACES[..chunk])?;
            remaining -= chunk;
        }
        Ok(())
    }
}

/// Per-call rendering state; depth is passed down explicitly
struct Printer<'a, S: Sink + ?Sized> {
    config: &'a PrintConfig,
    sink: &'a mut S,
}

impl<S: Sink + ?Sized> Printer<'_, S> {
    fn indent(&mut self, depth: usize) {
        let indent = Indent::new(depth, self.config.indent_spaces);
        if indent.0 > 0 {
            self.sink.emit(format_args!("{}", indent));
        }
    }

    /// Header, one entry per field, trailer
    fn composite(
        &mut self,
        name: &str,
        bytes: &[u8],
        descriptor: &CompositeDescriptor,
        depth: usize,
    ) {
        self.indent(depth);
        self.sink.emit(format_args!("{}\n", DELIMITER));

        self.indent(depth);
        if name.is_empty() {
            self.sink
                .emit(format_args!("Struct: [{}]\n", descriptor.type_name));
        } else {
            self.sink
                .emit(format_args!("Struct: {} [{}]\n", name, descriptor.type_name));
        }

        if self.config.show_address {
            self.indent(depth);
            self.sink
                .emit(format_args!("Address: 0x{:08X}\n", bytes.as_ptr() as usize));
        }

        self.indent(depth);
        self.sink
            .emit(format_args!("Size: {} bytes\n", descriptor.total_size));

        self.indent(depth);
        self.sink.emit(format_args!("{}\n", DELIMITER));

        let count = descriptor.fields.len();
        for (i, field) in descriptor.fields.iter().enumerate() {
            self.indent(depth);
            if self.config.show_offset {
                self.sink.emit(format_args!("  [+0x{:04X}] ", field.offset));
            } else {
                self.sink.emit(format_args!("  "));
            }
            self.sink.emit(format_args!("{}: ", field.name));

            self.field(field, bytes, descriptor, depth);

            // Blank line between fields; a nested block already ends with its trailer
            if field.field_type != FieldType::Struct && i + 1 < count {
                self.sink.emit(format_args!("\n"));
            }
        }

        self.indent(depth);
        self.sink.emit(format_args!("{}\n", DELIMITER));
    }
}
