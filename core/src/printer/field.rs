//! Per-field rendering

use structdump_shared::{CompositeDescriptor, FieldDescriptor, FieldType};

use super::{Indent, Printer};
use super::hexdump::HexDump;
use crate::sink::Sink;
use crate::text::{self, Text};
use crate::value::FieldValue;

/// Array elements shown before eliding the rest
const MAX_ARRAY_ELEMENTS: usize = 16;

/// Bytes of `field` inside `bytes`, if they lie within both the view and the
/// declared size of the owning composite
fn field_bytes<'b>(
    field: &FieldDescriptor,
    bytes: &'b [u8],
    owner: &CompositeDescriptor,
) -> Option<&'b [u8]> {
    let end = field.end()?;
    if end > owner.total_size {
        return None;
    }
    bytes.get(field.offset..end)
}

impl<S: Sink + ?Sized> Printer<'_, S> {
    /// Render the value part of a field line (everything after `name: `)
    pub(super) fn field(
        &mut self,
        field: &FieldDescriptor,
        bytes: &[u8],
        owner: &CompositeDescriptor,
        depth: usize,
    ) {
        let Some(data) = field_bytes(field, bytes, owner) else {
            tracing::warn!(
                "structdump: {}.{} at +{} ({} bytes) is outside the {}-byte view",
                owner.type_name,
                field.name,
                field.offset,
                field.byte_len(),
                owner.total_size.min(bytes.len())
            );
            self.sink.emit(format_args!("<out of bounds>\n"));
            return;
        };

        if field.is_array() {
            if self.renders_as_text(field, data) {
                self.sink.emit(format_args!("\"{}\"\n", Text(data)));
                self.hex_dump(data, depth);
            } else {
                self.array(field, data, depth);
            }
            return;
        }

        match field.field_type {
            FieldType::Struct => self.nested(field, data, depth),
            field_type => match FieldValue::decode(data, field_type) {
                Some(value) => {
                    self.sink.emit(format_args!("{}\n", value.scalar()));
                    self.hex_dump(data, depth);
                }
                None => self.sink.emit(format_args!("<unknown type>\n")),
            },
        }
    }

    fn renders_as_text(&self, field: &FieldDescriptor, data: &[u8]) -> bool {
        match field.field_type {
            FieldType::String => true,
            FieldType::U8 => {
                field.element_count <= self.config.string_max_len
                    && text::is_printable_text(data)
            }
            _ => false,
        }
    }

    fn array(&mut self, field: &FieldDescriptor, data: &[u8], depth: usize) {
        let shown = field.element_count.min(MAX_ARRAY_ELEMENTS);
        let size = field.element_size;

        self.sink.emit(format_args!("["));
        for i in 0..shown {
            if i > 0 {
                self.sink.emit(format_args!(", "));
            }
            let element = data
                .get(i * size..(i + 1) * size)
                .and_then(|element| FieldValue::decode(element, field.field_type));
            match element {
                Some(value) => self.sink.emit(format_args!("{}", value)),
                None => self.sink.emit(format_args!("?")),
            }
        }
        if field.element_count > shown {
            self.sink.emit(format_args!(", ..."));
        }
        self.sink.emit(format_args!("]\n"));

        self.hex_dump(data, depth);
    }

    fn nested(&mut self, field: &FieldDescriptor, data: &[u8], depth: usize) {
        let Some(nested) = field.nested else {
            self.sink
                .emit(format_args!("<nested struct, no descriptor>\n"));
            return;
        };

        if depth + 1 > self.config.max_depth {
            tracing::warn!(
                "structdump: not descending into {} ({}) past depth {}",
                field.name,
                nested.type_name,
                self.config.max_depth
            );
            self.sink.emit(format_args!("<max depth reached>\n"));
            return;
        }

        let Some(inner) = data.get(..nested.total_size) else {
            tracing::warn!(
                "structdump: {} is {} bytes but field {} only covers {}",
                nested.type_name,
                nested.total_size,
                field.name,
                data.len()
            );
            self.sink.emit(format_args!("<out of bounds>\n"));
            return;
        };

        self.sink.emit(format_args!("\n"));
        self.composite("", inner, nested, depth + 1);
    }

    fn hex_dump(&mut self, data: &[u8], depth: usize) {
        if !self.config.show_hex_memory {
            return;
        }
        self.sink.emit(format_args!(
            "{}",
            HexDump {
                data,
                max_bytes: self.config.hex_bytes,
                indent: Indent::new(depth, self.config.indent_spaces),
            }
        ));
    }
}
