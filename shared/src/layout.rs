//! Layout descriptor types
//!
//! Static metadata describing where each field of a composite lives in
//! memory and how its bytes should be interpreted.

/// Field type tag for a described field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    // Primitives
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
    F32,
    F64,

    // Aggregates
    Array,  // primitive array whose element type is not stated
    String, // fixed-length character buffer
    Struct, // nested composite
}

impl FieldType {
    /// Natural byte width of a primitive tag
    pub const fn byte_size(&self) -> Option<usize> {
        match self {
            FieldType::U8 | FieldType::I8 => Some(1),
            FieldType::U16 | FieldType::I16 => Some(2),
            FieldType::U32 | FieldType::I32 | FieldType::F32 => Some(4),
            FieldType::F64 => Some(8),
            FieldType::Array | FieldType::String | FieldType::Struct => None,
        }
    }

    /// Get a human-readable type name
    pub const fn type_name(&self) -> &'static str {
        match self {
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::I8 => "i8",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::Array => "array",
            FieldType::String => "char[]",
            FieldType::Struct => "struct",
        }
    }

    /// Whether this tag decodes to a single numeric value
    pub const fn is_primitive(&self) -> bool {
        self.byte_size().is_some()
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, FieldType::F32 | FieldType::F64)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Metadata for a single field of a composite
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Display name, unique within the owning composite
    pub name: &'static str,
    /// How the bytes at `offset` are interpreted
    pub field_type: FieldType,
    /// Byte offset from the start of the owning composite
    pub offset: usize,
    /// Size of one element (the nested composite's size for struct fields)
    pub element_size: usize,
    /// 0 for scalars, array length otherwise (ignored for struct fields)
    pub element_count: usize,
    /// Descriptor of the nested composite, present iff `field_type` is `Struct`
    pub nested: Option<&'static CompositeDescriptor>,
}

impl FieldDescriptor {
    const fn primitive(name: &'static str, field_type: FieldType, offset: usize) -> Self {
        let element_size = match field_type.byte_size() {
            Some(size) => size,
            None => 0,
        };
        Self {
            name,
            field_type,
            offset,
            element_size,
            element_count: 0,
            nested: None,
        }
    }

    pub const fn u8(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::U8, offset)
    }

    pub const fn u16(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::U16, offset)
    }

    pub const fn u32(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::U32, offset)
    }

    pub const fn i8(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::I8, offset)
    }

    pub const fn i16(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::I16, offset)
    }

    pub const fn i32(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::I32, offset)
    }

    pub const fn f32(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::F32, offset)
    }

    pub const fn f64(name: &'static str, offset: usize) -> Self {
        Self::primitive(name, FieldType::F64, offset)
    }

    /// Fixed-length character buffer of `len` bytes
    pub const fn string(name: &'static str, offset: usize, len: usize) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            offset,
            element_size: 1,
            element_count: len,
            nested: None,
        }
    }

    /// Array of `count` elements, each `element_size` bytes wide
    ///
    /// `element_type` is the primitive tag of one element, or
    /// [`FieldType::Array`] when the element type is unknown.
    pub const fn array(
        name: &'static str,
        offset: usize,
        element_type: FieldType,
        element_size: usize,
        count: usize,
    ) -> Self {
        Self {
            name,
            field_type: element_type,
            offset,
            element_size,
            element_count: count,
            nested: None,
        }
    }

    /// Nested composite of `size` bytes described by `nested`
    pub const fn nested(
        name: &'static str,
        offset: usize,
        size: usize,
        nested: &'static CompositeDescriptor,
    ) -> Self {
        Self {
            name,
            field_type: FieldType::Struct,
            offset,
            element_size: size,
            element_count: 0,
            nested: Some(nested),
        }
    }

    /// Whether the field holds more than a single value
    pub const fn is_array(&self) -> bool {
        self.element_count > 0 && !matches!(self.field_type, FieldType::Struct)
    }

    /// Total bytes covered by this field
    pub const fn byte_len(&self) -> usize {
        if self.is_array() {
            self.element_size.saturating_mul(self.element_count)
        } else {
            self.element_size
        }
    }

    /// One past the last byte of this field, or `None` on overflow
    pub const fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.byte_len())
    }
}

/// Metadata for a whole composite type
#[derive(Debug)]
pub struct CompositeDescriptor {
    /// Display name of the type
    pub type_name: &'static str,
    /// Declared byte size of the type
    pub total_size: usize,
    /// Fields in declaration (and rendering) order
    pub fields: &'static [FieldDescriptor],
}

impl CompositeDescriptor {
    pub const fn new(
        type_name: &'static str,
        total_size: usize,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            type_name,
            total_size,
            fields,
        }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of composite levels below this one (0 when nothing is nested)
    ///
    /// Only meaningful on descriptors that passed [`validate`](Self::validate);
    /// a cyclic graph never terminates.
    pub fn depth(&self) -> usize {
        self.fields
            .iter()
            .filter_map(|f| f.nested)
            .map(|nested| nested.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
