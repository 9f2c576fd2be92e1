//! Construction-time checks for descriptor graphs

use std::ptr;

use crate::layout::{CompositeDescriptor, FieldDescriptor, FieldType};

/// A descriptor that breaks one of the layout invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("{type_name}: field #{index} has an empty name")]
    EmptyFieldName {
        type_name: &'static str,
        index: usize,
    },

    #[error("{type_name}: field '{field}' is declared more than once")]
    DuplicateField {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("{type_name}: field '{field}' spans bytes {offset}..{end} but the type is {total_size} bytes")]
    FieldOutOfBounds {
        type_name: &'static str,
        field: &'static str,
        offset: usize,
        end: usize,
        total_size: usize,
    },

    #[error("{type_name}: struct field '{field}' has no nested descriptor")]
    MissingNestedDescriptor {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("{type_name}: field '{field}' is tagged {field_type} but carries a nested descriptor")]
    UnexpectedNestedDescriptor {
        type_name: &'static str,
        field: &'static str,
        field_type: FieldType,
    },

    #[error("{type_name}: struct field '{field}' is {element_size} bytes but {nested} is {nested_size} bytes")]
    NestedSizeMismatch {
        type_name: &'static str,
        field: &'static str,
        element_size: usize,
        nested: &'static str,
        nested_size: usize,
    },

    #[error("{type_name}: field '{field}' is tagged {field_type} but its elements are {element_size} bytes")]
    ElementSizeMismatch {
        type_name: &'static str,
        field: &'static str,
        field_type: FieldType,
        element_size: usize,
    },

    #[error("{type_name}: string field '{field}' has no capacity")]
    EmptyString {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("{type_name} nests itself via {path}")]
    Cycle {
        type_name: &'static str,
        path: String,
    },
}

impl CompositeDescriptor {
    /// Check every layout invariant, recursing through nested descriptors
    ///
    /// Rendering holds no visited set, so a descriptor must pass this before
    /// it is handed to the printer. Fails on the first violation found.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut path = Vec::new();
        self.validate_with_path(&mut path)
    }

    fn validate_with_path<'a>(
        &'a self,
        path: &mut Vec<&'a CompositeDescriptor>,
    ) -> Result<(), LayoutError> {
        if let Some(start) = path.iter().position(|d| ptr::eq(*d, self)) {
            let path = path[start..]
                .iter()
                .map(|d| d.type_name)
                .chain(std::iter::once(self.type_name))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(LayoutError::Cycle {
                type_name: self.type_name,
                path,
            });
        }

        path.push(self);

        for (index, field) in self.fields.iter().enumerate() {
            self.check_field(index, field)?;
            if let Some(nested) = field.nested {
                nested.validate_with_path(path)?;
            }
        }

        path.pop();
        Ok(())
    }

    fn check_field(&self, index: usize, field: &FieldDescriptor) -> Result<(), LayoutError> {
        let type_name = self.type_name;

        if field.name.is_empty() {
            return Err(LayoutError::EmptyFieldName { type_name, index });
        }

        if self.fields[..index].iter().any(|f| f.name == field.name) {
            return Err(LayoutError::DuplicateField {
                type_name,
                field: field.name,
            });
        }

        match field.end() {
            Some(end) if end <= self.total_size => {}
            end => {
                return Err(LayoutError::FieldOutOfBounds {
                    type_name,
                    field: field.name,
                    offset: field.offset,
                    end: end.unwrap_or(usize::MAX),
                    total_size: self.total_size,
                });
            }
        }

        match (field.field_type, field.nested) {
            (FieldType::Struct, None) => {
                return Err(LayoutError::MissingNestedDescriptor {
                    type_name,
                    field: field.name,
                });
            }
            (FieldType::Struct, Some(nested)) => {
                if nested.total_size != field.element_size {
                    return Err(LayoutError::NestedSizeMismatch {
                        type_name,
                        field: field.name,
                        element_size: field.element_size,
                        nested: nested.type_name,
                        nested_size: nested.total_size,
                    });
                }
            }
            (field_type, Some(_)) => {
                return Err(LayoutError::UnexpectedNestedDescriptor {
                    type_name,
                    field: field.name,
                    field_type,
                });
            }
            (FieldType::String, None) => {
                if field.element_count == 0 {
                    return Err(LayoutError::EmptyString {
                        type_name,
                        field: field.name,
                    });
                }
                if field.element_size != 1 {
                    return Err(LayoutError::ElementSizeMismatch {
                        type_name,
                        field: field.name,
                        field_type: FieldType::String,
                        element_size: field.element_size,
                    });
                }
            }
            (field_type, None) => {
                if field_type
                    .byte_size()
                    .is_some_and(|width| width != field.element_size)
                {
                    return Err(LayoutError::ElementSizeMismatch {
                        type_name,
                        field: field.name,
                        field_type,
                        element_size: field.element_size,
                    });
                }
            }
        }

        Ok(())
    }
}
