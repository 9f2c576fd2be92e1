//! Type to descriptor lookup
//!
//! Two ways to let callers print a value without naming its descriptor:
//! a static [`Describe`] impl on the type, or an explicit
//! [`DescriptorRegistry`] filled in at startup. The registry validates every
//! descriptor as it is registered, so only acyclic, in-bounds layouts ever
//! reach the printer through it.


use std::any::{TypeId, type_name};

use hashbrown::HashMap;
use structdump_shared::{CompositeDescriptor, LayoutError};

/// A type whose layout is described by a static descriptor
pub trait Describe: 'static {
    fn descriptor() -> &'static CompositeDescriptor;
}

/// Registration failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid descriptor: {0}")]
    Invalid(#[from] LayoutError),

    #[error("{type_name} declares {declared} bytes but {rust_type} is {actual} bytes")]
    SizeMismatch {
        rust_type: &'static str,
        type_name: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("{rust_type} is already registered as {type_name}")]
    AlreadyRegistered {
        rust_type: &'static str,
        type_name: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    rust_type: &'static str,
    descriptor: &'static CompositeDescriptor,
}

/// Registry of descriptors keyed by Rust type
#[derive(Debug, Default, Clone)]
pub struct DescriptorRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl DescriptorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the descriptor for `T`
    ///
    /// # Errors
    ///
    /// Fails if the descriptor breaks a layout invariant (including nesting
    /// itself), if its declared size differs from `size_of::<T>()`, or if `T`
    /// already has a descriptor.
    pub fn register<T: 'static>(
        &mut self,
        descriptor: &'static CompositeDescriptor,
    ) -> Result<(), RegistryError> {
        let rust_type = type_name::<T>();

        if let Some(existing) = self.entries.get(&TypeId::of::<T>()) {
            return Err(RegistryError::AlreadyRegistered {
                rust_type,
                type_name: existing.descriptor.type_name,
            });
        }

        descriptor.validate()?;

        let actual = size_of::<T>();
        if descriptor.total_size != actual {
            return Err(RegistryError::SizeMismatch {
                rust_type,
                type_name: descriptor.type_name,
                declared: descriptor.total_size,
                actual,
            });
        }

        tracing::debug!(
            "structdump: registered {} for {} ({} fields, {} bytes)",
            descriptor.type_name,
            rust_type,
            descriptor.fields.len(),
            descriptor.total_size
        );

        self.entries.insert(
            TypeId::of::<T>(),
            Entry {
                rust_type,
                descriptor,
            },
        );
        Ok(())
    }

    /// Register a type through its [`Describe`] impl
    pub fn register_described<T: Describe>(&mut self) -> Result<(), RegistryError> {
        self.register::<T>(T::descriptor())
    }

    /// Descriptor registered for `T`, if any
    pub fn get<T: 'static>(&self) -> Option<&'static CompositeDescriptor> {
        self.entries
            .get(&TypeId::of::<T>())
            .map(|entry| entry.descriptor)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Rust type names and their descriptors, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static CompositeDescriptor)> + '_ {
        self.entries
            .values()
            .map(|entry| (entry.rust_type, entry.descriptor))
    }

    /// Get number of registered types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
