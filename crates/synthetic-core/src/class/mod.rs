mod accessor;
mod instance;


pub use accessor::AccessorTable;
pub use instance::{Instance, Storage};

use crate::{
    constructor::SynthesizedConstructor,
    error::Error,
    model::ClassMetadata,
    signature::{Arguments, Constructor},
};
use std::sync::Arc;

///
/// Class
///
/// Runtime class descriptor: its own constructor, the synthesis metadata
/// once augmented, the installed synthesized constructor and the accessor
/// table derived from the declared fields.
///
/// Augmentation needs `&mut Class`; once built, a class is only read, so
/// instances can be constructed from several threads at once.
///

#[derive(Clone, Debug)]
pub struct Class {
    name: String,
    constructor: Constructor,
    metadata: Option<ClassMetadata>,
    synthesized: Option<SynthesizedConstructor>,
    accessors: Arc<AccessorTable>,
}

impl Class {
    pub fn new(name: impl Into<String>, constructor: Constructor) -> Self {
        Self {
            name: name.into(),
            constructor,
            metadata: None,
            synthesized: None,
            accessors: Arc::new(AccessorTable::default()),
        }
    }

    /// A class whose constructor is the built-in no-op.
    pub fn native(name: impl Into<String>) -> Self {
        Self::new(name, Constructor::native())
    }

    /// Derive a child class.
    ///
    /// The child owns a copy of the parent's metadata and accessors, so
    /// augmenting it never touches the parent. Without a constructor of its
    /// own it reuses the parent's original one.
    #[must_use]
    pub fn subclass(&self, name: impl Into<String>, constructor: Option<Constructor>) -> Self {
        let name = name.into();
        let own = constructor.unwrap_or_else(|| self.constructor.clone());

        let metadata = self
            .metadata
            .as_ref()
            .map(|meta| meta.inherit(name.clone(), Some(own.clone())));

        let mut child = Self {
            name,
            constructor: own,
            metadata,
            synthesized: None,
            accessors: Arc::new(self.accessors.as_ref().clone()),
        };
        child.install_constructor();

        child
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn metadata(&self) -> Option<&ClassMetadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn accessors(&self) -> &AccessorTable {
        &self.accessors
    }

    #[must_use]
    pub const fn synthesized_constructor(&self) -> Option<&SynthesizedConstructor> {
        self.synthesized.as_ref()
    }

    #[must_use]
    pub const fn is_augmented(&self) -> bool {
        self.metadata.is_some()
    }

    /// Build an instance through whichever constructor is installed.
    pub fn construct(&self, args: Arguments) -> Result<Instance, Error> {
        let mut instance = Instance::new(&self.name, Arc::clone(&self.accessors));

        match &self.synthesized {
            Some(ctor) => ctor.invoke(&mut instance, args)?,
            None => self.constructor.invoke(&mut instance, args)?,
        }

        Ok(instance)
    }

    /// Metadata for this class, created on first use around the
    /// constructor currently in effect.
    pub(crate) fn metadata_or_init(&mut self) -> &mut ClassMetadata {
        let Self {
            name,
            constructor,
            metadata,
            ..
        } = self;

        metadata.get_or_insert_with(|| {
            tracing::debug!(class = %name, "capturing original constructor");

            ClassMetadata::new(name.clone(), constructor.clone())
        })
    }

    pub(crate) fn accessors_mut(&mut self) -> &mut AccessorTable {
        Arc::make_mut(&mut self.accessors)
    }

    /// Overwrite the constructor slot with one built from current metadata.
    pub(crate) fn install_constructor(&mut self) {
        self.synthesized = self.metadata.as_ref().map(SynthesizedConstructor::install);
    }
}
