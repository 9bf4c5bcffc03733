use crate::{
    class::Instance,
    error::Error,
    model::{ClassMetadata, FieldSpec},
    reconcile::ArgumentReconciler,
    signature::{Arguments, Constructor},
};

///
/// SynthesizedConstructor
///
/// Replacement constructor for an augmented class. It holds a snapshot of
/// the class metadata taken at installation; any later declaration must
/// install a fresh one to be observed.
///

#[derive(Clone, Debug)]
pub struct SynthesizedConstructor {
    original: Constructor,
    fields: Vec<FieldSpec>,
    consumes_arguments: bool,
}

impl SynthesizedConstructor {
    #[must_use]
    pub fn install(metadata: &ClassMetadata) -> Self {
        Self {
            original: metadata.original_constructor().clone(),
            fields: metadata.fields().to_vec(),
            consumes_arguments: metadata.consumes_arguments(),
        }
    }

    #[must_use]
    pub const fn original(&self) -> &Constructor {
        &self.original
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub const fn consumes_arguments(&self) -> bool {
        self.consumes_arguments
    }

    /// Populate field slots, then run the original constructor with the
    /// arguments it declares.
    pub fn invoke(&self, instance: &mut Instance, args: Arguments) -> Result<(), Error> {
        let reconciler = ArgumentReconciler::new(
            self.original.signature(),
            &self.fields,
            self.consumes_arguments,
        );
        let reconciliation = reconciler.reconcile(args);

        for (storage_key, value) in reconciliation.values {
            instance.set_slot(storage_key, value);
        }

        self.original.invoke(instance, reconciliation.forwarded)
    }
}
