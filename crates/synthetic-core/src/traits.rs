use crate::{
    class::{Class, Instance},
    error::Error,
    signature::Arguments,
};

pub use crate::value::FieldValue;

///
/// Synthesized
///
/// Implemented by `#[derive(Synthetic)]` for plain structs: the generated
/// class descriptor plus the conversion from a constructed instance back
/// into typed fields.
///

pub trait Synthesized: Sized {
    /// Class descriptor built from the struct's field attributes.
    fn class() -> &'static Class;

    fn from_instance(instance: &Instance) -> Result<Self, Error>;

    /// Run the synthesized constructor and convert the result.
    fn construct(args: Arguments) -> Result<Self, Error> {
        let instance = Self::class().construct(args)?;

        Self::from_instance(&instance)
    }
}

/// Read one typed field out of an instance slot.
pub fn read_slot<T: FieldValue>(
    instance: &Instance,
    field: &str,
    storage_key: &str,
) -> Result<T, Error> {
    let value = instance
        .slot(storage_key)
        .ok_or_else(|| Error::member_not_found(instance.class_name(), storage_key))?;

    T::from_value(value).ok_or_else(|| Error::value_mismatch(field, T::EXPECTED, value))
}
