//! Argument reconciliation: decides which call arguments populate
//! synthesized fields and which are passed on to the original constructor.

#[cfg(test)]
mod tests;

use crate::{
    model::FieldSpec,
    signature::{Arguments, Signature},
    value::Value,
};
use std::collections::BTreeMap;

///
/// Slot
///
/// Name attached to one positional value.
///
/// Values beyond the name-slot list carry their own call position rather
/// than a shared "no name" marker, so several surplus values never alias
/// one another.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Slot {
    Named(String),
    Extra(usize),
}

impl Slot {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Extra(_) => None,
        }
    }
}

///
/// Reconciliation
///
/// Result of one reconciliation pass.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reconciliation {
    /// Resolved field values keyed by storage key, in field order.
    pub values: Vec<(String, Value)>,

    /// Arguments to hand to the original constructor.
    pub forwarded: Arguments,
}

impl Reconciliation {
    #[must_use]
    pub fn value(&self, storage_key: &str) -> Option<&Value> {
        self.values
            .iter()
            .find_map(|(key, value)| (key == storage_key).then_some(value))
    }
}

///
/// ArgumentReconciler
///
/// Pure function over the original signature, the field list and one set of
/// call arguments. It has no failure path: every field resolves to an
/// explicit argument or its default.
///

#[derive(Clone, Copy, Debug)]
pub struct ArgumentReconciler<'a> {
    signature: &'a Signature,
    fields: &'a [FieldSpec],
    consumes_arguments: bool,
}

impl<'a> ArgumentReconciler<'a> {
    #[must_use]
    pub const fn new(
        signature: &'a Signature,
        fields: &'a [FieldSpec],
        consumes_arguments: bool,
    ) -> Self {
        Self {
            signature,
            fields,
            consumes_arguments,
        }
    }

    /// Declared parameters, then every field name not already among them.
    #[must_use]
    pub fn name_slots(&self) -> Vec<&'a str> {
        let mut slots: Vec<&'a str> = self
            .signature
            .params()
            .iter()
            .map(String::as_str)
            .collect();

        for field in self.fields {
            if !slots.contains(&field.name()) {
                slots.push(field.name());
            }
        }

        slots
    }

    /// Pair positional values with name slots, position by position.
    #[must_use]
    pub fn pair(&self, positional: Vec<Value>) -> Vec<(Slot, Value)> {
        let slots = self.name_slots();

        positional
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let slot = slots
                    .get(i)
                    .map_or(Slot::Extra(i), |name| Slot::Named((*name).to_string()));

                (slot, value)
            })
            .collect()
    }

    /// Resolve field values and compute the forwarded arguments.
    #[must_use]
    pub fn reconcile(&self, args: Arguments) -> Reconciliation {
        let Arguments {
            positional,
            keyword,
        } = args;
        let pairing = self.pair(positional);

        let values = self
            .fields
            .iter()
            .map(|field| {
                let value = if self.consumes_arguments {
                    resolve(field, &pairing, &keyword)
                } else {
                    field.default_value().clone()
                };

                (field.storage_key().to_string(), value)
            })
            .collect();

        let forwarded = self.forward(pairing, keyword);

        tracing::trace!(
            fields = self.fields.len(),
            consumes = self.consumes_arguments,
            forwarded_positional = forwarded.positional.len(),
            forwarded_keyword = forwarded.keyword.len(),
            "reconciled constructor arguments"
        );

        Reconciliation { values, forwarded }
    }

    // Strip arguments that exist only for synthesis. Names the original
    // constructor declares are always left in place; catch-all parameters
    // keep everything of their kind.
    fn forward(
        &self,
        mut pairing: Vec<(Slot, Value)>,
        mut keyword: BTreeMap<String, Value>,
    ) -> Arguments {
        for field in self.fields {
            let name = field.name();

            if self.signature.has_param(name) {
                continue;
            }

            if !self.signature.accepts_variadic_positional() {
                pairing.retain(|(slot, _)| slot.name() != Some(name));
            }

            if !self.signature.accepts_variadic_keyword() {
                keyword.remove(name);
            }
        }

        Arguments {
            positional: pairing.into_iter().map(|(_, value)| value).collect(),
            keyword,
        }
    }
}

// keyword, then positional, then default
fn resolve(
    field: &FieldSpec,
    pairing: &[(Slot, Value)],
    keyword: &BTreeMap<String, Value>,
) -> Value {
    if let Some(value) = keyword.get(field.name()) {
        return value.clone();
    }

    pairing
        .iter()
        .find(|(slot, _)| slot.name() == Some(field.name()))
        .map_or_else(|| field.default_value().clone(), |(_, value)| value.clone())
}
