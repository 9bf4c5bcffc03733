//! Statically declared constructor signatures and the argument values that
//! flow through them.

use crate::{
    class::Instance,
    error::{ArgumentError, Error, validate_identifier},
    value::Value,
};
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// Arguments
///
/// Positional and keyword values supplied to a constructor call.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Arguments {
    pub positional: Vec<Value>,
    pub keyword: BTreeMap<String, Value>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }
}

///
/// Signature
///
/// Declared parameter list of an original constructor, receiver excluded.
/// Replaces runtime introspection: the class author states the parameter
/// names and whether catch-all positional or keyword parameters exist.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Signature {
    params: Vec<String>,
    variadic_positional: bool,
    variadic_keyword: bool,
}

impl Signature {
    /// A signature accepting no arguments at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            params: Vec::new(),
            variadic_positional: false,
            variadic_keyword: false,
        }
    }

    pub fn new<I, S>(params: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();

        for param in params {
            let param = param.into();

            validate_identifier("parameter name", &param)
                .map_err(|e| Error::unresolvable_signature(e.to_string()))?;

            if out.contains(&param) {
                return Err(Error::unresolvable_signature(format!(
                    "parameter '{param}' is declared more than once"
                )));
            }

            out.push(param);
        }

        Ok(Self {
            params: out,
            ..Self::empty()
        })
    }

    /// Accept surplus positional values as a catch-all list.
    #[must_use]
    pub const fn with_variadic_positional(mut self) -> Self {
        self.variadic_positional = true;
        self
    }

    /// Accept unknown keyword values as a catch-all map.
    #[must_use]
    pub const fn with_variadic_keyword(mut self) -> Self {
        self.variadic_keyword = true;
        self
    }

    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
    }

    #[must_use]
    pub const fn accepts_variadic_positional(&self) -> bool {
        self.variadic_positional
    }

    #[must_use]
    pub const fn accepts_variadic_keyword(&self) -> bool {
        self.variadic_keyword
    }

    /// Bind call arguments to declared parameters.
    pub fn bind(&self, args: Arguments) -> Result<BoundArguments, ArgumentError> {
        let Arguments {
            positional,
            keyword,
        } = args;

        let given = positional.len();
        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        let mut rest = Vec::new();

        for (i, value) in positional.into_iter().enumerate() {
            if i < slots.len() {
                slots[i] = Some(value);
            } else if self.variadic_positional {
                rest.push(value);
            } else {
                return Err(ArgumentError::TooManyPositional {
                    expected: self.params.len(),
                    given,
                });
            }
        }

        let mut extra = BTreeMap::new();
        for (name, value) in keyword {
            match self.params.iter().position(|p| *p == name) {
                Some(i) if slots[i].is_some() => {
                    return Err(ArgumentError::MultipleValues { param: name });
                }
                Some(i) => slots[i] = Some(value),
                None if self.variadic_keyword => {
                    extra.insert(name, value);
                }
                None => return Err(ArgumentError::UnexpectedKeyword { keyword: name }),
            }
        }

        let mut values = Vec::with_capacity(slots.len());
        for (param, slot) in self.params.iter().zip(slots) {
            let value = slot.ok_or_else(|| ArgumentError::Missing {
                param: param.clone(),
            })?;
            values.push((param.clone(), value));
        }

        Ok(BoundArguments {
            values,
            rest,
            keyword: extra,
        })
    }
}

///
/// BoundArguments
///
/// Arguments after binding: one value per declared parameter, in
/// declaration order, plus whatever the catch-all parameters collected.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BoundArguments {
    values: Vec<(String, Value)>,
    rest: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl BoundArguments {
    #[must_use]
    pub fn get(&self, param: &str) -> Option<&Value> {
        self.values
            .iter()
            .find_map(|(name, value)| (name == param).then_some(value))
    }

    #[must_use]
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    /// Surplus positional values collected by a variadic positional parameter.
    #[must_use]
    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    /// Unknown keyword values collected by a variadic keyword parameter.
    #[must_use]
    pub const fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }
}

/// Body of an original constructor.
pub type ConstructorFn = dyn Fn(&mut Instance, &BoundArguments) -> Result<(), Error> + Send + Sync;

///
/// Constructor
///
/// The constructor a class had before augmentation. `native()` stands in
/// for a built-in no-op whose parameters cannot be stated; it is treated as
/// accepting nothing.
///

#[derive(Clone)]
pub struct Constructor {
    signature: Signature,
    body: Option<Arc<ConstructorFn>>,
}

impl Constructor {
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(&mut Instance, &BoundArguments) -> Result<(), Error> + Send + Sync + 'static,
    {
        Self {
            signature,
            body: Some(Arc::new(body)),
        }
    }

    #[must_use]
    pub const fn native() -> Self {
        Self {
            signature: Signature::empty(),
            body: None,
        }
    }

    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    #[must_use]
    pub const fn is_native(&self) -> bool {
        self.body.is_none()
    }

    /// Bind `args` against the signature and run the body.
    pub fn invoke(&self, instance: &mut Instance, args: Arguments) -> Result<(), Error> {
        let bound = self.signature.bind(args)?;

        match &self.body {
            Some(body) => body(instance, &bound),
            None => Ok(()),
        }
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &self.signature)
            .field("native", &self.is_native())
            .finish()
    }
}

///
/// TESTS
///
