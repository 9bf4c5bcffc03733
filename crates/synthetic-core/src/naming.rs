use convert_case::{Case, Casing};
use derive_more::Display;
use serde::Deserialize;
use std::sync::Arc;

///
/// NamingConvention
///
/// Turns a field name into its public accessor names. Implementations must
/// be stable and produce distinct, valid identifiers for any valid field
/// name.
///

pub trait NamingConvention: Send + Sync {
    fn getter_name(&self, field: &str) -> String;

    fn setter_name(&self, field: &str) -> String;
}

///
/// SnakeCase
/// `get_x` / `set_x`
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SnakeCase;

impl NamingConvention for SnakeCase {
    fn getter_name(&self, field: &str) -> String {
        format!("get_{field}")
    }

    fn setter_name(&self, field: &str) -> String {
        format!("set_{field}")
    }
}

///
/// CamelCase
/// `getX` / `setX`
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CamelCase;

impl NamingConvention for CamelCase {
    fn getter_name(&self, field: &str) -> String {
        format!("get_{field}").to_case(Case::Camel)
    }

    fn setter_name(&self, field: &str) -> String {
        format!("set_{field}").to_case(Case::Camel)
    }
}

///
/// Plain
/// `x` / `set_x`, the usual Rust accessor shape
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl NamingConvention for Plain {
    fn getter_name(&self, field: &str) -> String {
        field.to_string()
    }

    fn setter_name(&self, field: &str) -> String {
        format!("set_{field}")
    }
}

///
/// NamingStyle
///
/// Selects one of the built-in conventions by name, as it appears in
/// configuration files and derive attributes.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NamingStyle {
    #[default]
    #[display("snake")]
    Snake,
    #[display("camel")]
    Camel,
    #[display("plain")]
    Plain,
}

impl NamingStyle {
    #[must_use]
    pub fn convention(self) -> Arc<dyn NamingConvention> {
        match self {
            Self::Snake => Arc::new(SnakeCase),
            Self::Camel => Arc::new(CamelCase),
            Self::Plain => Arc::new(Plain),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_conventions() {
        assert_eq!(SnakeCase.getter_name("max_speed"), "get_max_speed");
        assert_eq!(SnakeCase.setter_name("max_speed"), "set_max_speed");

        assert_eq!(CamelCase.getter_name("max_speed"), "getMaxSpeed");
        assert_eq!(CamelCase.setter_name("x"), "setX");

        assert_eq!(Plain.getter_name("x"), "x");
        assert_eq!(Plain.setter_name("x"), "set_x");
    }

    #[test]
    fn style_selects_convention() {
        let camel = NamingStyle::Camel.convention();

        assert_eq!(camel.getter_name("x"), "getX");
        assert_eq!(NamingStyle::default(), NamingStyle::Snake);
        assert_eq!(NamingStyle::Plain.to_string(), "plain");
    }
}
