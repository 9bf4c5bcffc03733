use convert_case::{Case, Casing};
use darling::FromMeta;

///
/// Naming
///
/// Compile-time mirror of the runtime naming conventions, so generated
/// methods and the runtime accessor table agree on every name.
///

#[derive(Clone, Copy, Debug, Default)]
pub enum Naming {
    Camel,
    #[default]
    Plain,
    Snake,
}

impl Naming {
    pub fn getter(self, field: &str) -> String {
        match self {
            Self::Camel => format!("get_{field}").to_case(Case::Camel),
            Self::Plain => field.to_string(),
            Self::Snake => format!("get_{field}"),
        }
    }

    pub fn setter(self, field: &str) -> String {
        match self {
            Self::Camel => format!("set_{field}").to_case(Case::Camel),
            Self::Plain | Self::Snake => format!("set_{field}"),
        }
    }

    /// Path of the matching runtime `NamingStyle` variant.
    pub const fn style_variant(self) -> &'static str {
        match self {
            Self::Camel => "Camel",
            Self::Plain => "Plain",
            Self::Snake => "Snake",
        }
    }
}

impl FromMeta for Naming {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        match s {
            "camel" => Ok(Self::Camel),
            "plain" => Ok(Self::Plain),
            "snake" => Ok(Self::Snake),
            _ => Err(darling::Error::unknown_value(s)),
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
    fn names_match_runtime_conventions() {
        assert_eq!(Naming::Snake.getter("max_speed"), "get_max_speed");
        assert_eq!(Naming::Camel.getter("max_speed"), "getMaxSpeed");
        assert_eq!(Naming::Camel.setter("x"), "setX");
        assert_eq!(Naming::Plain.getter("x"), "x");
        assert_eq!(Naming::Plain.setter("x"), "set_x");
    }

    #[test]
    fn parses_style_names() {
        assert!(matches!(Naming::from_string("camel"), Ok(Naming::Camel)));
        assert!(Naming::from_string("kebab").is_err());
    }
}
