use synthetic::{Error, error::ArgumentError, prelude::*};

///
/// Point
///
/// Original constructor takes `origin`; `x` and `y` are filled from the
/// remaining call arguments.
///

#[derive(Debug, Synthetic)]
#[synthetic(constructor, init(path = "record_origin", params(origin)))]
pub struct Point {
    #[synthetic(default = 10)]
    x: i64,

    #[synthetic(default = 20, read_only)]
    y: i64,
}

fn record_origin(instance: &mut Instance, bound: &BoundArguments) -> Result<(), Error> {
    instance.set_slot("origin", bound.get("origin").cloned().unwrap_or_default());

    Ok(())
}

///
/// Settings
///
/// No constructor marker: every field takes its default.
///

#[derive(Debug, Synthetic)]
#[synthetic(naming = "camel")]
pub struct Settings {
    #[synthetic(default = "String::from(\"dark\")")]
    theme: String,

    #[synthetic(default = 3)]
    retries: u32,

    #[synthetic(storage = "__tags")]
    tags: Vec<String>,

    #[synthetic(validator = "is_text")]
    label: Option<String>,
}

fn is_text(value: &Value) -> bool {
    value.as_text().is_some()
}

///
/// Account
///

#[derive(Debug, Synthetic)]
#[synthetic(constructor, naming = "snake")]
pub struct Account {
    #[synthetic(default = "String::new()")]
    owner: String,

    #[synthetic(read_only, getter = "account_id")]
    id: u64,
}

///
/// Logged
///
/// Original constructor keeps every keyword it is not given a field for.
///

#[derive(Debug, Synthetic)]
#[synthetic(
    constructor,
    init(path = "record_options", params(name), variadic_keywords)
)]
pub struct Logged {
    #[synthetic(default = false)]
    verbose: bool,
}

fn record_options(instance: &mut Instance, bound: &BoundArguments) -> Result<(), Error> {
    let name = bound.get("name").cloned().unwrap_or_default();
    instance.set_slot("name", name);
    let options = bound.keyword().keys().map(|k| Value::from(k.as_str()));
    instance.set_slot("options", Value::List(options.collect()));

    Ok(())
}

///
/// Token
///
/// Keyword field names keep their plain spelling at runtime.
///

#[derive(Debug, Synthetic)]
#[synthetic(constructor)]
pub struct Token {
    #[synthetic(default = 1)]
    r#type: i64,
}

//
// construction
//

#[test]
fn derived_constructor_splits_arguments() {
    let point = Point::construct(Arguments::positional([1, 2, 3])).unwrap();

    assert_eq!(*point.x(), 2);
    assert_eq!(*point.y(), 3);

    let instance = Point::class()
        .construct(Arguments::positional([1, 2, 3]))
        .unwrap();
    assert_eq!(instance.slot("origin"), Some(&Value::Int(1)));
    assert_eq!(instance.get("x").unwrap(), &Value::Int(2));
}

#[test]
fn derived_keywords_beat_positionals() {
    let point = Point::construct(Arguments::positional([1, 2]).kwarg("x", 7)).unwrap();

    assert_eq!(*point.x(), 7);
    assert_eq!(*point.y(), 20);
}

#[test]
fn derived_original_still_requires_its_parameters() {
    let err = Point::construct(Arguments::new().kwarg("x", 1)).unwrap_err();

    assert!(matches!(
        err,
        Error::Argument(ArgumentError::Missing { ref param }) if param == "origin"
    ));
}

#[test]
fn derived_setters_follow_read_only() {
    let mut point = Point::construct(Arguments::positional([0])).unwrap();
    point.set_x(99);

    assert_eq!(*point.x(), 99);
    assert!(Point::class().accessors().setter("set_y").is_none());
}

#[test]
fn derived_defaults_without_constructor_marker() {
    let settings = Settings::construct(Arguments::new().kwarg("retries", 9u32)).unwrap();

    assert_eq!(settings.getTheme(), "dark");
    assert_eq!(*settings.getRetries(), 3);
    assert!(settings.getTags().is_empty());
    assert_eq!(settings.getLabel(), &None);
}

#[test]
fn derived_class_records_metadata() {
    let class = Settings::class();
    let meta = class.metadata().unwrap();

    let names: Vec<_> = meta.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["theme", "retries", "tags", "label"]);
    assert!(!meta.consumes_arguments());

    let tags = meta.field("tags").unwrap();
    assert_eq!(tags.storage_key(), "__tags");

    let label = meta.field("label").unwrap().validator().unwrap();
    assert_eq!(label.label(), "is_text");
    assert!(label.check(&Value::from("x")));
    assert!(!label.check(&Value::Int(1)));

    assert!(class.accessors().getter("getTheme").is_some());
    assert!(class.accessors().setter("setRetries").is_some());
}

#[test]
fn derived_getter_override() {
    let account = Account::construct(Arguments::new().kwarg("owner", "ada").kwarg("id", 7u64))
        .unwrap();

    assert_eq!(account.get_owner(), "ada");
    assert_eq!(*account.account_id(), 7);
    assert!(Account::class().accessors().getter("account_id").is_some());
    assert!(Account::class().accessors().setter("set_id").is_none());
}

#[test]
fn derived_type_mismatch_is_reported() {
    let err = Account::construct(Arguments::new().kwarg("id", 7)).unwrap_err();

    assert!(matches!(
        err,
        Error::ValueMismatch { ref field, expected: "uint", .. } if field == "id"
    ));
}

#[test]
fn derived_variadic_keywords_reach_original() {
    let args = Arguments::positional(["svc"])
        .kwarg("verbose", true)
        .kwarg("level", 3);

    let logged = Logged::construct(args.clone()).unwrap();
    assert!(*logged.verbose());

    // `verbose` fills the field and still reaches the keyword catch-all
    let instance = Logged::class().construct(args).unwrap();
    assert_eq!(instance.slot("name"), Some(&Value::from("svc")));
    assert_eq!(
        instance.slot("options"),
        Some(&Value::from(vec![Value::from("level"), Value::from("verbose")]))
    );
}

#[test]
fn derived_raw_field_keeps_plain_name() {
    let mut token = Token::construct(Arguments::new().kwarg("type", 4)).unwrap();
    assert_eq!(*token.r#type(), 4);

    token.set_type(5);
    assert_eq!(*token.r#type(), 5);

    let meta = Token::class().metadata().unwrap();
    assert_eq!(meta.field("type").unwrap().storage_key(), "_type");
    assert!(Token::class().accessors().getter("type").is_some());
}
