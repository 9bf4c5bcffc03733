use super::*;
use syn::parse_quote;

fn expand_err(input: DeriveInput) -> String {
    match expand(&input) {
        Ok(tokens) => panic!("expected a derive error, got {tokens}"),
        Err(err) => err.to_string(),
    }
}

//
// rejected at compile time
//

#[test]
fn generic_struct_is_rejected() {
    let err = expand_err(parse_quote! {
        struct Wrapper<T> {
            inner: T,
        }
    });

    assert!(err.contains("generic structs"), "{err}");
}

#[test]
fn repeated_init_param_is_rejected() {
    let err = expand_err(parse_quote! {
        #[synthetic(init(path = "setup", params(a, a)))]
        struct Twice {
            x: i64,
        }
    });

    assert!(err.contains("declared more than once"), "{err}");
}

#[test]
fn read_only_with_setter_is_rejected() {
    let err = expand_err(parse_quote! {
        struct Badge {
            #[synthetic(read_only, setter = "put_serial")]
            serial: i64,
        }
    });

    assert!(err.contains("cannot name a setter"), "{err}");
}

#[test]
fn storage_key_equal_to_getter_is_rejected() {
    let err = expand_err(parse_quote! {
        struct Clash {
            #[synthetic(storage = "x")]
            x: i64,
        }
    });

    assert!(err.contains("collides with an accessor"), "{err}");
}

#[test]
fn shared_storage_key_is_rejected() {
    let err = expand_err(parse_quote! {
        struct Shared {
            #[synthetic(storage = "slot")]
            a: i64,

            #[synthetic(storage = "slot")]
            b: i64,
        }
    });

    assert!(err.contains("already used by another field"), "{err}");
}

#[test]
fn accessor_generated_twice_is_rejected() {
    // plain naming: field `set_x` gets getter `set_x`, the setter of `x`
    let err = expand_err(parse_quote! {
        struct Overlap {
            set_x: i64,
            x: i64,
        }
    });

    assert!(err.contains("more than one field"), "{err}");
}

#[test]
fn getter_override_equal_to_other_storage_is_rejected() {
    let err = expand_err(parse_quote! {
        #[synthetic(naming = "snake")]
        struct Hidden {
            #[synthetic(getter = "_b")]
            a: i64,
            b: i64,
        }
    });

    assert!(err.contains("collides with an accessor"), "{err}");
}

#[test]
fn invalid_storage_key_is_rejected() {
    let err = expand_err(parse_quote! {
        struct Spaced {
            #[synthetic(storage = "has space")]
            x: i64,
        }
    });

    assert!(err.contains("not a valid identifier"), "{err}");
}

//
// accepted
//

#[test]
fn raw_field_gets_raw_accessor() {
    let input: DeriveInput = parse_quote! {
        struct Token {
            r#type: i64,
        }
    };

    let tokens = expand(&input).unwrap().to_string();

    assert!(tokens.contains("fn r#type"), "{tokens}");
    assert!(tokens.contains("fn set_type"), "{tokens}");
    // runtime names use the plain spelling
    assert!(tokens.contains("\"type\""), "{tokens}");
    assert!(tokens.contains("\"_type\""), "{tokens}");
}

#[test]
fn distinct_names_expand() {
    let input: DeriveInput = parse_quote! {
        #[synthetic(constructor, naming = "camel", init(path = "setup", params(origin)))]
        struct Point {
            #[synthetic(default = 10)]
            x: i64,

            #[synthetic(read_only, storage = "__y")]
            y: i64,
        }
    };

    let tokens = expand(&input).unwrap().to_string();

    assert!(tokens.contains("fn getX"), "{tokens}");
    assert!(tokens.contains("fn setX"), "{tokens}");
    assert!(!tokens.contains("fn setY"), "{tokens}");
    assert!(tokens.contains("\"__y\""), "{tokens}");
}
