use super::*;
use proptest::prelude::*;

// ---- helpers -----------------------------------------------------------

fn sig(params: &[&str]) -> Signature {
    Signature::new(params.iter().copied()).expect("valid signature")
}

fn fields(specs: &[(&str, i64)]) -> Vec<FieldSpec> {
    specs
        .iter()
        .map(|(name, default)| FieldSpec::new(*name, *default).expect("valid field"))
        .collect()
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

// ---- name slots and pairing ---------------------------------------------

#[test]
fn name_slots_append_unknown_fields_in_order() {
    let sig = sig(&["a", "b"]);
    let fields = fields(&[("b", 0), ("c", 0), ("d", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    assert_eq!(r.name_slots(), ["a", "b", "c", "d"]);
}

#[test]
fn surplus_positionals_stay_distinct() {
    let sig = sig(&["a"]);
    let fields = fields(&[("x", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let pairing = r.pair(ints(&[1, 2, 3, 4]));

    assert_eq!(
        pairing,
        vec![
            (Slot::Named("a".into()), Value::Int(1)),
            (Slot::Named("x".into()), Value::Int(2)),
            (Slot::Extra(2), Value::Int(3)),
            (Slot::Extra(3), Value::Int(4)),
        ]
    );
}

// ---- resolution -----------------------------------------------------------

#[test]
fn end_to_end_scenario() {
    let sig = sig(&["a"]);
    let fields = fields(&[("x", 10), ("y", 20)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([1, 2, 3]));

    assert_eq!(out.value("_x"), Some(&Value::Int(2)));
    assert_eq!(out.value("_y"), Some(&Value::Int(3)));
    assert_eq!(out.forwarded, Arguments::positional([1]));
}

#[test]
fn keyword_beats_positional() {
    let sig = Signature::empty();
    let fields = fields(&[("f", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([5]).kwarg("f", 7));

    assert_eq!(out.value("_f"), Some(&Value::Int(7)));
}

#[test]
fn positional_fallback_then_default() {
    let sig = Signature::empty();
    let fields = fields(&[("f", 0), ("g", 9)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([5]));

    assert_eq!(out.value("_f"), Some(&Value::Int(5)));
    assert_eq!(out.value("_g"), Some(&Value::Int(9)));
}

#[test]
fn forwarding_keeps_declared_parameters() {
    let sig = sig(&["a", "b"]);
    let fields = fields(&[("b", 0), ("c", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([1, 2, 3]));

    assert_eq!(out.forwarded, Arguments::positional([1, 2]));
    assert_eq!(out.value("_b"), Some(&Value::Int(2)));
    assert_eq!(out.value("_c"), Some(&Value::Int(3)));
}

#[test]
fn keyword_for_declared_parameter_is_forwarded() {
    let sig = sig(&["b"]);
    let fields = fields(&[("b", 0), ("c", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::new().kwarg("b", 4).kwarg("c", 5));

    assert_eq!(out.forwarded, Arguments::new().kwarg("b", 4));
    assert_eq!(out.value("_b"), Some(&Value::Int(4)));
    assert_eq!(out.value("_c"), Some(&Value::Int(5)));
}

#[test]
fn variadic_keyword_still_receives_field_keywords() {
    let sig = sig(&["a"]).with_variadic_keyword();
    let fields = fields(&[("x", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([1]).kwarg("x", 8));

    assert_eq!(out.value("_x"), Some(&Value::Int(8)));
    assert_eq!(out.forwarded, Arguments::positional([1]).kwarg("x", 8));
}

#[test]
fn variadic_positional_still_receives_field_positionals() {
    let sig = sig(&["a"]).with_variadic_positional();
    let fields = fields(&[("x", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([1, 2, 3]).kwarg("x", 4));

    // keyword wins for the field; positional 2 is still forwarded
    assert_eq!(out.value("_x"), Some(&Value::Int(4)));
    assert_eq!(out.forwarded, Arguments::positional([1, 2, 3]));
}

#[test]
fn surplus_positionals_are_forwarded_in_order() {
    let sig = Signature::empty().with_variadic_positional();
    let fields = fields(&[("x", 0)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let out = r.reconcile(Arguments::positional([1, 2, 3]));

    assert_eq!(out.value("_x"), Some(&Value::Int(1)));
    assert_eq!(out.forwarded.positional, ints(&[1, 2, 3]));
}

#[test]
fn no_consumption_still_strips_field_arguments() {
    let sig = sig(&["a"]);
    let fields = fields(&[("x", 10)]);
    let r = ArgumentReconciler::new(&sig, &fields, false);

    let out = r.reconcile(Arguments::positional([1, 2]).kwarg("x", 3));

    assert_eq!(out.value("_x"), Some(&Value::Int(10)));
    assert_eq!(out.forwarded, Arguments::positional([1]));
}

#[test]
fn values_follow_field_order() {
    let sig = Signature::empty();
    let fields = fields(&[("z", 1), ("a", 2), ("m", 3)]);
    let r = ArgumentReconciler::new(&sig, &fields, true);

    let keys: Vec<_> = r
        .reconcile(Arguments::new())
        .values
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    assert_eq!(keys, ["_z", "_a", "_m"]);
}

// ---- properties -----------------------------------------------------------

proptest! {
    #[test]
    fn defaults_only_without_consumption(
        positional in prop::collection::vec(any::<i64>(), 0..6),
        keyword in prop::collection::btree_map("[a-d]", any::<i64>(), 0..4),
    ) {
        let sig = Signature::empty().with_variadic_positional().with_variadic_keyword();
        let fields = fields(&[("a", 1), ("b", 2), ("c", 3)]);
        let r = ArgumentReconciler::new(&sig, &fields, false);

        let mut args = Arguments::positional(positional);
        for (name, value) in keyword {
            args = args.kwarg(name, value);
        }

        let out = r.reconcile(args);

        for field in &fields {
            prop_assert_eq!(out.value(field.storage_key()), Some(field.default_value()));
        }
    }

    #[test]
    fn forwarded_positionals_are_an_ordered_subsequence(
        positional in prop::collection::vec(any::<i64>(), 0..8),
    ) {
        let sig = sig(&["a"]);
        let fields = fields(&[("x", 0), ("y", 0)]);
        let r = ArgumentReconciler::new(&sig, &fields, true);

        let out = r.reconcile(Arguments::positional(positional.clone()));

        // x and y occupy slots 1 and 2; everything else passes through
        let expected: Vec<Value> = positional
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 1 && *i != 2)
            .map(|(_, v)| Value::Int(*v))
            .collect();

        prop_assert_eq!(out.forwarded.positional, expected);
    }
}
