//! Dispatch ordering: first match for get, stacking for set.

use morph_tests::prelude::*;

fn logging_getter(log: &CallLog, label: &'static str) -> Callable<morph_registry::GetMutatorFn<LedgerModel>> {
    let log = log.clone();
    Callable::getter(move |_: &LedgerModel, key: &str, _: &AttrConfig| {
        log.record(format!("{}:get:{}", label, key));
        Value::from(label)
    })
}

fn logging_setter(log: &CallLog, label: &'static str) -> Callable<morph_registry::SetMutatorFn<LedgerModel>> {
    let log = log.clone();
    Callable::setter(move |model: &mut LedgerModel, key: &str, value: Value, _: &AttrConfig| {
        log.record(format!("{}:set:{}", label, key));
        model.store.insert(key.to_string(), value);
        Value::from(label)
    })
}

fn handler(
    log: &CallLog,
    label: &'static str,
    stack: bool,
) -> MutationHandler<LedgerModel> {
    let mut handler = MutationHandler::new(label);
    handler
        .register_get_mutator(logging_getter(log, label), false, Some("mutations"))
        .unwrap()
        .register_set_mutator(logging_setter(log, label), stack, Some("mutations"))
        .unwrap();
    handler
}

#[test]
fn test_get_never_consults_handlers_after_first_match() {
    // GIVEN two handlers that both claim `attr`, the second a spy
    let log = CallLog::new();
    let mut builder = RegistryBuilder::new();
    builder
        .register(handler(&log, "first", true))
        .register(handler(&log, "spy", true));
    let registry = builder.build();
    let model = LedgerModel::with_bag(vec!["attr"]);

    // WHEN
    let value = Router::new(&registry).get_attribute(&model, "attr").unwrap();

    // THEN
    assert_eq!(value, Value::from("first"));
    assert_eq!(log.entries(), vec!["first:get:attr"]);
}

#[test]
fn test_non_stacking_set_returns_immediately() {
    // GIVEN
    let log = CallLog::new();
    let mut builder = RegistryBuilder::new();
    builder
        .register(handler(&log, "first", false))
        .register(handler(&log, "spy", true));
    let registry = builder.build();
    let mut model = LedgerModel::with_bag(vec!["attr"]);

    // WHEN
    let outcome = Router::new(&registry)
        .set_attribute(&mut model, "attr", Value::from("v"))
        .unwrap();

    // THEN
    assert_eq!(outcome.result(), Some(&Value::from("first")));
    assert_eq!(log.entries(), vec!["first:set:attr"]);
}

#[test]
fn test_stacking_set_invokes_all_matches_in_order() {
    // GIVEN N stacking handlers, one of which does not claim the attribute
    let log = CallLog::new();
    let mut builder = RegistryBuilder::new();
    for label in ["one", "two", "three", "four"] {
        builder.register(handler(&log, label, true));
    }
    let mut elsewhere = MutationHandler::new("elsewhere");
    elsewhere
        .register_set_mutator(logging_setter(&log, "elsewhere"), true, Some("other_bag"))
        .unwrap();
    builder.register(elsewhere);
    let registry = builder.build();
    let mut model = LedgerModel::with_bag(vec!["attr"]);

    // WHEN
    let outcome = Router::new(&registry)
        .set_attribute(&mut model, "attr", Value::from("v"))
        .unwrap();

    // THEN
    assert_eq!(
        log.entries(),
        vec!["one:set:attr", "two:set:attr", "three:set:attr", "four:set:attr"]
    );
    assert_eq!(outcome.handlers(), ["one", "two", "three", "four"].map(String::from));
    assert_eq!(outcome.result(), Some(&Value::from("four")));
    assert_eq!(model.baseline("attr"), None);
}

#[test]
fn test_get_ignores_stack_flag() {
    let log = CallLog::new();
    let mut first = MutationHandler::new("first");
    first
        .register_get_mutator(logging_getter(&log, "first"), true, Some("mutations"))
        .unwrap();
    let mut builder = RegistryBuilder::new();
    builder.register(first).register(handler(&log, "second", true));
    let registry = builder.build();
    let model = LedgerModel::with_bag(vec!["attr"]);

    let value = Router::new(&registry).get_attribute(&model, "attr").unwrap();

    assert_eq!(value, Value::from("first"));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_membership_follows_bag_membership() {
    let log = CallLog::new();
    let handler = handler(&log, "h", false);
    let list = LedgerModel::with_bag(vec!["a", "b"]);
    let map = LedgerModel::with_bag(Value::Map(attrs! { "c" => Value::Null, "d" => "" }));

    for name in ["a", "b"] {
        assert!(handler.has_get_mutator(&list, name));
        assert!(handler.has_set_mutator(&list, name));
    }
    for name in ["c", "d"] {
        assert!(handler.has_get_mutator(&map, name));
        assert!(handler.has_set_mutator(&map, name));
    }
    for name in ["", "e", "A", "mutations"] {
        assert!(!handler.has_get_mutator(&list, name));
        assert!(!handler.has_set_mutator(&map, name));
    }
    assert!(log.is_empty());
}

#[test]
fn test_bag_shape_is_read_at_dispatch_time() {
    // GIVEN
    let mut builder = RegistryBuilder::new();
    builder
        .register_get_mutator("mutations", "storeGet")
        .unwrap()
        .register_set_mutator("mutations", "lowerSet")
        .unwrap();
    let registry = builder.build();
    let router = Router::new(&registry);
    let mut model = LedgerModel::with_bag(vec!["attr"]);

    // WHEN the field turns into a map, then into a scalar
    router.set_attribute(&mut model, "attr", Value::from("A")).unwrap();
    model.set_bag(Value::Map(attrs! { "attr" => "lower" }));
    router.set_attribute(&mut model, "attr", Value::from("B")).unwrap();
    model.set_bag("attr");
    let outcome = router.set_attribute(&mut model, "attr", Value::from("C")).unwrap();

    // THEN
    assert_eq!(model.store.get("attr"), Some(&Value::from("b")));
    assert!(outcome.is_delegated());
    assert_eq!(model.baseline("attr"), Some(&Value::from("C")));
}
