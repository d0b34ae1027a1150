use pretty_assertions::assert_eq;
use request_bag::{Map, RequestBag, Value};
use serde_json::json;
use std::collections::HashMap;

fn map(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    other => panic!("expected an object, got {other}"),
  }
}

// --- Add / Get ---

#[test]
fn test_add_and_get_values() {
  let bag = RequestBag::new();

  bag.add("key", "value");

  assert_eq!(bag.get("key"), Some(json!("value")));
  assert!(bag.exists("key"));
}

#[test]
fn test_add_overwrites_previous_value() {
  let bag = RequestBag::new();

  bag.add("key", 1).add("key", json!({ "nested": [1, 2] }));

  assert_eq!(bag.get("key"), Some(json!({ "nested": [1, 2] })));
  assert_eq!(bag.len(), 1);
}

#[test]
fn test_get_missing_key_returns_none() {
  let bag = RequestBag::new();

  assert_eq!(bag.get("nonexistent"), None);
}

#[test]
fn test_get_or_returns_default_for_missing_key() {
  let bag = RequestBag::new();
  bag.add("present", "here");

  assert_eq!(bag.get_or("nonexistent", "default"), json!("default"));
  assert_eq!(bag.get_or("present", "default"), json!("here"));
}

#[test]
fn test_get_returns_stored_null_rather_than_default() {
  let bag = RequestBag::new();
  bag.add("key", Value::Null);

  assert_eq!(bag.get("key"), Some(Value::Null));
  assert_eq!(bag.get_or("key", "default"), Value::Null);
}

// --- Has / Exists ---

#[test]
fn test_has_is_true_for_non_empty_value() {
  let bag = RequestBag::new();

  bag.add("key", "value");

  assert!(bag.has("key"));
}

#[test]
fn test_has_and_exists_are_false_for_missing_key() {
  let bag = RequestBag::new();

  assert!(!bag.has("nonexistent"));
  assert!(!bag.exists("nonexistent"));
}

#[test]
fn test_has_is_false_for_empty_values_that_exist() {
  let bag = RequestBag::new();
  let empties = [
    ("null", Value::Null),
    ("empty_string", json!("")),
    ("false", json!(false)),
    ("zero", json!(0)),
    ("zero_float", json!(0.0)),
    ("empty_list", json!([])),
    ("empty_map", json!({})),
  ];

  for (key, value) in empties.clone() {
    bag.add(key, value);
  }

  for (key, _) in empties {
    assert!(!bag.has(key), "has({key}) should be false");
    assert!(bag.exists(key), "exists({key}) should be true");
  }
}

#[test]
fn test_has_is_true_for_zero_like_strings_and_nested_empties() {
  let bag = RequestBag::new();
  bag
    .add("zero_string", "0")
    .add("true", true)
    .add("list_of_empty", json!([""]))
    .add("map_of_empty", json!({ "k": null }));

  for key in ["zero_string", "true", "list_of_empty", "map_of_empty"] {
    assert!(bag.has(key), "has({key}) should be true");
  }
}

// --- Remove ---

#[test]
fn test_remove_deletes_key() {
  let bag = RequestBag::new();

  bag.add("key", "value");
  bag.remove("key");

  assert!(!bag.has("key"));
  assert!(!bag.exists("key"));
}

#[test]
fn test_remove_missing_key_is_a_no_op() {
  let bag = RequestBag::new();
  bag.add("other", 1);

  bag.remove("never_added");

  assert!(!bag.exists("never_added"));
  assert_eq!(bag.all(), map(json!({ "other": 1 })));
}

// --- All / Clear ---

#[test]
fn test_all_returns_every_entry() {
  let bag = RequestBag::new();

  bag.add("key1", "value1");
  bag.add("key2", "value2");

  assert_eq!(bag.all(), map(json!({ "key1": "value1", "key2": "value2" })));
  assert_eq!(bag.keys(), vec!["key1", "key2"]);
}

#[test]
fn test_all_is_a_snapshot() {
  let bag = RequestBag::new();
  bag.add("key", 1);

  let mut snapshot = bag.all();
  snapshot.insert("added_to_snapshot".to_string(), json!(2));
  bag.add("added_to_bag", 3);

  assert!(!bag.exists("added_to_snapshot"));
  assert!(!snapshot.contains_key("added_to_bag"));
}

#[test]
fn test_clear_removes_everything() {
  let bag = RequestBag::new();

  bag.add("key1", "value1");
  bag.add("key2", "value2");
  bag.clear();

  assert_eq!(bag.all(), Map::new());
  assert!(bag.is_empty());
}

#[test]
fn test_clear_on_empty_bag() {
  let bag = RequestBag::new();

  assert!(bag.clear().all().is_empty());
}

// --- Merge ---

#[test]
fn test_merge_inserts_new_keys() {
  let bag = RequestBag::new();

  bag.add("key1", "value1");
  bag.merge([("key2", "value2"), ("key3", "value3")]);

  assert_eq!(
    bag.all(),
    map(json!({ "key1": "value1", "key2": "value2", "key3": "value3" }))
  );
}

#[test]
fn test_merge_overwrites_existing_keys_and_keeps_others() {
  let bag = RequestBag::new();
  bag.add("key", "original").add("untouched", true);

  bag.merge(map(json!({ "key": "updated" })));

  assert_eq!(bag.get("key"), Some(json!("updated")));
  assert_eq!(bag.get("untouched"), Some(json!(true)));
}

#[test]
fn test_merge_accepts_a_hash_map() {
  let bag = RequestBag::new();
  let mut data: HashMap<String, Value> = HashMap::new();
  data.insert("count".to_string(), json!(3));
  data.insert("tags".to_string(), json!(["a", "b"]));

  bag.merge(data);

  assert_eq!(bag.get("count"), Some(json!(3)));
  assert_eq!(bag.get("tags"), Some(json!(["a", "b"])));
}

#[test]
fn test_merge_with_nothing_changes_nothing() {
  let bag = RequestBag::new();
  bag.add("key", "value");

  bag.merge(Map::new());

  assert_eq!(bag.all(), map(json!({ "key": "value" })));
}

// --- Chaining / Isolation ---

#[test]
fn test_methods_are_chainable() {
  let bag = RequestBag::new();

  let result = bag.add("key1", "value1").add("key2", "value2").remove("key1");

  assert!(std::ptr::eq(result, &bag));
  assert!(!bag.has("key1"));
  assert!(bag.has("key2"));
}

#[test]
fn test_chained_calls_observe_prior_mutations() {
  let bag = RequestBag::new();

  let seen = bag
    .add("a", 1)
    .merge([("b", 2)])
    .add("c", 3)
    .all();

  assert_eq!(seen, map(json!({ "a": 1, "b": 2, "c": 3 })));
}

#[test]
fn test_independent_bags_do_not_share_state() {
  let first = RequestBag::new();
  let second = RequestBag::new();

  first.add("only_first", 1);
  second.add("only_second", 2).clear();

  assert_eq!(first.all(), map(json!({ "only_first": 1 })));
  assert!(second.all().is_empty());
}

#[test]
fn test_clone_is_independent() {
  let original = RequestBag::new();
  original.add("key", "value");

  let copy = original.clone();
  copy.add("key", "changed").add("extra", 1);

  assert_eq!(original.all(), map(json!({ "key": "value" })));
  assert_eq!(copy.len(), 2);
}

#[test]
fn test_lifecycle_scenario() {
  let bag = RequestBag::new();

  bag.add("a", "x");
  bag.add("b", "");
  assert!(bag.has("a"));
  assert!(!bag.has("b"));
  assert!(bag.exists("b"));

  bag.merge([("b", "y"), ("c", "z")]);
  assert_eq!(bag.all(), map(json!({ "a": "x", "b": "y", "c": "z" })));

  bag.clear();
  assert_eq!(bag.all(), map(json!({})));
}
