use dotted::{dot, dot_json, Dotted, DottedCollection, DottedError, DottedList, DottedMap};
use serde_json::json;

#[test]
fn factory_kind_matrix() {
    let obj = dot(json!([1, 2, {"hi": "world", "3": [4, 5, 6]}])).unwrap();
    assert!(obj.is_list());
    assert!(obj.get(2usize).unwrap().is_map());
    assert!(obj.get("2.3").unwrap().is_list());
    assert!(obj.get("2.3.0").unwrap().is_scalar());
    assert_eq!(obj.get("2.hi").unwrap().as_str(), Some("world"));

    let obj = dot(json!({"hi": [1, 2, {"3": 4}], "world": 5})).unwrap();
    assert!(obj.is_map());
    assert!(obj.get("hi").unwrap().is_list());
    assert!(obj.get("hi.2").unwrap().is_map());
    assert_eq!(obj.get("world").unwrap().as_i64(), Some(5));

    assert_eq!(dot(json!(1)).unwrap(), Dotted::from(1));
    assert!(dot(json!(null)).unwrap().is_null());
}

#[test]
fn dot_json_matrix() {
    let obj = dot_json(r#"[1, 2, {"test": [], "hello": "world"}]"#).unwrap();
    assert_eq!(obj, json!([1, 2, {"test": [], "hello": "world"}]));
    assert!(obj.get("2.test").unwrap().is_list());

    let obj = dot_json(r#"{"test": [1, 2, {}], "hello": "world"}"#).unwrap();
    assert!(obj.get("test.2").unwrap().is_map());
    assert_eq!(obj.get("hello").unwrap().as_str(), Some("world"));

    assert!(matches!(dot_json("[1,"), Err(DottedError::Json(_))));
}

#[test]
fn to_json_matrix() {
    let obj = dot(json!({"a": "b", "c": [1, 2, {"d": [3, 4, [5]]}]})).unwrap();
    let cases = [
        ("c", r#"[1,2,{"d":[3,4,[5]]}]"#),
        ("c.2", r#"{"d":[3,4,[5]]}"#),
        ("c.2.d", "[3,4,[5]]"),
        ("c.2.d.2", "[5]"),
    ];
    for (path, expected) in cases {
        assert_eq!(obj.get(path).unwrap().to_json().unwrap(), expected, "{path}");
    }
    assert_eq!(
        obj.to_json().unwrap(),
        serde_json::to_string(&obj.to_value()).unwrap()
    );
}

#[test]
fn list_workflow() {
    let mut obj = DottedList::new();
    assert!(matches!(
        obj.get(0usize),
        Err(DottedError::IndexOutOfRange { index: 0, len: 0 })
    ));

    obj.set(0usize, 0).unwrap();
    obj.set(1usize, 1).unwrap();
    assert!(matches!(
        obj.set(3usize, 3),
        Err(DottedError::IndexOutOfRange { index: 3, len: 2 })
    ));
    obj.push(2).unwrap();
    assert_eq!(obj, json!([0, 1, 2]));

    // A failed nested write leaves no trace of the container it would create.
    assert!(matches!(
        obj.set("3.1", 1),
        Err(DottedError::IndexOutOfRange { index: 1, len: 0 })
    ));
    assert_eq!(obj, json!([0, 1, 2]));

    obj.set("3.0", 3).unwrap();
    obj.set("3.1", 4).unwrap();
    obj.set("3.2", json!([5, 6])).unwrap();
    assert_eq!(obj, json!([0, 1, 2, [3, 4, [5, 6]]]));
    assert!(obj.get("3.2").unwrap().is_list());

    obj.set("4", 7).unwrap();
    obj.set(4usize, 8).unwrap();
    obj.insert(4, 7).unwrap();
    assert_eq!(obj, json!([0, 1, 2, [3, 4, [5, 6]], 7, 8]));

    obj.delete(5usize).unwrap();
    obj.delete("4").unwrap();
    obj.delete("3.2").unwrap();
    assert_eq!(obj, json!([0, 1, 2, [3, 4]]));

    obj.delete("3").unwrap();
    obj.set(3usize, 3).unwrap();
    obj.delete(0usize).unwrap();
    assert_eq!(obj, json!([1, 2, 3]));
    assert!(matches!(
        obj.delete(3usize),
        Err(DottedError::IndexOutOfRange { .. })
    ));

    let plain = obj.to_value();
    assert_eq!(plain, json!([1, 2, 3]));
    assert_eq!(obj.to_string(), plain.to_string());
}

#[test]
fn map_workflow() {
    let mut obj = DottedMap::new();
    assert!(matches!(
        obj.set(0usize, 0),
        Err(DottedError::InvalidKey { .. })
    ));
    obj.set("0", 0).unwrap();
    assert_eq!(obj, json!({"0": 0}));

    let mut obj = DottedMap::new();
    obj.update([("hello", json!({"world": {"wide": "web"}}))])
        .unwrap();
    assert!(obj.get("hello.world").unwrap().is_map());
    assert_eq!(
        obj.get("hello.world.wide").unwrap(),
        obj.get("hello").unwrap().get("world").unwrap().get("wide").unwrap()
    );

    obj.set("hello.world.free", "tour").unwrap();
    assert_eq!(obj, json!({"hello": {"world": {"wide": "web", "free": "tour"}}}));

    obj.set("hello.world.wide", "tour").unwrap();
    obj.set("hello.world.free", "web").unwrap();
    assert_eq!(obj, json!({"hello": {"world": {"wide": "tour", "free": "web"}}}));

    obj.delete("hello.world.free").unwrap();
    obj.delete("hello.world.wide").unwrap();
    assert_eq!(obj, json!({"hello": {"world": {}}}));

    obj.get_mut("hello").unwrap().set("world.wide", "web").unwrap();
    assert_eq!(obj, json!({"hello": {"world": {"wide": "web"}}}));
    obj.get_mut("hello").unwrap().delete("world.wide").unwrap();
    assert_eq!(obj, json!({"hello": {"world": {}}}));

    obj.set("hello", "goodbye").unwrap();
    assert_eq!(obj, json!({"hello": "goodbye"}));
    obj.delete("hello").unwrap();
    assert!(obj.is_empty());

    obj.set("hello", "goodbye").unwrap();
    let plain = obj.to_value();
    assert_eq!(plain, json!({"hello": "goodbye"}));
    assert!(plain.is_object());
}

#[test]
fn auto_vivification_matrix() {
    let mut obj = DottedMap::new();
    obj.set("a.b.c", 5).unwrap();
    assert_eq!(obj.get("a.b.c").unwrap().as_i64(), Some(5));
    assert!(obj.get("a").unwrap().is_map());
    assert!(obj.get("a.b").unwrap().is_map());

    let mut obj = DottedMap::new();
    obj.set("a.0.x", 5).unwrap();
    assert!(obj.get("a").unwrap().is_list());
    assert_eq!(obj, json!({"a": [{"x": 5}]}));

    let mut obj = DottedMap::new();
    obj.set("a.0.0.0", "deep").unwrap();
    assert_eq!(obj, json!({"a": [[["deep"]]]}));
}

#[test]
fn traversal_failure_matrix() {
    let mut obj = dot(json!({"a": 5})).unwrap();
    let expected = DottedError::PathTraversal {
        segment: "a".to_string(),
        rest: "b".to_string(),
    };
    assert_eq!(obj.set("a.b", 1), Err(expected.clone()));
    assert_eq!(obj.get("a.b"), Err(expected.clone()));
    assert_eq!(obj.delete("a.b"), Err(expected));
    assert!(!obj.contains("a.b"));
    assert_eq!(obj, json!({"a": 5}));
}

#[test]
fn key_validation_matrix() {
    assert!(matches!(
        dot(json!({"a.b": 1})),
        Err(DottedError::InvalidKey { .. })
    ));
    assert!(matches!(
        dot(json!([{"ok": [{"bad.key": 1}]}])),
        Err(DottedError::InvalidKey { .. })
    ));

    let obj = dot(json!({"a\\.b": 1})).unwrap();
    assert_eq!(obj.get("a\\.b").unwrap().as_i64(), Some(1));
    let key = obj.as_map().unwrap().keys().next().unwrap();
    assert!(key.contains('.'));
}

#[test]
fn containment_matrix() {
    let obj = dot(json!({"a": {"b": 1}})).unwrap();
    assert!(obj.contains("a.b"));
    assert!(!obj.contains("a.c"));
    assert!(!obj.contains("x.y"));
    assert!(!obj.contains("a.b.c"));
    assert!(obj.contains("a"));
}

#[test]
fn empty_segments_are_keys() {
    let mut obj = DottedMap::new();
    obj.set("a..b", 1).unwrap();
    assert_eq!(obj, json!({"a": {"": {"b": 1}}}));
    assert!(obj.contains("a..b"));
    obj.set(".", 2).unwrap();
    assert_eq!(obj.get("").unwrap().get("").unwrap().as_i64(), Some(2));
}
