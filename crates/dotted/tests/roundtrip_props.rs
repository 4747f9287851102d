use dotted::{dot, dot_json, DottedCollection};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z0-9_\\\\]{0,6}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn wrap_then_project_is_identity(value in arb_json()) {
        let wrapped = dot(value.clone()).unwrap();
        prop_assert_eq!(wrapped.to_value(), value);
    }

    #[test]
    fn json_roundtrip_preserves_value(value in arb_json()) {
        let wrapped = dot(value.clone()).unwrap();
        let text = wrapped.to_json().unwrap();
        prop_assert_eq!(&text, &serde_json::to_string(&value).unwrap());
        prop_assert_eq!(dot_json(&text).unwrap().to_value(), value);
    }

    #[test]
    fn set_then_get_returns_value(keys in prop::collection::vec("[a-z]{1,4}", 1..5), leaf in any::<i64>()) {
        let mut root = dot(serde_json::json!({})).unwrap();
        let path = keys.join(".");
        root.set(path.as_str(), leaf).unwrap();
        prop_assert_eq!(root.get(path.as_str()).unwrap().as_i64(), Some(leaf));
        prop_assert!(root.contains(path.as_str()));
    }
}
