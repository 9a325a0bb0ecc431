use fuzzy_search_error::{context_map, ContextValue};

#[test]
fn conversions_pick_matching_variant() {
    assert_eq!(ContextValue::from(-3i32), ContextValue::Int(-3));
    assert_eq!(ContextValue::from(3u8), ContextValue::UInt(3));
    assert_eq!(ContextValue::from(0.5f64), ContextValue::Float(0.5));
    assert_eq!(ContextValue::from('x'), ContextValue::Str("x".into()));
    assert_eq!(ContextValue::from(()), ContextValue::Null);
    assert_eq!(ContextValue::from(Some("a")), ContextValue::Str("a".into()));
    assert_eq!(ContextValue::from(Option::<u32>::None), ContextValue::Null);
}

#[test]
fn integer_accessors_cross_signedness() {
    assert_eq!(ContextValue::UInt(7).as_i64(), Some(7));
    assert_eq!(ContextValue::Int(7).as_u64(), Some(7));
    assert_eq!(ContextValue::Int(-1).as_u64(), None);
    assert_eq!(ContextValue::UInt(u64::MAX).as_i64(), None);
}

#[test]
fn nested_values_display() {
    let value = ContextValue::from(context_map! {
        "columns" => vec!["name", "email"],
        "weights" => context_map! { "name" => 2 },
    });

    assert_eq!(value.to_string(), r#"{columns=["name", "email"], weights={name=2}}"#);
    assert_eq!(value.type_name(), "map");
}
