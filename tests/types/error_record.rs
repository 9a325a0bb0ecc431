use fuzzy_search_error::{context_map, ErrorKind, ErrorRecord, StructuredError};

#[test]
fn record_contains_every_field() {
    let expected_line = line!() + 1;
    let err = StructuredError::new("bad algorithm")
        .with_context_map(context_map! { "algorithm" => "xyz" })
        .with_code(400);
    let record = err.to_record();

    assert_eq!(record.error_type, "StructuredError");
    assert_eq!(record.message, "bad algorithm");
    assert_eq!(record.code, 400);
    assert_eq!(record.context, context_map! { "algorithm" => "xyz" });
    assert!(record.file.replace('\\', "/").ends_with("tests/types/error_record.rs"));
    assert_eq!(record.line, expected_line);
    assert!(record.column > 0);
}

#[test]
fn record_is_a_snapshot() {
    let err = StructuredError::new("boom").with_context("a", 1);
    let record = err.to_record();
    let err = err.with_context("b", 2);

    assert_eq!(record.context.len(), 1);
    assert_eq!(err.to_record().context.len(), 2);
}

#[test]
fn exporting_twice_is_identical() {
    let err = StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty");

    assert_eq!(err.to_record(), err.to_record());
    assert_eq!(ErrorRecord::from(err.clone()), err.to_record());
}

#[test]
fn exporting_twice_is_identical_with_nan_context() {
    let err = StructuredError::new("threshold rejected").with_context("threshold", f64::NAN);

    assert_eq!(err.to_record(), err.to_record());
    assert_eq!(err.clone(), err);
}

#[test]
fn unsigned_and_signed_context_values_match() {
    let unsigned = StructuredError::new("boom").with_context("limit", 10usize);
    let signed = context_map! { "limit" => 10 };

    assert_eq!(unsigned.context(), &signed);
}

#[test]
fn display_lists_causes() {
    let err = StructuredError::new("search failed")
        .with_cause(StructuredError::new("query failed").with_cause(std::io::Error::other("eof")));
    let line = err.to_record().to_string();

    assert!(line.ends_with("; caused by: query failed; caused by: eof"));
}

#[cfg(feature = "serde")]
mod serde_record {
    use super::*;
    use fuzzy_search_error::ContextValue;
    use serde_json::json;

    #[test]
    fn serializes_with_type_key() {
        let err = StructuredError::of_kind(ErrorKind::InvalidAlgorithm, "bad algorithm")
            .with_code(400)
            .with_context("algorithm", "xyz")
            .with_context("limits", context_map! { "max" => 10 });
        let value = serde_json::to_value(err.to_record()).unwrap();

        assert_eq!(value["type"], "InvalidAlgorithmError");
        assert_eq!(value["message"], "bad algorithm");
        assert_eq!(value["code"], 400);
        assert_eq!(value["context"], json!({ "algorithm": "xyz", "limits": { "max": 10 } }));
        assert!(value["line"].as_u64().is_some());
        assert!(value.get("causes").is_none());
    }

    #[test]
    fn context_keeps_insertion_order_in_json() {
        let err = StructuredError::new("boom").with_context("zeta", 1).with_context("alpha", 2);
        let json = serde_json::to_string(err.context()).unwrap();

        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn record_survives_json_round_trip() {
        let err = StructuredError::of_kind(ErrorKind::InvalidConfig, "limit too high")
            .with_code(422)
            .with_context("limit", 10usize)
            .with_context("columns", vec!["name", "email"])
            .with_cause(std::io::Error::other("rejected"));
        let record = err.to_record();

        let json = serde_json::to_string(&record).unwrap();
        let restored: ErrorRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn deserializes_record() {
        let input = json!({
            "type": "EmptySearchTermError",
            "message": "term is empty",
            "code": 0,
            "context": {
                "term": "",
                "fuzzy": true,
                "columns": ["name"],
                "weight": 0.5,
                "missing": null
            },
            "file": "src/search.rs",
            "line": 42
        });
        let record: ErrorRecord = serde_json::from_value(input).unwrap();

        assert_eq!(record.error_type, "EmptySearchTermError");
        assert_eq!(record.line, 42);
        assert_eq!(record.column, 0);
        assert!(record.causes.is_empty());
        assert_eq!(record.context.get("fuzzy"), Some(&ContextValue::Bool(true)));
        assert_eq!(record.context.get("weight"), Some(&ContextValue::Float(0.5)));
        assert_eq!(record.context.get("missing"), Some(&ContextValue::Null));
        let columns = record.context.get("columns").and_then(|v| v.as_list());
        assert_eq!(columns.map(<[_]>::len), Some(1));
    }
}
