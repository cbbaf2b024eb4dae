use bigint::BigInt;

#[test]
fn json_round_trip() {
    for text in [
        "0",
        "-1",
        "930350724101083004",
        "-20472586154086285871813986416465847334330107130741145019054056571228754631302",
    ] {
        let value: BigInt = text.parse().unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", text));
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn malformed_strings_are_rejected() {
    for json in ["\"\"", "\"-\"", "\"0x42\"", "\"twelve\""] {
        assert!(serde_json::from_str::<BigInt>(json).is_err(), "{}", json);
    }
}
