use clockspan::{civil::Time, TimePeriod};

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct Shift {
    start: Time,
    length: TimePeriod,
}

#[test]
fn round_trip() -> crate::Result {
    let shift = Shift {
        start: Time::new(22, 0, 0)?,
        length: TimePeriod::from_hm(8, 30)?,
    };
    let json = serde_json::to_string(&shift).unwrap();
    assert_eq!(json, r#"{"start":"22:00:00","length":30600}"#);
    let got: Shift = serde_json::from_str(&json).unwrap();
    assert_eq!(got, shift);
    Ok(())
}

#[test]
fn lenient_time_strings() -> crate::Result {
    let json = r#"{"start":"25:x:7","length":-60}"#;
    let got: Shift = serde_json::from_str(json).unwrap();
    assert_eq!(got.start, Time::new(1, 0, 7)?);
    assert_eq!(got.length, TimePeriod::new(-60));
    Ok(())
}

#[test]
fn errors() {
    let json = r#"{"start":"22:00","length":0}"#;
    let err = serde_json::from_str::<Shift>(json).unwrap_err();
    assert!(
        err.to_string().starts_with(
            "wrong input format, expected exactly 3 colon-delimited \
             segments (hh:mm:ss) but found 2",
        ),
        "{err}",
    );

    let json = r#"{"start":"22:00:00","length":18446744073709551615}"#;
    let err = serde_json::from_str::<Shift>(json).unwrap_err();
    assert!(
        err.to_string().contains("is not in the required range"),
        "{err}",
    );
}
