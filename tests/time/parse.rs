use clockspan::civil::Time;

#[test]
fn round_trip() -> crate::Result {
    let t: Time = "23:29:39".parse()?;
    assert_eq!(t.to_string(), "23:29:39");

    let t: Time = "7:5:3".parse()?;
    assert_eq!(t.to_string(), "07:05:03");
    Ok(())
}

#[test]
fn hour_wraps() -> crate::Result {
    let t1: Time = "24:12:12".parse()?;
    let t2: Time = "0:12:12".parse()?;
    assert_eq!(t1, t2);
    Ok(())
}

#[test]
fn unparseable_segments_are_zero() -> crate::Result {
    assert_eq!("x:30:15".parse::<Time>()?, Time::new(0, 30, 15)?);
    assert_eq!("10:30:".parse::<Time>()?, Time::new(10, 30, 0)?);
    assert_eq!("1000:30:15".parse::<Time>()?, Time::new(0, 30, 15)?);
    Ok(())
}

#[test]
fn wrong_number_of_segments() {
    for input in ["", "12", "12:30", "12:30:00:00", "12-30-00"] {
        let err = input.parse::<Time>().unwrap_err();
        assert!(err.is_format(), "{input:?} gave {err}");
        assert!(!err.is_invalid_argument());
    }
}

#[test]
fn width_errors() {
    insta::assert_snapshot!(
        Time::new(300, 0, 0).unwrap_err(),
        @"parameter 'hour' with value 300 is not in the required range of 0..=255"
    );
    insta::assert_snapshot!(
        Time::from_hm(0, -5).unwrap_err(),
        @"parameter 'minute' with value -5 is not in the required range of 0..=255"
    );
}
