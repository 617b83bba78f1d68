use clockspan::{civil::Time, TimePeriod};

#[test]
fn constructors() -> crate::Result {
    assert_eq!(TimePeriod::from_hms(1, 1, 11)?.interval(), 3671);
    assert_eq!(TimePeriod::from_hm(1, 2)?.interval(), 3720);
    assert_eq!(TimePeriod::from_hms(30, 0, 0)?.interval(), 108_000);
    assert_eq!(TimePeriod::try_from(3671u64)?, TimePeriod::new(3671));
    assert_eq!(TimePeriod::try_from(-3671i128)?, TimePeriod::new(-3671));
    Ok(())
}

#[test]
fn between_is_directional() -> crate::Result {
    let first = Time::new(12, 33, 45)?;
    let second = Time::new(11, 34, 1)?;
    assert_eq!(TimePeriod::between(first, second).interval(), 82_816);
    assert_eq!(TimePeriod::between(second, first).interval(), 3_584);
    assert_eq!(TimePeriod::between(first, first), TimePeriod::ZERO);
    Ok(())
}

#[test]
fn arithmetic() -> crate::Result {
    let p1 = TimePeriod::from_hms(13, 13, 59)?;
    let p2 = TimePeriod::from_hms(13, 13, 13)?;
    assert_eq!(p1 + p2, TimePeriod::from_hms(26, 27, 12)?);
    assert_eq!(p1 - p2, TimePeriod::from_hms(0, 0, 46)?);
    assert_eq!(p2 - p1, TimePeriod::from_hms(0, 0, -46)?);
    Ok(())
}

#[test]
fn comparison_with_negatives() {
    let mut periods = vec![
        TimePeriod::new(5),
        TimePeriod::new(-100),
        TimePeriod::ZERO,
        TimePeriod::new(-1),
    ];
    periods.sort();
    let intervals: Vec<i64> =
        periods.into_iter().map(TimePeriod::interval).collect();
    assert_eq!(intervals, vec![-100, -1, 0, 5]);
}

// A `Time` is zero padded but a `TimePeriod` is not.
#[test]
fn padding_differs_from_time() -> crate::Result {
    let time = Time::new(1, 2, 3)?;
    let period = TimePeriod::from_hms(1, 2, 3)?;
    assert_eq!(time.to_string(), "01:02:03");
    assert_eq!(period.to_string(), "1:2:3");
    Ok(())
}
