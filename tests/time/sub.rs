use clockspan::{civil::Time, TimePeriod};

#[test]
fn period_within_the_day() -> crate::Result {
    let t = Time::new(12, 12, 12)?;
    assert_eq!(t - TimePeriod::new(3671), Time::new(11, 11, 1)?);
    assert_eq!(t - TimePeriod::ZERO, t);
    Ok(())
}

#[test]
fn period_across_midnight() -> crate::Result {
    let t = Time::new(0, 0, 30)?;
    assert_eq!(t - TimePeriod::new(31), Time::new(23, 59, 59)?);
    assert_eq!(t - TimePeriod::from_hm(25, 0)?, Time::new(23, 0, 30)?);
    Ok(())
}

#[test]
fn negative_period_moves_forward() -> crate::Result {
    let t = Time::new(23, 0, 0)?;
    assert_eq!(t - TimePeriod::new(-3600), Time::MIN);
    assert_eq!(t - TimePeriod::new(-3600), t + TimePeriod::new(3600));
    Ok(())
}

#[test]
fn integer_seconds() -> crate::Result {
    let mut t = Time::new(0, 1, 0)?;
    t -= 61;
    assert_eq!(t, Time::new(23, 59, 59)?);
    assert_eq!(t - 86_400 * 3, t);
    Ok(())
}
