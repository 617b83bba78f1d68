use clockspan::{civil::Time, TimePeriod};

#[test]
fn period_within_the_day() -> crate::Result {
    let t = Time::new(12, 12, 12)?;
    assert_eq!(t + TimePeriod::new(3671), Time::new(13, 13, 23)?);
    assert_eq!(t + TimePeriod::from_hms(0, 47, 48)?, Time::new(13, 0, 0)?);
    Ok(())
}

#[test]
fn period_across_midnight() -> crate::Result {
    let t = Time::new(23, 58, 59)?;
    assert_eq!(t + TimePeriod::new(3671), Time::new(1, 0, 10)?);
    assert_eq!(t + TimePeriod::from_hm(24, 0)?, t);
    assert_eq!(t + TimePeriod::from_hms(48, 0, 1)?, Time::new(23, 59, 0)?);
    Ok(())
}

#[test]
fn integer_seconds() -> crate::Result {
    let t = Time::new(8, 0, 0)?;
    assert_eq!(t + 1, Time::new(8, 0, 1)?);
    assert_eq!(t + 3600, Time::new(9, 0, 0)?);
    assert_eq!(t + -1, Time::new(7, 59, 59)?);

    let mut t = t;
    t += 59;
    t += 1;
    assert_eq!(t, Time::new(8, 1, 0)?);
    Ok(())
}

#[test]
fn period_between_then_add() -> crate::Result {
    let first: Time = "12:33:45".parse()?;
    let second: Time = "11:34:01".parse()?;
    let period = TimePeriod::between(first, second);
    assert_eq!(first + period, second);
    assert_eq!(second + first.since(second), first);
    Ok(())
}
