use clockspan::civil::Time;

#[test]
fn hours_dominate() -> crate::Result {
    assert!(Time::new(12, 12, 12)? > Time::new(11, 12, 12)?);
    assert!(Time::new(11, 59, 59)? < Time::new(12, 0, 0)?);
    Ok(())
}

#[test]
fn minutes_then_seconds() -> crate::Result {
    assert!(Time::new(23, 13, 12)? > Time::new(23, 12, 12)?);
    assert!(Time::new(23, 13, 22)? > Time::new(23, 13, 12)?);
    assert!(Time::new(23, 13, 22)? >= Time::new(23, 13, 22)?);
    assert!(Time::new(23, 13, 22)? <= Time::new(23, 13, 22)?);
    Ok(())
}

#[test]
fn equality_after_normalization() -> crate::Result {
    assert_eq!(Time::new(24, 12, 12)?, Time::new(0, 12, 12)?);
    assert_eq!(Time::new(12, 60, 0)?, Time::new(12, 0, 0)?);
    assert_ne!(Time::new(12, 0, 1)?, Time::new(12, 0, 0)?);
    Ok(())
}

#[test]
fn sorting() -> crate::Result {
    let mut times = vec![
        Time::new(23, 0, 0)?,
        Time::new(0, 0, 1)?,
        Time::new(12, 30, 0)?,
        Time::MIN,
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            Time::MIN,
            Time::new(0, 0, 1)?,
            Time::new(12, 30, 0)?,
            Time::new(23, 0, 0)?,
        ],
    );
    Ok(())
}
