use super::*;

#[test]
fn parse_duration_bare_number_is_seconds() -> AppResult<()> {
    let parsed = parse_duration_arg("30")?;
    if parsed != Duration::from_secs(30) {
        return Err(AppError::validation(format!(
            "Unexpected duration: {:?}",
            parsed
        )));
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("5s", Duration::from_secs(5)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3_600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "{} parsed as {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_zero() -> AppResult<()> {
    if parse_duration_arg("0").is_ok() {
        return Err(AppError::validation("Expected Err for zero duration"));
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_unknown_unit() -> AppResult<()> {
    if parse_duration_arg("5d").is_ok() {
        return Err(AppError::validation("Expected Err for unknown unit"));
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_empty() -> AppResult<()> {
    if parse_duration_arg("  ").is_ok() {
        return Err(AppError::validation("Expected Err for empty input"));
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_overflow() -> AppResult<()> {
    if parse_duration_arg("18446744073709551615h").is_ok() {
        return Err(AppError::validation("Expected Err for overflow"));
    }
    Ok(())
}

#[test]
fn parse_delay_allows_zero() -> AppResult<()> {
    let parsed = parse_delay_arg("0")?;
    if !parsed.is_zero() {
        return Err(AppError::validation(format!(
            "Unexpected delay: {:?}",
            parsed
        )));
    }
    Ok(())
}

#[test]
fn parse_delay_accepts_units() -> AppResult<()> {
    let parsed = parse_delay_arg("500ms")?;
    if parsed != Duration::from_millis(500) {
        return Err(AppError::validation(format!(
            "Unexpected delay: {:?}",
            parsed
        )));
    }
    Ok(())
}
