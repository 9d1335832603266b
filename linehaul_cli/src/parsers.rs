use jiff::SpanRelativeTo;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(span) = input.parse::<jiff::Span>()
        && let Ok(duration) = span.to_duration(SpanRelativeTo::days_are_24_hours())
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(format!("Invalid duration: {input}"))
}

pub fn parse_date(input: &str) -> Result<jiff::civil::Date, String> {
    input
        .parse::<jiff::civil::Date>()
        .map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_durations_in_several_shapes() {
        assert_eq!(
            parse_duration("24h"),
            Ok(jiff::SignedDuration::from_hours(24))
        );
        assert_eq!(
            parse_duration("PT1H30M"),
            Ok(jiff::SignedDuration::from_mins(90))
        );
        assert_eq!(parse_duration("90"), Ok(jiff::SignedDuration::from_secs(90)));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn parses_civil_dates() {
        assert_eq!(parse_date("2025-08-25"), Ok(jiff::civil::date(2025, 8, 25)));
        assert!(parse_date("not-a-date").is_err());
    }
}
