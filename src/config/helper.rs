use anyhow::{anyhow, Result};
use std::time::Duration;

/// Parse duration string (e.g., "500ms", "4s", "5m") into Duration
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(anyhow!("Empty duration string"));
    }

    let (num_str, unit) = if let Some(stripped) = s.strip_suffix("ms") {
        (stripped, "ms")
    } else if let Some(stripped) = s.strip_suffix('s') {
        (stripped, "s")
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, "m")
    } else {
        return Err(anyhow!("Duration must end with 'ms', 's', or 'm': {}", s));
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| anyhow!("Invalid number in duration: {}", num_str))?;

    let duration = match unit {
        "ms" => Duration::from_millis(num),
        "s" => Duration::from_secs(num),
        "m" => Duration::from_secs(
            num.checked_mul(60)
                .ok_or_else(|| anyhow!("Duration too large: {}", s))?,
        ),
        _ => unreachable!(),
    };

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("4s").unwrap(), Duration::from_secs(4));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration(" 3s ").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("4").is_err());
        assert!(parse_duration("4h").is_err());
        assert!(parse_duration("abcs").is_err());
    }

    #[test]
    fn test_parse_duration_minutes_overflow() {
        let err = parse_duration("18446744073709551615m").unwrap_err();
        assert!(err.to_string().contains("Duration too large"));
        assert!(parse_duration("18446744073709551615s").is_ok());
    }
}
