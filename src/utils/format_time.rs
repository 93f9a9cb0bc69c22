use std::time::Duration;

/// Formats a duration as whole minutes and seconds with millisecond precision.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    let minutes = (secs / 60.).floor();
    format!("{} min {:.3} sec", minutes as u64, secs - minutes * 60.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0 min 0.000 sec");
        assert_eq!(format_duration(Duration::from_millis(1_250)), "0 min 1.250 sec");
        assert_eq!(format_duration(Duration::from_millis(185_004)), "3 min 5.004 sec");
    }
}
