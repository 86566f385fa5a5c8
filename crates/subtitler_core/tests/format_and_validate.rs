use subtitler_core::{
    format_date, format_duration, format_file_size, is_probable_youtube_url,
    missing_required_fields, password_strength, FieldValue,
};

#[test]
fn file_size_zero_is_special_cased() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn file_sizes_use_binary_units() {
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1048576), "1 MB");
    assert_eq!(format_file_size(500 * 1024 * 1024), "500 MB");
    assert_eq!(format_file_size(1073741824), "1 GB");
}

#[test]
fn file_sizes_round_trip_within_rounding() {
    for &bytes in &[1u64, 999, 1024, 123_456, 987_654_321, 5_000_000_000] {
        let rendered = format_file_size(bytes);
        let (number, unit) = rendered.split_once(' ').expect("number and unit");
        let value: f64 = number.parse().expect("numeric part");
        let exponent = ["Bytes", "KB", "MB", "GB"]
            .iter()
            .position(|&u| u == unit)
            .expect("known unit") as i32;
        let reconstructed = value * 1024f64.powi(exponent);
        let tolerance = 0.005 * 1024f64.powi(exponent);
        assert!(
            (reconstructed - bytes as f64).abs() <= tolerance,
            "{bytes} rendered as {rendered}"
        );
    }
}

#[test]
fn durations_under_an_hour_use_minutes_and_seconds() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(61), "1:01");
    assert_eq!(format_duration(3599), "59:59");
}

#[test]
fn durations_over_an_hour_zero_pad_minutes_and_seconds() {
    assert_eq!(format_duration(3600), "1:00:00");
    assert_eq!(format_duration(3725), "1:02:05");
    assert_eq!(format_duration(7 * 3600 + 60 * 9 + 3), "7:09:03");
}

#[test]
fn dates_parse_sqlite_and_rfc3339_forms() {
    assert_eq!(
        format_date("2026-08-23 14:03:05").as_deref(),
        Some("2026-08-23 14:03:05")
    );
    assert_eq!(
        format_date("2026-08-23T14:03:05Z").as_deref(),
        Some("2026-08-23 14:03:05")
    );
    assert_eq!(format_date("not a date"), None);
}

#[test]
fn youtube_detection_is_a_substring_check() {
    assert!(is_probable_youtube_url("https://www.youtube.com/watch?v=x"));
    assert!(is_probable_youtube_url("https://youtu.be/x"));
    // Coarse by design: anything containing the substrings passes.
    assert!(is_probable_youtube_url("https://evil.example/youtube.com"));
    assert!(!is_probable_youtube_url("https://vimeo.com/123"));
}

#[test]
fn required_field_check_trims_whitespace() {
    let fields = vec![
        FieldValue {
            name: "username".to_string(),
            value: " ada ".to_string(),
        },
        FieldValue {
            name: "email".to_string(),
            value: "\t".to_string(),
        },
    ];
    assert_eq!(missing_required_fields(&fields), vec!["email".to_string()]);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Four accented characters are eight UTF-8 bytes but still too short.
    let report = password_strength("éééé");
    assert!(report.missing.contains(&"At least 8 characters"));

    let report = password_strength("éééééééé");
    assert!(!report.missing.contains(&"At least 8 characters"));
}

#[test]
fn password_scores_count_met_criteria() {
    let report = password_strength("abc");
    assert_eq!(report.score, 1);
    assert_eq!(report.label, "Very Weak");
    assert_eq!(report.missing.len(), 4);

    let report = password_strength("Abcdefg1");
    assert_eq!(report.score, 4);
    assert_eq!(report.label, "Good");
    assert_eq!(report.missing, vec!["One special character"]);

    let report = password_strength("Tr0ub4dor&3x");
    assert_eq!(report.score, 5);
    assert_eq!(report.label, "Strong");
    assert!(report.missing.is_empty());
}
