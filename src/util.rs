use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// characters that can't appear in a file name on common filesystems
static UNSAFE_FILE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[/\\:*?"<>|]"#).unwrap());

/// turns a free-text reason into something safe to use in a file name.
/// An empty reason becomes "item"
pub fn sanitize_reason(reason: &str) -> String {
    let trimmed = reason.trim();
    let base = if trimmed.is_empty() { "item" } else { trimmed };
    UNSAFE_FILE_CHARS.replace_all(base, "_").to_string()
}

/// the file name a photo gets in the mirror directory and the export archive
pub fn photo_file_name(date: &NaiveDateTime, reason: &str) -> String {
    format!("{}_{}.jpg", date.format("%Y%m%d_%H%M%S"), sanitize_reason(reason))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!("too_old___worn", sanitize_reason(r#"too/old:*\worn"#));
    }

    #[test]
    fn sanitize_empty_reason() {
        assert_eq!("item", sanitize_reason(""));
        assert_eq!("item", sanitize_reason("   "));
    }

    #[test]
    fn sanitize_leaves_normal_text_alone() {
        assert_eq!("unused mug", sanitize_reason("unused mug"));
    }

    #[test]
    fn file_name_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 7)
            .unwrap();
        assert_eq!(
            "20240305_093007_unused mug.jpg",
            photo_file_name(&date, "unused mug")
        );
    }
}
