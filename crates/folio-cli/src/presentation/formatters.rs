//! Small display helpers shared by the TUI views.

/// Truncate to `max_len` characters, appending "..." when shortened
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// "2/5" style position indicator (1-based)
pub fn format_position(index: usize, total: usize) -> String {
    format!("{}/{}", index + 1, total)
}

/// Join tag list the way the cards show it
pub fn join_tags(tags: &[String]) -> String {
    tags.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_text("a longer sentence", 10), "a longe...");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        // multi-byte chars must not be split
        assert_eq!(truncate_text("データ分析ダッシュボード", 8), "データ分析...");
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0, 5), "1/5");
        assert_eq!(format_position(4, 5), "5/5");
    }

    #[test]
    fn test_join_tags() {
        let tags = vec!["SQL".to_string(), "EDA".to_string()];
        assert_eq!(join_tags(&tags), "SQL · EDA");
        assert_eq!(join_tags(&[]), "");
    }
}
