//! Response cleanup.

/// Emphasis marker the model sometimes wraps translations in.
pub const EMPHASIS_MARKER: char = '*';

/// Remove every emphasis marker and trim surrounding whitespace.
pub fn clean_translation(raw: &str) -> String {
    raw.replace(EMPHASIS_MARKER, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markers_and_whitespace() {
        assert_eq!(clean_translation("*Xin chào thế giới*"), "Xin chào thế giới");
        assert_eq!(clean_translation("  **Đậm** và *nghiêng*\n"), "Đậm và nghiêng");
    }

    #[test]
    fn test_whitespace_exposed_by_stripping_is_trimmed() {
        assert_eq!(clean_translation("* Xin chào *"), "Xin chào");
        assert_eq!(clean_translation("***"), "");
    }

    #[test]
    fn test_inner_newlines_kept() {
        assert_eq!(clean_translation("\nDòng 1\nDòng 2\n"), "Dòng 1\nDòng 2");
    }
}
