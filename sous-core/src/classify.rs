//! Line classification for suggestion-mode output.
//!
//! The storefront renders free-text suggestions line by line; classification
//! tags each non-blank line for presentation and keeps the text verbatim,
//! markers included. No content is dropped or reordered.

use crate::types::{ClassifiedLine, LineKind};

/// Classify a single line. Operates on the trimmed line.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        return LineKind::Header;
    }
    if trimmed.starts_with(['•', '·', '-']) {
        return LineKind::Bullet;
    }
    if is_numbered(trimmed) {
        return LineKind::Numbered;
    }
    LineKind::Plain
}

/// Tag every non-blank line of `text`, preserving order.
pub fn classify_text(text: &str) -> Vec<ClassifiedLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| ClassifiedLine {
            kind: classify(line),
            text: line.to_string(),
        })
        .collect()
}

fn is_numbered(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line.chars().nth(digits) == Some('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(classify("**Trứng chiên cà chua**"), LineKind::Header);
    }

    #[test]
    fn test_bullet() {
        assert_eq!(classify("• Trứng"), LineKind::Bullet);
        assert_eq!(classify("- Cà chua"), LineKind::Bullet);
        assert_eq!(classify("· Hành lá"), LineKind::Bullet);
    }

    #[test]
    fn test_numbered() {
        assert_eq!(classify("1. Đập trứng vào bát"), LineKind::Numbered);
        assert_eq!(classify("12. Bày ra đĩa"), LineKind::Numbered);
    }

    #[test]
    fn test_plain() {
        assert_eq!(classify("Món này rất dễ nấu."), LineKind::Plain);
        assert_eq!(classify("10 phút là xong"), LineKind::Plain);
    }

    #[test]
    fn test_classify_text_keeps_content_and_order() {
        let text = "**Món gợi ý**\n\n- Trứng\n1. Đập trứng\nChúc ngon miệng";
        let lines = classify_text(text);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].kind, LineKind::Header);
        assert_eq!(lines[0].text, "**Món gợi ý**");
        assert_eq!(lines[1].kind, LineKind::Bullet);
        assert_eq!(lines[2].kind, LineKind::Numbered);
        assert_eq!(lines[3].kind, LineKind::Plain);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let text = "**Món gợi ý**\n- Trứng\n1. Đập trứng\nChúc ngon miệng";
        let first = classify_text(text);

        for line in &first {
            assert_eq!(classify(&line.text), line.kind);
        }
    }
}
