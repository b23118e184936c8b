

/// Char-boundary-safe preview for log lines.
#[inline]
pub fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}


#[inline]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ascii() {
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("Привет мир", 6), "Привет...");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("Bye\nGoodbye!"), "Bye Goodbye!");
        assert_eq!(collapse_whitespace("  a \t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }
}
