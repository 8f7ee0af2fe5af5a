//! Reading-time estimate shown next to a post

use std::fmt;

use serde::Serialize;

/// Assumed reading speed
pub const WORDS_PER_MINUTE: usize = 200;

/// Word count and the minutes it takes to read them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: usize,
}

impl ReadingTime {
    /// Measure `content`
    pub fn of(content: &str) -> Self {
        let words = word_count(content);
        Self {
            words,
            minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Count maximal runs of non-whitespace characters.
///
/// Empty and whitespace-only input has zero words.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Human-readable estimate such as `"3 min read"`.
///
/// # Examples
/// ```ignore
/// estimate("a few words")  // -> "1 min read"
/// estimate("")             // -> "0 min read"
/// ```
pub fn estimate(content: &str) -> String {
    ReadingTime::of(content).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn minutes(estimate: &str) -> usize {
        estimate
            .strip_suffix(" min read")
            .and_then(|m| m.parse().ok())
            .unwrap()
    }

    #[test]
    fn test_short_text() {
        assert_eq!(estimate("Hello world"), "1 min read");
    }

    #[test]
    fn test_boundary() {
        assert_eq!(estimate(&words(200)), "1 min read");
        assert_eq!(estimate(&words(201)), "2 min read");
        assert_eq!(estimate(&words(400)), "2 min read");
        assert_eq!(estimate(&words(401)), "3 min read");
    }

    #[test]
    fn test_empty_input_has_no_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n\t "), 0);
        assert_eq!(estimate(""), "0 min read");
        assert_eq!(estimate("   \n  "), "0 min read");
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(word_count("  one\t\ttwo \n\n three  "), 3);
        assert_eq!(word_count("don't split-hyphens"), 2);
        assert_eq!(word_count("多语言 text"), 2);
    }

    #[test]
    fn test_deterministic() {
        let text = words(333);
        assert_eq!(estimate(&text), estimate(&text));
    }

    #[test]
    fn test_monotonic() {
        let mut previous = 0;
        for n in (0..=1000).step_by(7) {
            let current = minutes(&estimate(&words(n)));
            assert!(current >= previous, "{} words went backwards", n);
            previous = current;
        }
    }

    #[test]
    fn test_reading_time_value() {
        let rt = ReadingTime::of(&words(450));
        assert_eq!(rt.words, 450);
        assert_eq!(rt.minutes, 3);
        assert_eq!(rt.to_string(), "3 min read");
    }
}
