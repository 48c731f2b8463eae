use std::fmt;

/// Maximum size of a diagnostic log, in bytes.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Compiler or linker diagnostic text, bounded to `INFO_LOG_CAPACITY` bytes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InfoLog {
    text: String,
    truncated: bool,
}

impl InfoLog {
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        let truncated = text.len() > INFO_LOG_CAPACITY;
        if truncated {
            let mut end = INFO_LOG_CAPACITY;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self { text, truncated }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the full diagnostic was longer than the capacity.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for InfoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text.trim_end())?;
        if self.truncated {
            f.write_str(" [...]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept() {
        let log = InfoLog::new("expected `;`");
        assert_eq!(log.as_str(), "expected `;`");
        assert!(!log.is_truncated());
    }

    #[test]
    fn long_text_is_bounded() {
        let log = InfoLog::new("x".repeat(INFO_LOG_CAPACITY * 2));
        assert_eq!(log.as_str().len(), INFO_LOG_CAPACITY);
        assert!(log.is_truncated());
        assert!(log.to_string().ends_with("[...]"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes; an odd capacity split would land mid-character.
        let text = format!("a{}", "é".repeat(INFO_LOG_CAPACITY));
        let log = InfoLog::new(text);
        assert!(log.as_str().len() <= INFO_LOG_CAPACITY);
        assert!(log.as_str().len() >= INFO_LOG_CAPACITY - 1);
    }
}
