/// Upper bound, in bytes, of a diagnostic log carried by a
/// [`ShaderError`](super::ShaderError). Longer logs are cut silently.
pub const DIAGNOSTIC_LOG_CAPACITY: usize = 1024;

/// Accumulates diagnostic lines into a bounded buffer.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticLog {
    text: String,
}

impl DiagnosticLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line.trim_end());
    }

    pub(crate) fn push_compilation_message(&mut self, message: &wgpu::CompilationMessage) {
        match &message.location {
            Some(loc) => self.push_line(&format!(
                "{}:{}: {}",
                loc.line_number, loc.line_position, message.message
            )),
            None => self.push_line(&message.message),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn finish(self) -> String {
        truncate_to_boundary(self.text, DIAGNOSTIC_LOG_CAPACITY)
    }
}

/// Cuts `text` to at most `capacity` bytes without splitting a code point.
fn truncate_to_boundary(mut text: String, capacity: usize) -> String {
    if text.len() > capacity {
        let mut end = capacity;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_log_is_kept_whole() {
        let mut log = DiagnosticLog::new();
        log.push_line("first");
        log.push_line("second  \n");
        assert_eq!(log.finish(), "first\nsecond");
    }

    #[test]
    fn long_log_is_cut_to_capacity() {
        let mut log = DiagnosticLog::new();
        log.push_line(&"x".repeat(DIAGNOSTIC_LOG_CAPACITY * 2));
        assert_eq!(log.finish().len(), DIAGNOSTIC_LOG_CAPACITY);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes; an odd capacity would land mid code point.
        let text = "é".repeat(10);
        let cut = truncate_to_boundary(text, 5);
        assert_eq!(cut, "éé");
    }

    #[test]
    fn empty_log_reports_empty() {
        assert!(DiagnosticLog::new().is_empty());
    }
}
