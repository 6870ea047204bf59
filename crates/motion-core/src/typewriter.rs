use crate::capabilities::Capabilities;
use crate::constants::TYPEWRITER_CHAR_INTERVAL;
use std::time::Duration;

/// Reveals a headline one character at a time after an initial delay.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    per_char: Duration,
    instant: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration, capabilities: Capabilities) -> Self {
        Self {
            text: text.into(),
            delay,
            per_char: TYPEWRITER_CHAR_INTERVAL,
            instant: !capabilities.allows_animation(),
        }
    }

    pub fn with_interval(mut self, per_char: Duration) -> Self {
        self.per_char = per_char;
        self
    }

    fn revealed_chars(&self, elapsed: Duration) -> usize {
        let total = self.text.chars().count();
        if self.instant {
            return total;
        }
        let Some(typing) = elapsed.checked_sub(self.delay) else {
            return 0;
        };
        if self.per_char.is_zero() {
            return total;
        }
        let n = typing.as_nanos() / self.per_char.as_nanos();
        (n as usize).min(total)
    }

    /// The visible prefix `elapsed` after mount; always ends on a char boundary.
    pub fn visible(&self, elapsed: Duration) -> &str {
        let n = self.revealed_chars(elapsed);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// The blinking caret is hidden once complete.
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.revealed_chars(elapsed) == self.text.chars().count()
    }

    /// Wait from `elapsed` until the visible prefix next grows; `None` once complete.
    pub fn next_reveal(&self, elapsed: Duration) -> Option<Duration> {
        if self.is_complete(elapsed) {
            return None;
        }
        let shown = self.revealed_chars(elapsed) as u32;
        let at = self.delay + self.per_char * (shown + 1);
        Some(at.saturating_sub(elapsed))
    }

    /// Time from mount until the full text is visible.
    pub fn total_duration(&self) -> Duration {
        if self.instant {
            return Duration::ZERO;
        }
        let chars = self.text.chars().count() as u32;
        self.delay + self.per_char * chars
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
