//! Append-only chat transcript with a typewriter effect.

use std::collections::VecDeque;
use std::time::Duration;

/// Messages are queued and revealed one character per `per_char` of
/// elapsed time. A finished message is followed by a newline.
#[derive(Debug)]
pub struct ChatLog {
    transcript: String,
    queue: VecDeque<String>,
    typing: Option<Typing>,
    per_char: Duration,
    carry: Duration,
}

#[derive(Debug)]
struct Typing {
    chars: Vec<char>,
    pos: usize,
}

impl ChatLog {
    pub fn new(per_char: Duration) -> Self {
        Self {
            transcript: String::new(),
            queue: VecDeque::new(),
            typing: None,
            per_char,
            carry: Duration::ZERO,
        }
    }

    pub fn post(&mut self, text: impl Into<String>) {
        self.queue.push_back(text.into());
    }

    /// Everything typed so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn is_idle(&self) -> bool {
        self.typing.is_none() && self.queue.is_empty()
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.per_char.is_zero() {
            self.flush();
            return;
        }

        self.carry += elapsed;
        let budget = (self.carry.as_nanos() / self.per_char.as_nanos()) as usize;
        self.carry -= self.per_char * budget as u32;
        self.type_chars(budget);

        if self.is_idle() {
            self.carry = Duration::ZERO;
        }
    }

    /// Types out every pending message at once.
    pub fn flush(&mut self) {
        self.type_chars(usize::MAX);
    }

    fn type_chars(&mut self, mut budget: usize) {
        while budget > 0 {
            if self.typing.is_none() {
                match self.queue.pop_front() {
                    Some(next) => {
                        self.typing = Some(Typing {
                            chars: next.chars().collect(),
                            pos: 0,
                        })
                    }
                    None => return,
                }
            }
            let Some(typing) = self.typing.as_mut() else {
                return;
            };

            let remaining = typing.chars.len() - typing.pos;
            let take = remaining.min(budget);
            self.transcript
                .extend(&typing.chars[typing.pos..typing.pos + take]);
            typing.pos += take;
            budget -= take;

            if typing.pos == typing.chars.len() {
                self.transcript.push('\n');
                self.typing = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_interval() {
        let mut log = ChatLog::new(Duration::from_millis(6));
        log.post("Hello");
        log.tick(Duration::from_millis(12));
        assert_eq!(log.transcript(), "He");
        log.tick(Duration::from_millis(5));
        assert_eq!(log.transcript(), "He");
        log.tick(Duration::from_millis(1));
        assert_eq!(log.transcript(), "Hel");
        log.tick(Duration::from_millis(100));
        assert_eq!(log.transcript(), "Hello\n");
        assert!(log.is_idle());
    }

    #[test]
    fn test_queued_messages_type_in_order() {
        let mut log = ChatLog::new(Duration::from_millis(1));
        log.post("ab");
        log.post("cd");
        log.tick(Duration::from_millis(3));
        assert_eq!(log.transcript(), "ab\nc");
        log.flush();
        assert_eq!(log.transcript(), "ab\ncd\n");
    }

    #[test]
    fn test_zero_speed_is_instant() {
        let mut log = ChatLog::new(Duration::ZERO);
        log.post("₹1,000 won");
        log.tick(Duration::ZERO);
        assert_eq!(log.transcript(), "₹1,000 won\n");
    }
}
