use serde::Deserialize;

/// Number of answer options on every question.
pub const NUM_OPTIONS: usize = 4;

/// Lowercase letter used to label option `index` (`a` to `d`).
pub fn option_label(index: usize) -> char {
    (b'a' + index as u8) as char
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Indices of the three wrong options, in order.
    pub fn wrong_options(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_OPTIONS).filter(move |&i| i != self.correct_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            prompt: "How many legs does a spider have?".to_string(),
            options: ["8", "7", "10", "12"].map(String::from),
            correct_index: 0,
        }
    }

    #[test]
    fn test_wrong_options_skip_correct() {
        let wrong: Vec<usize> = sample().wrong_options().collect();
        assert_eq!(wrong, vec![1, 2, 3]);
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(0), 'a');
        assert_eq!(option_label(3), 'd');
    }
}
