//! Prize ladder and rupee formatting.

/// Prize for each question number, 1-indexed by position in the slice.
const PRIZES: [u64; 10] = [
    1_000, 2_000, 3_000, 4_000, 5_000, 6_000, 7_000, 8_000, 9_000, 10_000,
];

/// Read-only lookup from question number (1..=len) to prize amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeLadder {
    prizes: Vec<u64>,
}

impl PrizeLadder {
    pub fn new(prizes: Vec<u64>) -> Self {
        Self { prizes }
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Prize for question `number` (1-indexed). Question 0 is worth nothing.
    pub fn prize(&self, number: usize) -> u64 {
        match number {
            0 => 0,
            n => self.prizes.get(n - 1).copied().unwrap_or(0),
        }
    }

    /// True if `amount` is zero or one of the rungs.
    pub fn is_valid_amount(&self, amount: u64) -> bool {
        amount == 0 || self.prizes.contains(&amount)
    }

    /// Rungs from the top down, as `(question number, prize)`.
    pub fn rungs_descending(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.prizes
            .iter()
            .enumerate()
            .rev()
            .map(|(i, prize)| (i + 1, *prize))
    }
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::new(PRIZES.to_vec())
    }
}

/// Formats an amount as rupees with thousands separators, e.g. `₹10,000`.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prize_lookup() {
        let ladder = PrizeLadder::default();
        assert_eq!(ladder.len(), 10);
        assert_eq!(ladder.prize(0), 0);
        assert_eq!(ladder.prize(1), 1_000);
        assert_eq!(ladder.prize(10), 10_000);
        assert_eq!(ladder.prize(11), 0);
    }

    #[test]
    fn test_rungs_descending() {
        let ladder = PrizeLadder::default();
        let rungs: Vec<_> = ladder.rungs_descending().collect();
        assert_eq!(rungs.first(), Some(&(10, 10_000)));
        assert_eq!(rungs.last(), Some(&(1, 1_000)));
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1_000), "₹1,000");
        assert_eq!(format_rupees(10_000), "₹10,000");
        assert_eq!(format_rupees(1_000_000), "₹1,000,000");
    }
}
