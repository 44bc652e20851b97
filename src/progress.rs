//! Log-based progress reporting.
//!
//! Cosmetic only: milestones are logged while records stream by, and a
//! missing total simply disables reporting. Never affects results.
use log::info;

const MILESTONE_PCT: u64 = 10;

/// Reports progress against a known total, at 10% milestones.
pub struct Progress {
    label: String,
    total: usize,
    seen: usize,
    next_pct: u64,
}

impl Progress {
    pub fn new(label: &str, total: usize) -> Self {
        Self {
            label: label.to_string(),
            total,
            seen: 0,
            next_pct: MILESTONE_PCT,
        }
    }

    pub fn tick(&mut self) {
        self.seen += 1;
        if self.total == 0 {
            return;
        }

        let pct = (self.seen as u64 * 100) / self.total as u64;
        if pct >= self.next_pct {
            info!(
                "[{}] {}% ({}/{})",
                self.label, pct, self.seen, self.total
            );
            // skip milestones we jumped over
            while self.next_pct <= pct {
                self.next_pct += MILESTONE_PCT;
            }
        }
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks() {
        let mut p = Progress::new("train.json", 5);
        for _ in 0..5 {
            p.tick();
        }
        assert_eq!(p.seen(), 5);
    }

    #[test]
    fn zero_total_does_not_divide() {
        let mut p = Progress::new("empty.json", 0);
        p.tick();
        assert_eq!(p.seen(), 1);
    }
}
