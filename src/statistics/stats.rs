/// Counters describing what a quiz session has generated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    scenarios: usize,
    entries_generated: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            scenarios: 0,
            entries_generated: 0,
        }
    }

    /// Record into the statistics object that a new scenario of `entry_count` entries
    /// was generated
    pub fn bump_scenarios(&mut self, entry_count: usize) {
        self.scenarios += 1;
        self.entries_generated += entry_count;
    }

    pub fn get_scenarios(&self) -> usize {
        self.scenarios
    }

    pub fn get_entries_generated(&self) -> usize {
        self.entries_generated
    }

    /// Mean frontier size over all generated scenarios, 0 before the first one.
    pub fn mean_frontier_size(&self) -> f64 {
        if self.scenarios == 0 {
            0.0
        } else {
            self.entries_generated as f64 / self.scenarios as f64
        }
    }

    pub fn merge(&self, other: &SessionStats) -> SessionStats {
        SessionStats {
            scenarios: self.scenarios + other.scenarios,
            entries_generated: self.entries_generated + other.entries_generated,
        }
    }

    /// Write the counters to the log.
    pub fn dump(&self) {
        tracing::info!(
            "scenarios: {}, entries generated: {}, mean frontier size: {:.2}",
            self.scenarios,
            self.entries_generated,
            self.mean_frontier_size()
        );
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        SessionStats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = SessionStats::new();
        assert_eq!(stats.get_scenarios(), 0);
        assert_eq!(stats.get_entries_generated(), 0);
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_bump_scenarios_accumulates() {
        let mut stats = SessionStats::new();
        stats.bump_scenarios(5);
        stats.bump_scenarios(8);
        assert_eq!(stats.get_scenarios(), 2);
        assert_eq!(stats.get_entries_generated(), 13);
    }

    #[test]
    fn test_mean_frontier_size() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.mean_frontier_size(), 0.0);
        stats.bump_scenarios(5);
        stats.bump_scenarios(6);
        assert_eq!(stats.mean_frontier_size(), 5.5);
    }

    #[test]
    fn test_merge() {
        let mut a = SessionStats::new();
        a.bump_scenarios(5);
        let mut b = SessionStats::new();
        b.bump_scenarios(7);
        b.bump_scenarios(8);

        let merged = a.merge(&b);
        assert_eq!(merged.get_scenarios(), 3);
        assert_eq!(merged.get_entries_generated(), 20);
    }

    #[test]
    fn test_dump_does_not_panic() {
        let mut stats = SessionStats::new();
        stats.bump_scenarios(42);
        stats.dump();
    }
}
