use crate::colored::Colorize;

use tracing::{debug, info};

use std::collections::HashMap;

/// `SnowBall` tracks the preference of a single decision among discrete options.
///
/// Every round result counts towards the tally of the reported option. The tally of an
/// option is never reset when another option wins in between, and the decision is reached
/// as soon as any tally exceeds the `decision_threshold`.
#[derive(Debug, Clone)]
pub struct SnowBall<P> {
    /// The most recently reported option.
    preference: P,
    decision_threshold: usize,
    /// Number of rounds each option has won.
    successes: HashMap<P, usize>,
    decided: bool,
}

impl<P: Clone + Eq + std::hash::Hash + std::fmt::Debug> SnowBall<P> {
    pub fn new(preference: P, decision_threshold: usize) -> Self {
        SnowBall { preference, decision_threshold, successes: HashMap::new(), decided: false }
    }

    pub fn preference(&self) -> &P {
        &self.preference
    }

    pub fn decided(&self) -> bool {
        self.decided
    }

    pub fn decision_threshold(&self) -> usize {
        self.decision_threshold
    }

    /// The number of rounds `option` has won so far.
    pub fn successes(&self, option: &P) -> usize {
        self.successes.get(option).cloned().unwrap_or(0)
    }

    /// Records `option` as the winner of a round. Does nothing once decided.
    pub fn success_pool(&mut self, option: P) {
        if self.decided {
            return;
        }
        let successes = self.successes.entry(option.clone()).or_insert(0);
        *successes += 1;
        let successes = *successes;
        debug!("[{}] {:?} won the round ({} successes)", "snowball".cyan(), option, successes);

        self.preference = option;
        if successes > self.decision_threshold {
            self.decided = true;
            info!("[{}] decided on {:?}", "snowball".cyan(), self.preference);
        }
    }
}

#[cfg(test)]
mod test {
    use super::SnowBall;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Food {
        Pizza,
        Bbq,
        Chicken,
    }

    #[test]
    fn test_new_snowball() {
        let snowball = SnowBall::new(3u8, 20);
        assert_eq!(*snowball.preference(), 3);
        assert_eq!(snowball.decision_threshold(), 20);
        assert!(!snowball.decided());
        assert_eq!(snowball.successes(&3), 0);
    }

    #[test]
    fn test_snowball() {
        let mut snowball = SnowBall::new(Food::Pizza, 3);
        assert_eq!(*snowball.preference(), Food::Pizza);
        assert!(!snowball.decided());

        snowball.success_pool(Food::Bbq);
        assert_eq!(*snowball.preference(), Food::Bbq);
        assert!(!snowball.decided());

        snowball.success_pool(Food::Chicken);
        assert_eq!(*snowball.preference(), Food::Chicken);
        assert!(!snowball.decided());

        for _ in 0..3 {
            snowball.success_pool(Food::Pizza);
            assert_eq!(*snowball.preference(), Food::Pizza);
            assert!(!snowball.decided());
        }

        snowball.success_pool(Food::Pizza);
        assert_eq!(*snowball.preference(), Food::Pizza);
        assert_eq!(snowball.successes(&Food::Pizza), 4);
        assert!(snowball.decided());
    }

    #[test]
    fn test_tally_survives_switches() {
        let mut snowball = SnowBall::new(Food::Pizza, 2);
        snowball.success_pool(Food::Bbq);
        snowball.success_pool(Food::Chicken);
        snowball.success_pool(Food::Bbq);
        snowball.success_pool(Food::Chicken);
        assert_eq!(snowball.successes(&Food::Bbq), 2);
        assert_eq!(snowball.successes(&Food::Chicken), 2);
        assert!(!snowball.decided());

        // The third success of `Bbq` decides even though it was interrupted.
        snowball.success_pool(Food::Bbq);
        assert!(snowball.decided());
        assert_eq!(*snowball.preference(), Food::Bbq);
    }

    #[test]
    fn test_decided_is_final() {
        let mut snowball = SnowBall::new(Food::Pizza, 0);
        snowball.success_pool(Food::Chicken);
        assert!(snowball.decided());

        snowball.success_pool(Food::Pizza);
        snowball.success_pool(Food::Pizza);
        assert!(snowball.decided());
        assert_eq!(*snowball.preference(), Food::Chicken);
        assert_eq!(snowball.successes(&Food::Pizza), 0);
    }
}
