use rand::rngs::StdRng;
use rand::Rng;

/// A simulated set of peers, each holding a preference among the contested options.
///
/// `Network` stands in for the sampling layer: it queries random peers and resolves the
/// answers into the winner of a round.
#[derive(Debug, Clone)]
pub struct Network<T> {
    preferences: Vec<T>,
    /// The peers queried by the last round.
    last_sample: Vec<usize>,
    rng: StdRng,
}

impl<T: Clone + Eq> Network<T> {
    /// Creates `peers` peers with a random initial preference among `options`.
    pub fn new(options: &[T], peers: usize, mut rng: StdRng) -> Self {
        let mut preferences = Vec::with_capacity(peers);
        if !options.is_empty() {
            for _ in 0..peers {
                preferences.push(options[rng.gen_range(0, options.len())].clone());
            }
        }
        Network { preferences, last_sample: vec![], rng }
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    /// The number of peers currently preferring `option`.
    pub fn support(&self, option: &T) -> usize {
        self.preferences.iter().filter(|p| *p == option).count()
    }

    /// Queries `k` random peers and returns the option preferred by at least `alpha * k`
    /// of them, if any.
    pub fn query(&mut self, k: usize, alpha: f64) -> Option<T> {
        if self.preferences.is_empty() || k == 0 {
            return None;
        }
        let n = self.preferences.len();
        self.last_sample = (0..k).map(|_| self.rng.gen_range(0, n)).collect();

        // Votes in order of first appearance, so that ties resolve deterministically.
        let mut votes: Vec<(T, usize)> = vec![];
        for peer in self.last_sample.iter() {
            let pref = &self.preferences[*peer];
            match votes.iter_mut().find(|(option, _)| option == pref) {
                Some((_, count)) => *count += 1,
                None => votes.push((pref.clone(), 1)),
            }
        }

        let quorum = ((alpha * k as f64).ceil() as usize).max(1);
        let mut winner: Option<(T, usize)> = None;
        for (option, count) in votes {
            if count < quorum {
                continue;
            }
            match winner {
                Some((_, best)) if best >= count => (),
                _ => winner = Some((option, count)),
            }
        }
        let winner = winner.map(|(option, _)| option)?;
        for peer in self.last_sample.iter() {
            self.preferences[*peer] = winner.clone();
        }
        Some(winner)
    }
}
