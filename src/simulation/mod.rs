//! In-process stand-in for the sampling layer which drives the consensus core.
//!
//! A run builds a seeded [Network] of peers, resolves their answers into one winner per
//! round and feeds it to the [DAG] or to a [SnowBall] until a decision is reached.
mod network;

pub use network::Network;

use crate::colored::Colorize;
use crate::graph::{Block, DAG};
use crate::id::Id;
use crate::settings::Settings;
use crate::snowball::SnowBall;
use crate::Result;

use tracing::{debug, info};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of [run_dag].
#[derive(Debug, Clone, PartialEq)]
pub struct DagReport {
    /// Rounds queried, including rounds without a winner
    pub rounds: usize,
    /// Contested blocks accepted by the end of the run
    pub accepted: Vec<Id>,
    /// The head of the DAG at the end of the run
    pub head: Option<Id>,
    /// Blocks dropped by the final sweep
    pub swept: usize,
}

/// Outcome of [run_snowball].
#[derive(Debug, Clone, PartialEq)]
pub struct SnowballReport {
    pub rounds: usize,
    pub preference: String,
    pub decided: bool,
}

/// Builds a genesis block, a layer of `branching` conflicting children and a layer of
/// grandchildren each referencing two neighbouring children, then runs rounds over the
/// grandchildren until one of them is accepted.
pub fn run_dag(settings: &Settings) -> Result<DagReport> {
    settings.validate()?;
    let mut dag = DAG::new();

    let genesis = Id::new(&settings.seed.to_be_bytes());
    let _ = dag.add_block(Block::new(genesis), &[])?;

    let children: Vec<Id> = (0..settings.branching as u64).map(|n| genesis.child(n)).collect();
    for child in children.iter() {
        let _ = dag.add_block(Block::new(*child), &[genesis])?;
    }

    let mut contested = vec![];
    for (i, child) in children.iter().enumerate() {
        let neighbour = children[(i + 1) % children.len()];
        let ancestors = if neighbour == *child { vec![*child] } else { vec![*child, neighbour] };
        let grandchild = child.child(0);
        let _ = dag.add_block(Block::new(grandchild), &ancestors)?;
        contested.push(grandchild);
    }
    info!("[{}] contesting {} blocks", "simulation".magenta(), contested.len());

    let rng = StdRng::seed_from_u64(settings.seed);
    let mut network = Network::new(&contested, settings.peers, rng);

    let mut rounds = 0;
    let mut accepted = vec![];
    while rounds < settings.max_rounds && accepted.is_empty() {
        rounds += 1;
        let winner = match network.query(settings.sample_size, settings.alpha) {
            Some(winner) => winner,
            None => {
                debug!("[{}] round {}: no quorum", "simulation".magenta(), rounds);
                continue;
            }
        };
        debug!("[{}] round {}: {} won", "simulation".magenta(), rounds, winner);
        dag.success_pool(&winner, &contested);

        accepted = contested
            .iter()
            .filter(|id| dag.find(id).map(|block| block.accepted()).unwrap_or(false))
            .cloned()
            .collect();
        for id in accepted.iter() {
            if let Some(block) = dag.find(id) {
                info!("[{}] accepted {}", "simulation".magenta(), block);
            }
        }
    }

    let swept = dag.sweep();
    let head = dag.head().map(|block| *block.id());
    info!(
        "[{}] dag run finished after {} rounds, accepted = {:?}",
        "simulation".magenta(),
        rounds,
        accepted
    );
    Ok(DagReport { rounds, accepted, head, swept })
}

/// Runs rounds over the configured options until the `SnowBall` decides.
pub fn run_snowball(settings: &Settings) -> Result<SnowballReport> {
    settings.validate()?;
    let rng = StdRng::seed_from_u64(settings.seed);
    let mut network = Network::new(&settings.options, settings.peers, rng);
    let mut snowball = SnowBall::new(settings.options[0].clone(), settings.decision_threshold);

    let mut rounds = 0;
    while rounds < settings.max_rounds && !snowball.decided() {
        rounds += 1;
        if let Some(winner) = network.query(settings.sample_size, settings.alpha) {
            snowball.success_pool(winner);
        }
    }
    info!(
        "[{}] snowball run finished after {} rounds, preference = {}, decided = {}",
        "simulation".magenta(),
        rounds,
        snowball.preference(),
        snowball.decided()
    );
    Ok(SnowballReport {
        rounds,
        preference: snowball.preference().clone(),
        decided: snowball.decided(),
    })
}

#[cfg(test)]
mod test {
    use super::{run_dag, run_snowball};
    use crate::settings::Settings;

    #[test]
    fn test_single_candidate_is_accepted() {
        let settings = Settings { branching: 1, ..Settings::default() };
        let report = run_dag(&settings).unwrap();
        // Two consecutive successes are required.
        assert_eq!(report.rounds, 2);
        assert_eq!(report.accepted.len(), 1);
        assert!(report.head.is_some());
    }

    #[test]
    fn test_dag_run_is_deterministic() {
        let settings = Settings { seed: 42, max_rounds: 200, ..Settings::default() };
        let r1 = run_dag(&settings).unwrap();
        let r2 = run_dag(&settings).unwrap();
        assert_eq!(r1, r2);
        assert!(r1.rounds <= 200);
        assert!(r1.accepted.len() <= 1);
    }

    #[test]
    fn test_dag_run_rejects_invalid_settings() {
        let settings = Settings { branching: 0, ..Settings::default() };
        assert!(run_dag(&settings).is_err());
    }

    #[test]
    fn test_single_option_is_decided() {
        let settings = Settings {
            options: vec!["pizza".to_string()],
            decision_threshold: 3,
            ..Settings::default()
        };
        let report = run_snowball(&settings).unwrap();
        assert_eq!(report.rounds, 4);
        assert_eq!(report.preference, "pizza");
        assert!(report.decided);
    }

    #[test]
    fn test_snowball_run_is_bounded() {
        let settings = Settings { max_rounds: 5, decision_threshold: 100, ..Settings::default() };
        let report = run_snowball(&settings).unwrap();
        assert_eq!(report.rounds, 5);
        assert!(!report.decided);
    }
}
