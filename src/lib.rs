//! The decision core of a DAG-based Snowball/Avalanche style consensus.
//!
//! - [graph::DAG] holds the conflicting candidate blocks and propagates the result of each
//!   voting round through their ancestry until a block is accepted.
//! - [snowball::SnowBall] decides a single value among options without causal structure.
//! - [simulation] drives both with a seeded network of simulated peers.
#[macro_use]
extern crate serde_derive;
extern crate colored;

pub mod graph;
pub mod id;
pub mod settings;
pub mod simulation;
pub mod snowball;

#[derive(Debug)]
pub enum Error {
    Graph(graph::Error),
    Config(config::ConfigError),

    /// Settings which cannot drive a simulation
    InvalidSettings(String),
    /// Error caused by converting from a `String` to an `Id`
    TryFromStringError,
}

impl std::error::Error for Error {}

impl std::convert::From<graph::Error> for Error {
    fn from(error: graph::Error) -> Self {
        Error::Graph(error)
    }
}

impl std::convert::From<config::ConfigError> for Error {
    fn from(error: config::ConfigError) -> Self {
        Error::Config(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
