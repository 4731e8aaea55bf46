use config::{Config, ConfigError, Environment, File};

/// Prefix of the environment variables overriding the settings, e.g. `SNOWDAG_SEED`.
const ENV_PREFIX: &str = "SNOWDAG";

/// Parameters of a simulated consensus run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Seed of the simulated network
    pub seed: u64,
    /// Number of simulated peers
    pub peers: usize,
    /// Number of peers queried per round (`k`)
    pub sample_size: usize,
    /// Fraction of the sample a candidate needs to win a round
    pub alpha: f64,
    /// Number of conflicting children per layer of the DAG
    pub branching: usize,
    /// Rounds after which a run gives up
    pub max_rounds: usize,
    /// Decision threshold of the `SnowBall` run
    pub decision_threshold: usize,
    /// Options of the `SnowBall` run
    pub options: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed: 0,
            peers: 100,
            sample_size: 20,
            alpha: 0.5,
            branching: 3,
            max_rounds: 1000,
            decision_threshold: 20,
            options: vec!["pizza".to_string(), "bbq".to_string(), "chicken".to_string()],
        }
    }
}

impl Settings {
    /// Loads the settings from the defaults, then the optional `path`, then the environment.
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        Settings::load(path, Some(ENV_PREFIX))
    }

    fn load(path: Option<&str>, env_prefix: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        if let Some(prefix) = env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("options"),
            );
        }
        builder.build()?.try_deserialize()
    }

    /// Checks that a simulation can be run with these settings.
    pub fn validate(&self) -> crate::Result<()> {
        if self.sample_size == 0 || self.sample_size > self.peers {
            return Err(crate::Error::InvalidSettings(format!(
                "sample_size must be within 1..={}",
                self.peers
            )));
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(crate::Error::InvalidSettings("alpha must be within (0, 1]".to_string()));
        }
        if self.branching == 0 {
            return Err(crate::Error::InvalidSettings("branching must be positive".to_string()));
        }
        if self.options.is_empty() {
            return Err(crate::Error::InvalidSettings("options must not be empty".to_string()));
        }
        Ok(())
    }
}
