use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::entities::RouteKey;
use crate::error::{config_error, Error};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATASET_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// URL or filesystem path of the precomputed route dataset.
    pub dataset: Option<String>,
    pub dataset_timeout: Duration,
    pub max_attempts: usize,
    pub warm_routes: Vec<RouteKey>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            dataset: None,
            dataset_timeout: Duration::from_secs(DEFAULT_DATASET_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            warm_routes: vec![],
        }
    }
}

impl Config {
    /// Reads `SEAWAY_*` variables, after loading a `.env` file if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr =
            parse_or(&lookup, "SEAWAY_BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let dataset = lookup("SEAWAY_DATASET").filter(|value| !value.trim().is_empty());
        let timeout_secs = parse_or(
            &lookup,
            "SEAWAY_DATASET_TIMEOUT_SECS",
            Some(DEFAULT_DATASET_TIMEOUT_SECS),
        )?;
        let max_attempts = parse_or(&lookup, "SEAWAY_MAX_ATTEMPTS", Some(DEFAULT_MAX_ATTEMPTS))?;

        let warm_routes = match lookup("SEAWAY_WARM_ROUTES") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| key.parse().map_err(|_| config_error("SEAWAY_WARM_ROUTES")))
                .collect::<Result<Vec<RouteKey>, Error>>()?,
            None => vec![],
        };

        Ok(Self {
            bind_addr,
            dataset,
            dataset_timeout: Duration::from_secs(timeout_secs),
            max_attempts,
            warm_routes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: Option<T>) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| config_error(name)),
        None => default.ok_or_else(|| config_error(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("SEAWAY_BIND_ADDR", "0.0.0.0:8080"),
            ("SEAWAY_DATASET", "https://example.invalid/routes.json"),
            ("SEAWAY_DATASET_TIMEOUT_SECS", "3"),
            ("SEAWAY_MAX_ATTEMPTS", "7"),
            ("SEAWAY_WARM_ROUTES", "busan->tokyo, shanghai->incheon,"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(
            config.dataset.as_deref(),
            Some("https://example.invalid/routes.json")
        );
        assert_eq!(config.dataset_timeout, Duration::from_secs(3));
        assert_eq!(config.max_attempts, 7);
        assert_eq!(
            config.warm_routes,
            vec![
                RouteKey::new("busan", "tokyo"),
                RouteKey::new("shanghai", "incheon")
            ]
        );
    }

    #[test]
    fn blank_dataset_means_none() {
        let config = Config::from_lookup(lookup(&[("SEAWAY_DATASET", "  ")])).unwrap();
        assert_eq!(config.dataset, None);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = Config::from_lookup(lookup(&[("SEAWAY_MAX_ATTEMPTS", "many")])).unwrap_err();
        assert_eq!(err, config_error("SEAWAY_MAX_ATTEMPTS"));

        let err = Config::from_lookup(lookup(&[("SEAWAY_WARM_ROUTES", "busan")])).unwrap_err();
        assert_eq!(err, config_error("SEAWAY_WARM_ROUTES"));
    }
}
