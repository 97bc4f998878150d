use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::Path;
use crate::error::{invalid_route_key_error, Error};

const KEY_SEPARATOR: &str = "->";

/// Ordered pair of port identifiers. `(a, b)` and `(b, a)` name the same
/// journey travelled in opposite directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn reversed(&self) -> RouteKey {
        RouteKey {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.origin, KEY_SEPARATOR, self.destination)
    }
}

impl FromStr for RouteKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, destination) = s
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| invalid_route_key_error(s))?;

        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return Err(invalid_route_key_error(s));
        }

        Ok(RouteKey::new(origin, destination))
    }
}

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum RouteSource {
    Memo,
    Dataset,
    Curve { attempt: usize },
    Waypoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub key: RouteKey,
    pub path: Path,
    pub source: RouteSource,
}

impl Route {
    pub fn new(key: RouteKey, path: Path, source: RouteSource) -> Self {
        Route { key, path, source }
    }
}
