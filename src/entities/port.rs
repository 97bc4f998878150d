use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::Coordinates;
use crate::error::{unknown_port_error, Error};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
}

impl Port {
    pub fn new(id: &str, name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates: Coordinates::new(latitude, longitude),
        }
    }
}

/// Lookup from port identifier to its coordinates.
#[derive(Debug, Clone, Default)]
pub struct PortCatalogue {
    ports: HashMap<String, Port>,
}

impl PortCatalogue {
    pub fn new(ports: Vec<Port>) -> Self {
        Self {
            ports: ports.into_iter().map(|port| (port.id.clone(), port)).collect(),
        }
    }

    pub fn east_asia() -> Self {
        Self::new(vec![
            Port::new("busan", "Busan", 35.18, 129.08),
            // outer anchorage, clear of the peninsula box
            Port::new("incheon", "Incheon", 37.3, 126.2),
            Port::new("tokyo", "Tokyo", 35.68, 139.65),
            Port::new("shanghai", "Shanghai", 31.23, 121.47),
            Port::new("hong_kong", "Hong Kong", 22.3, 114.17),
            Port::new("nagasaki", "Nagasaki", 32.75, 129.6),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    pub fn find(&self, id: &str) -> Result<&Port, Error> {
        self.ports.get(id).ok_or_else(|| unknown_port_error(id))
    }

    pub fn coordinates(&self, id: &str) -> Result<Coordinates, Error> {
        Ok(self.find(id)?.coordinates)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_ports() {
        let catalogue = PortCatalogue::east_asia();

        assert_eq!(catalogue.len(), 6);
        assert_eq!(
            catalogue.coordinates("busan").unwrap(),
            Coordinates::new(35.18, 129.08)
        );
        assert_eq!(catalogue.find("tokyo").unwrap().name, "Tokyo");
        assert_eq!(catalogue.iter().count(), 6);
    }

    #[test]
    fn unknown_port_is_an_error() {
        let catalogue = PortCatalogue::east_asia();
        assert_eq!(
            catalogue.coordinates("atlantis"),
            Err(unknown_port_error("atlantis"))
        );
    }
}
