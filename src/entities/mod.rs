mod land_region;
mod location;
mod path;
mod port;
mod route;

pub use land_region::LandRegion;
pub use location::Coordinates;
pub use path::Path;
pub use port::{Port, PortCatalogue};
pub use route::{Route, RouteKey, RouteSource};
