//! Static city metadata and map presets for the fixed locale. These are
//! configuration values, not behavior.

/// City served by this deployment.
pub const CITY_NAME: &str = "Bengaluru";
pub const CITY_STATE: &str = "Karnataka";
pub const CITY_COUNTRY: &str = "India";

/// Map center used before any location is selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

pub const DEFAULT_MAP_CENTER: MapCenter = MapCenter {
    latitude: 12.9716,
    longitude: 77.5946,
};

/// Zoom presets for the map views.
pub const ZOOM_CITY: u8 = 12;
pub const ZOOM_DISTRICT: u8 = 14;
pub const ZOOM_STREET: u8 = 16;

pub const DEFAULT_ZOOM: u8 = ZOOM_CITY;
