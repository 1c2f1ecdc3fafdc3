use serde::Serialize;
use url::Url;
use visionaria_models::contact::{ContactChannels, MapLocation};

#[derive(Debug, Serialize)]
pub struct ApiContactChannels {
    pub whatsapp: Url,
    pub email: Url,
    pub location: ApiMapLocation,
}

#[derive(Debug, Serialize)]
pub struct ApiMapLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub label: Vec<String>,
}

impl From<ContactChannels> for ApiContactChannels {
    fn from(value: ContactChannels) -> Self {
        Self {
            whatsapp: value.whatsapp,
            email: value.email,
            location: value.location.into(),
        }
    }
}

impl From<MapLocation> for ApiMapLocation {
    fn from(value: MapLocation) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
            zoom: value.zoom,
            label: value.label,
        }
    }
}
