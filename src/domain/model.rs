use crate::domain::ports::ProcessingFormat;
use crate::utils::error::{FormatError, Result};
use crate::utils::json;
use crate::utils::validation::{
    check_required_number, check_required_range, check_required_text, Validate,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATION_KEY: &str = "Station";
pub const CHANNEL_KEY: &str = "Channel";
pub const NETWORK_KEY: &str = "Network";
pub const LOCATION_KEY: &str = "Location";
pub const LATITUDE_KEY: &str = "Latitude";
pub const LONGITUDE_KEY: &str = "Longitude";
pub const ELEVATION_KEY: &str = "Elevation";

const CLASS_NAME: &str = "Site";

/// A seismic station/channel identifier with its location.
///
/// Every field may be unset (`None`), which is distinct from an empty string.
/// Nothing is checked at construction time; call [`ProcessingFormat::errors`]
/// or [`Validate::validate`] to find out whether the record is usable.
///
/// Serializes to and deserializes from the wire shape
/// `{"Station": .., "Channel": .., "Network": .., "Location": ..,
///   "Latitude": .., "Longitude": .., "Elevation": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "serde_json::Map<String, serde_json::Value>",
    into = "serde_json::Map<String, serde_json::Value>"
)]
pub struct Site {
    station: Option<String>,
    channel: Option<String>,
    network: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl Site {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        station: Option<String>,
        channel: Option<String>,
        network: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        elevation: Option<f64>,
    ) -> Self {
        let mut site = Self::default();
        site.reload(
            station, channel, network, location, latitude, longitude, elevation,
        );
        site
    }

    /// Overwrites every field with the given values.
    #[allow(clippy::too_many_arguments)]
    pub fn reload(
        &mut self,
        station: Option<String>,
        channel: Option<String>,
        network: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        elevation: Option<f64>,
    ) {
        self.station = station;
        self.channel = channel;
        self.network = network;
        self.location = location;
        self.latitude = latitude;
        self.longitude = longitude;
        self.elevation = elevation;
    }

    /// Builds a site from a generic JSON object.
    ///
    /// Missing keys, `null` values and unknown keys are not errors; the
    /// affected fields are simply left unset for validation to report.
    pub fn from_json(obj: &Map<String, Value>) -> Self {
        Self {
            station: text_field(obj, STATION_KEY),
            channel: text_field(obj, CHANNEL_KEY),
            network: text_field(obj, NETWORK_KEY),
            location: text_field(obj, LOCATION_KEY),
            latitude: number_field(obj, LATITUDE_KEY),
            longitude: number_field(obj, LONGITUDE_KEY),
            elevation: number_field(obj, ELEVATION_KEY),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let obj = json::from_json_string(text)?;
        Ok(Self::from_json(&obj))
    }

    pub fn to_json_string(&self) -> Result<String> {
        json::to_json_string(&ProcessingFormat::to_json(self))
    }

    pub fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    pub fn set_station(&mut self, station: Option<String>) {
        self.station = station;
    }

    pub fn set_channel(&mut self, channel: Option<String>) {
        self.channel = channel;
    }

    pub fn set_network(&mut self, network: Option<String>) {
        self.network = network;
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    pub fn set_latitude(&mut self, latitude: Option<f64>) {
        self.latitude = latitude;
    }

    pub fn set_longitude(&mut self, longitude: Option<f64>) {
        self.longitude = longitude;
    }

    pub fn set_elevation(&mut self, elevation: Option<f64>) {
        self.elevation = elevation;
    }
}

// 文字欄位：字串照收，其他非 null 的值轉成其 JSON 文字
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => {
            tracing::debug!("Coercing non-string {} value {} to text", key, other);
            Some(other.to_string())
        }
    }
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Null => None,
        value => {
            let number = value.as_f64();
            if number.is_none() {
                tracing::warn!("Ignoring non-numeric {} value: {}", key, value);
            }
            number
        }
    }
}

fn put_text(obj: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        obj.insert(key.to_string(), Value::from(v));
    }
}

fn put_number(obj: &mut Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        obj.insert(key.to_string(), Value::from(v));
    }
}

impl ProcessingFormat for Site {
    fn to_json(&self) -> Map<String, Value> {
        let mut obj = Map::new();

        put_text(&mut obj, STATION_KEY, self.station());
        put_text(&mut obj, CHANNEL_KEY, self.channel());
        put_text(&mut obj, NETWORK_KEY, self.network());
        put_text(&mut obj, LOCATION_KEY, self.location());
        put_number(&mut obj, LATITUDE_KEY, self.latitude);
        put_number(&mut obj, LONGITUDE_KEY, self.longitude);
        put_number(&mut obj, ELEVATION_KEY, self.elevation);

        obj
    }

    fn errors(&self) -> Vec<String> {
        // channel and location are optional free text and never checked
        [
            check_required_text(CLASS_NAME, STATION_KEY, self.station()),
            check_required_text(CLASS_NAME, NETWORK_KEY, self.network()),
            check_required_range(CLASS_NAME, LATITUDE_KEY, self.latitude, -90.0, 90.0),
            check_required_range(CLASS_NAME, LONGITUDE_KEY, self.longitude, -180.0, 180.0),
            check_required_number(CLASS_NAME, ELEVATION_KEY, self.elevation),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Validate for Site {
    fn validate(&self) -> Result<()> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormatError::Validation { errors })
        }
    }
}

impl From<Map<String, Value>> for Site {
    fn from(obj: Map<String, Value>) -> Self {
        Self::from_json(&obj)
    }
}

impl From<Site> for Map<String, Value> {
    fn from(site: Site) -> Self {
        site.to_json()
    }
}
