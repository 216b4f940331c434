//! Location records: what the database stores and what the map consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;

/// Format used to present stored datetimes on the map.
pub const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A picture location as handed to the map renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

impl PhotoLocation {
    pub fn new(latitude: f64, longitude: f64, filename: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            filename: filename.into(),
            datetime: None,
        }
    }

    pub fn with_datetime(mut self, datetime: impl Into<String>) -> Self {
        self.datetime = Some(datetime.into());
        self
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// A row of the `location` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LocationRow {
    pub filename: String,
    pub latitude: f64,
    pub longitude: f64,
    pub datetime: Option<DateTime<Utc>>,
}

impl LocationRow {
    /// Serializable form with the datetime rendered as text.
    pub fn to_photo_location(&self) -> PhotoLocation {
        PhotoLocation {
            latitude: self.latitude,
            longitude: self.longitude,
            filename: self.filename.clone(),
            datetime: self
                .datetime
                .map(|datetime| datetime.format(DATETIME_FORMAT).to_string()),
        }
    }
}

impl From<&LocationRow> for PhotoLocation {
    fn from(row: &LocationRow) -> Self {
        row.to_photo_location()
    }
}
