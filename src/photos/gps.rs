//! GPS metadata extraction and validation.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use exif::{Exif, In, Tag, Value};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{data::location::LocationRow, Error, Result};

static DATE_STAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}:\d{2}:\d{2}$").unwrap());
static TIME_STAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").unwrap());

const DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// GPS tags read from a picture
///
/// Latitude and longitude are unsigned degrees; the hemisphere is carried by
/// the matching ref (`N`/`S`, `E`/`W`) as stored in EXIF.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsMetadata {
    pub source_file: String,
    pub latitude: f64,
    pub latitude_ref: String,
    pub longitude: f64,
    pub longitude_ref: String,
    pub date_stamp: Option<String>,
    pub time_stamp: Option<String>,
}

impl GpsMetadata {
    /// Extracts the GPS tags from parsed EXIF data. `None` when any of the
    /// coordinate tags is missing.
    pub fn from_exif(source_file: &str, exif: &Exif) -> Option<Self> {
        let field = |tag| exif.get_field(tag, In::PRIMARY).map(|field| &field.value);

        Some(Self {
            source_file: source_file.to_string(),
            latitude: degrees(field(Tag::GPSLatitude)?)?,
            latitude_ref: ascii(field(Tag::GPSLatitudeRef)?)?,
            longitude: degrees(field(Tag::GPSLongitude)?)?,
            longitude_ref: ascii(field(Tag::GPSLongitudeRef)?)?,
            date_stamp: field(Tag::GPSDateStamp).and_then(ascii),
            time_stamp: field(Tag::GPSTimeStamp).and_then(time),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.source_file.is_empty() {
            return Err(Error::InvalidMetadata("empty source file".to_string()));
        }
        if !(0.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidMetadata(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !(0.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidMetadata(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        if !matches!(self.latitude_ref.as_str(), "N" | "S") {
            return Err(Error::InvalidMetadata(format!(
                "unexpected latitude ref: {:?}",
                self.latitude_ref
            )));
        }
        if !matches!(self.longitude_ref.as_str(), "E" | "W") {
            return Err(Error::InvalidMetadata(format!(
                "unexpected longitude ref: {:?}",
                self.longitude_ref
            )));
        }
        if let Some(date) = &self.date_stamp {
            if !DATE_STAMP.is_match(date) {
                return Err(Error::InvalidMetadata(format!("bad date stamp: {date:?}")));
            }
        }
        if let Some(time) = &self.time_stamp {
            if !TIME_STAMP.is_match(time) {
                return Err(Error::InvalidMetadata(format!("bad time stamp: {time:?}")));
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Signed latitude: negative in the southern hemisphere.
    pub fn signed_latitude(&self) -> f64 {
        if self.latitude_ref == "S" {
            -self.latitude
        } else {
            self.latitude
        }
    }

    /// Signed longitude: negative west of Greenwich.
    pub fn signed_longitude(&self) -> f64 {
        if self.longitude_ref == "W" {
            -self.longitude
        } else {
            self.longitude
        }
    }

    /// Database row for this picture. The datetime is only set when both
    /// the date and time stamps are present; GPS time is UTC.
    pub fn to_row(&self) -> Result<LocationRow> {
        let datetime = match (&self.date_stamp, &self.time_stamp) {
            (Some(date), Some(time)) => Some(
                NaiveDateTime::parse_from_str(&format!("{date} {time}"), DATETIME_FORMAT)?
                    .and_utc(),
            ),
            _ => None,
        };

        Ok(LocationRow {
            filename: self.source_file.clone(),
            latitude: self.signed_latitude(),
            longitude: self.signed_longitude(),
            datetime,
        })
    }
}

/// Reads the GPS tags of a picture. `Ok(None)` when it has no EXIF data or
/// no GPS coordinates.
pub fn read_gps_metadata(path: &Path) -> Result<Option<GpsMetadata>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(GpsMetadata::from_exif(&path.to_string_lossy(), &exif))
}

/// Metadata of every picture in `paths` that carries valid GPS data.
pub fn filter_gps_metadata(paths: &[PathBuf]) -> Vec<GpsMetadata> {
    let records: Vec<GpsMetadata> = paths
        .iter()
        .filter_map(|path| match read_gps_metadata(path) {
            Ok(Some(metadata)) => match metadata.validate() {
                Ok(()) => Some(metadata),
                Err(e) => {
                    debug!("Invalid GPS metadata in {:?}: {}", path, e);
                    None
                }
            },
            Ok(None) => {
                debug!("No GPS metadata found in {:?}", path);
                None
            }
            Err(e) => {
                warn!("Unable to read metadata from {:?}: {}", path, e);
                None
            }
        })
        .collect();

    info!(
        "{} of {} picture files have GPS metadata",
        records.len(),
        paths.len()
    );
    records
}

fn ascii(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts.first().map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        }),
        _ => None,
    }
}

/// Degrees from a (degrees, minutes, seconds) rational triple.
fn degrees(value: &Value) -> Option<f64> {
    let parts: Vec<f64> = match value {
        Value::Rational(parts) => parts.iter().map(|part| part.to_f64()).collect(),
        Value::SRational(parts) => parts.iter().map(|part| part.to_f64()).collect(),
        _ => return None,
    };
    if parts.is_empty() || parts.iter().any(|part| !part.is_finite()) {
        return None;
    }

    Some(
        parts
            .iter()
            .zip([1.0, 60.0, 3600.0])
            .map(|(part, divisor)| part / divisor)
            .sum(),
    )
}

/// `HH:MM:SS` from a (hours, minutes, seconds) rational triple.
fn time(value: &Value) -> Option<String> {
    match value {
        Value::Rational(parts) if parts.len() == 3 => {
            let [hours, minutes, seconds] =
                [&parts[0], &parts[1], &parts[2]].map(|part| part.to_f64());
            if [hours, minutes, seconds].iter().any(|part| !part.is_finite()) {
                return None;
            }
            Some(format!(
                "{:02}:{:02}:{:02}",
                hours as u32, minutes as u32, seconds as u32
            ))
        }
        Value::Ascii(_) => ascii(value),
        _ => None,
    }
}
