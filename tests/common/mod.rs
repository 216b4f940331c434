//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::{io::Cursor, path::Path};

use exif::{experimental::Writer, Field, In, Rational, Tag, Value};
use pic2map::{LocationDb, LocationRow};
use tempfile::TempDir;

fn rationals(values: [(u32, u32); 3]) -> Value {
    Value::Rational(
        values
            .iter()
            .map(|&(num, denom)| Rational { num, denom })
            .collect(),
    )
}

fn ascii(text: &str) -> Value {
    Value::Ascii(vec![text.as_bytes().to_vec()])
}

/// JPEG file contents with GPS tags for the given position.
///
/// Coordinates are whole degrees; the refs carry the hemisphere.
pub fn gps_jpeg(latitude: (u32, &str), longitude: (u32, &str), datetime: Option<(&str, [u32; 3])>) -> Vec<u8> {
    let mut fields = vec![
        Field {
            tag: Tag::GPSLatitudeRef,
            ifd_num: In::PRIMARY,
            value: ascii(latitude.1),
        },
        Field {
            tag: Tag::GPSLatitude,
            ifd_num: In::PRIMARY,
            value: rationals([(latitude.0, 1), (0, 1), (0, 1)]),
        },
        Field {
            tag: Tag::GPSLongitudeRef,
            ifd_num: In::PRIMARY,
            value: ascii(longitude.1),
        },
        Field {
            tag: Tag::GPSLongitude,
            ifd_num: In::PRIMARY,
            value: rationals([(longitude.0, 1), (0, 1), (0, 1)]),
        },
    ];
    if let Some((date, [h, m, s])) = datetime {
        fields.push(Field {
            tag: Tag::GPSDateStamp,
            ifd_num: In::PRIMARY,
            value: ascii(date),
        });
        fields.push(Field {
            tag: Tag::GPSTimeStamp,
            ifd_num: In::PRIMARY,
            value: rationals([(h, 1), (m, 1), (s, 1)]),
        });
    }

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    let length = (2 + 6 + tiff.len()) as u16;
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&length.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

pub fn row(filename: &str, latitude: f64, longitude: f64) -> LocationRow {
    LocationRow {
        filename: filename.to_string(),
        latitude,
        longitude,
        datetime: None,
    }
}

pub async fn temp_db() -> (TempDir, LocationDb) {
    let dir = tempfile::tempdir().unwrap();
    let db = LocationDb::open(dir.path().join("location.db")).await.unwrap();
    (dir, db)
}
