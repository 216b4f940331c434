//! Standalone HTML page hosting a rendered map.

use crate::{
    core::{constants, map::Map},
    Result,
};

/// Renders `map` as a complete HTML document: Leaflet and
/// Leaflet.markercluster assets, a full-window container and the map script.
pub fn render_page(map: &Map) -> Result<String> {
    let script = map.to_script()?;
    let leaflet = format!("https://unpkg.com/leaflet@{}/dist", constants::LEAFLET_VERSION);
    let cluster = format!(
        "https://unpkg.com/leaflet.markercluster@{}/dist",
        constants::MARKERCLUSTER_VERSION
    );
    let container = escape_html(map.container_id());

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="{leaflet}/leaflet.css">
  <link rel="stylesheet" href="{cluster}/MarkerCluster.css">
  <link rel="stylesheet" href="{cluster}/MarkerCluster.Default.css">
  <style>
    html, body {{ height: 100%; margin: 0; }}
    #{container} {{ height: 100%; }}
  </style>
</head>
<body>
  <div id="{container}"></div>
  <script src="{leaflet}/leaflet.js"></script>
  <script src="{cluster}/leaflet.markercluster.js"></script>
  <script>
{script}
  </script>
</body>
</html>
"#,
        title = constants::APP_NAME,
    ))
}

/// Escapes text for use inside HTML attributes and element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::LatLng, data::location::PhotoLocation};

    #[test]
    fn test_page_contains_container_and_script() {
        let mut map = Map::initialize("photo-map", LatLng::new(1.0, 2.0), 4).unwrap();
        map.add_markers(&[PhotoLocation::new(1.0, 2.0, "a.jpg")]).unwrap();
        let page = render_page(&map).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<div id="photo-map"></div>"#));
        assert!(page.contains("leaflet.markercluster.js"));
        assert!(page.contains("var map = L.map(\"photo-map\").setView([1.0,2.0], 4);"));
        assert!(page.contains("bindPopup(\"Filename: a.jpg\")"));
    }

    #[test]
    fn test_filename_cannot_close_script() {
        let mut map = Map::initialize("map", LatLng::default(), 3).unwrap();
        map.add_markers(&[PhotoLocation::new(0.0, 0.0, "</script><b>.jpg")])
            .unwrap();
        let page = render_page(&map).unwrap();

        assert_eq!(page.matches("</script>").count(), 3);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#x27;");
    }
}
