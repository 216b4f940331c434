use serde::Serialize;

use crate::{data::location::PhotoLocation, rendering::context::RenderContext, Result};

const FILENAME_LABEL: &str = "Filename: ";
const DATETIME_LABEL: &str = "GPS datetime: ";
const LINE_BREAK: &str = "<br>";

/// Options handed to `bindPopup`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub max_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 300,
            auto_close: true,
            close_on_click: true,
        }
    }
}

/// Tooltip bound to a marker, opened when the marker is clicked
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    content: String,
    options: PopupOptions,
}

impl Popup {
    /// Popup with HTML `content`, shown as-is.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            options: PopupOptions::default(),
        }
    }

    /// Popup describing a picture: its filename and, when known, the GPS
    /// datetime on a second line. An empty datetime counts as unknown.
    pub fn for_location(location: &PhotoLocation) -> Self {
        let mut content = format!("{FILENAME_LABEL}{}", location.filename);
        if let Some(datetime) = location.datetime.as_deref().filter(|d| !d.is_empty()) {
            content.push_str(LINE_BREAK);
            content.push_str(DATETIME_LABEL);
            content.push_str(datetime);
        }
        Self::new(content)
    }

    pub fn with_options(mut self, options: PopupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn options(&self) -> &PopupOptions {
        &self.options
    }

    /// `.bindPopup(...)` call to chain onto a layer expression. Default
    /// options are left out.
    pub fn bind_expression(&self) -> Result<String> {
        let content = RenderContext::literal(&self.content)?;
        if self.options == PopupOptions::default() {
            Ok(format!(".bindPopup({content})"))
        } else {
            Ok(format!(
                ".bindPopup({content}, {})",
                RenderContext::literal(&self.options)?
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_with_datetime() {
        let location = PhotoLocation::new(40.2, -89.1, "a.jpg").with_datetime("2020-01-01");
        let popup = Popup::for_location(&location);

        assert_eq!(popup.content(), "Filename: a.jpg<br>GPS datetime: 2020-01-01");
    }

    #[test]
    fn test_popup_without_datetime() {
        let location = PhotoLocation::new(40.2, -89.1, "b.jpg");
        let popup = Popup::for_location(&location);

        assert_eq!(popup.content(), "Filename: b.jpg");
        assert!(!popup.content().contains("GPS datetime"));
    }

    #[test]
    fn test_popup_with_empty_datetime() {
        let location = PhotoLocation::new(40.2, -89.1, "a.jpg").with_datetime("");
        let popup = Popup::for_location(&location);

        assert_eq!(popup.content(), "Filename: a.jpg");
    }

    #[test]
    fn test_bind_expression() {
        let popup = Popup::new("Filename: a.jpg");
        assert_eq!(
            popup.bind_expression().unwrap(),
            ".bindPopup(\"Filename: a.jpg\")"
        );

        let popup = popup.with_options(PopupOptions {
            max_width: 120,
            ..PopupOptions::default()
        });
        assert_eq!(
            popup.bind_expression().unwrap(),
            ".bindPopup(\"Filename: a.jpg\", {\"maxWidth\":120,\"autoClose\":true,\"closeOnClick\":true})"
        );
    }
}
