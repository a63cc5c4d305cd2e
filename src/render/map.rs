//! Map state handed to the page script.

use askama::Template;
use serde::Serialize;

use crate::domain::map_view::{MapView, Marker, Viewport};

#[derive(Template)]
#[template(path = "partials/popup.html")]
struct PopupTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
}

/// Escaped popup HTML for a marker: bold title, subtitle below.
pub fn render_popup(marker: &Marker) -> askama::Result<String> {
    PopupTemplate {
        title: &marker.title,
        subtitle: &marker.subtitle,
    }
    .render()
}

#[derive(Debug, Serialize)]
struct MarkerPayload {
    lat: f64,
    lng: f64,
    popup: String,
}

#[derive(Debug, Serialize)]
struct MapPayload {
    max_bounds: [[f64; 2]; 2],
    viewport: Viewport,
    markers: Vec<MarkerPayload>,
}

/// JSON consumed by `static/js/map.js`.
///
/// `<` is escaped so the result can sit inside a `<script>` element.
pub fn map_json(map: &MapView) -> askama::Result<String> {
    let markers = map
        .markers()
        .iter()
        .map(|m| {
            Ok(MarkerPayload {
                lat: m.position.lat,
                lng: m.position.lng,
                popup: render_popup(m)?,
            })
        })
        .collect::<askama::Result<Vec<_>>>()?;

    let payload = MapPayload {
        max_bounds: map.max_bounds().as_leaflet(),
        viewport: map.viewport(),
        markers,
    };

    let json = serde_json::to_string(&payload).map_err(|e| askama::Error::Custom(Box::new(e)))?;
    Ok(json.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coordinates, Place};

    #[test]
    fn test_popup_escapes() {
        let place = Place::new(
            Some("<b>Fort</b>".into()),
            None,
            Coordinates::new(26.9, 75.8).unwrap(),
        );
        let html = render_popup(&Marker::for_place(&place)).unwrap();
        assert!(html.contains("&lt;b&gt;Fort&lt;/b&gt;"));
        assert!(html.contains("Type: Tourist Spot"));
    }

    #[test]
    fn test_map_json_shape() {
        let mut map = MapView::india();
        let place = Place::new(None, None, Coordinates::new(26.9, 75.8).unwrap());
        map.set_markers([Marker::for_place(&place)]);

        let json = map_json(&map).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["markers"].as_array().unwrap().len(), 1);
        assert_eq!(value["viewport"]["mode"], "fit_bounds");
        assert_eq!(value["max_bounds"][0][0], 6.5546);
        assert!(!json.contains('<'));
    }

    #[test]
    fn test_empty_map_keeps_center() {
        let json = map_json(&MapView::india()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["viewport"]["mode"], "center");
        assert_eq!(value["viewport"]["zoom"], 5);
        assert!(value["markers"].as_array().unwrap().is_empty());
    }
}
