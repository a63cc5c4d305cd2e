//! Page map model: bounded viewport plus the current marker set.
//!
//! Tiles are drawn by Leaflet in the browser; this module owns only the state
//! the page script needs. The whole [`MapView`] serializes to JSON and is
//! embedded into the page.

use crate::domain::entities::{Coordinates, ListingRecord, Place};
use serde::Serialize;

/// A latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl GeoBounds {
    /// Mainland India, the region the map is held inside.
    pub const INDIA: GeoBounds = GeoBounds {
        south_west: Coordinates {
            lat: 6.5546,
            lng: 68.1114,
        },
        north_east: Coordinates {
            lat: 37.0970,
            lng: 97.3956,
        },
    };

    /// Builds bounds from two corners in any order.
    pub fn new(a: Coordinates, b: Coordinates) -> Self {
        Self {
            south_west: Coordinates {
                lat: a.lat.min(b.lat),
                lng: a.lng.min(b.lng),
            },
            north_east: Coordinates {
                lat: a.lat.max(b.lat),
                lng: a.lng.max(b.lng),
            },
        }
    }

    /// Smallest bounds covering every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| acc.extend(p)))
    }

    fn extend(self, p: Coordinates) -> Self {
        Self::new(
            Coordinates {
                lat: self.south_west.lat.min(p.lat),
                lng: self.south_west.lng.min(p.lng),
            },
            Coordinates {
                lat: self.north_east.lat.max(p.lat),
                lng: self.north_east.lng.max(p.lng),
            },
        )
    }

    pub fn contains(&self, p: Coordinates) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&p.lng)
    }

    /// Nearest point inside the bounds.
    pub fn clamp(&self, p: Coordinates) -> Coordinates {
        Coordinates {
            lat: p.lat.clamp(self.south_west.lat, self.north_east.lat),
            lng: p.lng.clamp(self.south_west.lng, self.north_east.lng),
        }
    }

    /// Leaflet's `[[lat, lng], [lat, lng]]` form.
    pub fn as_leaflet(&self) -> [[f64; 2]; 2] {
        [
            [self.south_west.lat, self.south_west.lng],
            [self.north_east.lat, self.north_east.lng],
        ]
    }
}

/// A pin on the map with its popup text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinates,
    pub title: String,
    pub subtitle: String,
}

impl Marker {
    /// Marker for a listing, or `None` when the record has no coordinates.
    pub fn for_record(record: &ListingRecord) -> Option<Self> {
        let position = record.coordinates?;
        Some(Self {
            position,
            title: record.name.clone(),
            subtitle: record
                .address
                .clone()
                .unwrap_or_else(|| record.kind().title().to_string()),
        })
    }

    pub fn for_place(place: &Place) -> Self {
        Self {
            position: place.coordinates,
            title: place.name.clone(),
            subtitle: format!("Type: {}", place.category),
        }
    }
}

/// What the map is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Viewport {
    Center { center: Coordinates, zoom: u8 },
    FitBounds { bounds: GeoBounds },
}

/// Result of dragging the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOutcome {
    /// Where the user dragged the centre to.
    pub requested: Coordinates,
    /// Where the centre ends up after containment.
    pub settled: Coordinates,
}

impl PanOutcome {
    pub fn snapped_back(&self) -> bool {
        self.requested != self.settled
    }
}

/// One map per page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    max_bounds: GeoBounds,
    zoom: u8,
    viewport: Viewport,
    markers: Vec<Marker>,
}

impl MapView {
    pub fn new(max_bounds: GeoBounds, center: Coordinates, zoom: u8) -> Self {
        Self {
            max_bounds,
            zoom,
            viewport: Viewport::Center {
                center: max_bounds.clamp(center),
                zoom,
            },
            markers: Vec::new(),
        }
    }

    /// Country-level view of India.
    pub fn india() -> Self {
        Self::new(
            GeoBounds::INDIA,
            Coordinates {
                lat: 22.9734,
                lng: 78.6569,
            },
            5,
        )
    }

    /// Replaces every marker, then fits the viewport to the new set.
    ///
    /// The viewport is left alone when the new set is empty.
    pub fn set_markers<I>(&mut self, markers: I)
    where
        I: IntoIterator<Item = Marker>,
    {
        self.clear_markers();
        self.markers.extend(markers);

        if let Some(bounds) = GeoBounds::from_points(self.markers.iter().map(|m| m.position)) {
            self.viewport = Viewport::FitBounds { bounds };
        }
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    /// Moves the centre and then pans it back inside the max bounds.
    pub fn drag_to(&mut self, center: Coordinates) -> PanOutcome {
        let settled = self.max_bounds.clamp(center);
        self.viewport = Viewport::Center {
            center: settled,
            zoom: self.zoom,
        };
        PanOutcome {
            requested: center,
            settled,
        }
    }

    /// Centres on a single point at street zoom, as detail pages do.
    pub fn focus(&mut self, center: Coordinates, zoom: u8) {
        self.zoom = zoom;
        self.viewport = Viewport::Center {
            center: self.max_bounds.clamp(center),
            zoom,
        };
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_bounds(&self) -> GeoBounds {
        self.max_bounds
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::india()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinates {
        Coordinates { lat, lng }
    }

    fn marker(lat: f64, lng: f64) -> Marker {
        Marker {
            position: c(lat, lng),
            title: "m".to_string(),
            subtitle: String::new(),
        }
    }

    #[test]
    fn test_set_markers_replaces_previous_set() {
        let mut map = MapView::india();
        map.set_markers(vec![marker(28.6, 77.2), marker(28.5, 77.1), marker(28.7, 77.3)]);
        assert_eq!(map.marker_count(), 3);

        map.set_markers(vec![marker(19.0, 72.8)]);
        assert_eq!(map.marker_count(), 1);
        assert_eq!(map.markers()[0].position, c(19.0, 72.8));
    }

    #[test]
    fn test_set_markers_fits_bounding_box() {
        let mut map = MapView::india();
        map.set_markers(vec![marker(28.5, 77.3), marker(28.7, 77.1)]);

        match map.viewport() {
            Viewport::FitBounds { bounds } => {
                assert_eq!(bounds.south_west, c(28.5, 77.1));
                assert_eq!(bounds.north_east, c(28.7, 77.3));
            }
            other => panic!("expected fit bounds, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_marker_set_keeps_viewport() {
        let mut map = MapView::india();
        let before = map.viewport();
        map.set_markers(vec![marker(28.6, 77.2)]);
        let fitted = map.viewport();
        assert_ne!(before, fitted);

        map.set_markers(Vec::new());
        assert_eq!(map.marker_count(), 0);
        assert_eq!(map.viewport(), fitted);
    }

    #[test]
    fn test_drag_outside_bounds_snaps_back() {
        let mut map = MapView::india();
        let outcome = map.drag_to(c(51.5, -0.1));
        assert!(outcome.snapped_back());
        assert!(GeoBounds::INDIA.contains(outcome.settled));
        assert_eq!(outcome.settled, c(37.0970, 68.1114));
    }

    #[test]
    fn test_drag_inside_bounds_is_kept() {
        let mut map = MapView::india();
        let outcome = map.drag_to(c(19.07, 72.87));
        assert!(!outcome.snapped_back());
        assert_eq!(
            map.viewport(),
            Viewport::Center {
                center: c(19.07, 72.87),
                zoom: 5
            }
        );
    }

    #[test]
    fn test_from_points_empty() {
        assert!(GeoBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_viewport_serializes_with_mode() {
        let map = MapView::india();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["viewport"]["mode"], "center");
        assert_eq!(json["viewport"]["zoom"], 5);
    }
}
