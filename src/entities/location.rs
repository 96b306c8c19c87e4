use chrono::{DateTime, Utc};
use geo_types::{Point, Rect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        format!("{},{}", coordinate.latitude, coordinate.longitude)
    }
}

/// One position update pushed by the location feed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    pub fn now(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            latitude_delta: 0.01,
            longitude_delta: 0.01,
        }
    }
}

/// The part of the map shown on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub span: Span,
}

impl Region {
    pub fn around(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Bounding box in (longitude, latitude) order.
    pub fn bounds(&self) -> Rect<f64> {
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lng = self.span.longitude_delta / 2.0;

        Rect::new(
            (self.center.longitude - half_lng, self.center.latitude - half_lat),
            (self.center.longitude + half_lng, self.center.latitude + half_lat),
        )
    }
}

#[test]
fn region_bounds_follow_span() {
    let region = Region::around(Coordinate::new(52.5, 13.4), Span::default());
    let bounds = region.bounds();

    assert!((bounds.min().y - 52.495).abs() < 1e-9);
    assert!((bounds.max().x - 13.405).abs() < 1e-9);
}

#[test]
fn coordinate_point_conversion_swaps_axes() {
    let point: Point<f64> = Coordinate::new(52.5, 13.4).into();
    assert_eq!(point.x(), 13.4);
    assert_eq!(point.y(), 52.5);
}
