use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinate;

/// A persisted map location with a label and a comment.
///
/// Places are never updated in place: the store only creates and reads them,
/// and the coordinate is the one captured when the pin was dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Field values for a place that has not been written yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPlace {
    pub title: String,
    pub subtitle: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewPlace {
    pub fn new(title: String, subtitle: String, coordinate: Coordinate) -> Self {
        Self {
            title,
            subtitle,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    pub fn into_place(self, id: Uuid) -> Place {
        Place {
            id,
            title: self.title,
            subtitle: self.subtitle,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A human readable description of a coordinate, as returned by reverse
/// geocoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub place_id: Option<String>,
    pub formatted_address: String,
    pub coordinate: Coordinate,
}
