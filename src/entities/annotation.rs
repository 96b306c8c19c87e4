use serde::{Deserialize, Serialize};

use crate::entities::{Coordinate, Place};

/// Both styles draw a green marker with a detail button. Only a tap on a
/// loaded place leads to directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationStyle {
    /// A pin that has not been saved yet.
    Provisional,
    /// A stored place.
    Persisted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub coordinate: Coordinate,
    pub title: String,
    pub subtitle: String,
    pub style: AnnotationStyle,
}

impl Annotation {
    pub fn provisional(coordinate: Coordinate, title: String, subtitle: String) -> Self {
        Self {
            coordinate,
            title,
            subtitle,
            style: AnnotationStyle::Provisional,
        }
    }
}

impl From<&Place> for Annotation {
    fn from(place: &Place) -> Self {
        Self {
            coordinate: place.coordinate(),
            title: place.title.clone(),
            subtitle: place.subtitle.clone(),
            style: AnnotationStyle::Persisted,
        }
    }
}
