use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Annotation, Coordinate, NewPlace, Place, Placemark, Region};
use crate::error::Error;

#[async_trait]
pub trait PlaceStore {
    async fn insert(&self, place: NewPlace) -> Result<Uuid, Error>;
    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Place>, Error>;
}

#[async_trait]
pub trait Geocoder {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Vec<Placemark>, Error>;
}

/// Visibility and contents of the title/comment inputs and the save control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inputs {
    pub visible: bool,
    pub save_visible: bool,
    pub title: String,
    pub subtitle: String,
}

/// Commands the session issues to whatever draws the map.
pub trait MapSurface {
    fn set_region(&self, region: Region);
    fn add_annotation(&self, annotation: Annotation);
    fn set_inputs(&self, inputs: &Inputs);
    fn show_notice(&self, message: &str);
}

/// Hands a destination to the platform maps application.
pub trait DirectionsLauncher {
    fn open_walking_directions(&self, destination: &Placemark, name: &str);
}

pub trait Navigator {
    fn back(&self);
}

pub type DynPlaceStore = Arc<dyn PlaceStore + Send + Sync>;
pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynMapSurface = Arc<dyn MapSurface + Send + Sync>;
pub type DynDirections = Arc<dyn DirectionsLauncher + Send + Sync>;
pub type DynNavigator = Arc<dyn Navigator + Send + Sync>;
