use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::Collaborators;
use crate::{
    api::{
        DirectionsLauncher, DynPlaceStore, Geocoder, Inputs, MapSurface, Navigator, PlaceStore,
    },
    db::SqlitePlaceStore,
    entities::{Annotation, Coordinate, NewPlace, Place, Placemark, Region},
    error::{geocode_error, persistence_read_error, persistence_write_error, Error},
    events::PlaceEvents,
    feed::ChannelFeed,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Region(Region),
    Annotation(Annotation),
    Inputs(Inputs),
    Notice(String),
}

#[derive(Default)]
pub struct RecordingSurface {
    commands: Mutex<Vec<Command>>,
}

impl RecordingSurface {
    fn push(&self, command: Command) {
        self.commands.lock().unwrap().push(command);
    }

    pub fn regions(&self) -> Vec<Region> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter_map(|command| match command {
                Command::Region(region) => Some(*region),
                _ => None,
            })
            .collect()
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter_map(|command| match command {
                Command::Annotation(annotation) => Some(annotation.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_inputs(&self) -> Option<Inputs> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|command| match command {
                Command::Inputs(inputs) => Some(inputs.clone()),
                _ => None,
            })
    }

    pub fn notices(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter_map(|command| match command {
                Command::Notice(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl MapSurface for RecordingSurface {
    fn set_region(&self, region: Region) {
        self.push(Command::Region(region));
    }

    fn add_annotation(&self, annotation: Annotation) {
        self.push(Command::Annotation(annotation));
    }

    fn set_inputs(&self, inputs: &Inputs) {
        self.push(Command::Inputs(inputs.clone()));
    }

    fn show_notice(&self, message: &str) {
        self.push(Command::Notice(message.into()));
    }
}

/// Answers every reverse geocode with the configured placemarks, or fails.
#[derive(Default)]
pub struct StubGeocoder {
    placemarks: Mutex<Option<Vec<Placemark>>>,
    requests: Mutex<Vec<Coordinate>>,
}

impl StubGeocoder {
    pub fn respond_with(&self, placemarks: Vec<Placemark>) {
        *self.placemarks.lock().unwrap() = Some(placemarks);
    }

    pub fn fail(&self) {
        *self.placemarks.lock().unwrap() = None;
    }

    pub fn requests(&self) -> Vec<Coordinate> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Vec<Placemark>, Error> {
        self.requests.lock().unwrap().push(coordinate);

        self.placemarks
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| geocode_error())
    }
}

#[derive(Default)]
pub struct RecordingDirections {
    opened: Mutex<Vec<(Placemark, String)>>,
}

impl RecordingDirections {
    pub fn opened(&self) -> Vec<(Placemark, String)> {
        self.opened.lock().unwrap().clone()
    }
}

impl DirectionsLauncher for RecordingDirections {
    fn open_walking_directions(&self, destination: &Placemark, name: &str) {
        self.opened
            .lock()
            .unwrap()
            .push((destination.clone(), name.into()));
    }
}

#[derive(Default)]
pub struct CountingNavigator {
    backs: AtomicUsize,
}

impl CountingNavigator {
    pub fn count(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

/// A store whose storage is gone: every read and write fails.
pub struct FailingStore;

#[async_trait]
impl PlaceStore for FailingStore {
    async fn insert(&self, _: NewPlace) -> Result<Uuid, Error> {
        Err(persistence_write_error("storage unavailable"))
    }

    async fn fetch_by_id(&self, _: Uuid) -> Result<Option<Place>, Error> {
        Err(persistence_read_error("storage unavailable"))
    }
}

pub fn placemark(address: &str) -> Placemark {
    Placemark {
        place_id: None,
        formatted_address: address.into(),
        coordinate: Coordinate::new(0.0, 0.0),
    }
}

pub struct Harness {
    pub store: DynPlaceStore,
    pub surface: Arc<RecordingSurface>,
    pub geocoder: Arc<StubGeocoder>,
    pub directions: Arc<RecordingDirections>,
    pub navigator: Arc<CountingNavigator>,
    pub feed: Arc<ChannelFeed>,
    pub events: PlaceEvents,
}

impl Harness {
    pub fn new(store: DynPlaceStore) -> Self {
        Self {
            store,
            surface: Arc::new(RecordingSurface::default()),
            geocoder: Arc::new(StubGeocoder::default()),
            directions: Arc::new(RecordingDirections::default()),
            navigator: Arc::new(CountingNavigator::default()),
            feed: Arc::new(ChannelFeed::new()),
            events: PlaceEvents::default(),
        }
    }

    pub async fn with_sqlite() -> Self {
        Self::new(Arc::new(SqlitePlaceStore::in_memory().await.unwrap()))
    }

    pub async fn seed(&self, title: &str, subtitle: &str, coordinate: Coordinate) -> Uuid {
        self.store
            .insert(NewPlace::new(title.into(), subtitle.into(), coordinate))
            .await
            .unwrap()
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            store: self.store.clone(),
            surface: self.surface.clone(),
            geocoder: self.geocoder.clone(),
            directions: self.directions.clone(),
            navigator: self.navigator.clone(),
            feed: self.feed.clone(),
            events: self.events.clone(),
        }
    }
}
