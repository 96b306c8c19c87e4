//! Create-or-view interaction with a single place on the map.

mod state;

#[cfg(test)]
mod fixtures;

pub use state::{
    CaptureOutcome, DirectionsOutcome, Event, LocationOutcome, LongPress, Mode, SaveOutcome,
    SessionPolicy, StartOutcome, State,
};

use async_channel::Receiver;
use uuid::Uuid;

use crate::{
    api::{DynDirections, DynGeocoder, DynMapSurface, DynNavigator, DynPlaceStore, Inputs},
    entities::{Annotation, LocationSample, NewPlace, Region},
    events::PlaceEvents,
    feed::{DynLocationFeed, Subscription},
};

/// Everything a session talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub store: DynPlaceStore,
    pub surface: DynMapSurface,
    pub geocoder: DynGeocoder,
    pub directions: DynDirections,
    pub navigator: DynNavigator,
    pub feed: DynLocationFeed,
    pub events: PlaceEvents,
}

enum Next {
    Sample(Option<LocationSample>),
    Event(Option<Event>),
}

pub struct PinSession {
    mode: Mode,
    state: State,
    policy: SessionPolicy,
    inputs: Inputs,
    subscription: Option<Subscription>,
    centered: bool,
    deps: Collaborators,
}

impl PinSession {
    pub fn new(mode: Mode, deps: Collaborators) -> Self {
        Self::with_policy(mode, deps, SessionPolicy::default())
    }

    pub fn with_policy(mode: Mode, deps: Collaborators, policy: SessionPolicy) -> Self {
        Self {
            mode,
            state: State::Idle,
            policy,
            inputs: Inputs::default(),
            subscription: None,
            centered: false,
            deps,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Whether the session still holds a location subscription.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn start(&mut self) -> StartOutcome {
        if self.state != State::Idle {
            return StartOutcome::AlreadyStarted;
        }

        match self.mode {
            Mode::Create => {
                self.inputs = Inputs::default();
                self.deps.surface.set_inputs(&self.inputs);
                self.subscription = Some(self.deps.feed.subscribe());
                self.state = State::AwaitingCapture;

                StartOutcome::AwaitingCapture
            }
            Mode::View { id } => {
                self.state = State::Loading;
                self.load(id).await
            }
        }
    }

    async fn load(&mut self, id: Uuid) -> StartOutcome {
        match self.deps.store.fetch_by_id(id).await {
            Ok(Some(place)) => {
                self.deps.surface.add_annotation(Annotation::from(&place));

                self.inputs = Inputs {
                    visible: true,
                    save_visible: false,
                    title: place.title.clone(),
                    subtitle: place.subtitle.clone(),
                };
                self.deps.surface.set_inputs(&self.inputs);

                let region = Region::around(place.coordinate(), self.policy.span);
                self.deps.surface.set_region(region);

                tracing::info!(%id, "place loaded");
                self.state = State::Loaded {
                    place: place.clone(),
                };

                StartOutcome::Loaded(place)
            }
            Ok(None) => {
                tracing::info!(%id, "no place with this id");
                self.state = State::NotFound;

                StartOutcome::NotFound
            }
            Err(err) => {
                tracing::warn!(%id, %err, "loading place failed");
                self.deps.surface.show_notice("Could not load this place.");
                self.state = State::LoadFailed;

                StartOutcome::Failed(err)
            }
        }
    }

    /// Centers the map on the first sample in create mode and releases the
    /// subscription. Everything after that is ignored.
    #[tracing::instrument(skip(self))]
    pub fn on_location(&mut self, sample: LocationSample) -> LocationOutcome {
        if self.mode != Mode::Create {
            return LocationOutcome::Ignored;
        }

        match self.state {
            State::AwaitingCapture
            | State::CaptureReady { coordinate: _ }
            | State::Saved { id: _ } => {}
            _ => return LocationOutcome::Ignored,
        }

        if self.centered {
            self.subscription = None;
            return LocationOutcome::Ignored;
        }

        self.centered = true;
        self.subscription = None;

        let region = Region::around(sample.coordinate, self.policy.span);
        self.deps.surface.set_region(region);

        LocationOutcome::Centered(region)
    }

    #[tracing::instrument(skip(self))]
    pub fn on_long_press(&mut self, press: LongPress) -> CaptureOutcome {
        if self.mode != Mode::Create {
            return CaptureOutcome::Ignored;
        }

        match self.state {
            State::AwaitingCapture | State::CaptureReady { coordinate: _ } => {}
            _ => return CaptureOutcome::Ignored,
        }

        if press.held < self.policy.min_press {
            return CaptureOutcome::TooShort;
        }

        self.state = State::CaptureReady {
            coordinate: press.coordinate,
        };

        self.inputs.visible = true;
        self.inputs.save_visible = true;
        self.deps.surface.set_inputs(&self.inputs);

        self.deps.surface.add_annotation(Annotation::provisional(
            press.coordinate,
            self.inputs.title.clone(),
            self.inputs.subtitle.clone(),
        ));

        CaptureOutcome::Captured(press.coordinate)
    }

    pub fn set_title(&mut self, title: String) {
        self.inputs.title = title;
    }

    pub fn set_subtitle(&mut self, subtitle: String) {
        self.inputs.subtitle = subtitle;
    }

    /// Writes the captured pin. Title and comment are taken as they are,
    /// empty included.
    #[tracing::instrument(skip(self))]
    pub async fn save(&mut self) -> SaveOutcome {
        let coordinate = match self.state.pending_coordinate() {
            Some(coordinate) => coordinate,
            None => return SaveOutcome::Ignored,
        };

        let new_place = NewPlace::new(
            self.inputs.title.clone(),
            self.inputs.subtitle.clone(),
            coordinate,
        );

        match self.deps.store.insert(new_place).await {
            Ok(id) => {
                self.state = State::Saved { id };
                self.deps.events.publish();
                self.deps.navigator.back();

                SaveOutcome::Saved(id)
            }
            Err(err) => {
                tracing::warn!(%err, "saving place failed");
                self.deps
                    .surface
                    .show_notice("Could not save this place. Try again.");

                SaveOutcome::Failed(err)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn detail_tapped(&mut self) -> DirectionsOutcome {
        let place = match &self.state {
            State::Loaded { place } => place.clone(),
            _ => return DirectionsOutcome::Ignored,
        };

        let placemarks = match self.deps.geocoder.reverse_geocode(place.coordinate()).await {
            Ok(placemarks) => placemarks,
            Err(err) => {
                tracing::warn!(%err, "reverse geocode failed");
                return DirectionsOutcome::Failed(err);
            }
        };

        match placemarks.into_iter().next() {
            Some(placemark) => {
                self.deps
                    .directions
                    .open_walking_directions(&placemark, &place.title);

                DirectionsOutcome::Opened(placemark)
            }
            None => {
                tracing::debug!("reverse geocode found nothing");
                DirectionsOutcome::NoPlacemark
            }
        }
    }

    pub async fn handle(&mut self, event: Event) {
        match event {
            Event::LongPress(press) => {
                let outcome = self.on_long_press(press);
                tracing::debug!(?outcome, "long press");
            }
            Event::TitleChanged(title) => self.set_title(title),
            Event::SubtitleChanged(subtitle) => self.set_subtitle(subtitle),
            Event::SavePressed => {
                let outcome = self.save().await;
                tracing::debug!(?outcome, "save");
            }
            Event::DetailTapped => {
                let outcome = self.detail_tapped().await;
                tracing::debug!(?outcome, "detail tapped");
            }
        }
    }

    /// Owns the session until the screen goes away: starts it, then feeds it
    /// location samples and UI events one at a time. Returns the final state
    /// once the event channel closes or the place has been saved.
    #[tracing::instrument(skip_all, fields(mode = ?self.mode))]
    pub async fn run(mut self, events: Receiver<Event>) -> State {
        let outcome = self.start().await;
        tracing::debug!(?outcome, "session started");

        loop {
            let next = match &self.subscription {
                Some(subscription) => tokio::select! {
                    sample = subscription.recv() => Next::Sample(sample),
                    event = events.recv() => Next::Event(event.ok()),
                },
                None => Next::Event(events.recv().await.ok()),
            };

            match next {
                Next::Sample(Some(sample)) => {
                    self.on_location(sample);
                }
                Next::Sample(None) => self.subscription = None,
                Next::Event(Some(event)) => self.handle(event).await,
                Next::Event(None) => break,
            }

            if let State::Saved { id: _ } = self.state {
                break;
            }
        }

        tracing::info!(state = %self.state.name(), "session finished");
        self.state
    }
}

#[tokio::test]
async fn create_session_centers_on_first_sample_only() {
    use crate::entities::Coordinate;
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());

    assert_eq!(session.start().await, StartOutcome::AwaitingCapture);
    assert!(session.is_subscribed());
    assert_eq!(h.feed.subscriber_count(), 1);

    let first = session.on_location(LocationSample::now(Coordinate::new(40.0, -74.0)));
    let region = match first {
        LocationOutcome::Centered(region) => region,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(region.center, Coordinate::new(40.0, -74.0));
    assert_eq!(region.span.latitude_delta, 0.01);
    assert_eq!(region.span.longitude_delta, 0.01);

    assert!(!session.is_subscribed());
    assert_eq!(h.feed.subscriber_count(), 0);

    let second = session.on_location(LocationSample::now(Coordinate::new(41.0, -75.0)));
    assert_eq!(second, LocationOutcome::Ignored);
    assert_eq!(h.surface.regions(), vec![region]);
}

#[tokio::test]
async fn sample_before_start_does_not_pin_subscription() {
    use crate::entities::Coordinate;
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());

    let early = session.on_location(LocationSample::now(Coordinate::new(1.0, 1.0)));
    assert_eq!(early, LocationOutcome::Ignored);
    assert!(h.surface.regions().is_empty());

    session.start().await;
    assert!(session.is_subscribed());

    let first = session.on_location(LocationSample::now(Coordinate::new(40.0, -74.0)));
    assert!(matches!(first, LocationOutcome::Centered(_)));
    assert!(!session.is_subscribed());
    assert_eq!(h.feed.subscriber_count(), 0);
}

#[tokio::test]
async fn create_session_hides_inputs_until_capture() {
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    let inputs = h.surface.last_inputs().unwrap();
    assert!(!inputs.visible);
    assert!(!inputs.save_visible);
}

#[tokio::test]
async fn short_press_captures_nothing() {
    use crate::entities::Coordinate;
    use fixtures::Harness;
    use std::time::Duration;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    let outcome = session.on_long_press(LongPress {
        coordinate: Coordinate::new(10.0, 20.0),
        held: Duration::from_millis(1199),
    });

    assert_eq!(outcome, CaptureOutcome::TooShort);
    assert_eq!(session.state(), &State::AwaitingCapture);
    assert!(h.surface.annotations().is_empty());
}

#[tokio::test]
async fn long_press_drops_one_provisional_annotation() {
    use crate::entities::{AnnotationStyle, Coordinate};
    use fixtures::Harness;
    use std::time::Duration;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    let coordinate = Coordinate::new(10.0, 20.0);
    let outcome = session.on_long_press(LongPress {
        coordinate,
        held: Duration::from_millis(1200),
    });

    assert_eq!(outcome, CaptureOutcome::Captured(coordinate));
    assert_eq!(session.state(), &State::CaptureReady { coordinate });

    let annotations = h.surface.annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].coordinate, coordinate);
    assert_eq!(annotations[0].style, AnnotationStyle::Provisional);
    assert_eq!(annotations[0].title, "");

    let inputs = h.surface.last_inputs().unwrap();
    assert!(inputs.visible);
    assert!(inputs.save_visible);
}

#[tokio::test]
async fn second_press_recaptures() {
    use crate::entities::Coordinate;
    use fixtures::Harness;
    use std::time::Duration;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    session.on_long_press(LongPress {
        coordinate: Coordinate::new(1.0, 1.0),
        held: Duration::from_secs(2),
    });
    session.set_title("Bench".into());
    session.on_long_press(LongPress {
        coordinate: Coordinate::new(2.0, 2.0),
        held: Duration::from_secs(2),
    });

    assert_eq!(
        session.state().pending_coordinate(),
        Some(Coordinate::new(2.0, 2.0))
    );

    let annotations = h.surface.annotations();
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[1].title, "Bench");
}

#[tokio::test]
async fn save_writes_place_broadcasts_and_navigates_back() {
    use crate::entities::Coordinate;
    use fixtures::Harness;
    use std::time::Duration;

    let h = Harness::with_sqlite().await;
    let mut listener = h.events.subscribe();
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    session.on_long_press(LongPress {
        coordinate: Coordinate::new(52.5, 13.4),
        held: Duration::from_secs(2),
    });
    session.set_title("Home".into());
    session.set_subtitle("blue door".into());

    let id = match session.save().await {
        SaveOutcome::Saved(id) => id,
        other => panic!("unexpected outcome {:?}", other),
    };

    assert_eq!(session.state(), &State::Saved { id });
    assert!(listener.try_recv().is_ok());
    assert_eq!(h.navigator.count(), 1);

    let place = h.store.fetch_by_id(id).await.unwrap().unwrap();
    assert_eq!(place.title, "Home");
    assert_eq!(place.subtitle, "blue door");
    assert_eq!(place.latitude, 52.5);
    assert_eq!(place.longitude, 13.4);
}

#[tokio::test]
async fn save_before_capture_is_ignored() {
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    assert_eq!(session.save().await, SaveOutcome::Ignored);
    assert_eq!(h.navigator.count(), 0);
}

#[tokio::test]
async fn failed_save_stays_capture_ready_without_broadcast() {
    use crate::entities::Coordinate;
    use fixtures::{FailingStore, Harness};
    use std::sync::Arc;
    use std::time::Duration;

    let h = Harness::new(Arc::new(FailingStore));
    let mut listener = h.events.subscribe();
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    let coordinate = Coordinate::new(52.5, 13.4);
    session.on_long_press(LongPress {
        coordinate,
        held: Duration::from_secs(2),
    });
    session.set_title("Home".into());

    match session.save().await {
        SaveOutcome::Failed(err) => assert!(err.is_persistence_write()),
        other => panic!("unexpected outcome {:?}", other),
    }

    assert_eq!(session.state(), &State::CaptureReady { coordinate });
    assert_eq!(session.inputs().title, "Home");
    assert!(listener.try_recv().is_err());
    assert_eq!(h.navigator.count(), 0);
    assert_eq!(h.surface.notices().len(), 1);
}

#[tokio::test]
async fn view_session_renders_stored_place() {
    use crate::entities::{AnnotationStyle, Coordinate, NewPlace};
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let id = h
        .store
        .insert(NewPlace::new(
            "Home".into(),
            "x".into(),
            Coordinate::new(52.5, 13.4),
        ))
        .await
        .unwrap();

    let mut session = PinSession::new(Mode::View { id }, h.collaborators());

    match session.start().await {
        StartOutcome::Loaded(place) => assert_eq!(place.id, id),
        other => panic!("unexpected outcome {:?}", other),
    }

    let annotations = h.surface.annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].coordinate, Coordinate::new(52.5, 13.4));
    assert_eq!(annotations[0].title, "Home");
    assert_eq!(annotations[0].subtitle, "x");
    assert_eq!(annotations[0].style, AnnotationStyle::Persisted);

    let regions = h.surface.regions();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].center, Coordinate::new(52.5, 13.4));
    assert_eq!(regions[0].span.latitude_delta, 0.01);
    assert_eq!(regions[0].span.longitude_delta, 0.01);

    let inputs = h.surface.last_inputs().unwrap();
    assert!(inputs.visible);
    assert!(!inputs.save_visible);
    assert_eq!(inputs.title, "Home");
    assert_eq!(inputs.subtitle, "x");

    assert!(!session.is_subscribed());
    assert_eq!(h.feed.subscriber_count(), 0);
}

#[tokio::test]
async fn view_session_for_unknown_id_renders_nothing() {
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(
        Mode::View {
            id: Uuid::new_v4(),
        },
        h.collaborators(),
    );

    assert_eq!(session.start().await, StartOutcome::NotFound);
    assert_eq!(session.state(), &State::NotFound);
    assert!(h.surface.annotations().is_empty());
    assert!(h.surface.last_inputs().is_none());
    assert!(h.surface.notices().is_empty());
}

#[tokio::test]
async fn view_session_read_failure_is_load_failed() {
    use fixtures::{FailingStore, Harness};
    use std::sync::Arc;

    let h = Harness::new(Arc::new(FailingStore));
    let mut session = PinSession::new(
        Mode::View {
            id: Uuid::new_v4(),
        },
        h.collaborators(),
    );

    match session.start().await {
        StartOutcome::Failed(err) => assert!(err.is_persistence_read()),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(session.state(), &State::LoadFailed);
    assert!(h.surface.annotations().is_empty());
}

#[tokio::test]
async fn view_session_ignores_location_and_long_press() {
    use crate::entities::Coordinate;
    use fixtures::Harness;
    use std::time::Duration;

    let h = Harness::with_sqlite().await;
    let id = h.seed("Home", "x", Coordinate::new(52.5, 13.4)).await;
    let mut session = PinSession::new(Mode::View { id }, h.collaborators());
    session.start().await;

    let location = session.on_location(LocationSample::now(Coordinate::new(0.0, 0.0)));
    let press = session.on_long_press(LongPress {
        coordinate: Coordinate::new(0.0, 0.0),
        held: Duration::from_secs(5),
    });

    assert_eq!(location, LocationOutcome::Ignored);
    assert_eq!(press, CaptureOutcome::Ignored);
    assert_eq!(h.surface.regions().len(), 1);
}

#[tokio::test]
async fn detail_tap_opens_walking_directions_to_first_placemark() {
    use crate::entities::Coordinate;
    use fixtures::{placemark, Harness};

    let h = Harness::with_sqlite().await;
    h.geocoder
        .respond_with(vec![placemark("Pariser Platz"), placemark("Berlin")]);
    let id = h.seed("Gate", "", Coordinate::new(52.5163, 13.3777)).await;

    let mut session = PinSession::new(Mode::View { id }, h.collaborators());
    session.start().await;

    match session.detail_tapped().await {
        DirectionsOutcome::Opened(opened) => {
            assert_eq!(opened.formatted_address, "Pariser Platz")
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    assert_eq!(
        h.geocoder.requests(),
        vec![Coordinate::new(52.5163, 13.3777)]
    );

    let opened = h.directions.opened();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].0.formatted_address, "Pariser Platz");
    assert_eq!(opened[0].1, "Gate");
}

#[tokio::test]
async fn empty_geocode_result_opens_nothing() {
    use crate::entities::Coordinate;
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    h.geocoder.respond_with(vec![]);
    let id = h.seed("Home", "x", Coordinate::new(52.5, 13.4)).await;

    let mut session = PinSession::new(Mode::View { id }, h.collaborators());
    session.start().await;

    assert_eq!(session.detail_tapped().await, DirectionsOutcome::NoPlacemark);
    assert!(h.directions.opened().is_empty());
    assert!(h.surface.notices().is_empty());
}

#[tokio::test]
async fn geocode_failure_opens_nothing() {
    use crate::entities::Coordinate;
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    h.geocoder.fail();
    let id = h.seed("Home", "x", Coordinate::new(52.5, 13.4)).await;

    let mut session = PinSession::new(Mode::View { id }, h.collaborators());
    session.start().await;

    match session.detail_tapped().await {
        DirectionsOutcome::Failed(err) => assert!(err.is_geocode()),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(h.directions.opened().is_empty());
    assert!(matches!(session.state(), State::Loaded { place: _ }));
}

#[tokio::test]
async fn detail_tap_in_create_mode_is_ignored() {
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());
    session.start().await;

    assert_eq!(session.detail_tapped().await, DirectionsOutcome::Ignored);
    assert!(h.geocoder.requests().is_empty());
}

#[tokio::test]
async fn start_twice_is_rejected() {
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let mut session = PinSession::new(Mode::Create, h.collaborators());

    session.start().await;
    assert_eq!(session.start().await, StartOutcome::AlreadyStarted);
    assert_eq!(h.feed.subscriber_count(), 1);
}

#[tokio::test]
async fn run_loop_centers_captures_and_saves() {
    use crate::entities::Coordinate;
    use fixtures::Harness;
    use std::time::Duration;

    let h = Harness::with_sqlite().await;
    let session = PinSession::new(Mode::Create, h.collaborators());
    let (tx, rx) = async_channel::unbounded();

    let handle = tokio::spawn(session.run(rx));

    // wait for the session to subscribe before publishing
    while h.feed.subscriber_count() == 0 {
        tokio::task::yield_now().await;
    }
    h.feed
        .publish(LocationSample::now(Coordinate::new(48.85, 2.35)));
    while h.feed.subscriber_count() != 0 {
        tokio::task::yield_now().await;
    }

    tx.send(Event::LongPress(LongPress {
        coordinate: Coordinate::new(48.86, 2.34),
        held: Duration::from_millis(1500),
    }))
    .await
    .unwrap();
    tx.send(Event::TitleChanged("Louvre".into())).await.unwrap();
    tx.send(Event::SubtitleChanged("east entrance".into()))
        .await
        .unwrap();
    tx.send(Event::SavePressed).await.unwrap();

    let id = match handle.await.unwrap() {
        State::Saved { id } => id,
        other => panic!("unexpected state {:?}", other),
    };

    let place = h.store.fetch_by_id(id).await.unwrap().unwrap();
    assert_eq!(place.title, "Louvre");
    assert_eq!(place.subtitle, "east entrance");
    assert_eq!(place.coordinate(), Coordinate::new(48.86, 2.34));

    assert_eq!(h.surface.regions()[0].center, Coordinate::new(48.85, 2.35));
    assert_eq!(h.navigator.count(), 1);
}

#[tokio::test]
async fn run_loop_ends_when_events_close() {
    use fixtures::Harness;

    let h = Harness::with_sqlite().await;
    let session = PinSession::new(
        Mode::View {
            id: Uuid::new_v4(),
        },
        h.collaborators(),
    );
    let (tx, rx) = async_channel::unbounded::<Event>();
    drop(tx);

    assert_eq!(session.run(rx).await, State::NotFound);
}
