use std::sync::Arc;
use std::time::Duration;

use pinmap::config::Config;
use pinmap::db::SqlitePlaceStore;
use pinmap::entities::{Coordinate, LocationSample};
use pinmap::error::{invalid_state_error, Error};
use pinmap::events::PlaceEvents;
use pinmap::external::google_maps::{GoogleMaps, MapsLink};
use pinmap::feed::ChannelFeed;
use pinmap::session::{Collaborators, Event, LongPress, Mode, PinSession, State};
use pinmap::surface::LoggingSurface;

const HERE: Coordinate = Coordinate {
    latitude: 52.52,
    longitude: 13.405,
};

const GATE: Coordinate = Coordinate {
    latitude: 52.5163,
    longitude: 13.3777,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let store = SqlitePlaceStore::new(&config.database_url, config.max_connections).await?;

    let surface = Arc::new(LoggingSurface);
    let feed = Arc::new(ChannelFeed::new());
    let events = PlaceEvents::default();
    let mut place_added = events.subscribe();

    let deps = Collaborators {
        store: Arc::new(store),
        surface: surface.clone(),
        geocoder: Arc::new(GoogleMaps::new(&config)?),
        directions: Arc::new(MapsLink::logging()),
        navigator: surface,
        feed: feed.clone(),
        events,
    };

    // stand-in for the platform location source
    let source = feed.clone();
    let gps = tokio::spawn(async move {
        let mut ticks = tokio::time::interval(Duration::from_millis(200));
        loop {
            ticks.tick().await;
            source.publish(LocationSample::now(HERE));
        }
    });

    let (tx, rx) = async_channel::unbounded();
    let script = async move {
        tokio::time::sleep(Duration::from_millis(500)).await;

        let script = [
            Event::LongPress(LongPress {
                coordinate: GATE,
                held: Duration::from_millis(1300),
            }),
            Event::TitleChanged("Brandenburg Gate".into()),
            Event::SubtitleChanged("meet by the east side".into()),
            Event::SavePressed,
        ];
        for event in script {
            if tx.send(event).await.is_err() {
                break;
            }
        }
    };

    let (state, _) = futures::future::join(
        PinSession::new(Mode::Create, deps.clone()).run(rx),
        script,
    )
    .await;
    gps.abort();

    let id = match state {
        State::Saved { id } => id,
        other => {
            tracing::error!(state = %other.name(), "place was not saved");
            return Err(invalid_state_error());
        }
    };

    if place_added.try_recv().is_ok() {
        tracing::info!(%id, "place added");
    }

    let (tx, rx) = async_channel::unbounded();
    tx.send(Event::DetailTapped)
        .await
        .map_err(|_| invalid_state_error())?;
    drop(tx);

    let state = PinSession::new(Mode::View { id }, deps).run(rx).await;
    tracing::info!(state = %state.name(), "done");

    Ok(())
}
