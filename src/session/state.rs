use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinate, Place, Placemark, Region, Span};
use crate::error::Error;

/// What a session is for. Chosen by the caller and fixed for the session's
/// lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Mode {
    Create,
    View { id: Uuid },
}

#[derive(Clone, Debug, PartialEq)]
pub enum State {
    Idle,
    // create
    AwaitingCapture,
    CaptureReady { coordinate: Coordinate },
    Saved { id: Uuid },
    // view
    Loading,
    Loaded { place: Place },
    LoadFailed,
    NotFound,
}

impl State {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::AwaitingCapture => "awaiting_capture".into(),
            Self::CaptureReady { coordinate: _ } => "capture_ready".into(),
            Self::Saved { id: _ } => "saved".into(),
            Self::Loading => "loading".into(),
            Self::Loaded { place: _ } => "loaded".into(),
            Self::LoadFailed => "load_failed".into(),
            Self::NotFound => "not_found".into(),
        }
    }

    pub fn pending_coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::CaptureReady { coordinate } => Some(*coordinate),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionPolicy {
    pub span: Span,
    pub min_press: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            span: Span::default(),
            min_press: Duration::from_millis(1200),
        }
    }
}

/// A long-press on the map, already converted to a geographic coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPress {
    pub coordinate: Coordinate,
    pub held: Duration,
}

/// Input the session reacts to besides location samples.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    LongPress(LongPress),
    TitleChanged(String),
    SubtitleChanged(String),
    SavePressed,
    DetailTapped,
}

#[derive(Debug, PartialEq)]
pub enum StartOutcome {
    AwaitingCapture,
    Loaded(Place),
    NotFound,
    Failed(Error),
    AlreadyStarted,
}

#[derive(Debug, PartialEq)]
pub enum LocationOutcome {
    Centered(Region),
    Ignored,
}

#[derive(Debug, PartialEq)]
pub enum CaptureOutcome {
    Captured(Coordinate),
    TooShort,
    Ignored,
}

#[derive(Debug, PartialEq)]
pub enum SaveOutcome {
    Saved(Uuid),
    Failed(Error),
    Ignored,
}

#[derive(Debug, PartialEq)]
pub enum DirectionsOutcome {
    Opened(Placemark),
    NoPlacemark,
    Failed(Error),
    Ignored,
}
