use std::env;
use std::fmt::{self, Debug};

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_persistence_read(&self) -> bool {
        self.code == 2
    }

    pub fn is_persistence_write(&self) -> bool {
        self.code == 3
    }

    pub fn is_geocode(&self) -> bool {
        self.code == 4
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn persistence_read_error<T: Debug>(err: T) -> Error {
    tracing::debug!(?err, "place store read failed");

    Error {
        code: 2,
        message: "persistence read error".into(),
    }
}

pub fn persistence_write_error<T: Debug>(err: T) -> Error {
    tracing::debug!(?err, "place store write failed");

    Error {
        code: 3,
        message: "persistence write error".into(),
    }
}

pub fn geocode_error() -> Error {
    Error {
        code: 4,
        message: "geocode error".into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 5,
        message: "reqwest error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: 6,
        message: "database error".into(),
    }
}
