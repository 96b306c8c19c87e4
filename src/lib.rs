pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod events;
pub mod external;
pub mod feed;
pub mod session;
pub mod surface;
