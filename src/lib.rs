pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod input;
pub mod model;
pub mod store;
pub mod ui;
