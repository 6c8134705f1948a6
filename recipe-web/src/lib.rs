//! Browser front-end for the recipe generator.
//!
//! The [`controller::Controller`] owns the application state and drives a
//! [`presenter::Presenter`]; persistence goes through the stores in
//! [`storage`], which sit on any [`storage::KeyValueStore`] (the browser's
//! localStorage in production, an in-memory map in tests).

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod presenter;
pub mod state;
pub mod storage;
