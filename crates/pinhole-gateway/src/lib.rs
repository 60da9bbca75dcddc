//! HTTP gateway for the Pinhole URL shortener.
//!
//! A thin adapter over the shortener service: routes, request-shape
//! validation, and status-code mapping live here and nowhere else.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod validate;
