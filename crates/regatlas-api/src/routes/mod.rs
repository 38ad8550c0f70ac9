//! # Route Modules
//!
//! Each module defines an Axum `Router` for one API surface area.
//! Routers are merged in [`crate::app`] into the application.

pub mod countries;
pub mod map_asset;
pub mod metadata;
pub mod panel;
pub mod resolve;
