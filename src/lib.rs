//! Client core of the CleanCity app: recycling bin locations annotated with their distance to the user, waste
//! classification and reports through the CleanCity backend, and the user's reward statistics.

pub mod api;
pub mod app_config;
pub mod domain;
pub mod geo;
mod geo_point_deserializer;
pub mod location;
pub mod refresh;
pub mod store;
pub mod store_listener;
