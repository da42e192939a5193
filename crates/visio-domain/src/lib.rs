//! Domain layer - damage models, meeting services, and repository traits

pub mod constants;
pub mod model;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod fixtures;
