//! Data models for the visit map

pub mod area;
pub mod visitor;

pub use area::{Area, SeedArea};
pub use visitor::{MarkRequest, VisitorQuery};
