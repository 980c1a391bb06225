//! Scene input for the rays renderer.
//!
//! This crate provides:
//!
//! - **Art input**: [`Art`], an ASCII silhouette read line-by-line, where
//!   any non-space character marks an occupied grid cell.
//! - **Scene construction**: [`Scene`], the immutable list of unit-sphere
//!   centers the renderer traces against.

pub mod art;
pub mod scene;

pub use art::{Art, ArtError};
pub use scene::Scene;
