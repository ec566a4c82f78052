//! Loss development triangles and their CSV loader

mod data;
pub mod loader;

pub use data::Triangle;
pub use loader::{load_triangle, load_triangle_from_reader};
