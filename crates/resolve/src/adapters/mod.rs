pub mod memory;
pub mod noop;

pub use memory::{ClosureDelegate, InMemoryTypeSystem, TypeUniverse};
pub use noop::NoOpTypeSystem;
