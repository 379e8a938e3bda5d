pub mod delegation;
pub mod member;
pub mod reference;
pub mod types;

pub use delegation::*;
pub use member::*;
pub use reference::*;
pub use types::*;
