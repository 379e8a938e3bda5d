pub mod applicability;
pub mod signature;
pub mod subtyping;
pub mod type_system;
