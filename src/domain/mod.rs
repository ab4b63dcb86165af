//! Domain logic - pure version rules independent of files and git

pub mod policy;
pub mod version;

pub use policy::{
    compare, validate_transition, Component, OrderingViolation, UpdateDecision, UpdateRequest,
};
pub use version::Version;
