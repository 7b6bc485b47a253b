// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/url for the persisted record shape.

pub mod model;
pub mod ports;
pub mod query;
