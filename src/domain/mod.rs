// Domain layer: record model, the persistence port, and the services built on it.

pub mod model;
pub mod ports;
pub mod services;
