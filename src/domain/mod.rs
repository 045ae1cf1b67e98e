// Domain layer: request/payload models and the port the client implements.

pub mod model;
pub mod ports;
