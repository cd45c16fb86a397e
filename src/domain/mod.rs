// Domain layer: passage models and the source port.

pub mod model;
pub mod ports;
