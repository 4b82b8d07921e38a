// Domain layer: parameter model, entities and ports. No I/O here.

pub mod entities;
pub mod model;
pub mod ports;
