// Domain layer: draw models and ports. Only std/serde here.

pub mod model;
pub mod ports;
