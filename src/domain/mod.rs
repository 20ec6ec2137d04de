// Domain layer: entity model and ports (interfaces). No IO here.

pub mod model;
pub mod ports;
