// Domain layer: core models, the CAS formatting rule and ports (interfaces).

pub mod cas;
pub mod model;
pub mod ports;
