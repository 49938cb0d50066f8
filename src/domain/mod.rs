// Domain layer: models and ports (capability traits). No concrete I/O here.

pub mod model;
pub mod ports;
