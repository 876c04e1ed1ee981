// Domain layer: plain data and the ports the core talks through. No I/O here.

pub mod model;
pub mod ports;
