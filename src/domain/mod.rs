// Domain layer: the script's entities and the output port. No I/O here.

pub mod model;
pub mod ports;
