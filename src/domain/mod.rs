// Domain layer: the record types and the format trait they share.

pub mod model;
pub mod ports;
