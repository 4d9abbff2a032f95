// Domain layer: measurement records, result types, cutoff tables and the threshold port.

pub mod model;
pub mod ports;
pub mod thresholds;
