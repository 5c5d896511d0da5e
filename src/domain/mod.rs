// Domain layer: venue catalog and the ports the rest of the crate depends on.

pub mod catalog;
pub mod model;
pub mod ports;
