// Domain layer: the stock model and the seams the rest of the crate plugs into.

pub mod model;
pub mod ports;
