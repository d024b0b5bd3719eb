// Domain layer: models and ports. No filesystem or CLI concerns here.

pub mod model;
pub mod ports;
