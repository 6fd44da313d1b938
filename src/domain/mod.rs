// Domain layer: the wire model and ports (interfaces). No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
