// Domain layer: models and ports. Concrete sources, storage and mail hand-off live in adapters.

pub mod model;
pub mod ports;
