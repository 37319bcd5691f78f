// Domain layer: constraint and service models plus the ports the adapters implement.

pub mod model;
pub mod ports;
