// Domain layer: the check record types and the resolver port.

pub mod model;
pub mod ports;
