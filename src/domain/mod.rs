// Domain layer: the traits every EC2 shape implements and the macros that generate them.

pub(crate) mod macros;
pub mod ports;
pub mod render;
