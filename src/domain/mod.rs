// Domain layer: 核心模型與 ports，不做任何 I/O

pub mod model;
pub mod ports;
