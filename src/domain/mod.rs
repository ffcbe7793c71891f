// Domain layer: package model and ports. Depends only on std/serde.

pub mod model;
pub mod ports;
