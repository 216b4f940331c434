pub mod macros;

pub mod base;
pub mod cluster;
pub mod manager;
pub mod marker;
pub mod tile;
