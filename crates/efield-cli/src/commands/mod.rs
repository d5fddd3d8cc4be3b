pub mod map;
pub mod probe;
