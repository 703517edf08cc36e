pub mod debug;
pub mod placement;
