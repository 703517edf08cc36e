pub mod board;
pub mod reconcile;
