pub mod core;
pub mod drill;
pub mod persistence;
pub mod session;
pub mod storage;
