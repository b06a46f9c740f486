pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod os;
pub mod storage;
pub mod types;

pub use types::*;
