// src/adapters/mod.rs
pub mod memory;

pub use memory::MemoryRegistry;
