// src/physics/mod.rs
pub mod bonding;
