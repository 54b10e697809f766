// src/config/mod.rs
pub mod consts;
pub mod landmarks;
pub mod options;
