// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod tokens;

pub use tokens::{Token, Tokens};
