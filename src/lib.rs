// src/lib.rs
pub mod clock;
pub mod domain;
pub mod money;
pub mod persistence;
pub mod seed;
pub mod web;

pub use domain::*;
pub use money::*;
