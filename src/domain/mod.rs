// src/domain/mod.rs
pub mod auctions;
pub mod bids;
pub mod core;
pub mod lifecycle;
pub mod repository;
pub mod service;
pub mod validation;

pub use self::auctions::*;
pub use self::bids::*;
pub use self::core::*;
pub use self::lifecycle::*;
pub use self::repository::*;
pub use self::service::*;
pub use self::validation::*;
