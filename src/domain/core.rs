// src/domain/core.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Amount;

pub type AuctionId = String;
pub type BidId = String;
pub type UserId = String;

/// Identity pair for sellers and bidders alike. Token handling lives outside
/// this crate; by the time a `User` exists it is already authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

// Expected, recoverable outcomes; callers branch on the variant and re-prompt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Auction not found: {0}")]
    AuctionNotFound(AuctionId),

    #[error("Auction already exists: {0}")]
    AuctionAlreadyExists(AuctionId),

    #[error("Auction has ended: {0}")]
    AuctionEnded(AuctionId),

    #[error("Bid must be higher than the current bid of {current_bid}")]
    BidTooLow { current_bid: Amount },
}
