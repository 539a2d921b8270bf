// src/domain/bids.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::core::{AuctionId, BidId, UserId};
use crate::money::Amount;

/// An accepted bid. Id and date are assigned at acceptance, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    #[serde(rename = "auctionId")]
    pub auction_id: AuctionId,
    #[serde(rename = "userId")]
    pub bidder_id: UserId,
    #[serde(rename = "userName")]
    pub bidder_name: String,
    pub amount: Amount,
    pub date: DateTime<Utc>,
}
