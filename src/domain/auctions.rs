// src/domain/auctions.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bids::Bid;
use super::core::{AuctionId, User};
use crate::money::Amount;

/// A listing with a rising price. `current_bid` always equals the highest
/// accepted amount, or the starting price while no bids exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    pub title: String,
    pub description: String,
    #[serde(rename = "startingPrice")]
    pub starting_price: Amount,
    #[serde(rename = "currentBid")]
    pub current_bid: Amount,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
    pub seller: User,
    pub bids: Vec<Bid>,
    pub categories: Vec<String>,
}

impl Auction {
    pub fn new(
        id: AuctionId,
        title: String,
        description: String,
        starting_price: Amount,
        image_url: String,
        end_date: DateTime<Utc>,
        seller: User,
        categories: Vec<String>,
    ) -> Self {
        Auction {
            id,
            title,
            description,
            starting_price,
            current_bid: starting_price,
            image_url,
            end_date,
            seller,
            bids: Vec::new(),
            categories,
        }
    }

    /// Applies an accepted bid: append it last, raise the current bid.
    pub fn with_bid(mut self, bid: Bid) -> Auction {
        self.current_bid = bid.amount;
        self.bids.push(bid);
        self
    }

    pub fn highest_bid(&self) -> Option<&Bid> {
        self.bids.last()
    }
}
