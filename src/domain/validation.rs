// src/domain/validation.rs
use chrono::{DateTime, Utc};

use super::auctions::Auction;
use super::core::Rejection;
use super::lifecycle::{status, AuctionStatus};
use crate::money::Amount;

/// Checks run in a fixed order: an ended auction rejects every bid before the
/// amount is even looked at, and an open auction only takes bids strictly
/// greater than the current bid. Equal amounts lose.
pub fn validate_bid(auction: &Auction, now: DateTime<Utc>, amount: Amount) -> Result<(), Rejection> {
    if status(auction, now) == AuctionStatus::Ended {
        return Err(Rejection::AuctionEnded(auction.id.clone()));
    }
    if amount <= auction.current_bid {
        return Err(Rejection::BidTooLow {
            current_bid: auction.current_bid,
        });
    }
    Ok(())
}
