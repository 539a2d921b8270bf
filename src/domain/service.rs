// src/domain/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

use super::auctions::Auction;
use super::bids::Bid;
use super::core::{Rejection, User};
use super::lifecycle::{ending_soon, status, AuctionStatus, TimeRemaining};
use super::repository::Repository;
use super::validation::validate_bid;
use crate::money::Amount;

/// An auction together with everything derived from the clock at read time.
/// `minimum_bid` is the `current_bid + 1` display suggestion, not a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionView {
    pub auction: Auction,
    pub status: AuctionStatus,
    pub time_remaining: TimeRemaining,
    pub ending_soon: bool,
    pub minimum_bid: Amount,
}

impl AuctionView {
    pub fn of(auction: Auction, now: DateTime<Utc>) -> AuctionView {
        let status = status(&auction, now);
        let time_remaining = TimeRemaining::of(&auction, now);
        let ending_soon = ending_soon(&auction, now);
        let minimum_bid = auction.current_bid + 1;
        AuctionView {
            auction,
            status,
            time_remaining,
            ending_soon,
            minimum_bid,
        }
    }
}

/// Entry point for authoring, reading and bidding. The sole mutator of
/// auction state; clones share one repository.
#[derive(Debug, Clone, Default)]
pub struct BiddingService {
    auctions: Arc<Repository>,
}

impl BiddingService {
    pub fn new() -> Self {
        BiddingService::default()
    }

    pub fn add_auction(&self, auction: Auction) -> Result<(), Rejection> {
        let id = auction.id.clone();
        let title = auction.title.clone();
        self.auctions.insert(auction)?;
        info!("added auction {} ({})", id, title);
        Ok(())
    }

    /// The read, the validation and the write happen under the auction's own
    /// lock, so two racing bids on the same auction are applied one after the
    /// other and the loser is judged against the winner's amount.
    pub fn place_bid(
        &self,
        auction_id: &str,
        bidder: User,
        amount: Amount,
        now: DateTime<Utc>,
    ) -> Result<Auction, Rejection> {
        let lock = self
            .auctions
            .auction_lock(auction_id)
            .ok_or_else(|| Rejection::AuctionNotFound(auction_id.to_string()))?;
        let _guard = lock.lock().unwrap();

        let auction = self
            .auctions
            .get(auction_id)
            .ok_or_else(|| Rejection::AuctionNotFound(auction_id.to_string()))?;
        validate_bid(&auction, now, amount)?;

        let bid = Bid {
            id: Uuid::new_v4().to_string(),
            auction_id: auction.id.clone(),
            bidder_id: bidder.id,
            bidder_name: bidder.name,
            amount,
            date: now,
        };
        let updated = auction.with_bid(bid);
        self.auctions.update(updated.clone())?;
        debug!("bid of {} accepted on auction {}", amount, auction_id);
        Ok(updated)
    }

    pub fn auction_view(&self, auction_id: &str, now: DateTime<Utc>) -> Result<AuctionView, Rejection> {
        self.auctions
            .get(auction_id)
            .map(|auction| AuctionView::of(auction, now))
            .ok_or_else(|| Rejection::AuctionNotFound(auction_id.to_string()))
    }

    pub fn list_views(&self, now: DateTime<Utc>) -> Vec<AuctionView> {
        self.auctions
            .list()
            .into_iter()
            .map(|auction| AuctionView::of(auction, now))
            .collect()
    }

    pub fn auction_count(&self) -> usize {
        self.auctions.len()
    }
}
