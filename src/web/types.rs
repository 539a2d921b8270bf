use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::clock::Clock;
use crate::domain::{
    Auction, AuctionId, AuctionStatus, AuctionView, Bid, BiddingService, Rejection, TimeRemaining,
    User,
};
use crate::money::{Amount, AmountValue};

#[derive(Clone)]
pub struct AppState {
    pub service: BiddingService,
    pub clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(rename = "currentBid", skip_serializing_if = "Option::is_none", default)]
    pub current_bid: Option<Amount>,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        ApiError {
            code: code.to_string(),
            message: message.into(),
            current_bid: None,
        }
    }
}

impl From<&Rejection> for ApiError {
    fn from(rejection: &Rejection) -> Self {
        let code = match rejection {
            Rejection::AuctionNotFound(_) => "AUCTION_NOT_FOUND",
            Rejection::AuctionAlreadyExists(_) => "AUCTION_ALREADY_EXISTS",
            Rejection::AuctionEnded(_) => "AUCTION_ENDED",
            Rejection::BidTooLow { .. } => "BID_TOO_LOW",
        };
        let current_bid = match rejection {
            Rejection::BidTooLow { current_bid } => Some(*current_bid),
            _ => None,
        };

        ApiError {
            code: code.to_string(),
            message: rejection.to_string(),
            current_bid,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BidRequest {
    pub amount: AmountValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddAuctionRequest {
    pub id: AuctionId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startingPrice")]
    pub starting_price: AmountValue,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl AddAuctionRequest {
    pub fn to_auction(&self, seller: User) -> Auction {
        Auction::new(
            self.id.clone(),
            self.title.clone(),
            self.description.clone(),
            Amount::new(self.starting_price),
            self.image_url.clone(),
            self.end_date,
            seller,
            self.categories.clone(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct AuctionSummary {
    pub id: AuctionId,
    pub title: String,
    pub description: String,
    #[serde(rename = "currentBid")]
    pub current_bid: Amount,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
    pub status: AuctionStatus,
    #[serde(rename = "timeRemaining")]
    pub time_remaining: TimeRemaining,
    #[serde(rename = "endingSoon")]
    pub ending_soon: bool,
    pub categories: Vec<String>,
}

impl From<&AuctionView> for AuctionSummary {
    fn from(view: &AuctionView) -> Self {
        AuctionSummary {
            id: view.auction.id.clone(),
            title: view.auction.title.clone(),
            description: view.auction.description.clone(),
            current_bid: view.auction.current_bid,
            image_url: view.auction.image_url.clone(),
            end_date: view.auction.end_date,
            status: view.status,
            time_remaining: view.time_remaining,
            ending_soon: view.ending_soon,
            categories: view.auction.categories.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuctionDetail {
    // Base auction fields
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

    // Derived display fields
    pub status: AuctionStatus,
    #[serde(rename = "timeRemaining")]
    pub time_remaining: TimeRemaining,
    #[serde(rename = "endingSoon")]
    pub ending_soon: bool,
    #[serde(rename = "minimumBid")]
    pub minimum_bid: Amount,
}

impl From<AuctionView> for AuctionDetail {
    fn from(view: AuctionView) -> Self {
        let AuctionView {
            auction,
            status,
            time_remaining,
            ending_soon,
            minimum_bid,
        } = view;

        AuctionDetail {
            id: auction.id,
            title: auction.title,
            description: auction.description,
            starting_price: auction.starting_price,
            current_bid: auction.current_bid,
            image_url: auction.image_url,
            end_date: auction.end_date,
            seller: auction.seller,
            bids: auction.bids,
            categories: auction.categories,
            status,
            time_remaining,
            ending_soon,
            minimum_bid,
        }
    }
}
