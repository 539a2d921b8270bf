use auction_house::domain::{Auction, Bid, User};
use auction_house::money::Amount;
use chrono::{DateTime, Duration, TimeZone, Utc};

// Sample data for tests
pub fn sample_auction_id() -> String {
    "1".to_string()
}

pub fn sample_title() -> String {
    "Vintage Camera Collection".to_string()
}

pub fn sample_end_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 2, 1, 8, 28, 0).unwrap()
}

pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 15, 8, 28, 0).unwrap()
}

pub fn sample_seller() -> User {
    User {
        id: "Sample_Seller".to_string(),
        name: "Seller".to_string(),
    }
}

pub fn buyer_1() -> User {
    User {
        id: "Buyer_1".to_string(),
        name: "Buyer 1".to_string(),
    }
}

pub fn buyer_2() -> User {
    User {
        id: "Buyer_2".to_string(),
        name: "Buyer 2".to_string(),
    }
}

pub fn buyer_3() -> User {
    User {
        id: "Buyer_3".to_string(),
        name: "Buyer 3".to_string(),
    }
}

pub fn usd(value: i64) -> Amount {
    Amount::new(value)
}

pub fn sample_auction() -> Auction {
    Auction::new(
        sample_auction_id(),
        sample_title(),
        "A collection of 5 vintage cameras from the 1950s in excellent condition.".to_string(),
        usd(500),
        "https://images.example.com/camera.jpeg".to_string(),
        sample_end_date(),
        sample_seller(),
        vec!["Photography".to_string(), "Collectibles".to_string()],
    )
}

pub fn bid_1() -> Bid {
    Bid {
        id: "b1".to_string(),
        auction_id: sample_auction_id(),
        bidder_id: buyer_1().id,
        bidder_name: buyer_1().name,
        amount: usd(650),
        date: sample_now() - Duration::hours(2),
    }
}

pub fn bid_2() -> Bid {
    Bid {
        id: "b2".to_string(),
        auction_id: sample_auction_id(),
        bidder_id: buyer_2().id,
        bidder_name: buyer_2().name,
        amount: usd(750),
        date: sample_now() - Duration::minutes(30),
    }
}

// An auction that already saw two bids, standing at 750
pub fn sample_auction_with_bids() -> Auction {
    sample_auction().with_bid(bid_1()).with_bid(bid_2())
}
