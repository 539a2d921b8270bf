use auction_house::domain::{AuctionView, Rejection};
use auction_house::web::types::{
    AddAuctionRequest, ApiError, AuctionDetail, AuctionSummary, BidRequest,
};
use serde_json::json;
#[path = "utils/mod.rs"]
mod utils;
use utils::*;

#[test]
fn test_auction_request_deserialization() {
    // Create a JSON representation of an auction request
    let json_data = json!({
        "id": "42",
        "title": "First auction",
        "startingPrice": 100,
        "endDate": "2016-02-01T08:28:00.000Z"
    });

    // Deserialize to AddAuctionRequest
    let request: AddAuctionRequest = serde_json::from_value(json_data).unwrap();

    // Verify fields
    assert_eq!(request.id, "42");
    assert_eq!(request.title, "First auction");
    assert_eq!(request.starting_price, 100);
    assert_eq!(request.end_date, sample_end_date());

    // Omitted fields fall back to empty defaults
    assert_eq!(request.description, "");
    assert_eq!(request.image_url, "");
    assert!(request.categories.is_empty());

    // Create an auction from the request
    let auction = request.to_auction(sample_seller());

    // A fresh auction opens at its starting price with no history
    assert_eq!(auction.id, "42");
    assert_eq!(auction.starting_price, usd(100));
    assert_eq!(auction.current_bid, usd(100));
    assert!(auction.bids.is_empty());
    assert_eq!(auction.seller, sample_seller());
}

#[test]
fn test_auction_request_with_all_fields() {
    let json_data = json!({
        "id": "43",
        "title": "Second auction",
        "description": "With everything filled in",
        "startingPrice": 250,
        "imageUrl": "https://images.example.com/item.jpeg",
        "endDate": "2016-02-01T08:28:00Z",
        "categories": ["Art"]
    });

    let request: AddAuctionRequest = serde_json::from_value(json_data).unwrap();
    let auction = request.to_auction(sample_seller());

    assert_eq!(auction.description, "With everything filled in");
    assert_eq!(auction.image_url, "https://images.example.com/item.jpeg");
    assert_eq!(auction.categories, vec!["Art".to_string()]);
}

#[test]
fn test_bid_request_deserialization() {
    // Create a JSON representation of a bid request
    let json_data = json!({
        "amount": 800
    });

    // Deserialize to BidRequest
    let request: BidRequest = serde_json::from_value(json_data).unwrap();

    // Verify fields
    assert_eq!(request.amount, 800);
}

#[test]
fn test_api_error_serialization() {
    // A too-low bid reports the standing amount alongside the code
    let error = ApiError::from(&Rejection::BidTooLow { current_bid: usd(750) });
    let json_value = serde_json::to_value(&error).unwrap();

    assert_eq!(json_value["code"], json!("BID_TOO_LOW"));
    assert_eq!(json_value["currentBid"], json!(750));
    assert!(json_value["message"].as_str().unwrap().contains("750"));

    // Errors without a standing amount leave the field off the wire
    let not_found = ApiError::from(&Rejection::AuctionNotFound("9".to_string()));
    let json_value = serde_json::to_value(&not_found).unwrap();

    assert_eq!(json_value["code"], json!("AUCTION_NOT_FOUND"));
    assert!(json_value["message"].as_str().unwrap().contains("9"));
    assert!(json_value.get("currentBid").is_none());

    let ended = ApiError::from(&Rejection::AuctionEnded("1".to_string()));
    let json_value = serde_json::to_value(&ended).unwrap();
    assert_eq!(json_value["code"], json!("AUCTION_ENDED"));

    let unauthorized = ApiError::new("UNAUTHORIZED", "Missing or invalid x-jwt-payload header");
    let json_value = serde_json::to_value(&unauthorized).unwrap();
    assert_eq!(json_value["code"], json!("UNAUTHORIZED"));
}

#[test]
fn test_auction_detail_serialization() {
    let view = AuctionView::of(sample_auction_with_bids(), sample_now());
    let json_value = serde_json::to_value(AuctionDetail::from(view)).unwrap();

    // Stored fields
    assert_eq!(json_value["id"], json!("1"));
    assert_eq!(json_value["startingPrice"], json!(500));
    assert_eq!(json_value["currentBid"], json!(750));
    assert_eq!(json_value["endDate"], json!("2016-02-01T08:28:00Z"));
    assert_eq!(json_value["seller"]["name"], json!("Seller"));
    assert_eq!(json_value["bids"].as_array().unwrap().len(), 2);

    // Derived fields
    assert_eq!(json_value["minimumBid"], json!(751));
    assert_eq!(json_value["status"], json!("Active"));
    assert_eq!(json_value["endingSoon"], json!(false));
    assert_eq!(json_value["timeRemaining"]["days"], json!(17));
    assert_eq!(json_value["timeRemaining"]["hours"], json!(0));
    assert_eq!(json_value["timeRemaining"]["minutes"], json!(0));
}

#[test]
fn test_auction_summary_serialization() {
    let view = AuctionView::of(sample_auction_with_bids(), sample_now());
    let json_value = serde_json::to_value(AuctionSummary::from(&view)).unwrap();

    assert_eq!(json_value["id"], json!("1"));
    assert_eq!(json_value["currentBid"], json!(750));
    assert_eq!(json_value["status"], json!("Active"));
    assert_eq!(json_value["endingSoon"], json!(false));
    assert_eq!(json_value["timeRemaining"]["days"], json!(17));

    // The list payload stays lean
    assert!(json_value.get("bids").is_none());
    assert!(json_value.get("seller").is_none());
    assert!(json_value.get("minimumBid").is_none());

    // The exact summary shape, description included for the list card
    let mut keys: Vec<&str> = json_value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "categories",
            "currentBid",
            "description",
            "endDate",
            "endingSoon",
            "id",
            "imageUrl",
            "status",
            "timeRemaining",
            "title",
        ]
    );
}
