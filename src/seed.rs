use chrono::{DateTime, Duration, Utc};
use log::warn;

use crate::domain::{Auction, Bid, BiddingService, User};
use crate::money::{Amount, AmountValue};

// Demo catalog the marketplace boots with when no snapshot is configured.
// Anchored around `now` so the countdowns are always live.
pub fn demo_catalog(now: DateTime<Utc>) -> Vec<Auction> {
    vec![
        Auction::new(
            "1".into(),
            "Vintage Camera Collection".into(),
            "A collection of 5 vintage cameras from the 1950s in excellent condition.".into(),
            Amount::new(500),
            "https://images.pexels.com/photos/821738/pexels-photo-821738.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".into(),
            now + Duration::days(3),
            demo_user("101", "VintageCollector"),
            vec!["Photography".into(), "Vintage".into(), "Collectibles".into()],
        )
        .with_bid(demo_bid("b1", "1", "201", "PhotoEnthusiast", 650, now - Duration::hours(2)))
        .with_bid(demo_bid("b2", "1", "202", "RetroLover", 750, now - Duration::minutes(30))),
        Auction::new(
            "2".into(),
            "Modern Art Painting".into(),
            "Original abstract painting by emerging artist J. Smith, acrylic on canvas, 30x40 inches.".into(),
            Amount::new(1200),
            "https://images.pexels.com/photos/1193743/pexels-photo-1193743.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".into(),
            now + Duration::days(5),
            demo_user("102", "ArtGallery123"),
            vec!["Art".into(), "Modern".into(), "Painting".into()],
        )
        .with_bid(demo_bid("b3", "2", "203", "ArtCollector", 1350, now - Duration::hours(5)))
        .with_bid(demo_bid("b4", "2", "204", "HomeDesigner", 1500, now - Duration::hours(1))),
        Auction::new(
            "3".into(),
            "Antique Wooden Desk".into(),
            "Beautiful mahogany desk from the late 19th century. Well-preserved with original hardware.".into(),
            Amount::new(800),
            "https://images.pexels.com/photos/5417664/pexels-photo-5417664.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".into(),
            now + Duration::days(2),
            demo_user("103", "AntiqueTrader"),
            vec!["Furniture".into(), "Antique".into(), "Wood".into()],
        )
        .with_bid(demo_bid("b5", "3", "205", "VintageFinder", 850, now - Duration::hours(8)))
        .with_bid(demo_bid("b6", "3", "206", "ClassicDesign", 950, now - Duration::hours(3))),
        Auction::new(
            "4".into(),
            "Limited Edition Watch".into(),
            "Luxury watch, limited edition of 500 pieces worldwide, automatic movement, sapphire crystal.".into(),
            Amount::new(3000),
            "https://images.pexels.com/photos/190819/pexels-photo-190819.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".into(),
            now + Duration::days(7),
            demo_user("104", "LuxuryItems"),
            vec!["Watches".into(), "Luxury".into(), "Accessories".into()],
        )
        .with_bid(demo_bid("b7", "4", "207", "TimeCollector", 3200, now - Duration::hours(10)))
        .with_bid(demo_bid("b8", "4", "208", "EleganceSeeker", 3450, now - Duration::hours(4))),
    ]
}

// Adds the demo catalog to the service and returns how many auctions landed.
pub fn seed_repository(service: &BiddingService, now: DateTime<Utc>) -> usize {
    let mut seeded = 0;
    for auction in demo_catalog(now) {
        let id = auction.id.clone();
        match service.add_auction(auction) {
            Ok(()) => seeded += 1,
            Err(rejection) => warn!("skipping demo auction {}: {}", id, rejection),
        }
    }
    seeded
}

fn demo_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn demo_bid(
    id: &str,
    auction_id: &str,
    user_id: &str,
    user_name: &str,
    amount: AmountValue,
    date: DateTime<Utc>,
) -> Bid {
    Bid {
        id: id.to_string(),
        auction_id: auction_id.to_string(),
        bidder_id: user_id.to_string(),
        bidder_name: user_name.to_string(),
        amount: Amount::new(amount),
        date,
    }
}
