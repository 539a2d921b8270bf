// src/domain/lifecycle.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::auctions::Auction;

/// Auctions inside this window before their end are flagged as ending soon.
pub const ENDING_SOON_HOURS: i64 = 24;

/// Derived from the clock on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionStatus {
    Active,
    Ended,
}

/// An auction is ended from the exact end date onwards.
pub fn status(auction: &Auction, now: DateTime<Utc>) -> AuctionStatus {
    if now >= auction.end_date {
        AuctionStatus::Ended
    } else {
        AuctionStatus::Active
    }
}

/// Time left until the end date, clamped at zero for ended auctions.
pub fn remaining(auction: &Auction, now: DateTime<Utc>) -> Duration {
    (auction.end_date - now).max(Duration::zero())
}

/// True while an active auction is within [ENDING_SOON_HOURS] of its end.
pub fn ending_soon(auction: &Auction, now: DateTime<Utc>) -> bool {
    status(auction, now) == AuctionStatus::Active
        && remaining(auction, now) <= Duration::hours(ENDING_SOON_HOURS)
}

/// A countdown broken into whole days, hours and minutes. Each component is
/// truncated, so 3 days 5 hours 30 minutes 45 seconds reads as 3d 5h 30m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl TimeRemaining {
    pub fn of(auction: &Auction, now: DateTime<Utc>) -> TimeRemaining {
        remaining(auction, now).into()
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }
}

impl From<Duration> for TimeRemaining {
    fn from(left: Duration) -> Self {
        let minutes = left.num_minutes().max(0);
        TimeRemaining {
            days: minutes / (24 * 60),
            hours: (minutes / 60) % 24,
            minutes: minutes % 60,
        }
    }
}
