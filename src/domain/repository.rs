// src/domain/repository.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use super::auctions::Auction;
use super::core::{AuctionId, Rejection};

/// Guard handed out per auction so that bid placement on one auction is
/// serialized while other auctions proceed in parallel.
pub type AuctionLock = Arc<Mutex<()>>;

/// In-memory auction store. Auctions keep their insertion order, which is the
/// order listings are returned in.
#[derive(Debug, Default)]
pub struct Repository {
    auctions: RwLock<Vec<Auction>>,
    locks: Mutex<HashMap<AuctionId, AuctionLock>>,
}

impl Repository {
    pub fn new() -> Self {
        Repository::default()
    }

    pub fn insert(&self, auction: Auction) -> Result<(), Rejection> {
        let mut auctions = self.auctions.write().unwrap();
        if auctions.iter().any(|a| a.id == auction.id) {
            return Err(Rejection::AuctionAlreadyExists(auction.id));
        }
        auctions.push(auction);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Auction> {
        let auctions = self.auctions.read().unwrap();
        auctions.iter().find(|a| a.id == id).cloned()
    }

    pub fn list(&self) -> Vec<Auction> {
        self.auctions.read().unwrap().clone()
    }

    /// Replace-only: updating an id that was never inserted is a rejection,
    /// not an upsert.
    pub fn update(&self, auction: Auction) -> Result<(), Rejection> {
        let mut auctions = self.auctions.write().unwrap();
        match auctions.iter_mut().find(|a| a.id == auction.id) {
            Some(stored) => {
                *stored = auction;
                Ok(())
            }
            None => Err(Rejection::AuctionNotFound(auction.id)),
        }
    }

    pub fn len(&self) -> usize {
        self.auctions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The lock for one stored auction, created on first use and shared by
    /// every caller racing on that auction afterwards. Ids that were never
    /// inserted get no entry, so the lock table holds known auctions only.
    pub fn auction_lock(&self, id: &str) -> Option<AuctionLock> {
        let known = self.auctions.read().unwrap().iter().any(|a| a.id == id);
        if !known {
            return None;
        }
        let mut locks = self.locks.lock().unwrap();
        Some(locks.entry(id.to_string()).or_default().clone())
    }
}
