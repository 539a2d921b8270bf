use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;
use serde_json::{from_reader, to_string_pretty};
use crate::domain::Auction;

pub fn read_auctions<P: AsRef<Path>>(path: P) -> Result<Vec<Auction>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);

    let auctions: Vec<Auction> = from_reader(reader)
        .map_err(|e| format!("Failed to parse auctions: {}", e))?;

    Ok(auctions)
}

pub fn write_auctions<P: AsRef<Path>>(path: P, auctions: &[Auction]) -> Result<(), String> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("Failed to open file for writing: {}", e))?;

    let json = to_string_pretty(auctions).map_err(|e| format!("Failed to serialize auctions: {}", e))?;

    file.write_all(json.as_bytes())
        .map_err(|e| format!("Failed to write to file: {}", e))?;

    Ok(())
}
