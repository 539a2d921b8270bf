use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result};
use actix_web::middleware::Logger;
use base64::{Engine as _, engine::general_purpose};
use env_logger::Env;
use log::{info, warn};
use serde_json::Value;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::domain::{AuctionId, AuctionView, BiddingService, Rejection, User};
use crate::money::Amount;
use crate::persistence::json_file;
use crate::seed;
use super::types::{AddAuctionRequest, ApiError, AppState, AuctionDetail, AuctionSummary, BidRequest};

// Initialize application state
pub fn init_app_state(clock: Arc<dyn Clock>) -> AppState {
    AppState {
        service: BiddingService::new(),
        clock,
    }
}

// Read x-jwt-payload header and extract user information
fn get_auth_user(req: &HttpRequest) -> Option<User> {
    let auth_header = req.headers().get("x-jwt-payload")?;
    let auth_str = auth_header.to_str().ok()?;

    // Decode base64
    let decoded = general_purpose::STANDARD.decode(auth_str).ok()?;
    let json_str = String::from_utf8(decoded).ok()?;

    // Parse JSON
    let json: Value = serde_json::from_str(&json_str).ok()?;

    // Extract user fields
    let sub = json.get("sub")?.as_str()?;
    let name = json.get("name")?.as_str()?;

    Some(User {
        id: sub.to_string(),
        name: name.to_string(),
    })
}

// Middleware to require authentication
async fn with_auth<F>(req: HttpRequest, f: F) -> Result<HttpResponse>
where
    F: FnOnce(User) -> Result<HttpResponse>,
{
    match get_auth_user(&req) {
        Some(user) => {
            let result = f(user)?;
            Ok(result)
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiError::new(
            "UNAUTHORIZED",
            "Missing or invalid x-jwt-payload header",
        ))),
    }
}

// Map a rejection onto a response status
fn rejection_response(rejection: &Rejection) -> HttpResponse {
    let error = ApiError::from(rejection);
    match rejection {
        Rejection::AuctionNotFound(_) => HttpResponse::NotFound().json(error),
        _ => HttpResponse::BadRequest().json(error),
    }
}

// Get all auctions
async fn get_auctions(data: web::Data<AppState>) -> Result<HttpResponse> {
    let now = data.clock.now();
    let auction_list: Vec<AuctionSummary> = data
        .service
        .list_views(now)
        .iter()
        .map(|view| AuctionSummary::from(view))
        .collect();

    Ok(HttpResponse::Ok().json(auction_list))
}

// Get auction by ID
async fn get_auction(
    path: web::Path<AuctionId>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    let auction_id = path.into_inner();
    let now = data.clock.now();

    match data.service.auction_view(&auction_id, now) {
        Ok(view) => Ok(HttpResponse::Ok().json(AuctionDetail::from(view))),
        Err(rejection) => Ok(rejection_response(&rejection)),
    }
}

// Create a new auction
async fn create_auction(
    req: HttpRequest,
    auction_req: web::Json<AddAuctionRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    with_auth(req, |user| {
        if auction_req.starting_price < 0 {
            return Ok(HttpResponse::BadRequest().json(ApiError::new(
                "INVALID_STARTING_PRICE",
                "Starting price must not be negative",
            )));
        }

        let auction = auction_req.to_auction(user);
        let auction_id = auction.id.clone();
        let now = data.clock.now();

        let outcome = data
            .service
            .add_auction(auction)
            .and_then(|()| data.service.auction_view(&auction_id, now));

        match outcome {
            Ok(view) => Ok(HttpResponse::Ok().json(AuctionDetail::from(view))),
            Err(rejection) => Ok(rejection_response(&rejection)),
        }
    })
    .await
}

// Place a bid on an auction
async fn place_bid(
    req: HttpRequest,
    path: web::Path<AuctionId>,
    bid_req: web::Json<BidRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    let auction_id = path.into_inner();

    with_auth(req, |user| {
        let now = data.clock.now();
        let amount = Amount::new(bid_req.amount);

        match data.service.place_bid(&auction_id, user, amount, now) {
            Ok(updated) => {
                Ok(HttpResponse::Ok().json(AuctionDetail::from(AuctionView::of(updated, now))))
            }
            Err(rejection) => Ok(rejection_response(&rejection)),
        }
    })
    .await
}

// Configure routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/auctions", web::get().to(get_auctions))
            .route("/auctions/{id}", web::get().to(get_auction))
            .route("/auctions", web::post().to(create_auction))
            .route("/auctions/{id}/bids", web::post().to(place_bid)),
    );
}

// Fill the repository from the snapshot named by AUCTIONS_SNAPSHOT, or fall
// back to the demo catalog.
pub fn load_catalog(state: &AppState) {
    let now = state.clock.now();
    match std::env::var("AUCTIONS_SNAPSHOT") {
        Ok(path) => match json_file::read_auctions(&path) {
            Ok(auctions) => {
                let mut loaded = 0;
                for auction in auctions {
                    let id = auction.id.clone();
                    match state.service.add_auction(auction) {
                        Ok(()) => loaded += 1,
                        Err(rejection) => warn!("skipping auction {} from {}: {}", id, path, rejection),
                    }
                }
                info!("loaded {} auctions from {}", loaded, path);
            }
            Err(err) => {
                warn!("could not read snapshot {}: {}", path, err);
                let seeded = seed::seed_repository(&state.service, now);
                info!("seeded {} demo auctions instead", seeded);
            }
        },
        Err(_) => {
            let seeded = seed::seed_repository(&state.service, now);
            info!("seeded {} demo auctions", seeded);
        }
    }
}

// Main application
pub async fn run_app(port: u16) -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app_state = init_app_state(Arc::new(SystemClock));
    load_catalog(&app_state);

    info!("Starting server on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
