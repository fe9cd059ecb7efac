#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

//! A library for interleaving promotional entries ("ads") into paginated
//! marketplace listings.
//!
//! # Quick Start
//!
//! Loading the configured ads and interleaving them into a page of listings:
//! ```
//! use listing_interleave::{interleave, AdConfig, FeedItem, InterleaveOptions};
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let config: AdConfig = std::fs::read_to_string("./ads.conf")?.try_into()?;
//!     let listings: Vec<Listing> = fetch_listings(0, 46)?;
//!
//!     let feed = interleave(&listings, config.ads(), InterleaveOptions::default());
//!     for item in &feed {
//!         match item {
//!             FeedItem::Primary(listing) => println!("{}", listing.title),
//!             FeedItem::Supplementary(ad) => println!("[ad] {}", ad.title),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sizing requests
//! Ads take up display slots, so fewer listings than the displayed page
//! size need to be fetched. [`compute_request_size`] gives that number and
//! [`compute_insert_positions`] the slots the ads will land on.

mod errors;

pub use ad_config::{Ad, AdConfig, RawRecord};
pub use cadence::{Cadence, InterleaveOptions};
pub use errors::{AdConfigParseError, CadenceError};
pub use feed_item::FeedItem;
pub use interleaver::{Interleaver, compute_insert_positions, compute_request_size, interleave};
pub use pages::interleave_pages;

pub mod ad_config;
pub mod cadence;
pub mod feed_item;
pub mod interleaver;
pub mod pages;
