use listing_interleave::{AdConfig, Cadence, FeedItem, compute_request_size, interleave_pages};
use std::{error::Error, path::PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone)]
struct Listing {
    listing_id: u32,
    title: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Enable with `RUST_LOG=listing_interleave=trace`
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env())
        .init();

    // Usage: feed_preview [ads.conf] [display page size]
    let mut args = std::env::args().skip(1);
    let ads_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?).join("./test-data/ads.conf"),
    };
    let display_size: usize = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(48);

    let config: AdConfig = std::fs::read_to_string(ads_path)?.try_into()?;

    // Fetch just enough listings per page that the ads fill it up
    let cadence = Cadence::default();
    let request_size = compute_request_size(display_size, cadence).max(1);
    let listings = (1..=100)
        .map(|listing_id| Listing {
            listing_id,
            title: format!("Listing #{listing_id}"),
        })
        .collect::<Vec<_>>();
    let pages = listings
        .chunks(request_size)
        .map(<[Listing]>::to_vec)
        .collect::<Vec<_>>();

    for (page_number, feed) in interleave_pages(&pages, config.ads(), cadence)
        .iter()
        .enumerate()
    {
        println!("--- page {} ({} slots) ---", page_number + 1, feed.len());
        for item in feed {
            match item {
                FeedItem::Primary(listing) => {
                    println!("{:>5}  {}", listing.listing_id, listing.title)
                }
                FeedItem::Supplementary(ad) => println!("   ad  {} -> {}", ad.title, ad.link_url),
            }
        }
    }

    Ok(())
}
