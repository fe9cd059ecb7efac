//! Property-based tests for the interleaver.
//!
//! These check the guarantees that hold for every input rather than for
//! hand-picked pages: listings are never reordered, dropped or duplicated,
//! and ads appear whenever both inputs are non-empty.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use listing_interleave::{
    Cadence, FeedItem, InterleaveOptions, compute_insert_positions, compute_request_size,
    interleave,
};
use proptest::prelude::*;

fn options_strategy() -> impl Strategy<Value = InterleaveOptions> {
    (0usize..200, 1usize..40)
        .prop_map(|(start_index, cadence)| {
            InterleaveOptions::new(start_index, Cadence::new(cadence).unwrap())
        })
}

fn listings_strategy() -> impl Strategy<Value = Vec<u32>> {
    (0usize..150).prop_map(|count| (0..count as u32).collect::<Vec<_>>())
}

/// A non-empty page with fewer listings than the cadence.
fn short_page_strategy() -> impl Strategy<Value = (Vec<u32>, InterleaveOptions)> {
    (2usize..40, 0usize..200).prop_flat_map(|(cadence, start_index)| {
        (1..cadence).prop_map(move |count| {
            let options = InterleaveOptions::new(start_index, Cadence::new(cadence).unwrap());
            ((0..count as u32).collect::<Vec<_>>(), options)
        })
    })
}

fn ads_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn listings_keep_their_order(
        listings in listings_strategy(),
        ads in ads_strategy(),
        options in options_strategy(),
    ) {
        let feed = interleave(&listings, &ads, options);
        let primary = feed
            .into_iter()
            .filter_map(FeedItem::into_primary)
            .collect::<Vec<_>>();
        prop_assert_eq!(primary, listings);
    }

    #[test]
    fn non_empty_inputs_always_get_an_ad(
        listings in listings_strategy().prop_filter("non-empty", |l| !l.is_empty()),
        ads in ads_strategy().prop_filter("non-empty", |a| !a.is_empty()),
        options in options_strategy(),
    ) {
        let feed = interleave(&listings, &ads, options);
        prop_assert!(feed.iter().any(FeedItem::is_supplementary));
    }

    #[test]
    fn ads_are_drawn_round_robin(
        listings in listings_strategy(),
        ads in ads_strategy().prop_filter("non-empty", |a| !a.is_empty()),
        options in options_strategy(),
    ) {
        let feed = interleave(&listings, &ads, options);
        let drawn = feed
            .into_iter()
            .filter_map(FeedItem::into_supplementary)
            .collect::<Vec<_>>();
        let expected = ads.iter().cycle().take(drawn.len()).cloned().collect::<Vec<_>>();
        prop_assert_eq!(drawn, expected);
    }

    #[test]
    fn short_pages_get_exactly_one_ad(
        (listings, options) in short_page_strategy(),
        ads in ads_strategy().prop_filter("non-empty", |a| !a.is_empty()),
    ) {
        let feed = interleave(&listings, &ads, options);
        prop_assert_eq!(feed.iter().filter(|item| item.is_supplementary()).count(), 1);
    }

    #[test]
    fn no_ads_is_the_identity(
        listings in listings_strategy(),
        options in options_strategy(),
    ) {
        let feed = interleave::<u32, String>(&listings, &[], options);
        let expected = listings
            .into_iter()
            .map(FeedItem::Primary)
            .collect::<Vec<FeedItem<u32, String>>>();
        prop_assert_eq!(feed, expected);
    }

    #[test]
    fn no_listings_is_an_empty_feed(
        ads in ads_strategy(),
        options in options_strategy(),
    ) {
        prop_assert!(interleave::<u32, String>(&[], &ads, options).is_empty());
    }

    #[test]
    fn request_size_plus_ad_slots_fills_the_display(
        display_size in 0usize..10_000,
        cadence in 1usize..100,
    ) {
        let cadence = Cadence::new(cadence).unwrap();
        let ad_slots = compute_insert_positions(display_size, cadence).len();
        prop_assert_eq!(compute_request_size(display_size, cadence) + ad_slots, display_size);
    }
}
