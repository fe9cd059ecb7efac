//! Contains [`Interleaver`] and the [`interleave`] function for placing ads
//! between listings at a fixed [`Cadence`].
//!
//! ```
//! let options = InterleaveOptions::default();
//! let feed = interleave(&listings, config.ads(), options);
//! assert_eq!(feed.iter().filter(|item| item.is_supplementary()).count(), 1);
//! ```
//!
//! # Placement rules
//! A running, 1-indexed display position starts at `start_index` and
//! advances by one for every listing *and* every ad emitted.
//!
//! - Pages with at least `cadence` listings get an ad after every listing
//!   that lands on a multiple of `cadence`.
//! - Shorter pages get exactly one ad, right after the listing that lands
//!   on position [`SHORT_LIST_AD_POSITION`].
//! - If no ad was placed by the end of a non-empty page, one is appended.
//!
//! Ads are taken from the configured list in order, wrapping around when
//! more ads are needed than are configured.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cadence::{Cadence, InterleaveOptions};
use crate::feed_item::FeedItem;

/// Display position after which the single ad of a short page is placed.
/// Independent of the cadence.
pub const SHORT_LIST_AD_POSITION: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// No listings or no ads: the listings pass through untouched
    Disabled,
    ShortList,
    EveryNth(usize),
}

/// An iterator that yields listings in order, with ads inserted between
/// them according to the [placement rules](crate::interleaver).
///
/// The number of listings has to be known up front to choose between the
/// short and the regular placement, hence the [`ExactSizeIterator`] bound.
#[derive(Debug, Clone)]
pub struct Interleaver<'a, I, S> {
    primary: I,
    supplementary: &'a [S],
    placement: Placement,
    display_position: usize,
    ad_index: usize,
    ad_pending: bool,
    finished: bool,
}

impl<'a, I, S> Interleaver<'a, I, S>
where
    I: ExactSizeIterator,
{
    pub fn new<II>(primary: II, supplementary: &'a [S], options: InterleaveOptions) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        let primary = primary.into_iter();
        let primary_count = primary.len();
        let cadence = options.cadence.get();

        let placement = if primary_count == 0 || supplementary.is_empty() {
            Placement::Disabled
        } else if primary_count < cadence {
            Placement::ShortList
        } else {
            Placement::EveryNth(cadence)
        };

        Self {
            primary,
            supplementary,
            placement,
            display_position: options.start_index,
            ad_index: 0,
            ad_pending: false,
            finished: false,
        }
    }
}

impl<'a, I, S> Interleaver<'a, I, S> {
    /// Number of ads emitted so far.
    pub fn ads_inserted(&self) -> usize {
        self.ad_index
    }

    fn ad_due(&self) -> bool {
        match self.placement {
            Placement::Disabled => false,
            Placement::ShortList => {
                self.ad_index == 0 && self.display_position == SHORT_LIST_AD_POSITION
            }
            Placement::EveryNth(cadence) => self.display_position % cadence == 0,
        }
    }

    fn take_ad(&mut self) -> &'a S {
        let supplementary = self.supplementary;
        let ad = &supplementary[self.ad_index % supplementary.len()];
        self.ad_index += 1;
        self.display_position += 1;
        ad
    }
}

impl<I, S> Iterator for Interleaver<'_, I, S>
where
    I: Iterator,
    S: Clone,
{
    type Item = FeedItem<I::Item, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.ad_pending {
            self.ad_pending = false;
            let ad = self.take_ad();
            trace!(
                display_position = self.display_position,
                ad_index = self.ad_index - 1,
                "inserted ad"
            );
            return Some(FeedItem::Supplementary(ad.clone()));
        }

        match self.primary.next() {
            Some(item) => {
                self.display_position += 1;
                self.ad_pending = self.ad_due();
                Some(FeedItem::Primary(item))
            }
            None => {
                self.finished = true;
                if self.placement != Placement::Disabled && self.ad_index == 0 {
                    let ad = self.take_ad();
                    debug!(
                        display_position = self.display_position,
                        "no ad landed inside the page, appending one at the end"
                    );
                    Some(FeedItem::Supplementary(ad.clone()))
                } else {
                    None
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let (lower, _) = self.primary.size_hint();
        (lower + usize::from(self.ad_pending), None)
    }
}

impl<I, S> FusedIterator for Interleaver<'_, I, S>
where
    I: Iterator,
    S: Clone,
{
}

/// Merge `primary` listings with `supplementary` ads into a single feed.
///
/// Neither input is modified; listings and ads are cloned into the output.
/// For general usage, see the [module-level documentation.](crate::interleaver)
pub fn interleave<P, S>(
    primary: &[P],
    supplementary: &[S],
    options: InterleaveOptions,
) -> Vec<FeedItem<P, S>>
where
    P: Clone,
    S: Clone,
{
    Interleaver::new(primary.iter().cloned(), supplementary, options).collect()
}

/// The 1-indexed display positions `cadence, 2 * cadence, ...` that fit in a
/// display of `total_count` slots.
pub fn compute_insert_positions(total_count: usize, cadence: Cadence) -> Vec<usize> {
    let cadence = cadence.get();
    (1..=total_count / cadence).map(|n| n * cadence).collect()
}

/// How many listings to request so that, once ads are inserted, the feed
/// fills `display_size` slots.
pub fn compute_request_size(display_size: usize, cadence: Cadence) -> usize {
    display_size - display_size / cadence.get()
}
