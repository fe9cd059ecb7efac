//! Interleaving of several consecutive pages of one result set.
//!
//! Each page is interleaved with a `start_index` equal to the number of
//! listings on the pages before it, which is the offset the listing query
//! was paginated with. Pages are processed in parallel.
//!
//! ```
//! let pages = vec![first_page, second_page];
//! let feeds = interleave_pages(&pages, config.ads(), Cadence::default());
//! assert_eq!(feeds.len(), 2);
//! ```

use rayon::prelude::*;

use crate::cadence::{Cadence, InterleaveOptions};
use crate::feed_item::FeedItem;
use crate::interleaver::interleave;

/// Interleave every page in `pages`, returning one feed per page in the
/// same order.
pub fn interleave_pages<P, S>(
    pages: &[Vec<P>],
    supplementary: &[S],
    cadence: Cadence,
) -> Vec<Vec<FeedItem<P, S>>>
where
    P: Clone + Send + Sync,
    S: Clone + Send + Sync,
{
    page_offsets(pages)
        .into_par_iter()
        .zip(pages.par_iter())
        .map(|(start_index, page)| {
            interleave(page, supplementary, InterleaveOptions::new(start_index, cadence))
        })
        .collect()
}

/// Number of listings preceding each page.
fn page_offsets<P>(pages: &[Vec<P>]) -> Vec<usize> {
    pages
        .iter()
        .scan(0, |offset, page| {
            let start_index = *offset;
            *offset += page.len();
            Some(start_index)
        })
        .collect()
}
