//! Contains [`FeedItem`], a single entry of an interleaved feed.
//!
//! Rendering code dispatches on the variant:
//! ```
//! for item in interleave(&listings, config.ads(), InterleaveOptions::default()) {
//!     match item {
//!         FeedItem::Primary(listing) => render_listing(listing),
//!         FeedItem::Supplementary(ad) => render_ad(ad),
//!     }
//! }
//! ```

/// Either a listing returned by the backing query, or a promotional entry
/// inserted between listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedItem<P, S> {
    Primary(P),
    Supplementary(S),
}

impl<P, S> FeedItem<P, S> {
    #[inline]
    pub fn is_primary(&self) -> bool {
        matches!(self, FeedItem::Primary(_))
    }

    #[inline]
    pub fn is_supplementary(&self) -> bool {
        !self.is_primary()
    }

    pub fn as_primary(&self) -> Option<&P> {
        match self {
            FeedItem::Primary(item) => Some(item),
            FeedItem::Supplementary(_) => None,
        }
    }

    pub fn as_supplementary(&self) -> Option<&S> {
        match self {
            FeedItem::Primary(_) => None,
            FeedItem::Supplementary(item) => Some(item),
        }
    }

    pub fn into_primary(self) -> Option<P> {
        match self {
            FeedItem::Primary(item) => Some(item),
            FeedItem::Supplementary(_) => None,
        }
    }

    pub fn into_supplementary(self) -> Option<S> {
        match self {
            FeedItem::Primary(_) => None,
            FeedItem::Supplementary(item) => Some(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_mutually_exclusive() {
        let listing: FeedItem<u32, &str> = FeedItem::Primary(7);
        let ad: FeedItem<u32, &str> = FeedItem::Supplementary("promo");

        assert!(listing.is_primary() && !listing.is_supplementary());
        assert!(ad.is_supplementary() && !ad.is_primary());
    }

    #[test]
    fn accessors_return_the_matching_variant_only() {
        let listing: FeedItem<u32, &str> = FeedItem::Primary(7);
        let ad: FeedItem<u32, &str> = FeedItem::Supplementary("promo");

        assert_eq!(listing.as_primary(), Some(&7));
        assert_eq!(listing.as_supplementary(), None);
        assert_eq!(ad.as_supplementary(), Some(&"promo"));
        assert_eq!(ad.clone().into_primary(), None);
        assert_eq!(ad.into_supplementary(), Some("promo"));
    }
}
