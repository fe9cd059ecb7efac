//! Contains [`AdConfig`], the set of ads to interleave, and [`RawRecord`]
//! for telling ads and listings apart at the point where untyped records
//! enter the program.
//!
//! To read an ad configuration, use `.try_into()`:
//! ```
//! let config: AdConfig = std::fs::read_to_string("./ads.conf")?.try_into()?;
//! assert_eq!(config.ads()[0].id, "spring-sale");
//! ```
//!
//! # Format
//! One field per line as `key = value`. Ads are separated by blank lines and
//! lines starting with `#` are ignored:
//! ```text
//! # Seasonal campaigns
//! id = spring-sale
//! title = Spring sale
//! imageUrl = https://cdn.example.com/spring.png
//! linkUrl = https://shop.example.com/spring
//!
//! id = free-shipping
//! title = Free shipping on orders over $50
//! imageUrl = https://cdn.example.com/shipping.png
//! linkUrl = https://shop.example.com/shipping
//! ```

use std::collections::BTreeMap;

use tracing::debug;
use winnow::{
    ascii::{space0, till_line_ending},
    combinator::separated_pair,
    token::take_while,
};
use winnow::prelude::*;

use crate::errors::AdConfigParseError;
use crate::feed_item::FeedItem;

/// Fields a record needs to be treated as an ad
pub const AD_FIELDS: [&str; 4] = ["id", "title", "imageUrl", "linkUrl"];

/// A promotional entry shown between listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ad {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub link_url: String,
}

/// An untyped record, as it arrives from a configuration file or a loosely
/// typed payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A record is an ad iff it carries every one of [`AD_FIELDS`].
    pub fn is_supplementary(&self) -> bool {
        self.first_missing_field().is_none()
    }

    pub fn is_primary(&self) -> bool {
        !self.is_supplementary()
    }

    /// Resolve the record into a tagged [`FeedItem`]. After this, callers
    /// dispatch on the variant instead of inspecting fields.
    pub fn classify(self) -> FeedItem<RawRecord, Ad> {
        match Ad::try_from(&self) {
            Ok(ad) => FeedItem::Supplementary(ad),
            Err(_) => FeedItem::Primary(self),
        }
    }

    fn first_missing_field(&self) -> Option<&'static str> {
        AD_FIELDS
            .into_iter()
            .find(|field| !self.fields.contains_key(*field))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl TryFrom<&RawRecord> for Ad {
    /// The name of the first missing field
    type Error = &'static str;

    fn try_from(record: &RawRecord) -> Result<Self, Self::Error> {
        let field = |name: &'static str| record.get(name).map(str::to_owned).ok_or(name);

        Ok(Ad {
            id: field("id")?,
            title: field("title")?,
            image_url: field("imageUrl")?,
            link_url: field("linkUrl")?,
        })
    }
}

/// The ads available for interleaving, in the order they are cycled through.
///
/// For general usage, see the [module-level documentation.](crate::ad_config)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdConfig {
    ads: Vec<Ad>,
}

impl AdConfig {
    pub fn new(ads: Vec<Ad>) -> Self {
        Self { ads }
    }

    pub fn ads(&self) -> &[Ad] {
        &self.ads
    }

    pub fn into_ads(self) -> Vec<Ad> {
        self.ads
    }
}

impl TryFrom<&str> for AdConfig {
    type Error = AdConfigParseError;

    /// Parse an `AdConfig` from its text form
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let records = parse_records(text)?;
        if records.is_empty() {
            return Err(AdConfigParseError::Empty);
        }

        let ads = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Ad::try_from(record).map_err(|field| AdConfigParseError::MissingField {
                    record: index + 1,
                    field,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = ads.len(), "parsed ad configuration");
        Ok(AdConfig { ads })
    }
}

impl TryFrom<String> for AdConfig {
    type Error = AdConfigParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&String> for AdConfig {
    type Error = AdConfigParseError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Split the text into blank-line separated records of `key = value` fields
fn parse_records(text: &str) -> Result<Vec<RawRecord>, AdConfigParseError> {
    let mut records = Vec::new();
    let mut current = RawRecord::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();

        if line.is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let (key, value) =
            parse_field
                .parse(line)
                .map_err(|_| AdConfigParseError::MalformedLine {
                    line: line_number,
                    content: line.to_string(),
                })?;

        if current.insert(key, value.trim_end()).is_some() {
            return Err(AdConfigParseError::DuplicateField {
                line: line_number,
                field: key.to_string(),
            });
        }
    }

    if !current.is_empty() {
        records.push(current);
    }

    Ok(records)
}

fn parse_field<'s>(input: &mut &'s str) -> winnow::Result<(&'s str, &'s str)> {
    separated_pair(parse_key, (space0, '=', space0), till_line_ending).parse_next(input)
}

#[inline]
fn parse_key<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-').parse_next(input)
}
