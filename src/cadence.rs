//! Contains [`Cadence`], the interval at which ads are placed, and
//! [`InterleaveOptions`] which bundles it with the page offset.
//!
//! ```
//! let cadence = Cadence::new(24)?;
//! assert_eq!(cadence, Cadence::default());
//!
//! let options = InterleaveOptions::default().with_start_index(48);
//! assert_eq!(options.cadence.get(), 24);
//! ```

use std::num::NonZeroUsize;

use crate::errors::CadenceError;

/// Number of display slots between two ads when nothing else is configured
pub const DEFAULT_CADENCE: usize = 24;

/// A non-zero interval, in display positions, between inserted ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cadence(NonZeroUsize);

impl Cadence {
    pub const DEFAULT: Self = Self(NonZeroUsize::new(DEFAULT_CADENCE).unwrap());

    pub fn new(interval: usize) -> Result<Self, CadenceError> {
        NonZeroUsize::new(interval)
            .map(Self)
            .ok_or(CadenceError::Zero)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroUsize> for Cadence {
    fn from(interval: NonZeroUsize) -> Self {
        Self(interval)
    }
}

impl TryFrom<usize> for Cadence {
    type Error = CadenceError;

    fn try_from(interval: usize) -> Result<Self, Self::Error> {
        Self::new(interval)
    }
}

/// Per-call settings for [`interleave`](crate::interleave).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterleaveOptions {
    /// Display position the page starts at within the whole result set.
    /// `0` for the first page.
    pub start_index: usize,
    pub cadence: Cadence,
}

impl InterleaveOptions {
    pub fn new(start_index: usize, cadence: Cadence) -> Self {
        Self {
            start_index,
            cadence,
        }
    }

    pub fn with_start_index(self, start_index: usize) -> Self {
        Self {
            start_index,
            ..self
        }
    }

    pub fn with_cadence(self, cadence: Cadence) -> Self {
        Self { cadence, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cadence_is_24() {
        assert_eq!(Cadence::default().get(), 24);
        assert_eq!(InterleaveOptions::default().start_index, 0);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(Cadence::new(0).unwrap_err(), CadenceError::Zero);
        assert!(Cadence::try_from(0usize).is_err());
    }

    #[test]
    fn builder_methods_replace_single_fields() {
        let options = InterleaveOptions::default()
            .with_start_index(30)
            .with_cadence(Cadence::new(10).unwrap());

        assert_eq!(options, InterleaveOptions::new(30, Cadence::new(10).unwrap()));
    }
}
