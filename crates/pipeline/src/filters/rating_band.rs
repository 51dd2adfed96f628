//! Filter to keep only movies in the selected rating band.

use crate::state::{RatingBand, RatingSelection};
use crate::traits::Filter;
use data_loader::Movie;

/// Keeps records whose rating falls in the selected band.
///
/// ## Algorithm
/// 1. "All ratings" keeps everything
/// 2. Otherwise band the record with [`RatingBand::of`]
/// 3. Keep it if the band is the selected one
pub struct RatingBandFilter {
    band: Option<RatingBand>,
}

impl RatingBandFilter {
    pub fn new(selection: RatingSelection) -> Self {
        let band = match selection {
            RatingSelection::All => None,
            RatingSelection::Band(band) => Some(band),
        };
        Self { band }
    }
}

impl Filter for RatingBandFilter {
    fn name(&self) -> &str {
        "RatingBandFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.band
            .is_none_or(|band| RatingBand::of(movie.rating) == band)
    }
}
