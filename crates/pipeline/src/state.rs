//! Filter state and the fixed option sets behind the genre and rating controls.
//!
//! The three fields of [`FilterState`] are independent. Each one is replaced
//! wholesale by its own control and nothing ties them together.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Genres offered by the genre control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Drama,
    Fantasy,
    Horror,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Action, Genre::Drama, Genre::Fantasy, Genre::Horror];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
        }
    }
}

/// Current value of the genre control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenreSelection {
    #[default]
    All,
    Only(Genre),
}

impl GenreSelection {
    pub const ALL_LABEL: &'static str = "All genres";

    /// Every option in control order, sentinel first
    pub fn options() -> impl Iterator<Item = GenreSelection> {
        std::iter::once(GenreSelection::All).chain(Genre::ALL.into_iter().map(GenreSelection::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            GenreSelection::All => Self::ALL_LABEL,
            GenreSelection::Only(genre) => genre.label(),
        }
    }
}

impl fmt::Display for GenreSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GenreSelection {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GenreSelection::options()
            .find(|option| option.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterError::UnknownGenre(s.to_string()))
    }
}

/// Coarse quality band derived from a numeric rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingBand {
    Good,
    Ok,
    Bad,
}

impl RatingBand {
    pub const ALL: [RatingBand; 3] = [RatingBand::Good, RatingBand::Ok, RatingBand::Bad];

    /// Band a rating: `>= 8` is Good, `5..8` is Ok, everything else is Bad.
    ///
    /// There is no clamping. Negative ratings are Bad and anything above 10
    /// is still Good.
    pub fn of(rating: f64) -> RatingBand {
        if rating >= 8.0 {
            RatingBand::Good
        } else if rating >= 5.0 {
            RatingBand::Ok
        } else {
            RatingBand::Bad
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingBand::Good => "Good",
            RatingBand::Ok => "Ok",
            RatingBand::Bad => "Bad",
        }
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current value of the rating control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingSelection {
    #[default]
    All,
    Band(RatingBand),
}

impl RatingSelection {
    pub const ALL_LABEL: &'static str = "All ratings";

    /// Every option in control order, sentinel first
    pub fn options() -> impl Iterator<Item = RatingSelection> {
        std::iter::once(RatingSelection::All)
            .chain(RatingBand::ALL.into_iter().map(RatingSelection::Band))
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingSelection::All => Self::ALL_LABEL,
            RatingSelection::Band(band) => band.label(),
        }
    }
}

impl fmt::Display for RatingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RatingSelection {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RatingSelection::options()
            .find(|option| option.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterError::UnknownRating(s.to_string()))
    }
}

/// Everything that decides which catalog records are visible
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub search: String,
    pub genre: GenreSelection,
    pub rating: RatingSelection,
}

impl FilterState {
    /// True when no control narrows the catalog
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}
