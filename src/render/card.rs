use std::fmt;

use crate::model::movie::Movie;

pub const NO_DESCRIPTION: &str = "No description available";

/// Turns one movie into whatever a list surface displays for it.
pub trait ItemRenderer {
    type View;

    fn render(&self, movie: &Movie) -> Self::View;
}

/// The text lines shown for a single movie, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: String,
    pub director: String,
    pub year: String,
    pub rating: String,
    pub genre: String,
    pub runtime: String,
    pub description: String,
}

impl fmt::Display for MovieCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.director)?;
        writeln!(f, "{}", self.year)?;
        writeln!(f, "{}", self.rating)?;
        writeln!(f, "{}", self.genre)?;
        writeln!(f, "{}", self.runtime)?;
        write!(f, "{}", self.description)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

impl ItemRenderer for CardRenderer {
    type View = MovieCard;

    fn render(&self, movie: &Movie) -> MovieCard {
        MovieCard {
            title: movie.title.clone(),
            director: format!("Director: {}", movie.director),
            year: movie.year.to_string(),
            rating: format!("⭐ {}/10", format_rating(movie.rating)),
            genre: movie.genre.clone(),
            runtime: format!("{} min", movie.runtime),
            description: movie
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

/// Whole ratings keep one decimal (`7.0`), others print as they are (`8.5`).
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}
