mod card;
mod surface;

pub use card::{format_rating, CardRenderer, ItemRenderer, MovieCard, NO_DESCRIPTION};
pub use surface::{ListSurface, RenderedList};
