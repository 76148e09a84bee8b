pub mod diff;
pub mod movie_adapter;
