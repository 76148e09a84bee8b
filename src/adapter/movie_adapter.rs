use crate::{
    adapter::diff::{self, Edit, EditScript},
    model::movie::Movie,
    render::ListSurface,
};

/// Keeps a surface in sync with the latest submitted movie list.
///
/// Each `submit` diffs the new list against the one currently displayed and
/// replays only the resulting edits on the surface.
pub struct MovieListAdapter<S: ListSurface> {
    surface: S,
    movies: Vec<Movie>,
}

impl<S: ListSurface> MovieListAdapter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            movies: vec![],
        }
    }

    pub fn submit(&mut self, movies: Vec<Movie>) -> EditScript {
        let script = diff::diff(&self.movies, &movies, |movie| movie.id);
        log::debug!(
            "Submitting {} movies: {} removed, {} moved, {} inserted, {} changed",
            movies.len(),
            script.removals(),
            script.moves(),
            script.insertions(),
            script.changes()
        );

        for edit in &script {
            match *edit {
                Edit::Remove { index } => self.surface.remove(index),
                Edit::Move { from, to } => self.surface.move_item(from, to),
                Edit::Insert { index } => self.surface.insert(index, &movies[index]),
                Edit::Change { index } => self.surface.rebind(index, &movies[index]),
            }
        }

        self.movies = movies;
        script
    }

    pub fn current_list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn item_count(&self) -> usize {
        self.movies.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
