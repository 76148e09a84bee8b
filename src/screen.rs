use crate::{
    adapter::movie_adapter::MovieListAdapter,
    model::movie::Movie,
    render::{CardRenderer, MovieCard, RenderedList},
    repository::movie_repository::MovieRepository,
};

pub fn count_label(count: usize) -> String {
    format!("Total Movies: {}", count)
}

/// The movie list screen: one repository feeding one adapter over rendered cards.
pub struct MovieScreen {
    repository: MovieRepository,
    adapter: MovieListAdapter<RenderedList<CardRenderer>>,
}

impl MovieScreen {
    pub fn new(repository: MovieRepository) -> Self {
        Self {
            repository,
            adapter: MovieListAdapter::new(RenderedList::new(CardRenderer)),
        }
    }

    /// Loads the catalog and shows it, returning how many movies are displayed.
    pub fn load(&mut self) -> usize {
        let movies = self.repository.load_all();
        self.adapter.submit(movies);
        log::info!("Displaying {} movies", self.adapter.item_count());
        self.adapter.item_count()
    }

    pub fn movie_count_text(&self) -> String {
        count_label(self.adapter.item_count())
    }

    pub fn movies(&self) -> &[Movie] {
        self.adapter.current_list()
    }

    pub fn cards(&self) -> &[MovieCard] {
        self.adapter.surface().views()
    }
}
