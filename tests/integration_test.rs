#[cfg(test)]
mod tests {

    use std::{fs::File, io::Read};

    use movie_catalog::{
        adapter::{diff::Edit, movie_adapter::MovieListAdapter},
        model::movie::Movie,
        render::{CardRenderer, RenderedList},
        repository::movie_repository::MovieRepository,
        screen::MovieScreen,
    };

    #[test]
    fn loads_fixture_in_payload_order() {
        let movies = MovieRepository::from_path("./tests/resources/three_movies.json").load_all();

        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Stalker", "Ikiru", "Playtime"]);
        assert_eq!(movies[1].runtime, 143);
        assert_eq!(movies[1].description, None);
        assert_eq!(movies[2].description, None);
    }

    #[test]
    fn wrong_shape_fixture_loads_nothing() {
        let movies = MovieRepository::from_path("./tests/resources/not_a_list.json").load_all();

        assert!(movies.is_empty());
    }

    #[test]
    fn screen_renders_fixture_cards() {
        let mut screen =
            MovieScreen::new(MovieRepository::from_path("./tests/resources/three_movies.json"));

        assert_eq!(screen.load(), 3);
        assert_eq!(screen.movie_count_text(), "Total Movies: 3");

        let cards = screen.cards();
        assert_eq!(cards[0].description, "A guide leads two men through the Zone.");
        assert_eq!(cards[1].description, "No description available");
        assert_eq!(cards[2].description, "No description available");
        assert_eq!(cards[2].rating, "⭐ 7.0/10");
        assert_eq!(cards[2].runtime, "124 min");
        assert_eq!(cards[0].director, "Director: Andrei Tarkovsky");
    }

    #[test]
    fn bundled_screen_counts_twelve() {
        let mut screen = MovieScreen::new(MovieRepository::new());
        screen.load();

        assert_eq!(screen.movie_count_text(), "Total Movies: 12");
    }

    #[test]
    fn reordered_catalog_only_moves_cards() {
        let movies = MovieRepository::new().load_all();
        let mut adapter = MovieListAdapter::new(RenderedList::new(CardRenderer));
        adapter.submit(movies.clone());

        let mut reordered = movies.clone();
        reordered.rotate_left(1);
        let script = adapter.submit(reordered.clone());

        assert_eq!(script.edits(), &[Edit::Move { from: 0, to: 11 }]);
        let titles: Vec<&str> = adapter
            .surface()
            .views()
            .iter()
            .map(|card| card.title.as_str())
            .collect();
        let expected: Vec<&str> = reordered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn rating_update_rebinds_one_card() {
        let movies = MovieRepository::new().load_all();
        let mut adapter = MovieListAdapter::new(RenderedList::new(CardRenderer));
        adapter.submit(movies.clone());

        let updated: Vec<Movie> = movies
            .into_iter()
            .map(|m| if m.id == 5 { Movie { rating: 9.0, ..m } } else { m })
            .collect();
        let script = adapter.submit(updated);

        assert_eq!(script.edits(), &[Edit::Change { index: 4 }]);
        assert_eq!(adapter.surface().views()[4].rating, "⭐ 9.0/10");
    }

    #[test]
    fn loads_one_movie_per_array_element() {
        let payload = get_file_content("./tests/resources/three_movies.json");
        let elements = match serde_json::from_str::<serde_json::Value>(&payload) {
            Ok(serde_json::Value::Array(elements)) => elements.len(),
            other => panic!("Fixture is not a JSON array: {:?}", other),
        };

        let movies = MovieRepository::from_payload(payload).load_all();

        assert_eq!(movies.len(), elements);
    }

    fn get_file_content(file_path: &str) -> String {
        let mut file = match File::open(file_path) {
            Ok(file) => file,
            Err(e) => panic!("Error opening file {}: {}", file_path, e),
        };

        let mut content = String::new();
        if let Err(e) = file.read_to_string(&mut content) {
            eprintln!("Error reading the file: {}", e);
            panic!("Failed to read file");
        }

        content
    }
}
