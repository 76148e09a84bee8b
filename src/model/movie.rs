use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
    pub genre: String,
    #[serde(rename = "runtime_minutes")]
    pub runtime: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Movie {
    /// Two movies are the same list item when their ids match, whatever their content.
    pub fn same_item(&self, other: &Movie) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, rating: f64) -> Movie {
        Movie {
            id,
            title: "Alien".to_string(),
            director: "Ridley Scott".to_string(),
            year: 1979,
            rating,
            genre: "Horror".to_string(),
            runtime: 117,
            description: None,
        }
    }

    #[test]
    fn same_item_compares_ids_only() {
        assert!(movie(1, 8.5).same_item(&movie(1, 7.0)));
        assert!(!movie(1, 8.5).same_item(&movie(2, 8.5)));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(movie(1, 8.5), movie(1, 8.5));
        assert_ne!(movie(1, 8.5), movie(1, 7.0));
    }

    #[test]
    fn runtime_reads_from_runtime_minutes_key() {
        let json = r#"{"id":3,"title":"Alien","director":"Ridley Scott","year":1979,
            "rating":8.5,"genre":"Horror","runtime_minutes":117}"#;
        let parsed: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.runtime, 117);
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn null_description_is_absent() {
        let json = r#"{"id":3,"title":"Alien","director":"Ridley Scott","year":1979,
            "rating":8.5,"genre":"Horror","runtime_minutes":117,"description":null}"#;
        let parsed: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.description, None);
    }
}
