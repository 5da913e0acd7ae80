use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A movie as handed to callers. Only built through `validation::validate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieRecord {
    pub id: i32,
    pub name: String,
    pub date: Date,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieRecord>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Raw list query. Kept as strings so malformed numbers surface as our own
/// validation error instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}
