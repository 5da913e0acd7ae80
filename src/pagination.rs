use crate::{error::ValidationError, models::ListQuery};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 20;

const LINK_BASE: &str = "/theater/movies/";

/// A checked `(page, per_page)` pair. `page >= 1`, `1 <= per_page <= 20`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageParams {
    page: u64,
    per_page: u64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
    }
}

impl PageParams {
    pub fn new(page: i64, per_page: i64) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(too_small("page"));
        }
        if per_page < 1 {
            return Err(too_small("per_page"));
        }
        if (per_page as u64) > MAX_PER_PAGE {
            return Err(ValidationError::new(
                "query",
                "per_page",
                "less_than_equal",
                format!("Input should be less than or equal to {MAX_PER_PAGE}"),
            ));
        }
        Ok(Self { page: page as u64, per_page: per_page as u64 })
    }

    pub fn from_query(query: &ListQuery) -> Result<Self, ValidationError> {
        let page = parse_int("page", query.page.as_deref(), DEFAULT_PAGE)?;
        let per_page = parse_int("per_page", query.per_page.as_deref(), DEFAULT_PER_PAGE)?;
        Self::new(page, per_page)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Zero-based index of the first row on this page. Saturates for pages
    /// far past any real table, which then simply come back empty.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self, total_items: u64) -> u64 {
        total_items.div_ceil(self.per_page)
    }

    pub fn prev_link(&self) -> Option<String> {
        (self.page > 1).then(|| link(self.page - 1, self.per_page))
    }

    pub fn next_link(&self, total_pages: u64) -> Option<String> {
        (self.page < total_pages).then(|| link(self.page + 1, self.per_page))
    }
}

fn link(page: u64, per_page: u64) -> String {
    format!("{LINK_BASE}?page={page}&per_page={per_page}")
}

fn too_small(field: &'static str) -> ValidationError {
    ValidationError::new(
        "query",
        field,
        "greater_than_equal",
        "Input should be greater than or equal to 1",
    )
}

fn parse_int(field: &'static str, raw: Option<&str>, default: u64) -> Result<i64, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default as i64),
        Some(s) => s.parse::<i64>().map_err(|_| {
            ValidationError::new(
                "query",
                field,
                "int_parsing",
                "Input should be a valid integer, unable to parse string as an integer",
            )
        }),
    }
}
