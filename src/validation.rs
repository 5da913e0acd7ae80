use jiff::civil::Date;

use crate::{entities::movie, error::ValidationError, models::MovieRecord};

const NAME_MAX: usize = 255;
const GENRE_MAX: usize = 255;
const ORIG_TITLE_MAX: usize = 255;
const STATUS_MAX: usize = 50;
const ORIG_LANG_MAX: usize = 50;
const COUNTRY_MAX: usize = 3;

/// Shapes a stored row into a `MovieRecord`, checking it against the current
/// calendar year.
pub fn validate(raw: movie::Model) -> Result<MovieRecord, ValidationError> {
    let today: Date = jiff::Zoned::now().into();
    validate_at(raw, today.year())
}

pub fn validate_at(raw: movie::Model, current_year: i16) -> Result<MovieRecord, ValidationError> {
    check_len("name", &raw.name, NAME_MAX)?;
    check_len("genre", &raw.genre, GENRE_MAX)?;
    check_len("orig_title", &raw.orig_title, ORIG_TITLE_MAX)?;
    check_len("status", &raw.status, STATUS_MAX)?;
    check_len("orig_lang", &raw.orig_lang, ORIG_LANG_MAX)?;
    check_len("country", &raw.country, COUNTRY_MAX)?;

    check_non_negative("score", raw.score)?;
    check_non_negative("budget", raw.budget)?;
    check_non_negative("revenue", raw.revenue)?;

    let date = parse_date(&raw.date)?;
    let max_year = i32::from(current_year) + 1;
    if i32::from(date.year()) > max_year {
        return Err(ValidationError::new(
            "body",
            "date",
            "value_error",
            format!("The year in 'date' cannot be greater than {max_year}."),
        ));
    }

    Ok(MovieRecord {
        id: raw.id,
        name: raw.name,
        date,
        score: raw.score,
        genre: raw.genre,
        overview: raw.overview,
        crew: raw.crew,
        orig_title: raw.orig_title,
        status: raw.status,
        orig_lang: raw.orig_lang,
        budget: raw.budget,
        revenue: raw.revenue,
        country: raw.country,
    })
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            "body",
            field,
            "string_too_long",
            format!("String should have at most {max} characters"),
        ));
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            "body",
            field,
            "greater_than_equal",
            "Input should be greater than or equal to 0",
        ));
    }
    Ok(())
}

fn parse_date(value: &str) -> Result<Date, ValidationError> {
    value.trim().parse::<Date>().map_err(|err| {
        ValidationError::new("body", "date", "date_from_datetime_parsing", err.to_string())
    })
}
