use anyhow::anyhow;
use tracing::{debug, warn};

use crate::{
    entities::movie,
    error::{AppError, AppResult, MOVIE_NOT_FOUND, NO_MOVIES_FOUND},
    models::{MovieListResponse, MovieRecord},
    pagination::PageParams,
    store::MovieStore,
    validation,
};

pub async fn list_page(store: &dyn MovieStore, params: PageParams) -> AppResult<MovieListResponse> {
    let offset = params.offset();

    let total_items = store.count().await?;
    let rows = store.range(offset, params.per_page()).await?;

    if rows.is_empty() {
        debug!(page = params.page(), per_page = params.per_page(), total_items, "empty page");
        return Err(AppError::NotFound(NO_MOVIES_FOUND));
    }

    let movies = rows.into_iter().map(shape).collect::<AppResult<Vec<_>>>()?;
    let total_pages = params.total_pages(total_items);

    Ok(MovieListResponse {
        movies,
        prev_page: params.prev_link(),
        next_page: params.next_link(total_pages),
        total_pages,
        total_items,
    })
}

pub async fn get_by_id(store: &dyn MovieStore, id: i64) -> AppResult<MovieRecord> {
    let Some(row) = store.find_by_id(id).await? else {
        debug!(movie_id = id, "movie not found");
        return Err(AppError::NotFound(MOVIE_NOT_FOUND));
    };
    shape(row)
}

/// A stored row that fails validation is bad data on our side, not the caller's.
fn shape(row: movie::Model) -> AppResult<MovieRecord> {
    let id = row.id;
    validation::validate(row).map_err(|err| {
        warn!(movie_id = id, error = %err, "stored movie failed validation");
        AppError::Internal(anyhow!("movie {id} failed validation: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, IntoActiveModel, NotSet};

    use super::*;
    use crate::{
        db,
        store::{MemoryStore, SqlMovieStore},
        validation::tests::sample,
    };

    fn store_with(n: i32) -> MemoryStore {
        MemoryStore::new((1..=n).map(sample).collect())
    }

    #[tokio::test]
    async fn first_page_of_twenty_five() {
        let store = store_with(25);
        let page = list_page(&store, PageParams::new(1, 10).unwrap()).await.unwrap();

        assert_eq!(page.movies.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page.as_deref(), Some("/theater/movies/?page=2&per_page=10"));
    }

    #[tokio::test]
    async fn last_partial_page() {
        let store = store_with(25);
        let page = list_page(&store, PageParams::new(3, 10).unwrap()).await.unwrap();

        let ids: Vec<i32> = page.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.next_page, None);
        assert_eq!(page.prev_page.as_deref(), Some("/theater/movies/?page=2&per_page=10"));
    }

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let store = MemoryStore::default();
        let err = list_page(&store, PageParams::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("No movies found.")));
    }

    #[tokio::test]
    async fn page_past_the_end_is_not_found() {
        let store = store_with(25);
        let err = list_page(&store, PageParams::new(4, 10).unwrap()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(NO_MOVIES_FOUND)));
    }

    #[tokio::test]
    async fn largest_page_on_sql_store_is_not_found() {
        let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
        for i in 1..=3 {
            let mut row = sample(i).into_active_model();
            row.id = NotSet;
            row.insert(&db).await.unwrap();
        }
        let store = SqlMovieStore::new(db);

        let err = list_page(&store, PageParams::new(i64::MAX, 20).unwrap()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(NO_MOVIES_FOUND)));
    }

    #[tokio::test]
    async fn short_store_fits_on_one_page() {
        let store = store_with(3);
        let page = list_page(&store, PageParams::new(1, 20).unwrap()).await.unwrap();
        assert_eq!(page.movies.len(), 3);
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.prev_page, page.next_page), (None, None));
    }

    #[tokio::test]
    async fn paging_through_visits_every_row_once() {
        let store = store_with(47);
        for per_page in [1, 7, 10, 20] {
            let first = list_page(&store, PageParams::new(1, per_page).unwrap()).await.unwrap();
            let mut seen: Vec<i32> = first.movies.iter().map(|m| m.id).collect();

            for page in 2..=first.total_pages as i64 {
                let params = PageParams::new(page, per_page).unwrap();
                let next = list_page(&store, params).await.unwrap();
                assert_eq!(next.prev_page.is_some(), page > 1);
                assert_eq!(next.next_page.is_some(), (page as u64) < next.total_pages);
                seen.extend(next.movies.iter().map(|m| m.id));
            }

            assert_eq!(seen, (1..=47).collect::<Vec<_>>(), "per_page={per_page}");
        }
    }

    #[tokio::test]
    async fn get_by_id_found_and_missing() {
        let store = store_with(5);
        assert_eq!(get_by_id(&store, 4).await.unwrap().name, "Movie 4");

        let err = get_by_id(&store, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("Movie with the given ID was not found.")));
    }

    #[tokio::test]
    async fn invalid_stored_row_is_internal() {
        let mut bad = sample(1);
        bad.country = "AUST".to_string();
        let store = MemoryStore::new(vec![bad]);

        assert!(matches!(get_by_id(&store, 1).await.unwrap_err(), AppError::Internal(_)));
        assert!(matches!(
            list_page(&store, PageParams::default()).await.unwrap_err(),
            AppError::Internal(_)
        ));
    }
}
