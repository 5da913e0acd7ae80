use std::{collections::HashSet, io::Read, path::Path};

use anyhow::Context;
use jiff::civil::Date;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{entities::movie, error::AppResult};

const BATCH_SIZE: usize = 500;
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct CsvMovie {
    names: String,
    date_x: String,
    score: f64,
    genre: Option<String>,
    overview: Option<String>,
    crew: Option<String>,
    orig_title: String,
    status: String,
    orig_lang: String,
    budget_x: f64,
    revenue: f64,
    country: String,
}

pub struct Seeder {
    db: DatabaseConnection,
}

impl Seeder {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn is_populated(&self) -> AppResult<bool> {
        Ok(movie::Entity::find().one(&self.db).await?.is_some())
    }

    pub async fn seed_file(&self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        self.seed(file).await
    }

    /// Loads every distinct `(name, date)` row from `reader` in one transaction.
    pub async fn seed<R: Read>(&self, reader: R) -> anyhow::Result<usize> {
        let rows = preprocess(reader)?;
        let total = rows.len();
        info!(total, "seeding movies");

        let txn = self.db.begin().await?;
        for (i, batch) in rows.chunks(BATCH_SIZE).enumerate() {
            movie::Entity::insert_many(batch.iter().cloned()).exec(&txn).await?;
            debug!(inserted = (i * BATCH_SIZE + batch.len()).min(total), total, "seed progress");
        }
        txn.commit().await?;

        Ok(total)
    }
}

fn preprocess<R: Read>(reader: R) -> anyhow::Result<Vec<movie::ActiveModel>> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::Fields).from_reader(reader);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for (line, record) in csv.deserialize::<CsvMovie>().enumerate() {
        let row = record.with_context(|| format!("reading csv record {}", line + 1))?;
        let date = Date::strptime("%m/%d/%Y", row.date_x.trim())
            .with_context(|| format!("parsing date_x {:?} for {:?}", row.date_x, row.names))?;

        if !seen.insert((row.names.clone(), date)) {
            continue;
        }

        let genre = or_unknown(row.genre).replace('\u{a0}', "");

        out.push(movie::ActiveModel {
            id: NotSet,
            name: Set(row.names),
            date: Set(date.to_string()),
            score: Set(row.score),
            genre: Set(genre),
            overview: Set(row.overview.unwrap_or_default()),
            crew: Set(or_unknown(row.crew)),
            orig_title: Set(row.orig_title),
            status: Set(row.status),
            orig_lang: Set(row.orig_lang),
            budget: Set(row.budget_x),
            revenue: Set(row.revenue),
            country: Set(row.country),
        });
    }

    Ok(out)
}

fn or_unknown(value: Option<String>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Seeds from `path` unless the table already has rows.
pub async fn seed_if_empty(db: &DatabaseConnection, path: &str) -> anyhow::Result<()> {
    let seeder = Seeder::new(db.clone());
    if seeder.is_populated().await? {
        info!("database is already populated, skipping seeding");
        return Ok(());
    }

    let inserted = seeder.seed_file(path).await.context("seeding the database")?;
    info!(inserted, path, "database seeding completed");
    Ok(())
}
