use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub date: String,
    #[sea_orm(column_type = "Double")]
    pub score: f64,
    pub genre: String,
    #[sea_orm(column_type = "Text")]
    pub overview: String,
    #[sea_orm(column_type = "Text")]
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    #[sea_orm(column_type = "Double")]
    pub budget: f64,
    #[sea_orm(column_type = "Double")]
    pub revenue: f64,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
