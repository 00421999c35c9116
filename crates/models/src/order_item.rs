use bigdecimal::BigDecimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{book, order};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub book_id: i64,
    pub quantity: i32,
    /// Unit price at the time the order was placed.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: BigDecimal,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Order, Book }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Order => Entity::belongs_to(order::Entity).from(Column::OrderId).to(order::Column::Id).into(),
            Relation::Book => Entity::belongs_to(book::Entity).from(Column::BookId).to(book::Column::Id).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl ActiveModelBehavior for ActiveModel {}
