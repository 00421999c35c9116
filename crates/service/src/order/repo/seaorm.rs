use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use models::{order, order_item, OrderStatus};

use crate::errors::ServiceError;
use crate::order::domain::{NewOrder, Order, OrderItem};
use crate::order::repository::OrderRepository;
use crate::pagination::Pagination;

pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    async fn items_of(&self, order_id: i64) -> Result<Vec<order_item::Model>, ServiceError> {
        Ok(order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .all(&self.db)
            .await?)
    }
}

#[async_trait::async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, new: NewOrder) -> Result<Order, ServiceError> {
        let txn = self.db.begin().await?;
        let saved = order::ActiveModel {
            user_id: Set(new.user_id),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            total: Set(new.total),
            order_date: Set(Utc::now().into()),
            shipping_address: Set(new.shipping_address),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let mut items = Vec::with_capacity(new.items.len());
        for i in new.items {
            let item = order_item::ActiveModel {
                order_id: Set(saved.id),
                book_id: Set(i.book_id),
                quantity: Set(i.quantity),
                price: Set(i.price),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(item);
        }
        txn.commit().await?;
        Order::from_rows(saved, items)
    }

    async fn find_by_user(&self, user_id: i64, page: Pagination) -> Result<Vec<Order>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        let orders = order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::OrderDate)
            .order_by_desc(order::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        let items = orders.load_many(order_item::Entity, &self.db).await?;
        orders.into_iter().zip(items).map(|(o, i)| Order::from_rows(o, i)).collect()
    }

    async fn find_by_id(&self, order_id: i64) -> Result<Option<Order>, ServiceError> {
        let Some(o) = order::Entity::find_by_id(order_id).one(&self.db).await? else { return Ok(None) };
        let items = self.items_of(o.id).await?;
        Order::from_rows(o, items).map(Some)
    }

    async fn find_items(&self, order_id: i64, page: Pagination) -> Result<Vec<OrderItem>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        let rows = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        Ok(rows.into_iter().map(OrderItem::from).collect())
    }

    async fn find_item(&self, order_id: i64, item_id: i64) -> Result<Option<OrderItem>, ServiceError> {
        let row = order_item::Entity::find_by_id(item_id)
            .filter(order_item::Column::OrderId.eq(order_id))
            .one(&self.db)
            .await?;
        Ok(row.map(OrderItem::from))
    }

    async fn update_status(&self, order_id: i64, status: OrderStatus) -> Result<Option<Order>, ServiceError> {
        let Some(o) = order::Entity::find_by_id(order_id).one(&self.db).await? else { return Ok(None) };
        let mut am = o.into_active_model();
        am.status = Set(status.as_str().to_string());
        let updated = am.update(&self.db).await?;
        let items = self.items_of(updated.id).await?;
        Order::from_rows(updated, items).map(Some)
    }
}
