use std::sync::Arc;

use bigdecimal::BigDecimal;
use tracing::{info, instrument, warn};

use super::domain::{NewOrder, NewOrderItem, Order};
use super::dto::{CreateOrderRequest, OrderDto, OrderItemDto, UpdateOrderStatusRequest};
use super::repository::OrderRepository;
use crate::cart::repository::CartRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Order workflows. Lookups taking a `user_id` only see that user's orders;
/// someone else's order is reported exactly like a missing one.
pub struct OrderService<O: OrderRepository + ?Sized, C: CartRepository + ?Sized> {
    orders: Arc<O>,
    cart: Arc<C>,
}

impl<O: OrderRepository + ?Sized, C: CartRepository + ?Sized> Clone for OrderService<O, C> {
    fn clone(&self) -> Self { Self { orders: self.orders.clone(), cart: self.cart.clone() } }
}

impl<O: OrderRepository + ?Sized, C: CartRepository + ?Sized> OrderService<O, C> {
    pub fn new(orders: Arc<O>, cart: Arc<C>) -> Self { Self { orders, cart } }

    async fn owned_order(&self, user_id: i64, order_id: i64) -> Result<Order, ServiceError> {
        match self.orders.find_by_id(order_id).await? {
            Some(o) if o.user_id == user_id => Ok(o),
            _ => Err(ServiceError::not_found("order", order_id)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_order_item_in_order(
        &self,
        user_id: i64,
        order_id: i64,
        item_id: i64,
    ) -> Result<OrderItemDto, ServiceError> {
        self.owned_order(user_id, order_id).await?;
        self.orders
            .find_item(order_id, item_id)
            .await?
            .map(OrderItemDto::from)
            .ok_or_else(|| ServiceError::not_found("order item", item_id))
    }

    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn update_order_status(
        &self,
        order_id: i64,
        request: UpdateOrderStatusRequest,
    ) -> Result<OrderDto, ServiceError> {
        let order = self
            .orders
            .update_status(order_id, request.status)
            .await?
            .ok_or_else(|| ServiceError::not_found("order", order_id))?;
        info!(order_id, status = %order.status, "order_status_updated");
        Ok(order.into())
    }

    #[instrument(skip(self))]
    pub async fn get_all_user_orders(&self, user_id: i64, page: Pagination) -> Result<Vec<OrderDto>, ServiceError> {
        let orders = self.orders.find_by_user(user_id, page).await?;
        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_all_order_items_from_order(
        &self,
        user_id: i64,
        order_id: i64,
        page: Pagination,
    ) -> Result<Vec<OrderItemDto>, ServiceError> {
        self.owned_order(user_id, order_id).await?;
        let items = self.orders.find_items(order_id, page).await?;
        Ok(items.into_iter().map(OrderItemDto::from).collect())
    }

    /// Turn the user's cart into a `PENDING` order at current catalog prices.
    /// The cart is emptied only after the order is stored.
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, user_id: i64, request: CreateOrderRequest) -> Result<OrderDto, ServiceError> {
        let lines = self.cart.list(user_id).await?;
        if lines.is_empty() {
            return Err(ServiceError::validation("cart is empty"));
        }
        let total = lines.iter().fold(BigDecimal::from(0), |acc, l| acc + l.subtotal());
        let items = lines
            .into_iter()
            .map(|l| NewOrderItem { book_id: l.book_id, quantity: l.quantity, price: l.price })
            .collect();
        let order = self
            .orders
            .create(NewOrder { user_id, shipping_address: request.shipping_address, total, items })
            .await?;
        if let Err(e) = self.cart.clear(user_id).await {
            warn!(user_id, order_id = order.id, error = %e, "order stored but cart not cleared");
        }
        info!(user_id, order_id = order.id, total = %order.total, items = order.items.len(), "order_placed");
        Ok(order.into())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use models::OrderStatus;

    use super::*;
    use crate::book::domain::Book;
    use crate::book::repository::{memory::InMemoryBookRepository, BookRepository};
    use crate::cart::repository::memory::InMemoryCartRepository;
    use crate::order::repository::memory::InMemoryOrderRepository;

    struct Fixture {
        svc: OrderService<InMemoryOrderRepository, InMemoryCartRepository>,
        cart: Arc<InMemoryCartRepository>,
        books: Arc<InMemoryBookRepository>,
        dune: i64,
    }

    async fn fixture() -> Fixture {
        let books = Arc::new(InMemoryBookRepository::default());
        let dune = books
            .save(Book {
                id: None,
                title: "Dune".into(),
                author: "Herbert".into(),
                isbn: "123".into(),
                price: BigDecimal::from_str("9.99").unwrap(),
                description: None,
                cover_image: None,
            })
            .await
            .unwrap()
            .id;
        let cart = Arc::new(InMemoryCartRepository::new(books.clone()));
        let svc = OrderService::new(Arc::new(InMemoryOrderRepository::default()), cart.clone());
        Fixture { svc, cart, books, dune }
    }

    fn ship_to() -> CreateOrderRequest {
        CreateOrderRequest { shipping_address: "1 Main St".into() }
    }

    #[tokio::test]
    async fn empty_cart_cannot_be_ordered() {
        let f = fixture().await;
        let err = f.svc.create_order(1, ship_to()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn order_captures_prices_and_clears_cart() {
        let f = fixture().await;
        f.cart.add(1, f.dune, 2).await.unwrap();
        let order = f.svc.create_order(1, ship_to()).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, BigDecimal::from_str("19.98").unwrap());
        assert_eq!(order.order_items.len(), 1);
        assert_eq!(order.order_items[0].quantity, 2);
        assert!(f.cart.list(1).await.unwrap().is_empty());

        // later price changes do not touch the placed order
        let mut book = Book::from(f.books.find_by_id(f.dune).await.unwrap().unwrap());
        book.price = BigDecimal::from(100);
        f.books.save(book).await.unwrap();
        let listed = f.svc.get_all_user_orders(1, Pagination::default()).await.unwrap();
        assert_eq!(listed[0].total, BigDecimal::from_str("19.98").unwrap());
    }

    #[tokio::test]
    async fn other_users_orders_look_missing() {
        let f = fixture().await;
        f.cart.add(1, f.dune, 1).await.unwrap();
        let order = f.svc.create_order(1, ship_to()).await.unwrap();
        let item_id = order.order_items[0].id;

        let err = f.svc.find_order_item_in_order(2, order.id, item_id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("can't find order by id {}", order.id));
        assert!(f.svc.get_all_order_items_from_order(2, order.id, Pagination::default()).await.is_err());
        assert!(f.svc.get_all_user_orders(2, Pagination::default()).await.unwrap().is_empty());

        let item = f.svc.find_order_item_in_order(1, order.id, item_id).await.unwrap();
        assert_eq!(item.book_id, f.dune);
        let err = f.svc.find_order_item_in_order(1, order.id, 999).await.unwrap_err();
        assert_eq!(err.to_string(), "can't find order item by id 999");
    }

    #[tokio::test]
    async fn status_update_and_pagination() {
        let f = fixture().await;
        for _ in 0..3 {
            f.cart.add(1, f.dune, 1).await.unwrap();
            f.svc.create_order(1, ship_to()).await.unwrap();
        }
        let page = f.svc.get_all_user_orders(1, Pagination { page: 1, per_page: 2 }).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page[0].id > page[1].id);
        let rest = f.svc.get_all_user_orders(1, Pagination { page: 2, per_page: 2 }).await.unwrap();
        assert_eq!(rest.len(), 1);

        let updated = f
            .svc
            .update_order_status(rest[0].id, UpdateOrderStatusRequest { status: OrderStatus::Shipped })
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Shipped);
        let err = f
            .svc
            .update_order_status(404, UpdateOrderStatusRequest { status: OrderStatus::Cancelled })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
