use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

// Schema-only mirrors of the service transfer types; decimals travel as strings.

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RegisterDoc {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Option<String>,
}

#[derive(ToSchema)]
pub struct LoginDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Option<String>,
    /// `ROLE_USER` / `ROLE_ADMIN`
    pub roles: Vec<String>,
}

#[derive(ToSchema)]
pub struct SessionDoc { pub user: UserDoc, pub token: String }

#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[schema(example = "9.99")]
    pub price: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateBookDoc {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[schema(example = "9.99")]
    pub price: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(ToSchema)]
pub struct CartItemDoc { pub id: i64, pub book_id: i64, pub book_title: String, pub price: String, pub quantity: i32 }

#[derive(ToSchema)]
pub struct CartDoc { pub user_id: i64, pub items: Vec<CartItemDoc>, pub total: String }

#[derive(ToSchema)]
pub struct AddCartItemDoc { pub book_id: i64, pub quantity: i32 }

#[derive(ToSchema)]
pub struct UpdateCartItemDoc { pub quantity: i32 }

#[derive(ToSchema)]
pub struct OrderItemDoc { pub id: i64, pub book_id: i64, pub quantity: i32 }

#[derive(ToSchema)]
pub struct OrderDoc {
    pub id: i64,
    pub user_id: i64,
    pub order_items: Vec<OrderItemDoc>,
    pub order_date: chrono::DateTime<chrono::Utc>,
    pub total: String,
    /// PENDING, PROCESSING, SHIPPED, DELIVERED, COMPLETED or CANCELLED
    pub status: String,
}

#[derive(ToSchema)]
pub struct CreateOrderDoc { pub shipping_address: String }

#[derive(ToSchema)]
pub struct UpdateOrderStatusDoc {
    #[schema(example = "SHIPPED")]
    pub status: String,
}

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::me,
        crate::routes::books::list,
        crate::routes::books::get,
        crate::routes::books::create,
        crate::routes::books::update,
        crate::routes::books::delete,
        crate::routes::cart::view,
        crate::routes::cart::add,
        crate::routes::cart::update,
        crate::routes::cart::remove,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::update_status,
        crate::routes::orders::items,
        crate::routes::orders::item,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterDoc,
            LoginDoc,
            UserDoc,
            SessionDoc,
            BookDoc,
            CreateBookDoc,
            CartItemDoc,
            CartDoc,
            AddCartItemDoc,
            UpdateCartItemDoc,
            OrderItemDoc,
            OrderDoc,
            CreateOrderDoc,
            UpdateOrderStatusDoc,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "books"),
        (name = "cart"),
        (name = "orders")
    )
)]
pub struct ApiDoc;
