use std::str::FromStr;

use bigdecimal::BigDecimal;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{book, db, role, user, user_role, RoleName};

#[tokio::test]
async fn user_roles_and_book_crud() {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return; }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return;
    }

    let email = format!("models_{}@example.com", Uuid::new_v4());
    let u = user::create(&db, &email, "$argon2id$placeholder", "Model", "Tester", None).await.expect("create user");
    let user_role_row = role::find_by_name(&db, RoleName::User).await.expect("seeded ROLE_USER");
    user_role::ActiveModel { user_id: Set(u.id), role_id: Set(user_role_row.id) }
        .insert(&db)
        .await
        .expect("grant role");
    let roles = user::roles_of(&db, u.id).await.expect("roles");
    assert_eq!(roles, vec![RoleName::User]);

    let b = book::ActiveModel {
        title: Set("Dune".into()),
        author: Set("Herbert".into()),
        isbn: Set(format!("isbn-{}", Uuid::new_v4())),
        price: Set(BigDecimal::from_str("9.99").expect("decimal")),
        description: Set(None),
        cover_image: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert book");
    assert!(b.id > 0);
    assert_eq!(b.price, BigDecimal::from_str("9.99").expect("decimal"));

    book::Entity::delete_by_id(b.id).exec(&db).await.expect("delete book");
    user::Entity::delete_by_id(u.id).exec(&db).await.expect("delete user");
    assert!(user::Entity::find_by_id(u.id).one(&db).await.expect("find").is_none());
}
