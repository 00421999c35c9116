use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, role, user_role};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { UserRole }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::UserRole => Entity::has_many(user_role::Entity).into() }
    }
}

impl Related<role::Entity> for Entity {
    fn to() -> RelationDef { user_role::Relation::Role.def() }

    fn via() -> Option<RelationDef> { Some(user_role::Relation::User.def().rev()) }
}

impl Related<user_role::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserRole.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ModelError::Validation("invalid email".into())),
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
    shipping_address: Option<String>,
) -> Result<Model, ModelError> {
    validate_email(email)?;
    validate_name(first_name)?;
    validate_name(last_name)?;
    let am = ActiveModel {
        email: Set(email.trim().to_string()),
        password_hash: Set(password_hash.to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        shipping_address: Set(shipping_address),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Roles currently granted to `user_id`; unknown names in the table are skipped.
pub async fn roles_of<C: ConnectionTrait>(db: &C, user_id: i64) -> Result<Vec<role::RoleName>, ModelError> {
    let rows = role::Entity::find()
        .inner_join(user_role::Entity)
        .filter(user_role::Column::UserId.eq(user_id))
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let mut names: Vec<role::RoleName> = rows.iter().filter_map(|r| role::RoleName::try_from(r).ok()).collect();
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_local_and_domain() {
        assert!(validate_email("reader@example.com").is_ok());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("reader@").is_err());
        assert!(validate_email("reader").is_err());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let m = Model {
            id: 1,
            email: "a@b.c".into(),
            password_hash: "$argon2id$secret".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            shipping_address: None,
            created_at: Utc::now().into(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("password_hash").is_none());
        assert_eq!(v["email"], "a@b.c");
    }
}
