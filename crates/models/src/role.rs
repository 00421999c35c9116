use std::{fmt, str::FromStr};

use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, user_role};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { UserRole }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::UserRole => Entity::has_many(user_role::Entity).into() }
    }
}

impl Related<user_role::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserRole.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Authorization tag attached to a user. Persisted by its authority string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl RoleName {
    pub const ALL: [RoleName; 2] = [RoleName::User, RoleName::Admin];

    pub fn authority(self) -> &'static str {
        match self {
            RoleName::User => "ROLE_USER",
            RoleName::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.authority())
    }
}

impl FromStr for RoleName {
    type Err = ModelError;

    /// Accepts both `ROLE_ADMIN` and the bare `ADMIN` form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let up = s.trim().to_ascii_uppercase();
        match up.strip_prefix("ROLE_").unwrap_or(&up) {
            "USER" => Ok(RoleName::User),
            "ADMIN" => Ok(RoleName::Admin),
            _ => Err(ModelError::Validation(format!("unknown role: {s}"))),
        }
    }
}

impl TryFrom<&Model> for RoleName {
    type Error = ModelError;

    fn try_from(m: &Model) -> Result<Self, Self::Error> { m.name.parse() }
}

/// Look up the seeded row for a role name.
pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: RoleName) -> Result<Model, ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name.authority()))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Db(format!("role {name} is not seeded")))
}
