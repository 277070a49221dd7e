//! Bootstrap seed
//!
//! Applies the fixed starter data: two roles and two accounts with
//! stable identifiers. Safe to run on every startup; rows that already
//! exist are left untouched.

use libris_db::{CreateRole, CreateUser, DbError, RoleRepository, UserRepository};
use libris_types::{ROLE_ADMIN, ROLE_USER};
use uuid::{uuid, Uuid};

use crate::error::AuthError;
use crate::password::hash_password;

/// Stable identifier of the seeded "Admin" role.
pub const ADMIN_ROLE_ID: Uuid = uuid!("eed7a290-74f9-40d0-b5c7-501c84c0c064");
/// Stable identifier of the seeded "User" role.
pub const USER_ROLE_ID: Uuid = uuid!("f501824d-a20a-4524-ae40-3450fdaa3f2a");
/// Stable identifier of the seeded admin account.
pub const ADMIN_USER_ID: Uuid = uuid!("789b5b6d-e101-4b83-8af0-3e57cc91f373");
/// Stable identifier of the seeded default account.
pub const USER_USER_ID: Uuid = uuid!("88cb08cd-bdb1-4795-9759-8de1471edee9");

/// Email of the seeded admin account.
pub const ADMIN_EMAIL: &str = "admin@bookstore.com";
/// Email of the seeded default account.
pub const USER_EMAIL: &str = "user@bookstore.com";

/// Password for starter accounts when no override is supplied.
///
/// Publicly visible in the repository, hence the startup warning when
/// it is actually used.
const DEFAULT_SEED_PASSWORD: &str = "Password1!";

struct StarterAccount {
    id: Uuid,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    role_id: Uuid,
}

const STARTER_ACCOUNTS: [StarterAccount; 2] = [
    StarterAccount {
        id: ADMIN_USER_ID,
        email: ADMIN_EMAIL,
        first_name: "System",
        last_name: "Admin",
        role_id: ADMIN_ROLE_ID,
    },
    StarterAccount {
        id: USER_USER_ID,
        email: USER_EMAIL,
        first_name: "System",
        last_name: "User",
        role_id: USER_ROLE_ID,
    },
];

/// Apply the bootstrap seed.
///
/// Roles are upserted by their stable identifiers; accounts are created
/// only when absent and their role assignments are upserts, so applying
/// the seed twice never duplicates a role, user, or assignment.
pub async fn apply<U: UserRepository, R: RoleRepository>(
    users: &U,
    roles: &R,
    seed_password: Option<&str>,
) -> Result<(), AuthError> {
    let password = match seed_password {
        Some(password) => password,
        None => {
            tracing::warn!("no seed password override configured; starter accounts use the built-in default");
            DEFAULT_SEED_PASSWORD
        }
    };

    roles
        .upsert(CreateRole { id: ADMIN_ROLE_ID, name: ROLE_ADMIN.to_string() })
        .await?;
    roles
        .upsert(CreateRole { id: USER_ROLE_ID, name: ROLE_USER.to_string() })
        .await?;

    for account in &STARTER_ACCOUNTS {
        seed_account(users, account, password).await?;
    }

    tracing::info!("Bootstrap seed applied");
    Ok(())
}

async fn seed_account<U: UserRepository>(
    users: &U,
    account: &StarterAccount,
    password: &str,
) -> Result<(), AuthError> {
    if users.find_by_id(account.id).await?.is_none() {
        let password_hash = hash_password(password)?;
        let create = CreateUser {
            id: account.id,
            email: account.email.to_string(),
            password_hash,
            first_name: account.first_name.to_string(),
            last_name: account.last_name.to_string(),
        };

        match users.create(create).await {
            Ok(_) => tracing::info!(email = %account.email, "Seeded starter account"),
            // Another instance seeded this account between the check and the insert
            Err(DbError::Duplicate) => {}
            Err(e) => return Err(e.into()),
        }
    }

    // Assignment is an upsert, so re-running never duplicates it
    users.add_role(account.id, account.role_id).await?;
    Ok(())
}
