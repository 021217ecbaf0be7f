//! `PostgreSQL` implementation of [`AccountStore`].
//!
//! Queries are checked at runtime so the crate builds without a live
//! database. Multi-row writes run in a transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgExecutor, PgPool};
use tracing::instrument;

use shopkeep_core::{AddressId, CountryCode, Email, Permission, Phone, UserId};

use super::RepositoryError;
use super::store::{AccountStore, Page, UserFilter};
use crate::models::{Address, AddressData, NewUser, User, UserChanges, UserKind};

// =============================================================================
// Internal Row Types
// =============================================================================

macro_rules! user_select {
    () => {
        r"
        SELECT u.id, u.email, u.password_hash, u.is_staff, u.is_active, u.is_superuser,
               u.note, u.date_joined, u.last_login,
               u.default_billing_address_id, u.default_shipping_address_id,
               COALESCE(
                   array_agg(p.codename ORDER BY p.codename)
                       FILTER (WHERE p.codename IS NOT NULL),
                   '{}'
               ) AS permissions
        FROM account.user u
        LEFT JOIN account.user_permission p ON p.user_id = u.id
        "
    };
}

macro_rules! address_columns {
    () => {
        r"
        id, user_id, first_name, last_name, company_name,
        street_address_1, street_address_2, city, city_area,
        postal_code, country, country_area, phone
        "
    };
}

/// Filter clause shared by listing and counting. `$1` is the staff flag,
/// `$2` the email search needle.
macro_rules! user_filter {
    () => {
        r"
        WHERE ($1::bool IS NULL OR u.is_staff = $1)
          AND ($2::text IS NULL OR strpos(lower(u.email), lower($2)) > 0)
        "
    };
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    password_hash: Option<String>,
    is_staff: bool,
    is_active: bool,
    is_superuser: bool,
    note: Option<String>,
    date_joined: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
    default_billing_address_id: Option<i32>,
    default_shipping_address_id: Option<i32>,
    permissions: Vec<String>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let permissions = row
            .permissions
            .iter()
            .map(|codename| Permission::from_codename(codename))
            .collect::<Result<_, _>>()
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;

        Ok(Self {
            id: UserId::new(row.id),
            email,
            password_hash: row.password_hash,
            is_staff: row.is_staff,
            is_active: row.is_active,
            is_superuser: row.is_superuser,
            permissions,
            note: row.note,
            date_joined: row.date_joined,
            last_login: row.last_login,
            default_billing_address_id: row.default_billing_address_id.map(AddressId::new),
            default_shipping_address_id: row.default_shipping_address_id.map(AddressId::new),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    id: i32,
    user_id: Option<i32>,
    first_name: String,
    last_name: String,
    company_name: String,
    street_address_1: String,
    street_address_2: String,
    city: String,
    city_area: String,
    postal_code: String,
    country: String,
    country_area: String,
    phone: Option<String>,
}

impl TryFrom<AddressRow> for Address {
    type Error = RepositoryError;

    fn try_from(row: AddressRow) -> Result<Self, Self::Error> {
        let country = CountryCode::parse(&row.country).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid country in database: {e}"))
        })?;
        let phone = row
            .phone
            .as_deref()
            .map(Phone::parse)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid phone in database: {e}"))
            })?;

        Ok(Self {
            id: AddressId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            data: AddressData {
                first_name: row.first_name,
                last_name: row.last_name,
                company_name: row.company_name,
                street_address_1: row.street_address_1,
                street_address_2: row.street_address_2,
                city: row.city,
                city_area: row.city_area,
                postal_code: row.postal_code,
                country,
                country_area: row.country_area,
                phone,
            },
        })
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn map_email_conflict(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("email already exists".to_owned());
    }
    RepositoryError::Database(e)
}

fn staff_flag(filter: &UserFilter) -> Option<bool> {
    filter.kind.map(|kind| kind == UserKind::Staff)
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

async fn fetch_user<'c, E: PgExecutor<'c>>(
    executor: E,
    id: UserId,
) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(concat!(
        user_select!(),
        "WHERE u.id = $1 GROUP BY u.id"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    row.map(TryInto::try_into).transpose()
}

async fn insert_address(
    conn: &mut PgConnection,
    user_id: Option<UserId>,
    data: &AddressData,
) -> Result<Address, RepositoryError> {
    let row = sqlx::query_as::<_, AddressRow>(concat!(
        r"
        INSERT INTO account.address (
            user_id, first_name, last_name, company_name,
            street_address_1, street_address_2, city, city_area,
            postal_code, country, country_area, phone
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING ",
        address_columns!()
    ))
    .bind(user_id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.company_name)
    .bind(&data.street_address_1)
    .bind(&data.street_address_2)
    .bind(&data.city)
    .bind(&data.city_area)
    .bind(&data.postal_code)
    .bind(data.country.as_str())
    .bind(&data.country_area)
    .bind(data.phone.as_ref().map(Phone::as_e164))
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_foreign_key_violation()
        {
            return RepositoryError::NotFound;
        }
        RepositoryError::Database(e)
    })?;

    row.try_into()
}

async fn overwrite_address(
    conn: &mut PgConnection,
    id: AddressId,
    data: &AddressData,
) -> Result<Option<Address>, RepositoryError> {
    let row = sqlx::query_as::<_, AddressRow>(concat!(
        r"
        UPDATE account.address
        SET first_name = $2, last_name = $3, company_name = $4,
            street_address_1 = $5, street_address_2 = $6, city = $7, city_area = $8,
            postal_code = $9, country = $10, country_area = $11, phone = $12
        WHERE id = $1
        RETURNING ",
        address_columns!()
    ))
    .bind(id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.company_name)
    .bind(&data.street_address_1)
    .bind(&data.street_address_2)
    .bind(&data.city)
    .bind(&data.city_area)
    .bind(&data.postal_code)
    .bind(data.country.as_str())
    .bind(&data.country_area)
    .bind(data.phone.as_ref().map(Phone::as_e164))
    .fetch_optional(&mut *conn)
    .await?;

    row.map(TryInto::try_into).transpose()
}

async fn replace_permissions(
    conn: &mut PgConnection,
    user_id: UserId,
    permissions: impl Iterator<Item = Permission>,
) -> Result<(), RepositoryError> {
    let codenames: Vec<&str> = permissions.map(Permission::codename).collect();

    sqlx::query("DELETE FROM account.user_permission WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    sqlx::query(
        r"
        INSERT INTO account.user_permission (user_id, codename)
        SELECT $1, unnest($2::text[])
        ",
    )
    .bind(user_id)
    .bind(codenames)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Point a default address column at `address_id`.
async fn link_default(
    conn: &mut PgConnection,
    user_id: UserId,
    column: DefaultColumn,
    address_id: AddressId,
) -> Result<(), RepositoryError> {
    let sql = match column {
        DefaultColumn::Billing => {
            "UPDATE account.user SET default_billing_address_id = $2 WHERE id = $1"
        }
        DefaultColumn::Shipping => {
            "UPDATE account.user SET default_shipping_address_id = $2 WHERE id = $1"
        }
    };
    sqlx::query(sql)
        .bind(user_id)
        .bind(address_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum DefaultColumn {
    Billing,
    Shipping,
}

/// Update the current default address in place, or create a new one and
/// link it.
async fn upsert_default(
    conn: &mut PgConnection,
    user_id: UserId,
    column: DefaultColumn,
    current: Option<AddressId>,
    data: &AddressData,
) -> Result<(), RepositoryError> {
    if let Some(id) = current
        && overwrite_address(conn, id, data).await?.is_some()
    {
        return Ok(());
    }
    let address = insert_address(conn, Some(user_id), data).await?;
    link_default(conn, user_id, column, address.id).await
}

// =============================================================================
// Store
// =============================================================================

/// `PostgreSQL`-backed account store.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new store over `pool`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn user_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        fetch_user(&self.pool, id).await
    }

    async fn user_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(concat!(
            user_select!(),
            "WHERE u.email = $1 GROUP BY u.id"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_users(
        &self,
        filter: &UserFilter,
        page: Page,
    ) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(concat!(
            user_select!(),
            user_filter!(),
            "GROUP BY u.id ORDER BY u.email, u.id LIMIT $3 OFFSET $4"
        ))
        .bind(staff_flag(filter))
        .bind(filter.search.as_deref())
        .bind(to_i64(page.limit))
        .bind(to_i64(page.offset))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn count_users(&self, filter: &UserFilter) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar(concat!(
            "SELECT COUNT(*) FROM account.user u ",
            user_filter!()
        ))
        .bind(staff_flag(filter))
        .bind(filter.search.as_deref())
        .fetch_one(&self.pool)
        .await?;

        usize::try_from(count)
            .map_err(|_| RepositoryError::DataCorruption(format!("negative count: {count}")))
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id: UserId = sqlx::query_scalar(
            r"
            INSERT INTO account.user (email, password_hash, is_staff, is_active, is_superuser, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(new_user.email.as_str())
        .bind(new_user.password_hash.as_deref())
        .bind(new_user.is_staff)
        .bind(new_user.is_active)
        .bind(new_user.is_superuser)
        .bind(new_user.note.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_email_conflict)?;

        replace_permissions(&mut tx, id, new_user.permissions.iter().copied()).await?;

        if let Some(data) = &new_user.default_billing_address {
            let address = insert_address(&mut tx, Some(id), data).await?;
            link_default(&mut tx, id, DefaultColumn::Billing, address.id).await?;
        }
        if let Some(data) = &new_user.default_shipping_address {
            let address = insert_address(&mut tx, Some(id), data).await?;
            link_default(&mut tx, id, DefaultColumn::Shipping, address.id).await?;
        }

        let user = fetch_user(&mut *tx, id)
            .await?
            .ok_or_else(|| RepositoryError::DataCorruption("created user vanished".to_owned()))?;
        tx.commit().await?;

        Ok(user)
    }

    #[instrument(skip(self, changes))]
    async fn update_user(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, (Option<i32>, Option<i32>)>(
            r"
            SELECT default_billing_address_id, default_shipping_address_id
            FROM account.user
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        sqlx::query(
            r"
            UPDATE account.user
            SET email = COALESCE($2, email),
                note = CASE WHEN $3 THEN $4 ELSE note END,
                is_active = COALESCE($5, is_active)
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(changes.email.as_ref().map(Email::as_str))
        .bind(changes.note.is_some())
        .bind(changes.note.as_ref().and_then(Option::as_deref))
        .bind(changes.is_active)
        .execute(&mut *tx)
        .await
        .map_err(map_email_conflict)?;

        if let Some(permissions) = &changes.permissions {
            replace_permissions(&mut tx, id, permissions.iter().copied()).await?;
        }
        if let Some(data) = &changes.default_billing_address {
            let current = current.0.map(AddressId::new);
            upsert_default(&mut tx, id, DefaultColumn::Billing, current, data).await?;
        }
        if let Some(data) = &changes.default_shipping_address {
            let current = current.1.map(AddressId::new);
            upsert_default(&mut tx, id, DefaultColumn::Shipping, current, data).await?;
        }

        let user = fetch_user(&mut *tx, id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Unlink defaults first so the address cascade does not touch the
        // row being deleted.
        sqlx::query(
            r"
            UPDATE account.user
            SET default_billing_address_id = NULL, default_shipping_address_id = NULL
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM account.address WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM account.user WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_password_hash(
        &self,
        id: UserId,
        password_hash: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE account.user SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE account.user SET last_login = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn address_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        let row = sqlx::query_as::<_, AddressRow>(concat!(
            "SELECT ",
            address_columns!(),
            "FROM account.address WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn addresses_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let rows = sqlx::query_as::<_, AddressRow>(concat!(
            "SELECT ",
            address_columns!(),
            "FROM account.address WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn create_address(
        &self,
        user_id: Option<UserId>,
        data: AddressData,
    ) -> Result<Address, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        insert_address(&mut conn, user_id, &data).await
    }

    async fn update_address(
        &self,
        id: AddressId,
        data: AddressData,
    ) -> Result<Address, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        overwrite_address(&mut conn, id, &data)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_address(&self, id: AddressId) -> Result<bool, RepositoryError> {
        // `ON DELETE SET NULL` clears default references.
        let result = sqlx::query("DELETE FROM account.address WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
