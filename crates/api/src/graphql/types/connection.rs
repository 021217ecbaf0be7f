//! Relay connections over user and address listings.

use async_graphql::connection::{self, Connection, Edge};
use async_graphql::{ErrorExtensions, Result, SimpleObject};

use super::{AddressNode, UserNode};
use crate::db::{Page, UserFilter};
use crate::error::AppError;
use crate::models::Address;
use crate::state::AppState;

/// Page size used when the client asks for neither `first` nor `last`.
const DEFAULT_PAGE_SIZE: usize = 100;

/// Extra connection field with the size of the whole listing.
#[derive(Debug, Clone, SimpleObject)]
pub struct TotalCount {
    pub total_count: i32,
}

impl TotalCount {
    fn new(total: usize) -> Self {
        Self {
            total_count: i32::try_from(total).unwrap_or(i32::MAX),
        }
    }
}

pub type UserConnection = Connection<usize, UserNode, TotalCount>;
pub type AddressConnection = Connection<usize, AddressNode, TotalCount>;

/// Offset window selected by Relay pagination arguments.
fn window(
    total: usize,
    after: Option<usize>,
    before: Option<usize>,
    first: Option<usize>,
    last: Option<usize>,
) -> (usize, usize) {
    let mut start = after.map_or(0, |after| after.saturating_add(1));
    let mut end = before.unwrap_or(total).min(total);
    if let Some(first) = first {
        end = end.min(start.saturating_add(first));
    }
    if let Some(last) = last {
        start = start.max(end.saturating_sub(last));
    }
    if first.is_none() && last.is_none() {
        end = end.min(start.saturating_add(DEFAULT_PAGE_SIZE));
    }
    (start.min(end), end)
}

/// Page through the users matching `filter`, ordered by email.
pub async fn users(
    state: &AppState,
    filter: UserFilter,
    after: Option<String>,
    before: Option<String>,
    first: Option<i32>,
    last: Option<i32>,
) -> Result<UserConnection> {
    connection::query(
        after,
        before,
        first,
        last,
        |after: Option<usize>, before: Option<usize>, first: Option<usize>, last: Option<usize>| async move {
            let store = state.store();
            let total = store
                .count_users(&filter)
                .await
                .map_err(|e| AppError::from(e).extend())?;
            let (start, end) = window(total, after, before, first, last);

            let users = store
                .list_users(
                    &filter,
                    Page {
                        offset: start,
                        limit: end - start,
                    },
                )
                .await
                .map_err(|e| AppError::from(e).extend())?;

            let mut connection =
                Connection::with_additional_fields(start > 0, end < total, TotalCount::new(total));
            connection.edges.extend(
                users
                    .into_iter()
                    .enumerate()
                    .map(|(offset, user)| Edge::new(start + offset, UserNode(user))),
            );
            Ok::<_, async_graphql::Error>(connection)
        },
    )
    .await
}

/// Page through a user's addresses, already loaded in creation order.
pub async fn addresses(
    addresses: Vec<Address>,
    after: Option<String>,
    before: Option<String>,
    first: Option<i32>,
    last: Option<i32>,
) -> Result<AddressConnection> {
    connection::query(
        after,
        before,
        first,
        last,
        |after: Option<usize>, before: Option<usize>, first: Option<usize>, last: Option<usize>| async move {
            let total = addresses.len();
            let (start, end) = window(total, after, before, first, last);

            let mut connection =
                Connection::with_additional_fields(start > 0, end < total, TotalCount::new(total));
            connection.edges.extend(
                addresses
                    .into_iter()
                    .enumerate()
                    .skip(start)
                    .take(end - start)
                    .map(|(index, address)| Edge::new(index, AddressNode(address))),
            );
            Ok::<_, async_graphql::Error>(connection)
        },
    )
    .await
}
