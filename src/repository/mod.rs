//! Narrow persistence traits the service layer depends on, plus the Diesel
//! implementation. Keeping the traits small decouples services from the
//! storage engine and lets tests swap in a mock.

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Slice request for a paged listing. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Listing parameters; without pagination the full set is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientListQuery {
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    /// Absence is a normal outcome and comes back as `Ok(None)`.
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    fn list_all(&self) -> RepositoryResult<Vec<Client>>;
    /// Returns the total element count alongside the requested slice.
    fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    /// Inserts and returns the persisted row with its assigned id and
    /// creation timestamp.
    fn create(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
    /// Deleting an id that does not exist is a no-op, not an error.
    fn delete(&self, client_id: i32) -> RepositoryResult<()>;
}
