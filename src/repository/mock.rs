//! Mock repository for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
        fn list_all(&self) -> RepositoryResult<Vec<Client>>;
        fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    }

    impl ClientWriter for Repository {
        fn create(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
        fn delete(&self, client_id: i32) -> RepositoryResult<()>;
    }
}
