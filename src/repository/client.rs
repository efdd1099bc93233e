use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

/// Diesel implementation of [`ClientReader`] and [`ClientWriter`].
pub struct DieselClientRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselClientRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ClientReader for DieselClientRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = get_connection(self.pool)?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_all(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = get_connection(self.pool)?;
        let items = clients::table
            .order(clients::id.asc())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = get_connection(self.pool)?;

        let total: i64 = clients::table.count().get_result(&mut conn)?;

        // Ordered by id so pages stay stable across requests.
        let mut items_query = clients::table.order(clients::id.asc()).into_boxed();
        if let Some(pagination) = &query.pagination {
            let per_page = pagination.per_page as i64;
            items_query = items_query
                .limit(per_page)
                .offset(pagination.page as i64 * per_page);
        }

        let items = items_query
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        Ok((total as usize, items))
    }
}

impl ClientWriter for DieselClientRepository<'_> {
    fn create(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = get_connection(self.pool)?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};
        use crate::schema::clients;

        let mut conn = get_connection(self.pool)?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id))
            .set(&db_updates)
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, client_id: i32) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = get_connection(self.pool)?;
        diesel::delete(clients::table.find(client_id)).execute(&mut conn)?;
        Ok(())
    }
}
