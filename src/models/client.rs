use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub photo: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`]. `id` and `created_at` are filled by the
/// database.
pub struct NewClient<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub photo: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Changeset applied when updating a [`Client`] row. `created_at` is not part
/// of the changeset, so edits can never move the creation timestamp; a `None`
/// photo leaves the stored column alone.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub photo: Option<&'a str>,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            surname: client.surname,
            email: client.email,
            created_at: client.created_at,
            photo: client.photo,
        }
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            surname: client.surname.as_str(),
            email: client.email.as_str(),
            photo: client.photo.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            name: client.name.as_str(),
            surname: client.surname.as_str(),
            email: client.email.as_str(),
            photo: client.photo.as_deref(),
        }
    }
}
