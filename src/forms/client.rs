use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};

/// Multipart body of `POST /form`: the client fields plus an optional photo.
///
/// The text parts are optional so a submission with a field left out is
/// handled as a validation error instead of a 400 from the extractor.
#[derive(Debug, MultipartForm)]
pub struct ClientForm {
    pub name: Option<Text<String>>,
    pub surname: Option<Text<String>>,
    pub email: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub file: Option<TempFile>,
}

impl ClientForm {
    /// Splits the multipart body into the validated field set and the photo
    /// part. The identifier always comes from the session edit buffer, never
    /// from the request, so a tampered form cannot retarget the save.
    pub fn into_parts(self, buffer: Option<ClientFormData>) -> (ClientFormData, Option<TempFile>) {
        let text =
            |value: Option<Text<String>>| value.map(|t| t.into_inner()).unwrap_or_default();

        let data = ClientFormData {
            id: buffer.and_then(|b| b.id),
            name: text(self.name).trim().to_string(),
            surname: text(self.surname).trim().to_string(),
            email: text(self.email).trim().to_string(),
            photo: None,
        };

        (data, self.file)
    }
}

/// The record being created or edited, as held in the session edit buffer
/// between the form GET and POST.
///
/// `photo` carries only a freshly stored filename; it stays `None` otherwise
/// so an update without an upload leaves the persisted photo untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct ClientFormData {
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,
    #[validate(length(min = 1, message = "El apellido es obligatorio"))]
    pub surname: String,
    #[validate(length(min = 1, message = "El email es obligatorio"))]
    pub email: String,
    pub photo: Option<String>,
}

impl ClientFormData {
    pub fn to_new_client(&self) -> NewClient {
        NewClient::new(
            self.name.clone(),
            self.surname.clone(),
            self.email.clone(),
            self.photo.clone(),
        )
    }

    pub fn to_update_client(&self) -> UpdateClient {
        UpdateClient::new(
            self.name.clone(),
            self.surname.clone(),
            self.email.clone(),
            self.photo.clone(),
        )
    }
}

impl From<&Client> for ClientFormData {
    fn from(client: &Client) -> Self {
        Self {
            id: Some(client.id),
            name: client.name.clone(),
            surname: client.surname.clone(),
            email: client.email.clone(),
            photo: None,
        }
    }
}
