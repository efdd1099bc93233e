use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted client record.
///
/// `id` and `created_at` are assigned on first save and never change across
/// edits; `photo` holds the stored filename of the uploaded picture, if any.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub photo: Option<String>,
}

/// Data for a client that has not been persisted yet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub photo: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(name: String, surname: String, email: String, photo: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            email: email.trim().to_lowercase(),
            photo: photo.filter(|s| !s.is_empty()),
        }
    }
}

/// Changes applied to an existing client.
///
/// `photo` of `None` leaves the stored photo untouched; `created_at` and the
/// identifier are deliberately absent so an update can never rewrite them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateClient {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub photo: Option<String>,
}

impl UpdateClient {
    #[must_use]
    pub fn new(name: String, surname: String, email: String, photo: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            email: email.trim().to_lowercase(),
            photo: photo.filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_trims_and_lowercases() {
        let client = NewClient::new(
            "  Ana ".to_string(),
            " García ".to_string(),
            " Ana@Example.COM ".to_string(),
            Some(String::new()),
        );
        assert_eq!(client.name, "Ana");
        assert_eq!(client.surname, "García");
        assert_eq!(client.email, "ana@example.com");
        assert_eq!(client.photo, None);
    }

    #[test]
    fn update_client_keeps_non_empty_photo() {
        let updates = UpdateClient::new(
            "Ana".to_string(),
            "García".to_string(),
            "ana@example.com".to_string(),
            Some("abc-foto.png".to_string()),
        );
        assert_eq!(updates.photo.as_deref(), Some("abc-foto.png"));
    }
}
