use validator::Validate;

use crate::domain::client::Client;
use crate::forms::client::ClientFormData;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Outcome of a save, so callers can tell a creation from an edit.
#[derive(Debug)]
pub struct SavedClient {
    pub client: Client,
    pub created: bool,
}

/// Loads one list page. A requested page past the end is clamped onto the
/// last page; callers can detect the clamp through the returned window and
/// redirect.
pub fn list_clients<R>(repo: &R, page: usize) -> ServiceResult<Paginated<Client>>
where
    R: ClientReader + ?Sized,
{
    let (total, items) =
        repo.list(ClientListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE).max(1);
    let page = page.min(total_pages - 1);

    Ok(Paginated::new(items, page, total_pages))
}

/// Returns every client, in store order.
pub fn list_all_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.list_all().map_err(Into::into)
}

/// Fetches a client by id. Non-positive ids are rejected before the store is
/// touched.
pub fn get_client<R>(repo: &R, id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    if id <= 0 {
        return Err(ServiceError::InvalidId);
    }
    repo.get_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the form data and persists it: insert when the id is absent,
/// update in place when present. Validation failures never reach the store.
pub fn save_client<R>(repo: &R, form: &ClientFormData) -> ServiceResult<SavedClient>
where
    R: ClientWriter + ?Sized,
{
    form.validate().map_err(ServiceError::Validation)?;

    match form.id {
        Some(id) => {
            let client = repo.update(id, &form.to_update_client())?;
            Ok(SavedClient {
                client,
                created: false,
            })
        }
        None => {
            let client = repo.create(&form.to_new_client())?;
            Ok(SavedClient {
                client,
                created: true,
            })
        }
    }
}

/// Deletes a client by id; the store treats an absent id as a no-op.
/// Non-positive ids are rejected before the store is touched.
pub fn delete_client<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    if id <= 0 {
        return Err(ServiceError::InvalidId);
    }
    repo.delete(id).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn sample_form(id: Option<i32>) -> ClientFormData {
        ClientFormData {
            id,
            name: "Ana".to_string(),
            surname: "García".to_string(),
            email: "ana@example.com".to_string(),
            photo: None,
        }
    }

    #[test]
    fn get_client_rejects_non_positive_id_without_querying() {
        // No expectations set: any store call would panic.
        let repo = MockRepository::new();
        assert!(matches!(
            get_client(&repo, 0),
            Err(ServiceError::InvalidId)
        ));
        assert!(matches!(
            get_client(&repo, -3),
            Err(ServiceError::InvalidId)
        ));
    }

    #[test]
    fn get_client_maps_absence_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        assert!(matches!(
            get_client(&repo, 5),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn save_client_with_empty_field_never_mutates() {
        let repo = MockRepository::new();
        let mut form = sample_form(None);
        form.surname = String::new();

        match save_client(&repo, &form) {
            Err(ServiceError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("surname"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn save_client_without_id_inserts() {
        let mut repo = MockRepository::new();
        repo.expect_create().returning(|new_client| {
            Ok(Client {
                id: 42,
                name: new_client.name.clone(),
                surname: new_client.surname.clone(),
                email: new_client.email.clone(),
                ..Client::default()
            })
        });

        let saved = save_client(&repo, &sample_form(None)).unwrap();
        assert!(saved.created);
        assert_eq!(saved.client.id, 42);
    }

    #[test]
    fn save_client_with_id_updates_in_place() {
        let mut repo = MockRepository::new();
        repo.expect_update().returning(|id, updates| {
            Ok(Client {
                id,
                name: updates.name.clone(),
                surname: updates.surname.clone(),
                email: updates.email.clone(),
                ..Client::default()
            })
        });

        let saved = save_client(&repo, &sample_form(Some(7))).unwrap();
        assert!(!saved.created);
        assert_eq!(saved.client.id, 7);
    }

    #[test]
    fn delete_client_rejects_non_positive_id_without_querying() {
        let repo = MockRepository::new();
        assert!(matches!(
            delete_client(&repo, 0),
            Err(ServiceError::InvalidId)
        ));
    }

    #[test]
    fn delete_client_delegates_for_positive_id() {
        let mut repo = MockRepository::new();
        repo.expect_delete().returning(|_| Ok(()));
        assert!(delete_client(&repo, 9).is_ok());
    }

    #[test]
    fn list_clients_clamps_page_past_the_end() {
        let mut repo = MockRepository::new();
        // 12 records at 5 per page: pages 0..=2.
        repo.expect_list().returning(|_| Ok((12, vec![])));

        let paginated = list_clients(&repo, 10).unwrap();
        assert_eq!(paginated.window.current, 3);
        assert_eq!(paginated.window.last, 3);
    }

    #[test]
    fn list_clients_on_empty_store_is_a_single_page() {
        let mut repo = MockRepository::new();
        repo.expect_list().returning(|_| Ok((0, vec![])));

        let paginated = list_clients(&repo, 0).unwrap();
        assert_eq!(paginated.window.pages, vec![1]);
        assert!(paginated.items.is_empty());
    }

    #[test]
    fn list_all_clients_passes_through() {
        let mut repo = MockRepository::new();
        repo.expect_list_all().returning(|| {
            Ok((1..=3)
                .map(|id| Client {
                    id,
                    ..Client::default()
                })
                .collect())
        });

        let all = list_all_clients(&repo).unwrap();
        assert_eq!(all.len(), 3);
    }
}
