use actix_multipart::form::MultipartForm;
use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::{error, warn};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::db::DbPool;
use crate::forms::client::{ClientForm, ClientFormData};
use crate::repository::client::DieselClientRepository;
use crate::routes::{
    base_context, clear_edit_buffer, load_edit_buffer, redirect, render_template,
    store_edit_buffer, validation_messages,
};
use crate::services::ServiceError;
use crate::services::client as client_service;
use crate::uploads::UploadStore;

#[derive(Deserialize)]
struct ListQueryParams {
    page: Option<i64>,
}

#[get("/listar")]
pub async fn listar(
    params: web::Query<ListQueryParams>,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page.unwrap_or(0).max(0) as usize;

    let repo = DieselClientRepository::new(&pool);
    let clients = match client_service::list_clients(&repo, page) {
        Ok(clients) => clients,
        Err(e) => {
            error!("Failed to list clients: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // The service clamps a page past the end; surface that as a redirect so
    // the address bar matches what is rendered.
    if clients.window.current != page + 1 {
        return redirect(&format!("/listar?page={}", clients.window.current - 1));
    }

    let mut context = base_context(&flash_messages, "Listado de clientes");
    context.insert("clientes", &clients);

    render_template(&tera, "listar.html", &context)
}

#[get("/form")]
pub async fn form_new(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let buffer = ClientFormData::default();
    store_edit_buffer(&session, &buffer);

    let mut context = base_context(&flash_messages, "Formulario de cliente");
    context.insert("cliente", &buffer);
    context.insert("errors", &Vec::<String>::new());

    render_template(&tera, "form.html", &context)
}

#[get("/form/{id}")]
pub async fn form_edit(
    id: web::Path<i32>,
    session: Session,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    let client = match client_service::get_client(&repo, id.into_inner()) {
        Ok(client) => client,
        Err(ServiceError::InvalidId) => {
            FlashMessage::error("El ID del cliente no puede ser cero").send();
            return redirect("/listar");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("El cliente no existe").send();
            return redirect("/listar");
        }
        Err(e) => {
            error!("Failed to load client: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let buffer = ClientFormData::from(&client);
    store_edit_buffer(&session, &buffer);

    let mut context = base_context(&flash_messages, "Editar cliente");
    context.insert("cliente", &buffer);
    context.insert("errors", &Vec::<String>::new());

    render_template(&tera, "form.html", &context)
}

#[post("/form")]
pub async fn form_submit(
    MultipartForm(form): MultipartForm<ClientForm>,
    session: Session,
    pool: web::Data<DbPool>,
    uploads: web::Data<UploadStore>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let buffer = load_edit_buffer(&session);
    let (mut data, file) = form.into_parts(buffer);

    // An invalid submission never touches the filesystem or the store: keep
    // the buffer and re-render with the submitted values.
    if let Err(errors) = data.validate() {
        store_edit_buffer(&session, &data);

        let mut context = base_context(&flash_messages, "Formulario de cliente");
        context.insert("cliente", &data);
        context.insert("errors", &validation_messages(&errors));

        return render_template(&tera, "form.html", &context);
    }

    // An empty file part means no upload was made.
    if let Some(file) = file.filter(|f| f.size > 0) {
        let original_name = file.file_name.as_deref().unwrap_or("archivo");
        match uploads.store_file(file.file.path(), original_name) {
            Ok(stored_name) => {
                FlashMessage::info(format!("Has subido correctamente '{stored_name}'")).send();
                data.photo = Some(stored_name);
            }
            Err(e) => {
                // Upload failure is non-fatal: the record is still saved,
                // just without a photo update.
                warn!("Failed to store uploaded photo: {e}");
            }
        }
    }

    let repo = DieselClientRepository::new(&pool);
    match client_service::save_client(&repo, &data) {
        Ok(saved) => {
            clear_edit_buffer(&session);
            let message = if saved.created {
                "Cliente creado con éxito"
            } else {
                "Cliente editado con éxito"
            };
            FlashMessage::success(message).send();
            redirect("/listar")
        }
        Err(e) => {
            error!("Failed to save client: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/eliminar/{id}")]
pub async fn eliminar(id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let id = id.into_inner();

    // A non-positive id is simply ignored.
    if id > 0 {
        let repo = DieselClientRepository::new(&pool);
        match client_service::delete_client(&repo, id) {
            Ok(()) => {
                FlashMessage::success("Cliente eliminado con éxito").send();
            }
            Err(e) => {
                error!("Failed to delete client: {e}");
                FlashMessage::error("Error al eliminar el cliente").send();
            }
        }
    }

    redirect("/listar")
}

#[get("/ver/{id}")]
pub async fn ver(
    id: web::Path<i32>,
    pool: web::Data<DbPool>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    let client = match client_service::get_client(&repo, id.into_inner()) {
        Ok(client) => client,
        Err(ServiceError::InvalidId | ServiceError::NotFound) => {
            FlashMessage::error("El cliente no se encontró en la base de datos").send();
            return redirect("/listar");
        }
        Err(e) => {
            error!("Failed to load client: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let titulo = format!("Detalle de cliente: {}", client.name);
    let mut context = base_context(&flash_messages, &titulo);
    context.insert("cliente", &client);

    render_template(&tera, "ver.html", &context)
}
