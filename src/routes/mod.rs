//! HTTP handlers and the small helpers they share.

use actix_session::Session;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, http::header};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use log::error;
use tera::{Context, Tera};
use validator::ValidationErrors;

use crate::forms::client::ClientFormData;

pub mod client;

/// Session key holding the record currently being created or edited.
const EDIT_BUFFER_KEY: &str = "cliente_en_edicion";

/// Builds a `303 See Other` redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a template to an HTML response; template failures become a 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a flash message level to the Bootstrap alert class used in templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every rendered page: pending alerts and the page title.
pub fn base_context(flash_messages: &IncomingFlashMessages, titulo: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("titulo", titulo);
    context
}

/// Flattens validator output into the per-field messages shown on the form.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Campo inválido: {field}"),
            })
        })
        .collect()
}

pub fn load_edit_buffer(session: &Session) -> Option<ClientFormData> {
    match session.get::<ClientFormData>(EDIT_BUFFER_KEY) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("Failed to read edit buffer from session: {e}");
            None
        }
    }
}

pub fn store_edit_buffer(session: &Session, data: &ClientFormData) {
    if let Err(e) = session.insert(EDIT_BUFFER_KEY, data) {
        error!("Failed to store edit buffer in session: {e}");
    }
}

pub fn clear_edit_buffer(session: &Session) {
    session.remove(EDIT_BUFFER_KEY);
}
