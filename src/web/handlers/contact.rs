// Contact section: show the form, accept a submission

use axum::{
    extract::{Form, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};

use crate::contact_form::{ContactDraft, ContactFormError};
use crate::error::Result;
use crate::section::Section;
use crate::shell::ShellState;
use crate::web::handlers::pages::{
    render_cached, render_section, shell_from_request, wants_fragment, PageQuery,
};
use crate::web::storage::stored_theme;
use crate::web::views::ContactFormView;
use crate::web::AppState;

pub async fn contact_page(
    State(state): State<AppState>,
    HxRequest(hx): HxRequest,
    HxHistoryRestoreRequest(restore): HxHistoryRestoreRequest,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let shell = shell_from_request(Section::Contact, &headers, &query)?;
    render_cached(&state, shell, wants_fragment(hx, restore)).await
}

/// Log the message and re-render the contact section in place.
/// Responses carry the visitor's draft, so they're never cached.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Html<String>)> {
    let mut shell = ShellState::new(stored_theme(&headers));
    shell.select(Section::Contact);

    let draft = ContactDraft::from_pairs(pairs);
    let (status, form) = match draft.submit() {
        Ok(_) => (StatusCode::OK, ContactFormView::sent()),
        Err(ContactFormError::Missing(missing)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, ContactFormView::rejected(draft, missing))
        }
    };

    let body = render_section(&state, shell, form, false)?;
    Ok((status, Html(body)))
}
