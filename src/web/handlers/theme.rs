// Theme toggle: flip the stored preference and send the visitor back

use axum::{
    extract::Form,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::{HxRefresh, HxRequest};
use serde::Deserialize;

use crate::web::storage::{sanitize_return_to, stored_theme, theme_cookie};

#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    pub return_to: Option<String>,
}

pub async fn toggle_theme(
    HxRequest(hx): HxRequest,
    headers: HeaderMap,
    form: Option<Form<ThemeForm>>,
) -> Response {
    let theme = stored_theme(&headers).toggle();
    let cookie = theme_cookie(theme);

    tracing::info!("Theme preference set to {:?}", theme);

    if hx {
        // Nav, logo and toggle all live outside <main>: reload the page
        return (HxRefresh(true), [(header::SET_COOKIE, cookie)], StatusCode::OK).into_response();
    }

    let return_to = form.as_ref().and_then(|Form(f)| f.return_to.as_deref());
    let target = sanitize_return_to(return_to);
    ([(header::SET_COOKIE, cookie)], Redirect::to(target)).into_response()
}
