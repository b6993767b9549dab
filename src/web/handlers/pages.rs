// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Html,
};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::section::Section;
use crate::shell::ShellState;
use crate::web::storage::stored_theme;
use crate::web::views::{ContactFormView, FragmentTemplate, PageTemplate, SectionView};
use crate::web::AppState;

/// Query string accepted on every section page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` expands the mobile menu
    pub menu: Option<String>,
    /// Project id for the gallery modal
    pub project: Option<String>,
}

// ============================================================================
// Section Pages
// ============================================================================

pub async fn home_page(
    State(state): State<AppState>,
    HxRequest(hx): HxRequest,
    HxHistoryRestoreRequest(restore): HxHistoryRestoreRequest,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let shell = shell_from_request(Section::Hero, &headers, &query)?;
    render_cached(&state, shell, wants_fragment(hx, restore)).await
}

pub async fn section_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    HxRequest(hx): HxRequest,
    HxHistoryRestoreRequest(restore): HxHistoryRestoreRequest,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let section: Section = slug.parse()?;
    let shell = shell_from_request(section, &headers, &query)?;
    render_cached(&state, shell, wants_fragment(hx, restore)).await
}

// ============================================================================
// Helpers
// ============================================================================

/// Rebuild the shell for this request: theme from storage, menu and modal
/// from the query string.
pub fn shell_from_request(
    section: Section,
    headers: &HeaderMap,
    query: &PageQuery,
) -> Result<ShellState> {
    let mut shell = ShellState::new(stored_theme(headers));
    shell.select(section);

    if query.menu.as_deref() == Some("open") {
        shell.toggle_menu();
    }

    if let Some(raw) = query.project.as_deref() {
        let opened = raw
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| shell.open_project(id));
        if opened.is_none() {
            return Err(SiteError::UnknownProject(raw.to_string()));
        }
    }

    Ok(shell)
}

/// htmx swaps `<main>` for boosted navigation, but a history restore
/// replaces the whole body and needs the full page.
pub fn wants_fragment(hx: bool, history_restore: bool) -> bool {
    hx && !history_restore
}

fn cache_key(shell: &ShellState, fragment: bool) -> String {
    format!(
        "page:{}:{}:{}:{:?}:{}",
        shell.section,
        shell.theme.to_stored(),
        shell.menu_open,
        shell.selected_project,
        fragment
    )
}

pub async fn render_cached(state: &AppState, shell: ShellState, fragment: bool) -> Result<Html<String>> {
    if !state.caching_enabled() {
        return render_section(state, shell, ContactFormView::default(), fragment).map(Html);
    }

    let key = cache_key(&shell, fragment);
    if let Some(cached) = state.pages.get(&key).await {
        tracing::debug!("Cache hit for {}", key);
        return Ok(Html(cached));
    }

    let body = render_section(state, shell, ContactFormView::default(), fragment)?;
    state.pages.insert(key, body.clone()).await;
    Ok(Html(body))
}

/// Render the full page, or just `<main>` (plus out-of-band nav) for htmx.
pub fn render_section(
    state: &AppState,
    shell: ShellState,
    form: ContactFormView,
    fragment: bool,
) -> Result<String> {
    let view = SectionView::new(
        shell,
        state.catalog.profile.clone(),
        state.catalog.channels.clone(),
        form,
    );

    tracing::debug!(
        "Rendering {} ({}, menu_open={}, fragment={})",
        shell.section,
        shell.theme.to_stored(),
        shell.menu_open,
        fragment
    );

    let html = if fragment {
        FragmentTemplate { view, oob: true }.render()?
    } else {
        PageTemplate { view, oob: false }.render()?
    };
    Ok(html)
}
