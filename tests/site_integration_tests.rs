// Site Integration Tests
//
// Drive the full router in-process: section rendering, theme persistence,
// contact submission, htmx fragments and error pages.
// Run with: cargo test --test site_integration_tests

#[cfg(feature = "web")]
mod site_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use portfolio_site::{create_router, AppState, Section, SiteConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app
    fn create_test_app() -> axum::Router {
        create_router(AppState::new(SiteConfig::default()))
    }

    // Helper: Read response body as text
    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    async fn get(uri: &str, cookie: Option<&str>) -> axum::response::Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        create_test_app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> axum::response::Response {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        create_test_app()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    fn section_marker(section: Section) -> String {
        format!("<section id=\"{}\"", section.slug())
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Section Navigation
    // =========================================================================

    #[tokio::test]
    async fn test_each_section_renders_alone() {
        for section in Section::ALL {
            let response = get(section.path(), None).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", section);

            let html = body_text(response).await;
            for other in Section::ALL {
                let present = html.contains(&section_marker(other));
                assert_eq!(present, other == section, "rendering {} / checking {}", section, other);
            }
            assert!(html.contains(&format!(
                "data-section=\"{}\" aria-current=\"page\"",
                section.slug()
            )));
        }
    }

    #[tokio::test]
    async fn test_unknown_section_is_404() {
        let response = get("/blog", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Unknown section: blog"));
    }

    #[tokio::test]
    async fn test_arrows_link_neighbours() {
        let html = body_text(get("/portfolio", None).await).await;
        assert!(html.contains("href=\"/about\" aria-label=\"Sobre Mí\""));
        assert!(html.contains("href=\"/contact\" aria-label=\"Contacto\""));

        let html = body_text(get("/contact", None).await).await;
        assert!(html.contains("href=\"/\" aria-label=\"Inicio\""));
    }

    #[tokio::test]
    async fn test_mobile_menu_toggle() {
        let closed = body_text(get("/about", None).await).await;
        assert!(!closed.contains("id=\"mobile-menu\""));
        assert!(closed.contains("href=\"/about?menu=open\""));

        let open = body_text(get("/about?menu=open", None).await).await;
        assert!(open.contains("id=\"mobile-menu\""));
    }

    #[tokio::test]
    async fn test_htmx_request_gets_fragment() {
        let request = Request::builder()
            .uri("/about")
            .header("HX-Request", "true")
            .body(Body::empty())
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<main id=\"main\""));
        assert!(html.contains("hx-swap-oob=\"true\""));
        assert!(html.contains(&section_marker(Section::About)));
        // htmx picks the tab title out of the swapped markup
        assert!(html.contains(&format!("| {}</title>", Section::About.label())));
    }

    #[tokio::test]
    async fn test_htmx_history_restore_gets_full_page() {
        let request = Request::builder()
            .uri("/about")
            .header("HX-Request", "true")
            .header("HX-History-Restore-Request", "true")
            .body(Body::empty())
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("action=\"/theme\""));
        assert!(!html.contains("hx-swap-oob"));
        assert!(html.contains(&section_marker(Section::About)));
    }

    #[tokio::test]
    async fn test_section_pages_vary_on_hx_request() {
        for uri in ["/", "/about", "/contact"] {
            let response = get(uri, None).await;
            let varies = response
                .headers()
                .get_all(header::VARY)
                .iter()
                .any(|v| v.to_str().map_or(false, |v| v.contains("hx-request")));
            assert!(varies, "{} is missing Vary: hx-request", uri);
        }
    }

    // =========================================================================
    // Section 3: Theme Preference
    // =========================================================================

    #[tokio::test]
    async fn test_default_theme_is_light() {
        let html = body_text(get("/", None).await).await;
        assert!(html.contains("/logo/logo.png"));
        assert!(!html.contains("/logo/logoblack.png"));
    }

    #[tokio::test]
    async fn test_theme_persists_across_reload() {
        let response = post_form("/theme", "return_to=%2Fportfolio", Some("darkMode=false")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/portfolio");

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
        assert!(set_cookie.starts_with("darkMode=true"));

        // Simulated reload: the browser sends the stored value back
        let cookie = set_cookie.split(';').next().unwrap();
        let html = body_text(get("/portfolio", Some(cookie)).await).await;
        assert!(html.contains("/logo/logoblack.png"));
        assert!(html.contains("bg-gray-900 text-white"));
    }

    #[tokio::test]
    async fn test_double_toggle_restores_light() {
        let first = post_form("/theme", "", None).await;
        let cookie = first.headers()[header::SET_COOKIE].to_str().unwrap().split(';').next().unwrap().to_string();
        assert_eq!(cookie, "darkMode=true");

        let second = post_form("/theme", "", Some(&cookie)).await;
        let cookie = second.headers()[header::SET_COOKIE].to_str().unwrap().split(';').next().unwrap().to_string();
        assert_eq!(cookie, "darkMode=false");

        let light = body_text(get("/", None).await).await;
        let restored = body_text(get("/", Some(&cookie)).await).await;
        assert_eq!(light, restored);
    }

    #[tokio::test]
    async fn test_theme_redirect_rejects_offsite_target() {
        let response = post_form("/theme", "return_to=https%3A%2F%2Fevil.example", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_htmx_theme_toggle_refreshes() {
        let request = Request::builder()
            .method("POST")
            .uri("/theme")
            .header("HX-Request", "true")
            .body(Body::empty())
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["HX-Refresh"], "true");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    // =========================================================================
    // Section 4: Project Gallery
    // =========================================================================

    #[tokio::test]
    async fn test_gallery_lists_projects() {
        let html = body_text(get("/portfolio", None).await).await;
        for id in 1..=6 {
            assert!(html.contains(&format!("data-project=\"{}\"", id)));
        }
        assert!(!html.contains("id=\"project-modal\""));
    }

    #[tokio::test]
    async fn test_project_modal() {
        let html = body_text(get("/portfolio?project=3", None).await).await;
        assert!(html.contains("id=\"project-modal\""));
        assert!(html.contains("Packaging Sostenible"));

        let response = get("/portfolio?project=42", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 5: Contact Form
    // =========================================================================

    #[tokio::test]
    async fn test_contact_submit_stays_on_page() {
        let response = post_form(
            "/contact",
            "name=Ana&email=ana%40example.com&message=Hola%2C+necesito+un+logo",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.headers().contains_key(header::LOCATION));

        let html = body_text(response).await;
        assert!(html.contains("id=\"contact-sent\""));
        assert!(html.contains(&section_marker(Section::Contact)));
    }

    #[tokio::test]
    async fn test_contact_whitespace_message_is_accepted() {
        let response = post_form(
            "/contact",
            "name=Ana&email=ana%40example.com&message=+++",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("id=\"contact-sent\""));
    }

    #[tokio::test]
    async fn test_contact_missing_fields_echo_draft() {
        let response = post_form("/contact", "name=Ana&email=+&message=", None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("Completa los campos: Email, Mensaje"));
        assert!(html.contains("value=\"Ana\""));
    }

    #[tokio::test]
    async fn test_contact_draft_is_escaped() {
        let response = post_form("/contact", "name=%3Cscript%3E&email=", None).await;
        let html = body_text(response).await;
        assert!(!html.contains("value=\"<script>\""));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Section 6: Page Cache
    // =========================================================================

    async fn send(app: &axum::Router, request: Request<Body>) -> axum::response::Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn contact_get() -> Request<Body> {
        Request::builder().uri("/contact").body(Body::empty()).unwrap()
    }

    fn contact_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_submitted_draft_never_reaches_cache() {
        let state = AppState::new(SiteConfig::default());
        let app = create_router(state.clone());

        let first = body_text(send(&app, contact_get()).await).await;

        let rejected = send(&app, contact_post("name=Zorro+Plateado&email=&message=")).await;
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(rejected).await.contains("Zorro Plateado"));

        // Served from the cache, identical to the first render
        let second = body_text(send(&app, contact_get()).await).await;
        assert_eq!(first, second);
        assert!(!second.contains("Zorro Plateado"));
        assert!(!second.contains("id=\"contact-missing\""));

        state.pages.run_pending_tasks().await;
        assert_eq!(state.pages.entry_count(), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let config = SiteConfig::from_lookup(|key| {
            (key == "PAGE_CACHE_TTL_SECS").then(|| "0".to_string())
        })
        .unwrap();
        let state = AppState::new(config);
        assert!(!state.caching_enabled());

        let app = create_router(state.clone());
        let first = body_text(send(&app, contact_get()).await).await;
        let second = body_text(send(&app, contact_get()).await).await;
        assert_eq!(first, second);
        assert!(first.contains(&section_marker(Section::Contact)));

        state.pages.run_pending_tasks().await;
        assert_eq!(state.pages.entry_count(), 0);
    }
}
