// SPDX-License-Identifier: MPL-2.0
use candogmatic::app::{Message, Site};
use candogmatic::config::{self, Config};
use candogmatic::dom::{Document, Element, NodeId, Page, Selector};
use candogmatic::i18n::{EmbeddedSource, HttpSource, Locale, Resolver};
use candogmatic::storage::{FileStore, KeyValueStore, MemoryStore, PREFERRED_LANG_KEY};
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn write_catalogs(dir: &std::path::Path) {
    std::fs::write(
        dir.join("ca.json"),
        r#"{"nav":{"home":"Inici"},"warning":{"message":"En obres"}}"#,
    )
    .expect("Failed to write ca catalog");
    std::fs::write(
        dir.join("es.json"),
        r#"{"nav":{"home":"Inicio"},"warning":{"message":"En obras"}}"#,
    )
    .expect("Failed to write es catalog");
}

fn translated_page() -> (Page, NodeId, NodeId) {
    let mut page = Page::new();
    let home = page.append_to_body(Element::new("a").with_attr("data-i18n", "nav.home"));
    let toggle = page.append_to_body(Element::new("button").with_id("languageToggle"));
    let current = page.append(toggle, Element::new("span").with_class("current-lang"));
    page.append_to_body(Element::new("div").with_id("languageDropdown"));
    (page, home, current)
}

#[tokio::test]
async fn configured_directory_and_file_store_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let catalogs = dir.path().join("lang");
    std::fs::create_dir_all(&catalogs).expect("Failed to create catalog dir");
    write_catalogs(&catalogs);

    let config_path = dir.path().join("settings.toml");
    let written = Config {
        catalog_dir: Some(catalogs),
        default_locale: Some("ca".to_string()),
        ..Config::default()
    };
    config::save_to_path(&written, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, written);

    let storage_path = dir.path().join("data").join("storage.cbor");

    // First visit: browser prefers Catalan, visitor switches to Spanish
    {
        let store = FileStore::open_at(&storage_path).expect("Failed to open store");
        let (page, home, current) = translated_page();
        let mut site = Site::from_config(&loaded, store, page);
        assert_eq!(site.start(Some("ca-ES"), Instant::now()).await, Locale::Ca);
        assert_eq!(site.document().text(home), "Inici");

        site.update(Message::ChangeLanguage("es".to_string())).await;
        assert_eq!(site.document().text(home), "Inicio");
        assert_eq!(site.document().text(current), "ES");
    }

    // Second visit: the stored preference wins over the browser language
    let store = FileStore::open_at(&storage_path).expect("Failed to reopen store");
    assert_eq!(store.get(PREFERRED_LANG_KEY).as_deref(), Some("es"));
    let (page, home, _) = translated_page();
    let mut site = Site::from_config(&loaded, store, page);
    assert_eq!(site.start(Some("fr-FR"), Instant::now()).await, Locale::Es);
    assert_eq!(site.document().text(home), "Inicio");
    assert_eq!(site.document().language().as_deref(), Some("es"));
}

#[tokio::test]
async fn bundled_catalogs_translate_french_visitor() {
    let mut resolver = Resolver::new(EmbeddedSource, Locale::Ca);
    let (mut page, home, _) = translated_page();

    let locale = resolver
        .initialize(&MemoryStore::new(), Some("fr-FR"), &mut page)
        .await;

    assert_eq!(locale, Locale::Fr);
    assert_eq!(page.text(home), "Accueil");
    assert_eq!(resolver.resolve("nav.home"), "Accueil");
    assert_eq!(resolver.resolve("nav.missing"), "nav.missing");
}

/// Serves `lang/ca.json` and answers 404 for everything else.
async fn serve_catalogs(listener: TcpListener, requests: usize) -> Vec<String> {
    let mut paths = Vec::new();
    for _ in 0..requests {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let mut buffer = vec![0_u8; 4096];
        let read = socket.read(&mut buffer).await.expect("read failed");
        let request = String::from_utf8_lossy(&buffer[..read]).to_string();
        let path = request
            .split_whitespace()
            .nth(1)
            .unwrap_or_default()
            .to_string();

        let response = if path.ends_with("/lang/ca.json") {
            let body = r#"{"nav":{"home":"Inici"}}"#;
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            )
        } else {
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
        };
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write failed");
        socket.shutdown().await.ok();
        paths.push(path);
    }
    paths
}

#[tokio::test]
async fn http_fallback_serves_default_catalog_under_requested_label() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let address = listener.local_addr().expect("no local address");
    let server = tokio::spawn(serve_catalogs(listener, 2));

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    let source = HttpSource::with_client(client, format!("http://{address}/site"));
    let mut resolver = Resolver::new(source, Locale::Ca);
    let (mut page, home, current) = translated_page();
    let store = MemoryStore::with_entries([(PREFERRED_LANG_KEY, "en")]);

    let locale = resolver.initialize(&store, None, &mut page).await;

    assert_eq!(locale, Locale::En);
    assert_eq!(resolver.translations().catalog_locale(), Some(Locale::Ca));
    assert_eq!(page.text(home), "Inici");
    assert_eq!(page.text(current), "EN");

    let paths = server.await.expect("server task panicked");
    assert_eq!(paths, ["/site/lang/en.json", "/site/lang/ca.json"]);
}

fn donation_page() -> (Page, NodeId) {
    let mut page = Page::new();
    let form = page.append_to_body(Element::new("form").with_id("donationForm"));
    for (id, value) in [
        ("fullName", "Anna Puig"),
        ("email", "anna@example.cat"),
        ("confirmEmail", "anna@example.cat"),
        ("donationAmount", "15"),
    ] {
        page.append(
            form,
            Element::new("input")
                .with_id(id)
                .with_attr("name", id)
                .with_attr("required", "")
                .with_attr("value", value),
        );
    }
    page.append(
        form,
        Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr("name", "consent")
            .with_attr("checked", ""),
    );
    page.append(
        form,
        Element::new("input")
            .with_attr("type", "radio")
            .with_attr("name", "paymentMethod")
            .with_attr("value", "stripe")
            .with_attr("checked", ""),
    );
    page.append(
        form,
        Element::new("textarea")
            .with_id("message")
            .with_attr("value", "Endavant!"),
    );
    page.append(form, Element::new("span").with_id("charCount"));
    (page, form)
}

#[tokio::test]
async fn donation_redirects_to_checkout_after_delay() {
    let (page, form) = donation_page();
    let mut site = Site::new(
        Resolver::new(EmbeddedSource, Locale::Ca),
        MemoryStore::new(),
        page,
    );
    let start = Instant::now();
    site.start(Some("ca"), start).await;
    let count = site
        .document()
        .element_by_id("charCount")
        .expect("counter present");
    assert_eq!(site.document().text(count), "9");

    site.update(Message::Submit(form)).await;

    let toasts = site.document().select(&Selector::class("notification"));
    assert_eq!(toasts.len(), 1);
    assert!(site.document().has_class(toasts[0], "success"));
    assert!(site.document().opened_windows().is_empty());

    site.update(Message::Tick(start + Duration::from_millis(2000)))
        .await;

    assert_eq!(
        site.document().opened_windows(),
        ["https://stripe.com/checkout".to_string()]
    );
    assert_eq!(site.document().text(count), "0");
    let amount = site
        .document()
        .element_by_id("donationAmount")
        .expect("amount present");
    assert_eq!(site.document().value(amount), "");
}
