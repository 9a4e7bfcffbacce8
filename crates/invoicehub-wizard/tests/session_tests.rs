use invoicehub_wizard::*;

const DASHBOARD_ROUTES: [Route; 3] = [Route::Dashboard, Route::InvoiceGenerator, Route::PdfTools];

#[test]
fn test_no_flag_redirects_to_root() {
    let store = MemoryStore::new();
    for route in DASHBOARD_ROUTES {
        assert_eq!(
            SessionGate::check(&store, route),
            GateDecision::Redirect(Route::Root)
        );
    }
    assert_eq!(
        SessionGate::check(&store, Route::Root),
        GateDecision::Render(Route::Root)
    );
}

#[test]
fn test_only_literal_true_counts() {
    for value in ["", "false", "TRUE", "True", "1", "yes", " true"] {
        let store = MemoryStore::new().with_entry(SESSION_KEY, value);
        assert!(!SessionGate::is_signed_in(&store), "{value:?} must not sign in");
        assert_eq!(
            SessionGate::check(&store, Route::PdfTools),
            GateDecision::Redirect(Route::Root)
        );
    }
}

#[test]
fn test_flag_renders_children() {
    let store = MemoryStore::new().with_entry(SESSION_KEY, "true");
    assert_eq!(
        SessionGate::check(&store, Route::InvoiceGenerator),
        GateDecision::Render(Route::InvoiceGenerator)
    );
    assert_eq!(
        SessionGate::check(&store, Route::PdfTools),
        GateDecision::Render(Route::PdfTools)
    );
    assert_eq!(
        SessionGate::check(&store, Route::Dashboard),
        GateDecision::Redirect(Route::InvoiceGenerator)
    );
    assert!(SessionGate::require(&store).is_ok());
}

#[test]
fn test_login_and_logout() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        SessionGate::require(&store),
        Err(WizardError::Unauthenticated)
    ));

    assert_eq!(SessionGate::login(&mut store), Route::InvoiceGenerator);
    assert_eq!(store.get(SESSION_KEY).as_deref(), Some(SESSION_MARKER));

    assert_eq!(SessionGate::logout(&mut store), Route::Root);
    assert_eq!(store.get(SESSION_KEY), None);
    assert_eq!(
        SessionGate::check(&store, Route::InvoiceGenerator),
        GateDecision::Redirect(Route::Root)
    );
}

#[test]
fn test_route_paths() {
    for route in [Route::Root, Route::Dashboard, Route::InvoiceGenerator, Route::PdfTools] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/dashboard/pdf-tools/"), Some(Route::PdfTools));
    assert_eq!(Route::from_path("/settings"), None);
    assert_eq!(Route::Dashboard.resolve(true), Route::InvoiceGenerator);
    assert_eq!(Route::Root.resolve(false), Route::Root);
}

#[tokio::test]
async fn test_file_store_persists_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut store = FileStore::open(&path).await.unwrap();
    assert!(!SessionGate::is_signed_in(&store));
    SessionGate::login(&mut store);
    store.save().await.unwrap();

    let mut reopened = FileStore::open(&path).await.unwrap();
    assert!(SessionGate::is_signed_in(&reopened));
    SessionGate::logout(&mut reopened);
    reopened.save().await.unwrap();

    let reopened = FileStore::open(&path).await.unwrap();
    assert!(!SessionGate::is_signed_in(&reopened));
}

#[tokio::test]
async fn test_file_store_rejects_garbage() {
    let file = tempfile::NamedTempFile::new().unwrap();
    tokio::fs::write(file.path(), b"not json").await.unwrap();
    assert!(matches!(
        FileStore::open(file.path()).await,
        Err(WizardError::Config(_))
    ));
}
