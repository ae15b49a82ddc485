use std::sync::{Arc, Mutex};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use leptos::prelude::{GetUntracked, Owner};

use super::*;
use crate::testing::MemoryStorage;

fn session(token: Option<&str>, role: Option<&str>, authenticated: bool) -> Session {
    Session { token: token.map(str::to_owned), role: role.map(str::to_owned), authenticated }
}

fn jwt(role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"id":1,"email":"a@b.co","role":"{role}","exp":1}}"#));
    format!("{header}.{payload}.sig")
}

// =============================================================
// route_access
// =============================================================

#[test]
fn anonymous_session_is_redirected() {
    assert_eq!(route_access(&Session::default(), None), RouteAccess::Redirect);
    assert_eq!(route_access(&Session::default(), Some(ADMIN_ROLE)), RouteAccess::Redirect);
}

#[test]
fn authenticated_flag_without_token_is_redirected() {
    let broken = session(None, Some(ADMIN_ROLE), true);
    assert_eq!(route_access(&broken, Some(ADMIN_ROLE)), RouteAccess::Redirect);
}

#[test]
fn non_admin_is_denied_admin_routes() {
    let manager = session(Some("t"), Some("MANAGER"), true);
    assert_eq!(route_access(&manager, Some(ADMIN_ROLE)), RouteAccess::Denied);
    assert_eq!(route_access(&manager, None), RouteAccess::Granted);
}

#[test]
fn admin_is_granted() {
    let admin = session(Some("t"), Some(ADMIN_ROLE), true);
    assert_eq!(route_access(&admin, Some(ADMIN_ROLE)), RouteAccess::Granted);
}

#[test]
fn denied_check_leaves_session_unchanged() {
    let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
    store.login("t", "MANAGER").unwrap();
    let before = store.snapshot();

    assert_eq!(route_access(&store.snapshot(), Some(ADMIN_ROLE)), RouteAccess::Denied);
    assert_eq!(store.snapshot(), before);
}

// =============================================================
// Landing routes
// =============================================================

#[test]
fn landing_route_depends_on_role() {
    assert_eq!(landing_route(ADMIN_ROLE), "/hotels");
    assert_eq!(landing_route("MANAGER"), "/");
    assert_eq!(landing_route(""), "/");
}

#[test]
fn complete_login_stores_admin_session_and_lands_on_hotels() {
    let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
    let token = jwt(ADMIN_ROLE);

    assert_eq!(complete_login(&store, &token), "/hotels");
    let snapshot = store.snapshot();
    assert!(snapshot.authenticated);
    assert_eq!(snapshot.token.as_deref(), Some(token.as_str()));
    assert_eq!(snapshot.role(), Some(ADMIN_ROLE));
}

#[test]
fn complete_login_lands_other_roles_on_home() {
    let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
    assert_eq!(complete_login(&store, &jwt("RECEPTIONIST")), "/");
    assert_eq!(store.snapshot().role(), Some("RECEPTIONIST"));
}

#[test]
fn complete_login_with_undecodable_token_falls_back_home_anonymous() {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::restore(storage.clone());

    assert_eq!(complete_login(&store, "not-a-jwt"), "/");
    assert!(!store.is_authenticated());
    assert_eq!(storage.writes(), 0);
}

// =============================================================
// install_route_guard
// =============================================================

/// Run `body` on a tokio `LocalSet` with the reactive executor installed.
async fn with_reactive_runtime<F, Fut>(body: F)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let _ = any_spawner::Executor::init_tokio();
    tokio::task::LocalSet::new().run_until(body()).await;
}

async fn settle() {
    for _ in 0..8 {
        any_spawner::Executor::tick().await;
    }
}

fn recording_navigate() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let navs = Arc::new(Mutex::new(Vec::new()));
    let recorder = {
        let navs = navs.clone();
        move |path: &str, _: NavigateOptions| navs.lock().unwrap().push(path.to_owned())
    };
    (navs, recorder)
}

#[tokio::test]
async fn guard_redirects_when_session_is_cleared_after_install() {
    with_reactive_runtime(|| async {
        let owner = Owner::new();
        let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
        store.login("t", ADMIN_ROLE).unwrap();
        let (navs, navigate) = recording_navigate();

        let access = owner.with(|| install_route_guard(store.clone(), Some(ADMIN_ROLE), navigate));
        settle().await;
        assert_eq!(access.get_untracked(), RouteAccess::Granted);
        assert!(navs.lock().unwrap().is_empty());

        store.logout();
        settle().await;
        assert_eq!(access.get_untracked(), RouteAccess::Redirect);
        assert_eq!(*navs.lock().unwrap(), vec![LOGIN_ROUTE.to_owned()]);
    })
    .await;
}

#[tokio::test]
async fn guard_grants_after_login_without_repeating_redirect() {
    with_reactive_runtime(|| async {
        let owner = Owner::new();
        let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
        let (navs, navigate) = recording_navigate();

        let access = owner.with(|| install_route_guard(store.clone(), Some(ADMIN_ROLE), navigate));
        settle().await;
        assert_eq!(access.get_untracked(), RouteAccess::Redirect);

        store.logout();
        settle().await;
        store.login("t", "MANAGER").unwrap();
        settle().await;
        assert_eq!(access.get_untracked(), RouteAccess::Denied);

        store.login("t", ADMIN_ROLE).unwrap();
        settle().await;
        assert_eq!(access.get_untracked(), RouteAccess::Granted);
        assert_eq!(*navs.lock().unwrap(), vec![LOGIN_ROUTE.to_owned()]);
    })
    .await;
}
