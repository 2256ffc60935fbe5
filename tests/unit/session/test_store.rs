use chrono::{Duration, Utc};
use manager_client::config::Config;
use manager_client::session::store::{ManagerSession, SessionStore};

fn store_for(base_url: &str) -> SessionStore {
    let config = Config::with_base_url(base_url);
    SessionStore::new(&config).expect("session store")
}

#[test]
fn new_store_holds_no_session() {
    let store = store_for("http://127.0.0.1:8080");

    assert!(!store.is_authenticated());
    assert_eq!(store.session_id(), None);
    assert_eq!(store.cookie_header(), None);
}

#[test]
fn open_sets_cookie_and_snapshot() {
    let store = store_for("http://127.0.0.1:8080");
    store.open("sess-abc");

    assert!(store.is_authenticated());
    assert_eq!(store.session_id(), Some(String::from("sess-abc")));

    let header = store.cookie_header().expect("cookie header");
    assert!(header.contains("session_id=sess-abc"));
}

#[test]
fn close_removes_cookie_and_snapshot() {
    let store = store_for("http://127.0.0.1:8080");
    store.open("sess-abc");
    store.close();

    assert!(!store.is_authenticated());
    assert_eq!(store.session_id(), None);
    assert_eq!(store.cookie_header(), None);
}

#[test]
fn close_without_open_is_a_no_op() {
    let store = store_for("http://127.0.0.1:8080");
    store.close();

    assert!(!store.is_authenticated());
}

#[test]
fn reopen_replaces_the_previous_session() {
    let store = store_for("http://127.0.0.1:8080");
    store.open("first");
    store.open("second");

    assert_eq!(store.session_id(), Some(String::from("second")));
    let header = store.cookie_header().expect("cookie header");
    assert!(header.contains("session_id=second"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let config = Config::with_base_url("not a url");
    assert!(SessionStore::new(&config).is_err());
}

#[test]
fn expired_snapshot_reads_as_absent() {
    let mut config = Config::with_base_url("http://127.0.0.1:8080");
    config.session.ttl_secs = 0;
    let store = SessionStore::new(&config).expect("session store");

    store.open("sess-abc");
    assert!(!store.is_authenticated());
    assert_eq!(store.session_id(), None);
}

#[test]
fn session_expiry_math() {
    let now = Utc::now();
    let session = ManagerSession {
        session_id: String::from("sess-abc"),
        created_at: now - Duration::days(2),
        expires_at: now - Duration::days(1),
    };

    assert!(session.is_expired(None));
    assert!(session.seconds_until_expiry() < 0);

    let live = ManagerSession {
        session_id: String::from("sess-def"),
        created_at: now,
        expires_at: now + Duration::days(1),
    };

    assert!(!live.is_expired(None));
    // one day minus the margin is still in the future
    assert!(!live.is_expired(Some(60)));
    assert!(live.seconds_until_expiry() > 0);
}
