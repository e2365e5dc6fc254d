//! SQLite session store survives reopening; the context restores from it.

use eventbook_client_core::session::SessionStore;
use eventbook_client_core::{Role, SessionContext, SqliteSessionStore};

use crate::common::test_helpers::session;

#[test]
fn session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let ctx = SessionContext::new(Box::new(SqliteSessionStore::open(dir.path()).unwrap()));
        assert!(!ctx.is_signed_in());
        ctx.sign_in(session(Role::Admin)).unwrap();
    }

    let reopened = SqliteSessionStore::open(dir.path()).unwrap();
    let restored = reopened.load().unwrap().expect("saved session");
    assert_eq!(restored.token, "test-token");

    let ctx = SessionContext::new(Box::new(reopened));
    assert!(ctx.is_admin());
    ctx.sign_out().unwrap();

    let again = SqliteSessionStore::open(dir.path()).unwrap();
    assert!(again.load().unwrap().is_none());
}
