use tests::{fixtures::*, *};

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tether::{Db, Hook, Query, Record, Result, Value};

#[derive(Clone, Default)]
struct Counts {
    saves: Arc<AtomicUsize>,
    deletes: Arc<AtomicUsize>,
}

#[tether::async_trait]
impl Hook for Counts {
    async fn before_save(&self, _db: &Db, record: &mut Record) -> Result<()> {
        if record.get("published").is_null() {
            record.set("published", false);
        }
        Ok(())
    }

    async fn after_save(&self, _db: &Db, _record: &Record) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn after_delete(&self, _db: &Db, _record: &Record) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

async fn hooks_run_around_saves(s: impl Setup) {
    let counts = Counts::default();
    let mut builder = blog();
    builder.hook("post", counts.clone());
    let (db, _log) = s.setup(builder).await;

    let mut post = create(&db, "post", [("title", "draft".into())]).await.unwrap();
    assert_eq!(post.get("published"), &Value::from(false));

    let stored = assert_ok!(db.find("post", Query::new()).await).unwrap();
    assert_eq!(stored.get("published"), &Value::from(false));

    post.set("title", "final");
    assert!(assert_ok!(db.update(&mut post).await));
    // clean records are not written
    assert!(!assert_ok!(db.update(&mut post).await));

    assert_eq!(counts.saves.load(Ordering::SeqCst), 2);
}

async fn unlink_all_runs_hooks_per_record(s: impl Setup) {
    let counts = Counts::default();
    let mut builder = blog();
    builder.hook("post", counts.clone());
    let (db, log) = s.setup(builder).await;

    let mut user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    for title in ["a", "b", "c"] {
        let mut post = db.new_record("post").unwrap().with("title", title);
        assert_ok!(db.link(&mut user, "posts", &mut post).await);
    }

    log.clear();
    assert_ok!(db.unlink_all(&mut user, "posts", Some(true)).await);

    assert_eq!(counts.deletes.load(Ordering::SeqCst), 3);
    assert_eq!(log.names(), ["query_all", "delete", "delete", "delete"]);
    assert_eq!(assert_ok!(db.query_count(&Query::table("post")).await), 0);
}

async fn hooks_for_unknown_types_fail_the_build(s: impl Setup) {
    let mut builder = blog();
    builder.hook("invoice", Counts::default());

    let err = assert_err!(s.try_setup(builder).await);
    assert!(err.is_invalid_statement());
}

tests!(
    hooks_run_around_saves,
    unlink_all_runs_hooks_per_record,
    hooks_for_unknown_types_fail_the_build,
);
