use tests::{fixtures::*, *};

use tether::{stmt::Row, Condition, Db, Direction, Query, Value};

fn row<const N: usize>(entries: [(&str, Value); N]) -> Row {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

async fn seed_players(db: &Db, players: &[(i64, &str)]) {
    for (code, name) in players {
        db.insert_row("player", row([("team_code", (*code).into()), ("name", (*name).into())]))
            .await
            .unwrap();
    }
}

fn column(rows: &[Row], key: &str) -> Vec<Value> {
    rows.iter()
        .map(|row| row.get(key).cloned().unwrap_or_default())
        .collect()
}

async fn order_by_in_regroups_rows(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    seed_players(&db, &[(9, "a"), (3, "b"), (5, "c"), (3, "d"), (1, "e")]).await;

    let keys = vec![5.into(), 3.into(), 3.into(), 9.into()];
    let query = Query::table("player").order_by_in("team_code", keys.clone());
    let rows = assert_ok!(db.query_all(&query).await);
    assert_eq!(column(&rows, "name"), ["c", "b", "d", "a", "e"]);

    // the first row follows the sequence, not storage order
    let first = assert_some!(assert_ok!(db.query_one(&query).await));
    assert_eq!(first["name"], Value::from("c"));
    let name = assert_ok!(db.query_scalar(&query, "name").await);
    assert_eq!(name, Some(Value::from("c")));

    // an explicit ordering wins
    let query = Query::table("player")
        .order_by_in("team_code", keys)
        .order_by("name", Direction::Desc);
    let rows = assert_ok!(db.query_all(&query).await);
    assert_eq!(column(&rows, "name"), ["e", "d", "c", "b", "a"]);
}

async fn paging_and_projection(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    seed_players(&db, &[(1, "ann"), (3, "bob"), (3, "cat"), (5, "dan")]).await;

    let all = Query::table("player").order_by("name", Direction::Asc);

    let page = assert_ok!(db.query_all(&all.clone().limit(2).offset(1)).await);
    assert_eq!(column(&page, "name"), ["bob", "cat"]);

    let first = assert_ok!(db.query_one(&all).await);
    assert_eq!(first.map(|row| row["name"].clone()), Some(Value::from("ann")));

    let names = assert_ok!(db.query_column(&all, "name").await);
    assert_eq!(names, ["ann", "bob", "cat", "dan"]);

    let last = all.clone().order_by("name", Direction::Desc);
    assert_eq!(
        assert_ok!(db.query_scalar(&last, "name").await),
        Some(Value::from("dan"))
    );

    let nobody = Query::table("player").where_(Condition::eq("name", "zed"));
    assert_none!(assert_ok!(db.query_one(&nobody).await));
    assert_none!(assert_ok!(db.query_scalar(&nobody, "name").await));

    assert_eq!(assert_ok!(db.query_count(&all).await), 4);
    assert_eq!(assert_ok!(db.query_count(&nobody).await), 0);
}

async fn distinct_values_skip_nulls(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    seed_players(&db, &[(1, "ann"), (3, "bob"), (3, "cat"), (5, "dan")]).await;
    db.insert_row("player", row([("name", "eve".into())]))
        .await
        .unwrap();

    let query = Query::table("player");
    let codes = assert_ok!(db.query_distinct(&query, "team_code").await);
    assert_eq!(codes, [Value::from(1), Value::from(3), Value::from(5)]);

    let query = Query::table("player").where_(Condition::ne("team_code", 1));
    let codes = assert_ok!(db.query_distinct(&query, "team_code").await);
    assert_eq!(codes, [Value::from(3), Value::from(5)]);
}

async fn indexed_rows(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    seed_players(&db, &[(1, "ann"), (3, "bob"), (3, "ann")]).await;

    let query = Query::table("player").where_(Condition::eq("team_code", 3));
    let err = assert_err!(db.query_indexed(&query).await);
    assert!(err.is_invalid_statement());

    let rows = assert_ok!(db.query_indexed(&query.index_by("name")).await);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[&Value::from("bob")]["team_code"], 3);

    // later rows win
    let rows = assert_ok!(db.query_indexed(&Query::table("player").index_by("name")).await);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[&Value::from("ann")]["team_code"], 3);
}

async fn bulk_writes(s: impl Setup) {
    let (db, log) = s.setup(teams()).await;
    seed_players(&db, &[(1, "ann"), (3, "bob"), (3, "cat")]).await;
    log.clear();

    let threes = Query::table("player").where_(Condition::eq("team_code", 3));
    let updated = db.update_all(&threes, row([("team_code", 4.into())])).await;
    assert_eq!(assert_ok!(updated), 2);
    assert_eq!(log.names(), ["update_all"]);

    let fours = Query::table("player").where_(Condition::eq("team_code", 4));
    assert_eq!(assert_ok!(db.query_count(&fours).await), 2);

    let deleted = assert_ok!(db.delete_all(&fours).await);
    assert_eq!(deleted, 2);
    assert_eq!(assert_ok!(db.query_count(&Query::table("player")).await), 1);

    // nothing to assign
    assert_eq!(assert_ok!(db.update_all(&Query::table("player"), Row::new()).await), 0);
}

async fn upsert_updates_or_inserts(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    seed_players(&db, &[(1, "ann")]).await;

    let count = db
        .upsert("player", &["name"], row([("name", "ann".into()), ("team_code", 7.into())]))
        .await;
    assert_eq!(assert_ok!(count), 1);

    let count = db
        .upsert("player", &["name"], row([("name", "bob".into()), ("team_code", 8.into())]))
        .await;
    assert_eq!(assert_ok!(count), 1);

    let query = Query::table("player").order_by("name", Direction::Asc);
    let rows = assert_ok!(db.query_all(&query).await);
    assert_eq!(column(&rows, "name"), ["ann", "bob"]);
    assert_eq!(column(&rows, "team_code"), [Value::from(7), Value::from(8)]);

    // keys only, already present
    let count = db.upsert("player", &["name"], row([("name", "bob".into())])).await;
    assert_eq!(assert_ok!(count), 1);
    assert_eq!(assert_ok!(db.query_count(&query).await), 2);
}

async fn records_round_trip(s: impl Setup) {
    let (db, log) = s.setup(blog()).await;

    let mut post = db.new_record("post").unwrap();
    post.set("title", "hello").set("published", false);
    assert!(post.is_new());
    assert_ok!(db.save(&mut post).await);
    assert!(!post.is_new());
    assert!(!post.is_dirty());

    let id = post.id().cloned().unwrap();
    let found = assert_ok!(db.get("post", &id).await);
    assert_eq!(found.get("title"), "hello");
    assert_eq!(found.get("published"), &Value::Bool(false));

    post.set("title", "hello again");
    assert!(post.is_dirty());
    log.clear();
    assert!(assert_ok!(db.update(&mut post).await));
    assert_eq!(log.names(), ["update"]);

    // nothing left to write
    log.clear();
    assert!(!assert_ok!(db.update(&mut post).await));
    assert!(log.is_empty());

    let found = assert_ok!(db.find("post", Query::new().where_(Condition::eq("title", "hello again"))).await);
    assert_eq!(found.and_then(|post| post.id().cloned()), Some(id.clone()));

    assert_ok!(db.delete(&post).await);
    assert_none!(assert_ok!(db.find_by_id("post", &id).await));
    assert!(assert_err!(db.get("post", &id).await).is_record_not_found());
}

async fn table_prefix_applies_to_every_table(s: impl Setup) {
    let mut builder = blog();
    builder.table_name_prefix("app_");
    let (db, _log) = s.setup(builder).await;

    assert_eq!(db.schema().record_type("user").unwrap().table.name, "app_user");

    let mut user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    let mut tag = create(&db, "tag", [("name", "rust".into())]).await.unwrap();
    assert_ok!(db.link(&mut user, "tags", &mut tag).await);

    assert_eq!(assert_ok!(db.query_count(&Query::table("app_user_tags")).await), 1);
    let tags = assert_ok!(db.related(&mut user, "tags").await);
    assert_eq!(tags.len(), 1);
}

tests!(
    order_by_in_regroups_rows,
    paging_and_projection,
    distinct_values_skip_nulls,
    indexed_rows,
    bulk_writes,
    upsert_updates_or_inserts,
    records_round_trip,
    table_prefix_applies_to_every_table,
);
