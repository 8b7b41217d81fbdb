use tests::{fixtures::*, *};

use serde_json::json;
use tether::{stmt::TestOp, Condition, Db, Query, Value};

async fn seed_users(db: &Db) -> Vec<tether::Record> {
    let mut users = vec![];
    for name in ["Alice", "alfred", "Bob", ""] {
        users.push(create(db, "user", [("name", name.into())]).await.unwrap());
    }
    // no name at all
    users.push(create(db, "user", []).await.unwrap());
    users
}

async fn names(db: &Db, condition: Condition) -> Vec<Value> {
    let users = db.find_all("user", Query::new().where_(condition)).await.unwrap();
    let users: Vec<_> = users.iter().collect();
    attr_values(&users, "name")
}

async fn like_is_anchored_and_case_sensitive(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;
    seed_users(&db).await;

    assert_eq!(names(&db, Condition::like("name", "Al%")).await, ["Alice"]);
    assert_eq!(names(&db, Condition::like("name", "%b")).await, ["Bob"]);
    assert_eq!(
        names(&db, Condition::like("name", "%l%")).await,
        ["Alice", "alfred"]
    );
    assert_eq!(names(&db, Condition::like("name", "alfred")).await, ["alfred"]);
    assert_empty!(names(&db, Condition::like("name", "alf")).await);

    // null and missing names do not match, so they pass the negation
    let rest = names(&db, Condition::not_like("name", "%l%")).await;
    assert_eq!(rest, [Value::from("Bob"), Value::from(""), Value::Null]);
}

async fn empty_and_presence(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;
    seed_users(&db).await;

    let empty = names(&db, Condition::test("name", TestOp::Empty)).await;
    assert_eq!(empty, [Value::from(""), Value::Null]);

    let not_empty = names(&db, Condition::test("name", TestOp::NotEmpty)).await;
    assert_eq!(not_empty, ["Alice", "alfred", "Bob"]);

    let present = names(&db, Condition::test("name", TestOp::NotNull)).await;
    assert_eq!(present.len(), 4);
}

async fn id_values_are_normalized(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;
    let users = seed_users(&db).await;
    let alice = users[0].get("id").clone();

    assert_eq!(names(&db, Condition::id("id", alice.clone())).await, ["Alice"]);
    assert_eq!(names(&db, Condition::not_id("id", alice.clone())).await.len(), 4);

    // identities the backend cannot hold match nothing
    assert_empty!(names(&db, Condition::id("id", "not an id")).await);
    assert_eq!(names(&db, Condition::not_id("id", "not an id")).await.len(), 5);

    let mixed = Value::List(vec![alice, Value::from("not an id")]);
    assert_eq!(names(&db, Condition::id("id", mixed)).await, ["Alice"]);

    let found = assert_ok!(db.find_by_id("user", users[2].get("id")).await);
    assert_eq!(found.map(|user| user.get("name").clone()), Some(Value::from("Bob")));

    let err = assert_err!(db.get("user", "not an id").await);
    assert!(err.is_record_not_found());
}

async fn id_null_semantics(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;

    let mut ids = vec![];
    for title in ["one", "two"] {
        let post = create(&db, "post", [("title", title.into())]).await.unwrap();
        ids.push(post.get("id").clone());
    }

    for (body, post_id) in [("a", ids[0].clone()), ("b", ids[1].clone()), ("c", Value::Null)] {
        create(&db, "comment", [("body", body.into()), ("post_id", post_id)])
            .await
            .unwrap();
    }
    // `post_id` never written
    create(&db, "comment", [("body", "d".into())]).await.unwrap();

    let bodies = |condition: Condition| {
        let db = db.clone();
        async move {
            let query = Query::new().where_(condition).order_by("body", tether::Direction::Asc);
            let comments = db.find_all("comment", query).await.unwrap();
            let comments: Vec<_> = comments.iter().collect();
            attr_values(&comments, "body")
        }
    };

    // a null identity is a presence test
    assert_eq!(bodies(Condition::not_id("post_id", Value::Null)).await, ["a", "b"]);
    assert_eq!(
        bodies(Condition::not_id("post_id", Value::List(vec![Value::Null, ids[0].clone()]))).await,
        ["b"]
    );

    // a stored null and a missing field differ only where the backend can
    // tell them apart
    let null = bodies(Condition::id("post_id", Value::Null)).await;
    let missing = bodies(Condition::test("post_id", TestOp::NotExists)).await;
    if s.capability().distinguishes_missing {
        assert_eq!(null, ["c"]);
        assert_eq!(missing, ["d"]);
    } else {
        assert_eq!(null, ["c", "d"]);
        assert_eq!(missing, ["c", "d"]);
    }

    let either = bodies(Condition::id("post_id", Value::List(vec![Value::Null, ids[0].clone()]))).await;
    assert_eq!(either.first(), Some(&Value::from("a")));
    assert!(either.contains(&Value::from("c")));
}

async fn ranges_and_membership(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    for (code, name) in [(1, "ann"), (2, "bob"), (3, "cat"), (4, "dan")] {
        create(&db, "player", [("team_code", code.into()), ("name", name.into())])
            .await
            .unwrap();
    }
    create(&db, "player", [("name", "eve".into())]).await.unwrap();

    let players = |condition: Condition| {
        let db = db.clone();
        async move {
            let rows = db.query_all(&Query::table("player").where_(condition)).await.unwrap();
            rows.into_iter().map(|row| row["name"].clone()).collect::<Vec<_>>()
        }
    };

    assert_eq!(players(Condition::between("team_code", 2, 3)).await, ["bob", "cat"]);
    assert_eq!(
        players(Condition::not_between("team_code", 2, 3)).await,
        ["ann", "dan", "eve"]
    );
    assert_eq!(
        players(Condition::hash([("team_code", Value::List(vec![1.into(), 4.into()]))])).await,
        ["ann", "dan"]
    );
    assert_empty!(players(Condition::in_list("team_code", Value::List(vec![]))).await);
    assert_eq!(
        players(Condition::not_in_list("team_code", Value::List(vec![]))).await.len(),
        5
    );
    assert_eq!(
        players(Condition::ne("team_code", 1)).await,
        ["bob", "cat", "dan", "eve"]
    );
    assert_empty!(players(Condition::False).await);

    let parsed = assert_ok!(Condition::parse(&json!([
        "or",
        ["equal", "name", "ann"],
        ["and", {"team_code": [3, 4]}, ["not", ["like", "name", "d%"]]]
    ])));
    assert_eq!(players(parsed).await, ["ann", "cat"]);
}

async fn filters_prune_empty_values(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    for (code, name) in [(1, "ann"), (3, "bob"), (3, "cat")] {
        create(&db, "player", [("team_code", code.into()), ("name", name.into())])
            .await
            .unwrap();
    }

    let condition = assert_ok!(Condition::parse(&json!({"team_code": 3, "name": []})));
    let query = Query::table("player").filter(condition);
    assert_eq!(assert_ok!(db.query_count(&query).await), 2);

    // prunes to no filter at all
    let condition = assert_ok!(Condition::parse(&json!(["and", {"name": ""}, ["between", "team_code", "", 9]])));
    let query = Query::table("player").filter(condition);
    assert!(!query.has_condition());
    assert_eq!(assert_ok!(db.query_count(&query).await), 3);
}

async fn predicates_are_pruned_then_compiled(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;

    let condition = assert_ok!(Condition::parse(&json!({"name": "ann", "bio": ""})));
    let predicate = assert_some!(assert_ok!(db.build_condition(&condition)));

    if let Some((fragment, params)) = predicate.as_sql() {
        assert!(fragment.contains(r#""name" = ?"#), "{fragment}");
        assert_eq!(params, [Value::from("ann")]);
        assert!(!fragment.contains("bio"));
    } else {
        let document = assert_some!(predicate.as_document()).to_string();
        assert!(document.contains("$eq"), "{document}");
        assert!(!document.contains("bio"));
    }

    let empty = assert_ok!(Condition::parse(&json!(["or", {"name": ""}, ["in", "id", []]])));
    assert_none!(assert_ok!(db.build_condition(&empty)));
}

async fn not_keeps_null_and_missing_fields(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;
    seed_users(&db).await;

    let pairs = [
        (Condition::not(Condition::eq("name", "Bob")), Condition::ne("name", "Bob")),
        (
            Condition::not(Condition::in_list("name", vec!["Bob"])),
            Condition::not_in_list("name", vec!["Bob"]),
        ),
        (Condition::not(Condition::like("name", "B%")), Condition::not_like("name", "B%")),
    ];

    for (negated, native) in pairs {
        let expected = names(&db, native).await;
        assert_eq!(
            expected,
            [Value::from("Alice"), "alfred".into(), "".into(), Value::Null]
        );
        assert_eq!(names(&db, negated).await, expected);
    }
}

async fn playlist_names(db: &Db, condition: Condition) -> Vec<Value> {
    let playlists = db.find_all("playlist", Query::new().where_(condition)).await.unwrap();
    let playlists: Vec<_> = playlists.iter().collect();
    attr_values(&playlists, "name")
}

async fn contains_matches_list_elements(s: impl Setup) {
    let (db, _log) = s.setup(playlists()).await;

    let lists: [(&str, Vec<i64>); 3] = [("a", vec![1, 2]), ("b", vec![3]), ("c", vec![])];
    for (name, ids) in lists {
        create(&db, "playlist", [("name", name.into()), ("track_ids", ids.into())])
            .await
            .unwrap();
    }

    let parsed = assert_ok!(Condition::parse(&json!(["contains", "track_ids", [2, 3]])));
    assert_eq!(playlist_names(&db, parsed).await, ["a", "b"]);
    assert_eq!(playlist_names(&db, Condition::contains("track_ids", 1)).await, ["a"]);
    assert_empty!(playlist_names(&db, Condition::contains("track_ids", 9)).await);

    // membership compares whole values
    assert_empty!(playlist_names(&db, Condition::in_list("track_ids", vec![1, 2])).await);
}

tests!(
    like_is_anchored_and_case_sensitive,
    empty_and_presence,
    id_values_are_normalized,
    id_null_semantics,
    ranges_and_membership,
    filters_prune_empty_values,
    predicates_are_pruned_then_compiled,
    contains_matches_list_elements,
    not_keeps_null_and_missing_fields,
);
