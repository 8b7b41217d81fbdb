use tests::{fixtures::*, *};

use tether::{Condition, Direction, Value};

async fn junction_query_can_be_narrowed(s: impl Setup) {
    let (db, log) = s.setup(blog()).await;

    let mut user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    let lonely = create(&db, "user", [("name", "bob".into())]).await.unwrap();
    for name in ["rust", "ruby", "go"] {
        let mut tag = create(&db, "tag", [("name", name.into())]).await.unwrap();
        db.link(&mut user, "tags", &mut tag).await.unwrap();
    }
    create(&db, "tag", [("name", "rare".into())]).await.unwrap();

    let tags = assert_ok!(db.relation_query(&user, "tags"));
    assert_eq!(tags.name(), "tags");
    assert_eq!(tags.target().name, "tag");

    log.clear();
    assert_eq!(assert_ok!(tags.count(&db).await), 3);
    // one junction read, one count
    assert_eq!(log.reads(), 2);

    let query = assert_ok!(tags.prepare(&db).await)
        .and_where(Condition::like("name", "r%"))
        .order_by("name", Direction::Desc);
    let found = assert_ok!(db.find_all("tag", query).await);
    let found: Vec<_> = found.iter().collect();
    assert_eq!(attr_values(&found, "name"), ["rust", "ruby"]);

    let first = assert_ok!(tags.first(&db).await);
    assert!(first.is_some());

    // preparing does not populate the record's cache
    assert!(!user.is_related_populated("tags"));

    let none = assert_ok!(db.relation_query(&lonely, "tags"));
    assert_eq!(assert_ok!(none.count(&db).await), 0);
    assert_empty!(assert_ok!(none.all(&db).await));
    assert_none!(assert_ok!(none.first(&db).await));
}

async fn scope_applies_to_relation_queries(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;

    let user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    let user_id = user.get("id").clone();
    for (title, published) in [("b", true), ("a", true), ("c", false)] {
        create(
            &db,
            "post",
            [
                ("user_id", user_id.clone()),
                ("title", title.into()),
                ("published", published.into()),
            ],
        )
        .await
        .unwrap();
    }

    let published = assert_ok!(db.relation_query(&user, "published_posts"));
    let posts = assert_ok!(published.all(&db).await);
    let titles: Vec<Value> = posts.iter().map(|post| post.get("title").clone()).collect();
    assert_eq!(titles, ["a", "b"]);

    let all = assert_ok!(db.relation_query(&user, "posts"));
    assert_eq!(assert_ok!(all.count(&db).await), 3);

    let err = assert_err!(db.relation_query(&user, "followers"));
    assert!(err.is_unknown_relation());
}

tests!(
    junction_query_can_be_narrowed,
    scope_applies_to_relation_queries,
);
