use tests::{fixtures::*, *};

use tether::{Db, Record, Related, Value};

async fn seed_teams(db: &Db) -> Vec<Record> {
    let mut teams = vec![];
    for (code, name) in [(1, "ants"), (2, "bees"), (2, "bugs"), (9, "yaks")] {
        let team = create(db, "team", [("code", code.into()), ("name", name.into())]);
        teams.push(team.await.unwrap());
    }

    for (code, name) in [(1, "ann"), (2, "bob"), (2, "cat"), (3, "dan")] {
        create(db, "player", [("team_code", code.into()), ("name", name.into())])
            .await
            .unwrap();
    }

    teams
}

fn names(record: &Record, relation: &str) -> Vec<Value> {
    let related = record.related(relation).unwrap();
    attr_values(&related.records(), "name")
}

async fn bucketing_follows_link_keys(s: impl Setup) {
    let (db, log) = s.setup(teams()).await;
    let mut teams = seed_teams(&db).await;
    log.clear();

    let players = assert_ok!(db.populate(&mut teams, "players").await);

    // one query for every team, and `dan` was never asked for
    assert_eq!(log.reads(), 1);
    assert_eq!(players.len(), 3);

    assert_eq!(names(&teams[0], "players"), [Value::from("ann")]);
    assert_eq!(
        names(&teams[1], "players"),
        [Value::from("bob"), Value::from("cat")]
    );
    assert_eq!(names(&teams[2], "players"), names(&teams[1], "players"));
    assert_empty!(names(&teams[3], "players"));
}

async fn one_relation_takes_first_match(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    let mut teams = seed_teams(&db).await;

    assert_ok!(db.populate(&mut teams, "captain").await);

    let captain = |team: &Record| {
        team.related("captain")
            .and_then(Related::as_one)
            .map(|player| player.get("name").clone())
    };

    assert_eq!(captain(&teams[0]), Some(Value::from("ann")));
    assert_eq!(captain(&teams[1]), Some(Value::from("bob")));
    assert_none!(captain(&teams[3]));
    assert_eq!(teams[3].related("captain"), Some(&Related::One(None)));
}

async fn indexed_relation(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    let mut teams = seed_teams(&db).await;

    assert_ok!(db.populate(&mut teams, "roster").await);

    let roster = teams[1].related("roster").and_then(Related::as_indexed).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[&Value::from("cat")].get("team_code"), &Value::from(2));
    assert!(!roster.contains_key(&Value::from("ann")));
}

async fn query_count_is_independent_of_primaries(s: impl Setup) {
    let (db, log) = s.setup(blog()).await;

    let mut users = vec![];
    for i in 0..6 {
        let user = create(&db, "user", [("name", format!("user {i}").into())]);
        let user = user.await.unwrap();

        for j in 0..3 {
            let title = format!("post {i}.{j}");
            let user_id = user.get("id").clone();
            create(&db, "post", [("user_id", user_id), ("title", title.into()), ("published", true.into())])
                .await
                .unwrap();
        }
        users.push(user);
    }

    log.clear();
    assert_ok!(db.populate(&mut users[..1], "posts").await);
    assert_eq!(log.reads(), 1);

    log.clear();
    let posts = assert_ok!(db.populate(&mut users, "posts").await);
    assert_eq!(log.reads(), 1);
    assert_eq!(posts.len(), 18);

    for (i, user) in users.iter().enumerate() {
        let titles = names_of(user);
        assert_eq!(
            titles,
            (0..3)
                .map(|j| Value::from(format!("post {i}.{j}")))
                .collect::<Vec<_>>()
        );
    }
}

fn names_of(user: &Record) -> Vec<Value> {
    let posts = user.related("posts").unwrap();
    attr_values(&posts.records(), "title")
}

async fn no_keys_skips_the_query(s: impl Setup) {
    let (db, log) = s.setup(teams()).await;

    let mut teams = vec![db.new_record("team").unwrap(), db.new_record("team").unwrap()];
    let players = assert_ok!(db.populate(&mut teams, "players").await);

    assert_empty!(players);
    assert!(log.is_empty());
    assert_eq!(teams[0].related("players"), Some(&Related::Many(vec![])));
    assert_eq!(teams[1].related("captain"), None);
}

async fn scope_survives_population(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;

    let user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    let id = user.get("id").clone();
    for (title, published) in [("draft", false), ("b", true), ("a", true)] {
        create(&db, "post", [("user_id", id.clone()), ("title", title.into()), ("published", published.into())])
            .await
            .unwrap();
    }

    let scope = db.schema().relation("user", "published_posts").unwrap().scope.clone();

    let mut users = vec![user];
    for _ in 0..2 {
        assert_ok!(db.populate(&mut users, "published_posts").await);
        let titles = attr_values(&users[0].related("published_posts").unwrap().records(), "title");
        assert_eq!(titles, [Value::from("a"), Value::from("b")]);
    }

    let after = &db.schema().relation("user", "published_posts").unwrap().scope;
    assert_eq!(&scope, after);
}

async fn lazy_access_is_cached(s: impl Setup) {
    let (db, log) = s.setup(blog()).await;

    let mut user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    let id = user.get("id").clone();
    create(&db, "profile", [("user_id", id), ("bio", "hi".into())])
        .await
        .unwrap();

    log.clear();
    let profile = assert_ok!(db.related(&mut user, "profile").await);
    assert_eq!(profile.as_one().map(|p| p.get("bio")), Some(&Value::from("hi")));

    assert_ok!(db.related(&mut user, "profile").await);
    assert_eq!(log.reads(), 1);

    // unset before reload
    user.unset_related("profile");
    assert_ok!(db.related(&mut user, "profile").await);
    assert_eq!(log.reads(), 2);
}

async fn inverse_is_set_on_results(s: impl Setup) {
    let (db, _log) = s.setup(blog()).await;

    let user = create(&db, "user", [("name", "ann".into())]).await.unwrap();
    let post = create(&db, "post", [("user_id", user.get("id").clone()), ("title", "hello".into()), ("published", true.into())]);
    let post = post.await.unwrap();
    for body in ["first", "second"] {
        create(&db, "comment", [("post_id", post.get("id").clone()), ("body", body.into())])
            .await
            .unwrap();
    }

    let mut posts = vec![post];
    assert_ok!(db.populate(&mut posts, "comments").await);

    let comments = posts[0].related("comments").unwrap().records();
    assert_eq!(comments.len(), 2);
    for comment in comments {
        let parent = comment.related("post").and_then(Related::as_one).unwrap();
        assert_eq!(parent.get("title"), &Value::from("hello"));
        assert!(!parent.is_related_populated("comments"));
    }
}

async fn unknown_relation_is_fatal(s: impl Setup) {
    let (db, _log) = s.setup(teams()).await;
    let mut teams = seed_teams(&db).await;

    let err = assert_err!(db.populate(&mut teams, "coach").await);
    assert!(err.is_unknown_relation());
    assert_eq!(err.to_string(), "unknown relation `coach` on record type `team`");
}

tests!(
    bucketing_follows_link_keys,
    one_relation_takes_first_match,
    indexed_relation,
    query_count_is_independent_of_primaries,
    no_keys_skips_the_query,
    scope_survives_population,
    lazy_access_is_cached,
    inverse_is_set_on_results,
    unknown_relation_is_fatal,
);
