use tests::{fixtures::*, *};

use tether::{Db, Query, Record, Related, Value};

fn ids(record: &Record, relation: &str) -> Vec<Value> {
    record.related(relation).unwrap().ids()
}

async fn users(db: &Db, names: &[&str]) -> Vec<Record> {
    let mut users = vec![];
    for name in names {
        users.push(create(db, "user", [("name", (*name).into())]).await.unwrap());
    }
    users
}

async fn junction_table(s: impl Setup) {
    let (db, log) = s.setup(blog()).await;

    let mut users = users(&db, &["ann", "bob", "cy"]).await;
    let mut tags = vec![];
    for name in ["rust", "sql", "docs"] {
        tags.push(create(&db, "tag", [("name", name.into())]).await.unwrap());
    }

    let (ann, rest) = users.split_first_mut().unwrap();
    assert_ok!(db.link(ann, "tags", &mut tags[0]).await);
    assert_ok!(db.link(ann, "tags", &mut tags[1]).await);
    assert_ok!(db.link(&mut rest[0], "tags", &mut tags[1]).await);

    let junction_rows = assert_ok!(db.query_count(&Query::table("user_tags")).await);
    assert_eq!(junction_rows, 3);

    let mut users = assert_ok!(db.find_all("user", Query::new()).await);
    log.clear();

    let fetched = assert_ok!(db.populate(&mut users, "tags").await);

    // junction rows, then tags
    assert_eq!(log.reads(), 2);
    assert_eq!(fetched.len(), 2);

    assert_eq!(ids(&users[0], "tags"), [tags[0].get("id").clone(), tags[1].get("id").clone()]);
    assert_eq!(ids(&users[1], "tags"), [tags[1].get("id").clone()]);
    assert_empty!(ids(&users[2], "tags"));
}

async fn via_relation(s: impl Setup) {
    let (db, log) = s.setup(blog()).await;

    let mut users = users(&db, &["ann", "bob"]).await;
    let mut groups = vec![];
    for name in ["admins", "devs"] {
        groups.push(create(&db, "group", [("name", name.into())]).await.unwrap());
    }

    for (user, group) in [(0, 0), (0, 1), (1, 1)] {
        assert_ok!(db.link(&mut users[user], "groups", &mut groups[group]).await);
    }

    let mut users = assert_ok!(db.find_all("user", Query::new()).await);
    log.clear();

    assert_ok!(db.populate(&mut users, "groups").await);

    // memberships, then groups
    assert_eq!(log.reads(), 2);
    assert_eq!(
        ids(&users[0], "groups"),
        [groups[0].get("id").clone(), groups[1].get("id").clone()]
    );
    assert_eq!(ids(&users[1], "groups"), [groups[1].get("id").clone()]);

    // the intermediate relation was populated on the way
    assert_eq!(users[0].related("memberships").map(Related::len), Some(2));
}

async fn array_keys_keep_their_order(s: impl Setup) {
    let (db, log) = s.setup(playlists()).await;

    let mut tracks = vec![];
    for title in ["one", "two", "three"] {
        tracks.push(create(&db, "track", [("title", title.into())]).await.unwrap());
    }
    let id = |i: usize| tracks[i].get("id").clone();

    let order = Value::List(vec![id(2), id(0), id(2)]);
    let mixed = create(&db, "playlist", [("name", "mixed".into()), ("track_ids", order)]);
    let mixed = mixed.await.unwrap();
    let empty = create(&db, "playlist", [("name", "empty".into()), ("track_ids", Value::List(vec![]))]);
    let empty = empty.await.unwrap();

    let mut playlists = vec![mixed, empty];
    log.clear();
    assert_ok!(db.populate(&mut playlists, "tracks").await);

    assert_eq!(log.reads(), 1);
    let titles = attr_values(&playlists[0].related("tracks").unwrap().records(), "title");
    assert_eq!(titles, [Value::from("three"), Value::from("one")]);
    assert!(playlists[1].related("tracks").unwrap().is_empty());
}

async fn multi_hop(s: impl Setup) {
    let (db, log) = s.setup(orders()).await;

    let paris = create(&db, "address", [("city", "Paris".into())]).await.unwrap();
    let oslo = create(&db, "address", [("city", "Oslo".into())]).await.unwrap();

    let mut orders = vec![];
    for (number, address) in [(1, &paris), (2, &oslo), (3, &paris)] {
        let customer = create(&db, "customer", [("name", "c".into()), ("address_id", address.get("id").clone())]);
        let customer = customer.await.unwrap();
        let order = create(&db, "order", [("number", number.into()), ("customer_id", customer.get("id").clone())]);
        orders.push(order.await.unwrap());
    }

    log.clear();
    assert_ok!(db.populate(&mut orders, "address").await);
    assert_eq!(log.reads(), 2);

    let city = |order: &Record| {
        order
            .related("address")
            .and_then(Related::as_one)
            .map(|address| address.get("city").clone())
    };
    assert_eq!(city(&orders[0]), Some(Value::from("Paris")));
    assert_eq!(city(&orders[1]), Some(Value::from("Oslo")));
    assert_eq!(city(&orders[2]), Some(Value::from("Paris")));
}

async fn nested_paths_and_eager_relations(s: impl Setup) {
    let (db, log) = s.setup(orders()).await;

    let address = create(&db, "address", [("city", "Lima".into())]).await.unwrap();
    let customer = create(&db, "customer", [("name", "c".into()), ("address_id", address.get("id").clone())]);
    let customer = customer.await.unwrap();
    let order = create(&db, "order", [("number", 7.into()), ("customer_id", customer.get("id").clone())]);
    let order = order.await.unwrap();

    for (sku, label) in [("b-2", "bolt"), ("a-1", "anchor")] {
        let product = create(&db, "product", [("label", label.into())]).await.unwrap();
        create(&db, "item", [("order_id", order.get("id").clone()), ("product_id", product.get("id").clone()), ("sku", sku.into())])
            .await
            .unwrap();
    }

    let mut orders = vec![order];
    log.clear();
    assert_ok!(db.populate_with(&mut orders, &["customer.address", "items", "customer"]).await);

    // customer, address, items, products
    assert_eq!(log.reads(), 4);

    let customer = orders[0].related("customer").and_then(Related::as_one).unwrap();
    let address = customer.related("address").and_then(Related::as_one).unwrap();
    assert_eq!(address.get("city"), &Value::from("Lima"));

    let items = orders[0].related("items").unwrap().records();
    let labels: Vec<_> = items
        .iter()
        .map(|item| {
            let product = item.related("product").and_then(Related::as_one).unwrap();
            product.get("label").clone()
        })
        .collect();
    assert_eq!(labels, [Value::from("anchor"), Value::from("bolt")]);
}

tests!(
    junction_table,
    via_relation,
    array_keys_keep_their_order,
    multi_hop,
    nested_paths_and_eager_relations,
);
