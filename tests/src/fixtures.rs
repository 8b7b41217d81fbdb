//! Record types shared by the integration tests.

use tether::{db::Builder, Db, Direction, Record, RecordType, Relation, Result, Type};

/// Users with posts, a profile, tags through a junction table and groups
/// through memberships.
pub fn blog() -> Builder {
    let mut builder = Db::builder();

    builder
        .register(
            RecordType::new("user")
                .attr("name", Type::String)
                .relation(
                    "posts",
                    Relation::has_many("post", "user_id", "id").order_by("title", Direction::Asc),
                )
                .relation(
                    "published_posts",
                    Relation::has_many("post", "user_id", "id")
                        .where_(tether::Condition::eq("published", true))
                        .order_by("title", Direction::Asc),
                )
                .relation("profile", Relation::has_one("profile", "user_id", "id"))
                .relation(
                    "tags",
                    Relation::has_many("tag", "id", "tag_id").via_table("user_tags", "user_id", "id"),
                )
                .relation(
                    "memberships",
                    Relation::has_many("membership", "user_id", "id"),
                )
                .relation(
                    "groups",
                    Relation::has_many("group", "id", "group_id").via("memberships"),
                ),
        )
        .register(
            RecordType::new("post")
                .attr("user_id", Type::Id)
                .attr("title", Type::String)
                .attr("published", Type::Bool)
                .relation(
                    "author",
                    Relation::has_one("user", "id", "user_id").inverse_of("posts"),
                )
                .relation(
                    "comments",
                    Relation::has_many("comment", "post_id", "id").inverse_of("post"),
                ),
        )
        .register(
            RecordType::new("comment")
                .attr("post_id", Type::Id)
                .attr("body", Type::String)
                .relation("post", Relation::has_one("post", "id", "post_id")),
        )
        .register(
            RecordType::new("profile")
                .attr("user_id", Type::Id)
                .attr("bio", Type::String),
        )
        .register(RecordType::new("tag").attr("name", Type::String))
        .register(
            RecordType::new("membership")
                .attr("user_id", Type::Id)
                .attr("group_id", Type::Id)
                .attr("role", Type::String),
        )
        .register(RecordType::new("group").attr("name", Type::String));

    builder
}

/// Playlists listing tracks in an array-valued key. Tracks read the same
/// key from the other side.
pub fn playlists() -> Builder {
    let mut builder = Db::builder();

    builder
        .register(
            RecordType::new("playlist")
                .attr("name", Type::String)
                .attr("track_ids", Type::List)
                .relation(
                    "tracks",
                    Relation::has_many("track", "id", "track_ids").via_array(),
                ),
        )
        .register(
            RecordType::new("track")
                .attr("title", Type::String)
                .relation(
                    "playlists",
                    Relation::has_many("playlist", "track_ids", "id").via_array(),
                ),
        );

    builder
}

/// Orders reaching an address through their customer, plus items with
/// nested eager loading.
pub fn orders() -> Builder {
    let mut builder = Db::builder();

    builder
        .register(
            RecordType::new("order")
                .attr("customer_id", Type::Id)
                .attr("number", Type::I64)
                .relation("customer", Relation::has_one("customer", "id", "customer_id"))
                .relation(
                    "address",
                    Relation::has_one("address", "id", "address_id").via("customer"),
                )
                .relation(
                    "items",
                    Relation::has_many("item", "order_id", "id")
                        .order_by("sku", Direction::Asc)
                        .with("product"),
                ),
        )
        .register(
            RecordType::new("customer")
                .attr("name", Type::String)
                .attr("address_id", Type::Id)
                .relation("address", Relation::has_one("address", "id", "address_id")),
        )
        .register(RecordType::new("address").attr("city", Type::String))
        .register(
            RecordType::new("item")
                .attr("order_id", Type::Id)
                .attr("product_id", Type::Id)
                .attr("sku", Type::String)
                .relation("product", Relation::has_one("product", "id", "product_id")),
        )
        .register(RecordType::new("product").attr("label", Type::String));

    builder
}

/// Teams sharing integer codes with their players. Codes are plain
/// attributes so every backend sees the same key values.
pub fn teams() -> Builder {
    let mut builder = Db::builder();

    builder
        .register(
            RecordType::new("team")
                .attr("code", Type::I64)
                .attr("name", Type::String)
                .relation(
                    "players",
                    Relation::has_many("player", "team_code", "code")
                        .order_by("name", Direction::Asc),
                )
                .relation(
                    "captain",
                    Relation::has_one("player", "team_code", "code")
                        .order_by("name", Direction::Asc),
                )
                .relation(
                    "roster",
                    Relation::has_many("player", "team_code", "code").index_by("name"),
                ),
        )
        .register(
            RecordType::new("player")
                .attr("team_code", Type::I64)
                .attr("name", Type::String),
        );

    builder
}

/// Inserts a record built from attribute pairs.
pub async fn create<const N: usize>(
    db: &Db,
    record_type: &str,
    attrs: [(&str, tether::Value); N],
) -> Result<Record> {
    let mut record = db.new_record(record_type)?;
    for (name, value) in attrs {
        record.set(name, value);
    }
    db.insert(&mut record).await?;
    Ok(record)
}

/// One attribute of every record, in order.
pub fn attr_values(records: &[&Record], attr: &str) -> Vec<tether::Value> {
    records.iter().map(|record| record.get(attr).clone()).collect()
}
