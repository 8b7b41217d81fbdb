use tests::*;

use tether::{Db, RecordType, Related, Relation, Type, Value};

fn schema() -> tether::db::Builder {
    let mut builder = Db::builder();
    builder
        .register(RecordType::new("person").attr("name", Type::String))
        .register(
            RecordType::new("pet")
                .attr("name", Type::String)
                .attr("owner_id", Type::I64)
                .relation("owner", Relation::has_one("person", "id", "owner_id")),
        );
    builder
}

async fn owner_is_resolved_by_identity(s: impl Setup) {
    let (db, log) = s.setup(schema()).await;

    let mut person = db.new_record("person").unwrap().with("id", 10).with("name", "ada");
    assert_ok!(db.insert(&mut person).await);
    assert_eq!(person.id(), Some(&Value::from(10)));

    let mut pet = db.new_record("pet").unwrap().with("name", "rex").with("owner_id", 10);
    assert_ok!(db.insert(&mut pet).await);

    let relation = db.schema().relation("pet", "owner").unwrap();
    assert!(!relation.is_back_ref(pet.record_type()));

    log.clear();
    let mut pets = vec![pet];
    assert_ok!(db.populate(&mut pets, "owner").await);
    assert_eq!(log.reads(), 1);

    let owner = pets[0].related("owner").and_then(Related::as_one).unwrap();
    assert_eq!(owner, &person);
    assert_eq!(owner.get("name"), &Value::from("ada"));
}

tests!(owner_is_resolved_by_identity);
