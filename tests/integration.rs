#![cfg(feature = "rusqlite")]

use quarry::{Filter, Include, Order, Quarry, Query, QuarryError, Select, Value, Values};
use rusqlite::Connection;

mod common;

fn setup() -> Quarry<Connection> {
    let conn = Connection::open_in_memory().expect("in-memory database");
    conn.execute_batch(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            email TEXT NOT NULL,
            name TEXT,
            active BOOLEAN NOT NULL DEFAULT 0,
            age INTEGER
        );
        CREATE TABLE posts (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT,
            published BOOLEAN NOT NULL DEFAULT 0,
            author INTEGER REFERENCES users(id)
        );",
    )
    .expect("schema setup");
    Quarry::new(conn, common::schema())
}

fn seed(db: &Quarry<Connection>) -> (i64, i64) {
    let users = db.model("users");
    let ada = users
        .create(
            &Values::new()
                .set("email", "ada@lovelace.dev")
                .set("name", "Ada")
                .set("active", true)
                .set("age", 36),
            &Select::all(),
        )
        .unwrap();
    let grace = users
        .create(
            &Values::new()
                .set("email", "grace@hopper.dev")
                .set("name", "Grace")
                .set("age", 45),
            &Select::all(),
        )
        .unwrap();
    (
        ada.value("id").unwrap().as_integer().unwrap(),
        grace.value("id").unwrap().as_integer().unwrap(),
    )
}

#[test]
fn create_returns_the_inserted_row() {
    let db = setup();
    let created = db
        .model("users")
        .create(
            &Values::new().set("email", "ada@lovelace.dev").set("age", 36),
            &Select::all(),
        )
        .unwrap();

    assert_eq!(
        created.value("email"),
        Some(&Value::Text("ada@lovelace.dev".into()))
    );
    // BOOLEAN columns come back as integers; the default applied.
    assert_eq!(created.value("active"), Some(&Value::Integer(0)));
}

#[test]
fn find_many_filters_and_orders() {
    let db = setup();
    seed(&db);

    let query = Query::new()
        .filter(Filter::new().gt("age", 30).unwrap())
        .order_by(Order::new().desc("age"))
        .select(Select::columns(["email", "age"]));
    let rows = db.model("users").find_many(&query).unwrap();

    let emails: Vec<&str> = rows
        .iter()
        .map(|row| row.value("email").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(emails, ["grace@hopper.dev", "ada@lovelace.dev"]);
}

#[test]
fn find_returns_none_for_no_match() {
    let db = setup();
    let found = db
        .model("users")
        .find(&Query::new().filter(Filter::new().value("email", "nobody@example.com")))
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn include_loads_the_related_row() {
    let db = setup();
    let (ada, _) = seed(&db);

    db.model("posts")
        .create(
            &Values::new()
                .set("title", "Notes on the Analytical Engine")
                .set("published", true)
                .set("author", ada),
            &Select::all(),
        )
        .unwrap();

    let query = Query::new()
        .filter(Filter::new().value("published", true))
        .include(Include::new().columns("author", ["email", "name"]));
    let posts = db.model("posts").find_many(&query).unwrap();

    assert_eq!(posts.len(), 1);
    let author = posts[0].row("author").expect("nested author");
    assert_eq!(
        author.value("email"),
        Some(&Value::Text("ada@lovelace.dev".into()))
    );
    assert_eq!(author.value("name"), Some(&Value::Text("Ada".into())));
}

#[test]
fn relation_filter_constrains_through_the_join() {
    let db = setup();
    let (ada, grace) = seed(&db);

    let posts = db.model("posts");
    posts
        .create(
            &Values::new().set("title", "by ada").set("author", ada),
            &Select::all(),
        )
        .unwrap();
    posts
        .create(
            &Values::new().set("title", "by grace").set("author", grace),
            &Select::all(),
        )
        .unwrap();

    let query = Query::new()
        .include(Include::new().all("author"))
        .filter(Filter::new().relation("author", Filter::new().contains("email", "lovelace")));
    let rows = posts.find_many(&query).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("title"), Some(&Value::Text("by ada".into())));
}

#[test]
fn update_changes_exactly_one_row() {
    let db = setup();
    let (ada, _) = seed(&db);

    let updated = db
        .model("users")
        .update(
            &Values::new().set("name", "Ada Lovelace"),
            &Filter::new().value("id", ada),
            &Select::columns(["id", "name"]),
        )
        .unwrap();
    assert_eq!(
        updated.value("name"),
        Some(&Value::Text("Ada Lovelace".into()))
    );
}

#[test]
fn update_matching_nothing_fails_with_row_count() {
    let db = setup();
    seed(&db);

    let err = db
        .model("users")
        .update(
            &Values::new().set("name", "nobody"),
            &Filter::new().value("id", 999),
            &Select::all(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        QuarryError::UnexpectedRowCount { operation: "update", rows: 0 }
    ));
}

#[test]
fn update_matching_many_fails_with_row_count() {
    let db = setup();
    seed(&db);

    let err = db
        .model("users")
        .update(
            &Values::new().set("active", false),
            &Filter::new(),
            &Select::all(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        QuarryError::UnexpectedRowCount { operation: "update", rows: 2 }
    ));
}

#[test]
fn delete_removes_matching_rows_without_assertions() {
    let db = setup();
    seed(&db);

    db.model("users")
        .delete(&Filter::new().contains("email", "hopper"))
        .unwrap();

    let remaining = db.model("users").find_many(&Query::new()).unwrap();
    assert_eq!(remaining.len(), 1);

    // Deleting nothing is not an error.
    db.model("users")
        .delete(&Filter::new().value("id", 999))
        .unwrap();
}

#[test]
fn executor_failures_surface_unchanged() {
    let db = setup();
    // NOT NULL violation on email.
    let err = db
        .model("users")
        .create(&Values::new().set("name", "no email"), &Select::all())
        .unwrap_err();
    assert!(matches!(err, QuarryError::Rusqlite(_)));
}
