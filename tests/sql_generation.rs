use quarry::{Filter, Include, Order, Quarry, Query, Select, Value};

mod common;
use common::MockExecutor;

#[test]
fn find_many_selects_all_columns_by_default() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    db.model("users").find_many(&Query::new()).unwrap();

    let (sql, params) = db.executor().last_statement();
    assert_eq!(sql, "SELECT \"users\".* FROM \"users\"");
    assert!(params.is_empty());
}

#[test]
fn find_many_with_named_columns() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    let query = Query::new().select(Select::columns(["id", "email"]));
    db.model("users").find_many(&query).unwrap();

    let (sql, _) = db.executor().last_statement();
    assert_eq!(
        sql,
        "SELECT \"users\".\"id\", \"users\".\"email\" FROM \"users\""
    );
}

#[test]
fn find_many_composes_every_clause_in_order() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    let query = Query::new()
        .filter(Filter::new().value("active", true))
        .order_by(Order::new().asc("name"))
        .limit(10)
        .offset(5);
    db.model("users").find_many(&query).unwrap();

    let (sql, params) = db.executor().last_statement();
    assert_eq!(
        sql,
        "SELECT \"users\".* FROM \"users\" WHERE \"users\".\"active\" = ? \
         ORDER BY \"users\".\"name\" ASC LIMIT 10 OFFSET 5"
    );
    assert_eq!(params, [Value::Boolean(true)]);
}

// A nested relation filter must not introduce a second WHERE.
#[test]
fn nested_filters_produce_exactly_one_where_token() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    let query = Query::new()
        .include(Include::new().columns("author", ["email"]))
        .filter(
            Filter::new()
                .value("published", true)
                .relation("author", Filter::new().contains("email", "lovelace")),
        );
    db.model("posts").find_many(&query).unwrap();

    let (sql, params) = db.executor().last_statement();
    assert_eq!(sql.matches("WHERE").count(), 1);
    assert!(sql.contains(
        "WHERE \"posts\".\"published\" = ? AND \"users\".\"email\" LIKE ?"
    ));
    assert_eq!(
        params,
        [Value::Boolean(true), Value::Text("%lovelace%".into())]
    );
}

#[test]
fn find_forces_a_limit_of_one() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    db.model("users").find(&Query::new()).unwrap();

    let (sql, _) = db.executor().last_statement();
    assert_eq!(sql, "SELECT \"users\".* FROM \"users\" LIMIT 1");
}

#[test]
fn find_on_empty_result_returns_none() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    let found = db.model("users").find(&Query::new()).unwrap();
    assert!(found.is_none());
}

#[test]
fn find_returns_the_sole_row() {
    let executor = MockExecutor::returning(vec![common::row([
        ("id", Value::Integer(1)),
        ("email", Value::Text("ada@lovelace.dev".into())),
    ])]);
    let db = Quarry::new(executor, common::schema());

    let found = db.model("users").find(&Query::new()).unwrap().unwrap();
    assert_eq!(found.value("id"), Some(&Value::Integer(1)));
}

#[test]
fn unknown_model_table_fails_before_execution() {
    let db = Quarry::new(MockExecutor::new(), common::schema());
    assert!(db.model("comments").find_many(&Query::new()).is_err());
    assert!(db.executor().statements().is_empty());
}
