use quarry_core::{Join, SQL, SQLParam, helpers};

/// Minimal parameter type for exercising the fragment tree.
#[derive(Debug, Clone, PartialEq)]
enum TestValue {
    Int(i64),
    Text(String),
}

impl SQLParam for TestValue {}

impl From<i64> for TestValue {
    fn from(value: i64) -> Self {
        TestValue::Int(value)
    }
}

impl From<&str> for TestValue {
    fn from(value: &str) -> Self {
        TestValue::Text(value.to_owned())
    }
}

#[test]
fn raw_renders_verbatim() {
    let sql: SQL<TestValue> = SQL::raw("SELECT 1");
    assert_eq!(sql.sql(), "SELECT 1");
    assert!(sql.params().is_empty());
}

#[test]
fn empty_fragment_is_empty() {
    let sql: SQL<TestValue> = SQL::empty();
    assert!(sql.is_empty());
    assert_eq!(sql.sql(), "");
}

#[test]
fn append_inserts_word_boundary_spaces() {
    let sql: SQL<TestValue> = SQL::raw("SELECT *").append(SQL::raw("FROM \"t\""));
    assert_eq!(sql.sql(), "SELECT * FROM \"t\"");
}

#[test]
fn no_space_after_trailing_whitespace() {
    let sql: SQL<TestValue> = SQL::raw("\"t\".\"name\"")
        .append_raw(" = ")
        .append(SQL::parameter(TestValue::from("ada")));
    assert_eq!(sql.sql(), "\"t\".\"name\" = ?");
}

#[test]
fn params_keep_placeholder_order() {
    let sql: SQL<TestValue> = SQL::raw("a = ")
        .append(SQL::parameter(TestValue::from(1)))
        .append_raw(" AND b = ")
        .append(SQL::parameter(TestValue::from("two")));
    assert_eq!(sql.sql(), "a = ? AND b = ?");
    assert_eq!(
        sql.params(),
        [&TestValue::Int(1), &TestValue::Text("two".into())]
    );
}

#[test]
fn join_separates_fragments() {
    let parts: Vec<SQL<TestValue>> = vec![SQL::raw("a"), SQL::raw("b"), SQL::raw("c")];
    assert_eq!(SQL::join(parts, ", ").sql(), "a, b, c");
}

#[test]
fn join_of_nothing_is_empty() {
    let sql = SQL::<TestValue>::join(Vec::<SQL<TestValue>>::new(), ", ");
    assert!(sql.is_empty());
}

#[test]
fn parameters_renders_placeholder_list() {
    let sql: SQL<TestValue> = SQL::parameters([1i64, 2, 3]);
    assert_eq!(sql.sql(), "?, ?, ?");
    assert_eq!(sql.params().len(), 3);
}

#[test]
fn assignments_quote_columns() {
    let sql: SQL<TestValue> =
        SQL::assignments([("name", TestValue::from("ada")), ("age", TestValue::from(36))]);
    assert_eq!(sql.sql(), "\"name\" = ?, \"age\" = ?");
    assert_eq!(
        sql.params(),
        [&TestValue::Text("ada".into()), &TestValue::Int(36)]
    );
}

#[test]
fn select_from_where_statement() {
    let sql: SQL<TestValue> = helpers::select([SQL::raw("\"users\".*")])
        .append(helpers::from("users"))
        .append(helpers::where_clause(
            SQL::raw("\"users\".\"id\" = ").append(SQL::parameter(TestValue::from(7))),
        ));
    assert_eq!(
        sql.sql(),
        "SELECT \"users\".* FROM \"users\" WHERE \"users\".\"id\" = ?"
    );
}

#[test]
fn join_clause_renders_on_condition() {
    let on: SQL<TestValue> = SQL::raw("\"posts\".\"author\" = \"users\".\"id\"");
    let sql = helpers::join(Join::default(), "users", on);
    assert_eq!(
        sql.sql(),
        "JOIN \"users\" ON \"posts\".\"author\" = \"users\".\"id\""
    );
}

#[test]
fn join_keywords() {
    let sql: SQL<TestValue> = helpers::join(Join::Left, "users", SQL::raw("1 = 1"));
    assert_eq!(sql.sql(), "LEFT JOIN \"users\" ON 1 = 1");

    assert_eq!(Join::Join.keyword(), "JOIN");
    assert_eq!(Join::Inner.keyword(), "INNER JOIN");
    assert_eq!(Join::Cross.keyword(), "CROSS JOIN");
}

#[test]
fn insert_values_returning_statement() {
    let sql: SQL<TestValue> = helpers::insert_into("users", ["email", "name"])
        .append(helpers::values(SQL::parameters([
            TestValue::from("a@b.c"),
            TestValue::from("ada"),
        ])))
        .append(helpers::returning([SQL::raw("*")]));
    assert_eq!(
        sql.sql(),
        "INSERT INTO \"users\" (\"email\", \"name\") VALUES (?, ?) RETURNING *"
    );
    assert_eq!(sql.params().len(), 2);
}

#[test]
fn update_set_statement() {
    let sql: SQL<TestValue> = helpers::update("users").append(helpers::set(SQL::assignments([
        ("name", TestValue::from("ada")),
    ])));
    assert_eq!(sql.sql(), "UPDATE \"users\" SET \"name\" = ?");
}

#[test]
fn delete_limit_offset() {
    let sql: SQL<TestValue> = helpers::delete_from("users");
    assert_eq!(sql.sql(), "DELETE FROM \"users\"");

    let sql: SQL<TestValue> = SQL::raw("SELECT 1")
        .append(helpers::limit(10))
        .append(helpers::offset(20));
    assert_eq!(sql.sql(), "SELECT 1 LIMIT 10 OFFSET 20");
}
