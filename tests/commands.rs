use minidb::{
    ColumnType, CommandError, CommandOutcome, Database, ErrorKind, JsonSnapshot, Row,
    SnapshotStore, Value, execute,
};

fn run(db: &mut Database, command: &str) -> CommandOutcome {
    execute(db, command).unwrap_or_else(|err| panic!("{command}: {err}"))
}

fn rows(db: &Database, table: &str) -> Vec<Row> {
    db.select_all(table).unwrap().rows
}

fn users() -> Database {
    let mut db = Database::new();
    run(&mut db, "CREATE TABLE users (id INT, name TEXT, active BOOL)");
    db
}

#[test]
fn create_table_has_declared_columns_and_no_rows() {
    let mut db = Database::new();
    run(
        &mut db,
        "CREATE TABLE wide (a INT, b TEXT, c BOOL, d integer, e string);",
    );

    let table = db.get_table("wide").unwrap();
    let types = table
        .columns()
        .iter()
        .map(|col| (col.name.as_str(), col.data_type))
        .collect::<Vec<_>>();

    assert_eq!(
        types,
        vec![
            ("a", ColumnType::Integer),
            ("b", ColumnType::Text),
            ("c", ColumnType::Boolean),
            ("d", ColumnType::Integer),
            ("e", ColumnType::Text),
        ]
    );
    assert!(table.rows().is_empty());
}

#[test]
fn insert_appends_row_last_with_quoting_honored() {
    let mut db = users();
    run(&mut db, "INSERT INTO users VALUES (1, 'Alice', true)");
    run(&mut db, "INSERT INTO users VALUES (2, \"Smith, Bob\", FALSE);");

    let rows = rows(&db, "users");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows.last().unwrap().values,
        vec![
            Value::Integer(2),
            Value::Text("Smith, Bob".to_string()),
            Value::Boolean(false),
        ]
    );
}

#[test]
fn delete_matching_nothing_changes_nothing() {
    let mut db = users();
    run(&mut db, "INSERT INTO users VALUES (1, 'Alice', true)");
    let before = rows(&db, "users");

    assert_eq!(
        run(&mut db, "DELETE FROM users WHERE name = 'Nobody'"),
        CommandOutcome::RowsDeleted(0)
    );
    assert_eq!(rows(&db, "users"), before);
}

#[test]
fn delete_removes_matches_keeps_order_and_is_idempotent() {
    let mut db = users();
    for (id, active) in [(1, true), (2, false), (3, true), (4, false), (5, true)] {
        run(
            &mut db,
            &format!("INSERT INTO users VALUES ({id}, 'user{id}', {active})"),
        );
    }

    assert_eq!(
        run(&mut db, "DELETE FROM users WHERE active = true"),
        CommandOutcome::RowsDeleted(3)
    );

    let remaining = rows(&db, "users")
        .into_iter()
        .map(|row| row.values[0].clone())
        .collect::<Vec<_>>();
    assert_eq!(remaining, vec![Value::Integer(2), Value::Integer(4)]);

    assert_eq!(
        run(&mut db, "DELETE FROM users WHERE active = true"),
        CommandOutcome::RowsDeleted(0)
    );
}

#[test]
fn invalid_integer_leaves_row_count() {
    let mut db = users();
    run(&mut db, "INSERT INTO users VALUES (1, 'Alice', true)");

    let err = execute(&mut db, "INSERT INTO users VALUES (1.5, 'Bob', true)").unwrap_err();
    assert_eq!(err, CommandError::InvalidInteger("1.5".to_string()));
    assert_eq!(rows(&db, "users").len(), 1);
}

#[test]
fn duplicate_create_leaves_original_table() {
    let mut db = users();
    run(&mut db, "INSERT INTO users VALUES (1, 'Alice', true)");
    let before = db.get_table("users").unwrap().clone();

    let err = execute(&mut db, "CREATE TABLE users (other TEXT)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TableAlreadyExists);
    assert_eq!(db.get_table("users").unwrap(), &before);
}

#[test]
fn users_scenario() {
    let mut db = Database::new();
    run(&mut db, "CREATE TABLE users (id INT, name TEXT, active BOOL)");
    run(&mut db, "INSERT INTO users VALUES (1, 'Alice', true)");

    let selected = run(&mut db, "SELECT * FROM users");
    assert_eq!(
        selected,
        CommandOutcome::RowsSelected {
            columns: vec!["id".to_string(), "name".to_string(), "active".to_string()],
            rows: vec![Row::new(vec![
                Value::Integer(1),
                Value::Text("Alice".to_string()),
                Value::Boolean(true),
            ])],
        }
    );
    assert_eq!(selected.to_string(), "id\tname\tactive\n1\tAlice\ttrue");

    assert_eq!(
        run(&mut db, "DELETE FROM users WHERE id = 1"),
        CommandOutcome::RowsDeleted(1)
    );
    assert!(rows(&db, "users").is_empty());
}

#[test]
fn store_survives_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = JsonSnapshot::new(dir.path().join("db.json"));

    let mut db = users();
    run(&mut db, "INSERT INTO users VALUES (7, 'Zoe', false)");
    snapshot.persist(&db).unwrap();

    let mut restored = snapshot.restore().unwrap();
    assert_eq!(restored, db);

    run(&mut restored, "INSERT INTO users VALUES (8, 'Zed', true)");
    assert_eq!(rows(&restored, "users").len(), 2);
}

fn row_values(db: &Database, table: &str) -> Vec<Vec<Value>> {
    rows(db, table).into_iter().map(|row| row.values).collect()
}

#[test]
fn quoted_quotes_survive_insert_and_match_delete() {
    let mut db = Database::new();
    run(&mut db, "CREATE TABLE t (s TEXT)");
    run(&mut db, "INSERT INTO t VALUES (\"'x'\")");

    assert_eq!(row_values(&db, "t"), vec![vec![Value::Text("'x'".to_string())]]);

    assert_eq!(
        run(&mut db, "DELETE FROM t WHERE s = \"'x'\""),
        CommandOutcome::RowsDeleted(1)
    );
    assert!(rows(&db, "t").is_empty());
}

#[test]
fn other_quote_kind_is_kept_inside_a_span() {
    let mut db = Database::new();
    run(&mut db, "CREATE TABLE quotes (a TEXT, b TEXT)");
    run(&mut db, "INSERT INTO quotes VALUES ('say \"hi\"', \"it's\")");

    assert_eq!(
        row_values(&db, "quotes"),
        vec![vec![
            Value::Text("say \"hi\"".to_string()),
            Value::Text("it's".to_string()),
        ]]
    );

    assert_eq!(
        run(&mut db, "DELETE FROM quotes WHERE b = \"it's\""),
        CommandOutcome::RowsDeleted(1)
    );
}

#[test]
fn unterminated_quote_takes_rest_of_list() {
    let mut db = Database::new();
    run(&mut db, "CREATE TABLE t (id INT, s TEXT)");
    run(&mut db, "INSERT INTO t VALUES (1, 'abc, def)");

    assert_eq!(
        row_values(&db, "t"),
        vec![vec![Value::Integer(1), Value::Text("abc, def".to_string())]]
    );
}

#[test]
fn text_after_value_list_is_rejected() {
    let mut db = Database::new();
    run(&mut db, "CREATE TABLE t (a TEXT, b TEXT)");

    let err = execute(&mut db, "INSERT INTO t VALUES ('a'), ('b')").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert!(rows(&db, "t").is_empty());

    let err = execute(&mut db, "CREATE TABLE u (a INT), (b INT)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert!(db.get_table("u").is_err());
}
