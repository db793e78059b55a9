use chrono::{DateTime, TimeZone, Utc};
use entsql::prelude::*;
use entsql::{Direction, JoinKind, Symbol, qualify_with};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct AuditLog {
    id: i64,
    user_id: Uuid,
    operation: String,
    created_at: DateTime<Utc>,
    status_code: Option<i16>,
}

fn audit_fields() -> Vec<Field<AuditLog>> {
    vec![
        Field::new("id", |a: &AuditLog| a.id),
        Field::new("user_id", |a: &AuditLog| a.user_id),
        Field::new("operation", |a: &AuditLog| a.operation.clone()),
        Field::new("created_at", |a: &AuditLog| a.created_at),
        Field::new("status_code", |a: &AuditLog| a.status_code),
    ]
}

fn audit_logs() -> EntityBuilder<AuditLog> {
    let mut b = EntityBuilder::with_soft_delete();
    b.table(TableRef::new("audit_logs")).fields(audit_fields());
    b
}

fn sample() -> AuditLog {
    AuditLog {
        id: 1,
        user_id: Uuid::nil(),
        operation: "login".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        status_code: None,
    }
}

#[test]
fn search_page_with_count() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut b = audit_logs();
    b.filter(
        Predicate::gte("created_at", since)
            .and(Predicate::like("operation", "log%").or(Predicate::is_null("status_code"))),
    )
    .order_by(Order::desc("created_at"))
    .paginate(2, 50);

    let PagedSelect { select, count } = b.select_with_count();
    assert_eq!(
        select.sql(),
        "SELECT id, user_id, operation, created_at, status_code FROM audit_logs \
         WHERE created_at >= ? AND (operation LIKE ? OR status_code IS NULL) \
         AND audit_logs.deleted = 0 ORDER BY created_at DESC LIMIT 50 OFFSET 50"
    );
    assert_eq!(
        count.sql(),
        "SELECT COUNT(*) FROM audit_logs \
         WHERE created_at >= ? AND (operation LIKE ? OR status_code IS NULL) \
         AND audit_logs.deleted = 0"
    );
    assert_eq!(select.values(), count.values());
    assert!(select.check().is_ok());
    assert!(count.check().is_ok());

    assert_eq!(
        select.numbered_sql(),
        "SELECT id, user_id, operation, created_at, status_code FROM audit_logs \
         WHERE created_at >= $1 AND (operation LIKE $2 OR status_code IS NULL) \
         AND audit_logs.deleted = 0 ORDER BY created_at DESC LIMIT 50 OFFSET 50"
    );
}

#[test]
fn debug_render_quotes_text_and_timestamps() {
    let mut b = audit_logs();
    b.filter(
        Predicate::eq("operation", "logout")
            .and(Predicate::lt("created_at", Utc.with_ymd_and_hms(2023, 9, 7, 12, 0, 0).unwrap()))
            .and(Predicate::ne("status_code", 500)),
    );
    assert_eq!(
        b.delete().debug_sql(),
        "DELETE FROM audit_logs WHERE operation = 'logout' \
         AND created_at < '2023-09-07T12:00:00.000000000Z' \
         AND status_code <> 500 AND audit_logs.deleted = 0"
    );
}

#[test]
fn insert_extracts_rows_in_field_order() {
    let row = sample();
    let mut second = sample();
    second.id = 2;
    second.status_code = Some(401);

    let stmt = audit_logs().insert(&[row.clone(), second]);
    assert_eq!(
        stmt.sql(),
        "INSERT INTO audit_logs (id, user_id, operation, created_at, status_code) \
         VALUES (?, ?, ?, ?, ?), (?, ?, ?, ?, ?)"
    );
    assert_eq!(stmt.placeholder_count(), 10);
    assert_eq!(stmt.values().len(), 10);
    assert_eq!(stmt.values()[0], Value::Int(1));
    assert_eq!(stmt.values()[1], Value::Uuid(Uuid::nil()));
    assert_eq!(stmt.values()[3], Value::Timestamp(row.created_at));
    assert_eq!(stmt.values()[4], Value::Null);
    assert_eq!(stmt.values()[9], Value::Int(401));
}

#[test]
fn update_and_soft_delete_by_id() {
    let row = sample();
    let mut b = audit_logs();
    b.filter(Predicate::eq("id", row.id));

    let update = b.update(&row);
    assert_eq!(
        update.sql(),
        "UPDATE audit_logs SET id = ?, user_id = ?, operation = ?, created_at = ?, status_code = ? \
         WHERE id = ? AND audit_logs.deleted = 0"
    );
    assert!(update.check().is_ok());

    let mark = b.mark_deleted();
    assert_eq!(
        mark.sql(),
        "UPDATE audit_logs SET deleted = 1 WHERE id = ? AND audit_logs.deleted = 0"
    );

    b.only_deleted();
    assert_eq!(
        b.select().sql(),
        "SELECT id, user_id, operation, created_at, status_code FROM audit_logs \
         WHERE id = ? AND audit_logs.deleted = 1"
    );
}

#[test]
fn joined_tables_are_all_filtered() {
    let logs = TableRef::new("audit_logs").alias("a");
    let users = TableRef::new("users").alias("u");
    let mut b = EntityBuilder::<AuditLog>::with_soft_delete();
    b.table(logs.clone().join(JoinKind::Inner, users, "u.id = a.user_id"))
        .fields(audit_fields().iter().take(2).map(qualify_with(&logs)))
        .filter(Predicate::leaf("u.name", Symbol::Eq, ["ann"]));

    assert_eq!(
        b.select().sql(),
        "SELECT a.id, a.user_id FROM audit_logs a INNER JOIN users u ON u.id = a.user_id \
         WHERE u.name = ? AND a.deleted = 0 AND u.deleted = 0"
    );
}

#[test]
fn grouped_report_counts_groups() {
    let mut b = EntityBuilder::<AuditLog>::new();
    b.table(TableRef::new("audit_logs"))
        .field(Field::new("operation", |a: &AuditLog| a.operation.clone()))
        .group_by(Group::new("operation"))
        .having(Predicate::gt("COUNT(*)", 10))
        .order_by(Order::asc("operation"));

    assert_eq!(b.order_by_sql(), "operation ASC");
    assert_eq!(Order::asc("x").direction(), Direction::Asc);
    assert_eq!(
        b.count().sql(),
        "SELECT COUNT(*) FROM (SELECT operation FROM audit_logs GROUP BY operation HAVING COUNT(*) > ?) AS counted"
    );
    assert_eq!(b.count().values(), &[Value::Int(10)]);
}

#[test]
fn config_file_drives_soft_delete() {
    let path = std::env::temp_dir().join(format!("entsql-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[soft_delete]\nenabled = true\ncolumn = \"removed\"\ndeleted = \"TRUE\"\nundeleted = \"FALSE\"\n",
    )
    .unwrap();
    let config = EntityConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut b = EntityBuilder::<AuditLog>::with_config(config);
    b.table(TableRef::new("audit_logs"));
    assert!(b.validate().is_ok());
    assert_eq!(b.select().sql(), "SELECT * FROM audit_logs WHERE audit_logs.removed = FALSE");
    assert_eq!(
        b.mark_deleted().sql(),
        "UPDATE audit_logs SET removed = TRUE WHERE audit_logs.removed = FALSE"
    );
}
