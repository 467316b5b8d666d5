mod common;

#[test]
fn test_creates_and_migrates_db_files() {
    let test_db = common::TestDb::new("test_creates_and_migrates.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
