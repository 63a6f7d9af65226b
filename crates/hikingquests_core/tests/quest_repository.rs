use hikingquests_core::db::open_db_in_memory;
use hikingquests_core::{
    with_unit_of_work, QuestItem, QuestLookup, QuestRepository, QuestStatus, RepoError,
    SqliteQuestRepository, UnitOfWork,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn add_and_get_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let quest = QuestItem::create("Walk 5 km", "Walk 5 km or more on a forest path.").unwrap();
    repo.add(&quest).unwrap();

    let loaded = repo.get_by_id(quest.id()).unwrap();
    assert_eq!(loaded, quest);
    assert_eq!(loaded.title(), quest.title());
    assert_eq!(loaded.description(), quest.description());
    assert_eq!(loaded.status(), QuestStatus::Planned);
}

#[test]
fn add_duplicate_id_is_a_storage_failure() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let quest = QuestItem::create("title", "desc").unwrap();
    repo.add(&quest).unwrap();

    let err = repo.add(&quest).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)), "unexpected error: {err}");
}

#[test]
fn get_by_id_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let id = Uuid::new_v4();
    let err = repo.get_by_id(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(QuestLookup::Id(found)) if found == id));
}

#[test]
fn get_by_title_is_case_insensitive_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let quest = QuestItem::create("Catch a Trout", "In a mountain stream.").unwrap();
    repo.add(&quest).unwrap();

    assert_eq!(repo.get_by_title("catch a trout").unwrap().id(), quest.id());
    assert_eq!(repo.get_by_title("CATCH A TROUT").unwrap().id(), quest.id());

    let err = repo.get_by_title("catch a").unwrap_err();
    assert!(
        matches!(err, RepoError::NotFound(QuestLookup::Title(ref title)) if title == "catch a")
    );
}

#[test]
fn get_all_is_empty_without_quests_and_lists_every_quest() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);
    assert!(repo.get_all().unwrap().is_empty());

    let first = QuestItem::create("first", "desc").unwrap();
    let second = QuestItem::create("second", "desc").unwrap();
    repo.add(&first).unwrap();
    repo.add(&second).unwrap();

    let mut ids = repo
        .get_all()
        .unwrap()
        .into_iter()
        .map(|quest| quest.id())
        .collect::<Vec<_>>();
    ids.sort();
    let mut expected = vec![first.id(), second.id()];
    expected.sort();
    assert_eq!(ids, expected);
}

#[test]
fn get_by_title_returns_oldest_of_same_timestamp_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let older = "ffffffff-ffff-4fff-bfff-ffffffffffff";
    let newer = "00000000-0000-4000-8000-000000000001";
    for (id, title) in [(older, "Dup"), (newer, "dup")] {
        conn.execute(
            "INSERT INTO quests (id, title, description, status, created_at, updated_at)
             VALUES (?1, ?2, 'desc', 'planned', 1000, 1000);",
            [id, title],
        )
        .unwrap();
    }

    let repo = SqliteQuestRepository::new(&conn);
    for _ in 0..5 {
        assert_eq!(
            repo.get_by_title("DUP").unwrap().id(),
            Uuid::parse_str(older).unwrap()
        );
    }
}

#[test]
fn get_all_preserves_insertion_order_within_one_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let inserted = (0..10)
        .map(|n| {
            let quest = QuestItem::create(format!("quest {n}"), "desc").unwrap();
            repo.add(&quest).unwrap();
            quest.id()
        })
        .collect::<Vec<_>>();
    conn.execute("UPDATE quests SET created_at = 1000;", [])
        .unwrap();

    let listed = repo
        .get_all()
        .unwrap()
        .into_iter()
        .map(|quest| quest.id())
        .collect::<Vec<_>>();
    assert_eq!(listed, inserted);
}

#[test]
fn get_all_lists_older_quests_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let later = QuestItem::create("later", "desc").unwrap();
    let earlier = QuestItem::create("earlier", "desc").unwrap();
    repo.add(&later).unwrap();
    repo.add(&earlier).unwrap();
    conn.execute(
        "UPDATE quests SET created_at = CASE title WHEN 'earlier' THEN 1000 ELSE 2000 END;",
        [],
    )
    .unwrap();

    let titles = repo
        .get_all()
        .unwrap()
        .into_iter()
        .map(|quest| quest.title().to_string())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["earlier", "later"]);
}

#[test]
fn update_overwrites_fields_and_status() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let mut quest = QuestItem::create("draft", "draft description").unwrap();
    repo.add(&quest).unwrap();

    quest.update_title("final").unwrap();
    quest.update_description("final description").unwrap();
    quest.start().unwrap();
    repo.update(&quest).unwrap();

    let loaded = repo.get_by_id(quest.id()).unwrap();
    assert_eq!(loaded.title(), "final");
    assert_eq!(loaded.description(), "final description");
    assert_eq!(loaded.status(), QuestStatus::InProgress);
}

#[test]
fn update_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let quest = QuestItem::create("missing", "never added").unwrap();
    let err = repo.update(&quest).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(QuestLookup::Id(id)) if id == quest.id()));
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestRepository::new(&conn);

    let quest = QuestItem::create("Sleep in a tent", "One night outside.").unwrap();
    repo.add(&quest).unwrap();

    assert!(repo.delete(quest.id()).unwrap());
    assert!(!repo.delete(quest.id()).unwrap());
    assert!(matches!(
        repo.get_by_id(quest.id()).unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn corrupt_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let id = Uuid::new_v4();
    conn.execute(
        "INSERT INTO quests (id, title, description, status) VALUES (?1, '  ', 'desc', 'planned');",
        [id.to_string()],
    )
    .unwrap();

    let repo = SqliteQuestRepository::new(&conn);
    let err = repo.get_by_id(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "unexpected error: {err}");
}

#[test]
fn status_outside_lifecycle_is_rejected_by_schema() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO quests (id, title, description, status) VALUES (?1, 't', 'd', 'archived');",
        [Uuid::new_v4().to_string()],
    );
    assert!(result.is_err());
}

#[test]
fn unit_of_work_commit_makes_writes_visible() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quests.db");
    let mut conn = hikingquests_core::db::open_db(&path).unwrap();

    let quest = QuestItem::create("committed", "desc").unwrap();
    let uow = UnitOfWork::begin(&mut conn).unwrap();
    uow.repository().add(&quest).unwrap();
    uow.commit().unwrap();

    let other = Connection::open(&path).unwrap();
    assert_eq!(count_quests(&other), 1);
}

#[test]
fn unit_of_work_dropped_without_commit_rolls_back() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let uow = UnitOfWork::begin(&mut conn).unwrap();
        let quest = QuestItem::create("discarded", "desc").unwrap();
        uow.repository().add(&quest).unwrap();
    }

    assert_eq!(count_quests(&conn), 0);
}

#[test]
fn unit_of_work_explicit_rollback_discards_writes() {
    let mut conn = open_db_in_memory().unwrap();

    let uow = UnitOfWork::begin(&mut conn).unwrap();
    uow.repository()
        .add(&QuestItem::create("rolled back", "desc").unwrap())
        .unwrap();
    uow.rollback().unwrap();

    assert_eq!(count_quests(&conn), 0);
}

#[test]
fn with_unit_of_work_rolls_back_on_error() {
    let mut conn = open_db_in_memory().unwrap();

    let result = with_unit_of_work(&mut conn, |repo| -> Result<(), RepoError> {
        repo.add(&QuestItem::create("first", "desc").unwrap())?;
        repo.update(&QuestItem::create("missing", "desc").unwrap())?;
        Ok(())
    });

    assert!(matches!(result, Err(RepoError::NotFound(_))));
    assert_eq!(count_quests(&conn), 0);
}

fn count_quests(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM quests;", [], |row| row.get(0))
        .unwrap()
}
