use sqlx::PgPool;
use std::sync::Arc;
use todo_service::domain::entities::{DEFAULT_PRIORITY, NewTodoItem, TodoItemPatch};
use todo_service::domain::repositories::TodoItemRepository;
use todo_service::infrastructure::persistence::PgTodoItemRepository;
use todo_service::utils::timestamp::current_timestamp;

fn new_item(title: &str, activity_group_id: i64) -> NewTodoItem {
    NewTodoItem {
        activity_group_id,
        title: title.to_string(),
        is_active: true,
        priority: DEFAULT_PRIORITY.to_string(),
        created_at: current_timestamp(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_todo_item(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));

    let item = repo.create(new_item("Milk", 1)).await.unwrap();

    assert!(item.id > 0);
    assert_eq!(item.activity_group_id, 1);
    assert_eq!(item.title, "Milk");
    assert!(item.is_active);
    assert_eq!(item.priority, "very-high");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_group_id_is_not_enforced(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));

    let item = repo.create(new_item("Orphan", 424_242)).await.unwrap();

    assert_eq!(item.activity_group_id, 424_242);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_uses_primary_key(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));
    repo.create(new_item("First", 1)).await.unwrap();
    let second = repo.create(new_item("Second", 1)).await.unwrap();

    let found = repo.find_by_id(second.id).await.unwrap().unwrap();

    assert_eq!(found.title, "Second");
    assert!(repo.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_ordered_by_id(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));
    let a = repo.create(new_item("A", 1)).await.unwrap();
    let b = repo.create(new_item("B", 2)).await.unwrap();

    let items = repo.list().await.unwrap();

    assert_eq!(items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a.id, b.id]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_preserves_created_at(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));
    let created = repo.create(new_item("Milk", 1)).await.unwrap();

    let patch = TodoItemPatch {
        title: "Oat milk".to_string(),
        priority: "low".to_string(),
        is_active: false,
    };
    let updated = repo.update(created.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.title, "Oat milk");
    assert_eq!(updated.priority, "low");
    assert!(!updated.is_active);
    assert_eq!(updated.activity_group_id, created.activity_group_id);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_row(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));

    let patch = TodoItemPatch {
        title: "x".to_string(),
        priority: "low".to_string(),
        is_active: true,
    };

    assert!(repo.update(999_999, patch).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgTodoItemRepository::new(Arc::new(pool));
    let created = repo.create(new_item("Milk", 1)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
}
