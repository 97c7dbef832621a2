//! Repository tests for the `users` table.

use assert_matches::assert_matches;
use reelhouse_core::roles::Role;
use reelhouse_db::models::user::CreateUser;
use reelhouse_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_user(username: &str, role: Role) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone_number: "555-0100".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_by_username(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("alice", Role::StandardUser))
        .await
        .unwrap();
    assert_eq!(created.role, Role::StandardUser);

    let found = UserRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "alice@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_username_lookup_is_case_sensitive(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alice", Role::StandardUser))
        .await
        .unwrap();

    let found = UserRepo::find_by_username(&pool, "ALICE").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_administrator_role_round_trips(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("root", Role::Administrator))
        .await
        .unwrap();

    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.role, Role::Administrator);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alice", Role::StandardUser))
        .await
        .unwrap();

    let mut dup = new_user("alice", Role::StandardUser);
    dup.email = "other@example.com".to_string();
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db_err)
        if db_err.constraint() == Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_rejected_by_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO users
            (username, email, first_name, last_name, phone_number, password_hash, role)
         VALUES ('eve', 'eve@example.com', 'E', 'V', '555', 'x', 'superuser')",
    )
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("ck_users_role"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alice", Role::StandardUser))
        .await
        .unwrap();
    UserRepo::create(&pool, &new_user("bob", Role::Administrator))
        .await
        .unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}
