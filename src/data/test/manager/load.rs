use super::*;
use crate::error::AppError;

/// Tests first start with an empty data directory.
///
/// Expected: Ok with empty tables, no files created until a mutation happens
#[tokio::test]
async fn loads_empty_directory() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert_eq!(manager.pool_for_role(role(10)), None);
    assert!(!manager.is_user_in_pool(user(100), Pool::Booster));
    assert!(!test.exists("pooled_roles.json"));

    Ok(())
}

/// Tests loading both files in the persisted layout.
///
/// Expected: pool roles and user pools available through the manager
#[tokio::test]
async fn loads_existing_files() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(two_guild_pool())
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()?;

    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert_eq!(manager.pool_for_role(role(10)), Some(Pool::Booster));
    assert_eq!(manager.pool_for_role(role(20)), Some(Pool::Booster));
    assert!(manager.is_user_in_pool(user(100), Pool::Booster));
    assert!(!manager.is_user_in_pool(user(100), Pool::Patron));

    Ok(())
}

/// Tests that a pool missing from the file loads as empty.
///
/// Expected: Ok, the present pool loads
#[tokio::test]
async fn tolerates_missing_pool_keys() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(json!({ "PATRON": [{ "guildId": 1, "roleId": 10 }] }))
        .build()?;

    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert_eq!(manager.pool_for_role(role(10)), Some(Pool::Patron));

    Ok(())
}

/// Tests that malformed JSON aborts loading instead of silently wiping data.
///
/// Expected: Err(AppError::Json) naming the file
#[tokio::test]
async fn rejects_malformed_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_file("user_pools.json", "{ \"entries\": [")
        .build()?;

    let result = ServerDataManager::load(test.path()).await;

    match result {
        Err(AppError::Json { path, .. }) => assert!(path.ends_with("user_pools.json")),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("malformed file loaded"),
    }

    Ok(())
}

/// Tests that the data directory is created when missing.
///
/// Expected: Ok, directory exists afterwards
#[tokio::test]
async fn creates_missing_directory() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let nested = test.file("nested/data");

    let _manager = ServerDataManager::load(&nested).await.unwrap();

    assert!(nested.is_dir());

    Ok(())
}
