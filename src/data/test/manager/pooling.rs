use super::*;

/// Tests pooling a role through the manager.
///
/// Expected: Ok, pooled_roles.json rewritten with the new association
#[tokio::test]
async fn put_role_persists() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert_eq!(manager.put_role(Pool::Booster, guild(1), role(10)), Ok(()));
    manager.flush().await;

    assert_eq!(
        test.pooled_roles()?,
        json!({ "BOOSTER": [{ "guildId": 1, "roleId": 10 }], "PATRON": [] })
    );

    Ok(())
}

/// Tests that a rejected insertion does not rewrite the file.
///
/// Expected: Err(AlreadyInOtherPool), file still holds the original pool only
#[tokio::test]
async fn rejected_put_leaves_file_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(json!({ "BOOSTER": [{ "guildId": 1, "roleId": 10 }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert_eq!(
        manager.put_role(Pool::Patron, guild(1), role(10)),
        Err(PutRoleError::AlreadyInOtherPool(Pool::Booster))
    );
    manager.flush().await;

    assert_eq!(
        test.pooled_roles()?,
        json!({ "BOOSTER": [{ "guildId": 1, "roleId": 10 }] })
    );

    Ok(())
}

/// Tests removing a pooled role through the manager.
///
/// Expected: true, file rewritten without the role
#[tokio::test]
async fn remove_role_persists() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pooled_roles(two_guild_pool()).build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert!(manager.remove_role(Pool::Booster, guild(1), role(10)));
    assert!(!manager.remove_role(Pool::Booster, guild(1), role(10)));
    manager.flush().await;

    assert_eq!(
        test.pooled_roles()?,
        json!({ "BOOSTER": [{ "guildId": 2, "roleId": 20 }], "PATRON": [] })
    );

    Ok(())
}

/// Tests dropping a role that was deleted on Discord.
///
/// Expected: Some(pool) for a pooled role, None otherwise
#[tokio::test]
async fn removes_deleted_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pooled_roles(two_guild_pool()).build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert_eq!(
        manager.remove_deleted_role(guild(2), role(20)),
        Some(Pool::Booster)
    );
    assert_eq!(manager.remove_deleted_role(guild(2), role(99)), None);
    assert_eq!(manager.pool_for_role(role(20)), None);

    Ok(())
}

/// Tests that rapid mutations leave the file matching the final state.
///
/// Expected: file reflects the last of many alternating put/remove calls
#[tokio::test]
async fn rapid_mutations_persist_final_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();

    for _ in 0..25 {
        manager.put_role(Pool::Booster, guild(1), role(10)).unwrap();
        assert!(manager.remove_role(Pool::Booster, guild(1), role(10)));
    }
    manager.put_role(Pool::Patron, guild(1), role(10)).unwrap();
    manager.flush().await;

    assert_eq!(
        test.pooled_roles()?,
        json!({ "BOOSTER": [], "PATRON": [{ "guildId": 1, "roleId": 10 }] })
    );

    Ok(())
}
