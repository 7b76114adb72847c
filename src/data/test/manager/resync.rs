use super::*;

/// Tests resyncing a guild whose members were given pooled roles before pooling.
///
/// User 100 holds guild 1's BOOSTER role, user 200 does not but was recorded in
/// BOOSTER and still holds guild 2's role.
///
/// Expected: 100 added to BOOSTER and granted guild 2's role, 200 removed and
/// stripped of guild 2's role, both files written
#[tokio::test]
async fn resync_rebuilds_membership_from_guild_roles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(two_guild_pool())
        .with_user_pools(json!({ "entries": [{ "userId": 200, "pools": ["BOOSTER"] }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory()
        .with_member(1, 200, &[])
        .with_member(2, 200, &[20]);

    let changes = manager.resync_guild(guild(1), &directory.members(1), &directory);
    manager.flush().await;

    assert_eq!(
        changes,
        vec![
            RoleChange::add(guild(2), user(100), role(20)),
            RoleChange::remove(guild(2), user(200), role(20)),
        ]
    );
    assert!(manager.is_user_in_pool(user(100), Pool::Booster));
    assert!(!manager.is_user_in_pool(user(200), Pool::Booster));
    assert_eq!(
        test.user_pools()?,
        json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] })
    );
    assert_eq!(test.pooled_roles()?, two_guild_pool());

    Ok(())
}

/// Tests resyncing a guild with no pooled roles.
///
/// Expected: no changes, pools untouched
#[tokio::test]
async fn resync_guild_without_pooled_roles_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(two_guild_pool())
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory()
        .with_guild(3, "Gamma")
        .with_member(3, 100, &[]);

    let changes = manager.resync_guild(guild(3), &directory.members(3), &directory);

    assert!(changes.is_empty());
    assert!(manager.is_user_in_pool(user(100), Pool::Booster));

    Ok(())
}
