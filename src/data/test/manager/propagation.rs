use super::*;

/// Tests granting a pool's roles after the user gained the role in one guild.
///
/// Guild 1's role is already on the user, so only guild 2 needs a grant.
///
/// Expected: one Add in guild 2, user recorded in BOOSTER, user file written
#[tokio::test]
async fn add_grants_role_in_other_guilds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pooled_roles(two_guild_pool()).build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory();

    let changes = manager.add_pooled_roles_to_user(Pool::Booster, user(100), &directory, true);
    manager.flush().await;

    assert_eq!(changes, vec![RoleChange::add(guild(2), user(100), role(20))]);
    assert!(manager.is_user_in_pool(user(100), Pool::Booster));
    assert_eq!(
        test.user_pools()?,
        json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] })
    );

    Ok(())
}

/// Tests that guilds without the user, without the bot, or without the role are skipped.
///
/// Expected: only guild 2 (member, bot present, role exists) receives a grant
#[tokio::test]
async fn add_skips_unqualified_guilds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(json!({
            "BOOSTER": [
                { "guildId": 1, "roleId": 10 },
                { "guildId": 2, "roleId": 20 },
                { "guildId": 3, "roleId": 30 },
                { "guildId": 4, "roleId": 40 },
                { "guildId": 5, "roleId": 50 }
            ]
        }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory()
        // user not a member
        .with_guild(3, "Gamma")
        .with_role(3, 30, "Gamma Booster")
        // pooled role deleted
        .with_guild(4, "Delta")
        .with_member(4, 100, &[]);
    // guild 5: bot not present

    let changes = manager.add_pooled_roles_to_user(Pool::Booster, user(100), &directory, false);

    assert_eq!(changes, vec![RoleChange::add(guild(2), user(100), role(20))]);

    Ok(())
}

/// Tests that a user in no qualifying guild is not recorded in the pool.
///
/// Expected: no changes, user not in pool, no user file written
#[tokio::test]
async fn add_without_qualifying_guild_records_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pooled_roles(two_guild_pool()).build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory();

    let changes = manager.add_pooled_roles_to_user(Pool::Booster, user(999), &directory, true);
    manager.flush().await;

    assert!(changes.is_empty());
    assert!(!manager.is_user_in_pool(user(999), Pool::Booster));
    assert!(!test.exists("user_pools.json"));

    Ok(())
}

/// Tests revoking a pool's roles after the user lost the role in one guild.
///
/// The user still holds guild 2's role (granted earlier) but no longer guild 1's.
///
/// Expected: one Remove in guild 2, user removed from BOOSTER, user file rewritten
#[tokio::test]
async fn remove_revokes_role_in_other_guilds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(two_guild_pool())
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = FakeDirectory::new()
        .with_guild(1, "Alpha")
        .with_role(1, 10, "Alpha Booster")
        .with_guild(2, "Beta")
        .with_role(2, 20, "Beta Booster")
        .with_member(1, 100, &[])
        .with_member(2, 100, &[20]);

    let changes =
        manager.remove_pooled_roles_from_user(Pool::Booster, user(100), &directory, true);
    manager.flush().await;

    assert_eq!(
        changes,
        vec![RoleChange::remove(guild(2), user(100), role(20))]
    );
    assert!(!manager.is_user_in_pool(user(100), Pool::Booster));
    assert_eq!(test.user_pools()?, json!({ "entries": [] }));

    Ok(())
}

/// Tests granting pooled roles to a member joining a guild.
///
/// Expected: Add for the BOOSTER role of the joined guild only
#[tokio::test]
async fn grants_roles_to_joining_member() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(json!({
            "BOOSTER": [{ "guildId": 1, "roleId": 10 }, { "guildId": 2, "roleId": 20 }],
            "PATRON": [{ "guildId": 1, "roleId": 11 }]
        }))
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory().with_role(1, 11, "Alpha Patron");

    let changes = manager.roles_for_joining_member(guild(2), user(100), &directory);
    assert_eq!(changes, vec![RoleChange::add(guild(2), user(100), role(20))]);

    // Already holds the role in guild 1, nothing to do there
    let changes = manager.roles_for_joining_member(guild(1), user(100), &directory);
    assert!(changes.is_empty());

    Ok(())
}

/// Tests leaving a guild whose boost role is pooled to BOOSTER.
///
/// Expected: BOOSTER revoked everywhere the user still holds it
#[tokio::test]
async fn leaving_boosted_guild_revokes_booster_pool() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(two_guild_pool())
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    // User already gone from guild 1, still holds the pooled role in guild 2
    let directory = FakeDirectory::new()
        .with_guild(1, "Alpha")
        .with_boost_role(1, 10)
        .with_guild(2, "Beta")
        .with_role(2, 20, "Beta Booster")
        .with_member(2, 100, &[20]);

    let changes = manager.member_left(guild(1), user(100), &directory);

    assert_eq!(
        changes,
        vec![RoleChange::remove(guild(2), user(100), role(20))]
    );
    assert!(!manager.is_user_in_pool(user(100), Pool::Booster));

    Ok(())
}

/// Tests leaving a guild whose boost role is not pooled.
///
/// Expected: no changes, user keeps BOOSTER
#[tokio::test]
async fn leaving_guild_without_pooled_boost_role_keeps_pool() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(two_guild_pool())
        .with_user_pools(json!({ "entries": [{ "userId": 100, "pools": ["BOOSTER"] }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = two_guild_directory()
        .with_guild(3, "Gamma")
        .with_boost_role(3, 30);

    assert!(manager.member_left(guild(3), user(100), &directory).is_empty());
    assert!(manager.is_user_in_pool(user(100), Pool::Booster));

    Ok(())
}
