use super::*;
use crate::model::pooled_role::PooledRole;

/// Tests listing pooled roles across guilds.
///
/// Guild 3 is no longer joined by the bot and must not show up. PATRON has no
/// visible roles and must be omitted.
///
/// Expected: BOOSTER only, roles ordered by guild name with resolved names
#[tokio::test]
async fn lists_roles_in_joined_guilds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(json!({
            "BOOSTER": [
                { "guildId": 2, "roleId": 20 },
                { "guildId": 1, "roleId": 10 },
                { "guildId": 3, "roleId": 30 }
            ],
            "PATRON": [{ "guildId": 3, "roleId": 31 }]
        }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = FakeDirectory::new()
        .with_guild(1, "Zulu")
        .with_role(1, 10, "Nitro")
        .with_guild(2, "Alpha")
        .with_role(2, 20, "Booster");

    let pooled = manager.pooled_roles(&directory);

    assert_eq!(pooled.len(), 1);
    assert_eq!(
        pooled[&Pool::Booster],
        vec![
            PooledRole {
                guild_id: guild(2),
                role_id: role(20),
                role_name: "Booster".to_string(),
                guild_name: "Alpha".to_string(),
            },
            PooledRole {
                guild_id: guild(1),
                role_id: role(10),
                role_name: "Nitro".to_string(),
                guild_name: "Zulu".to_string(),
            },
        ]
    );

    Ok(())
}

/// Tests that a role missing from the cache is listed by ID.
///
/// Expected: role name falls back to the role ID
#[tokio::test]
async fn falls_back_to_role_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pooled_roles(json!({ "BOOSTER": [{ "guildId": 1, "roleId": 10 }] }))
        .build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();
    let directory = FakeDirectory::new().with_guild(1, "Alpha");

    let pooled = manager.pooled_roles(&directory);

    assert_eq!(pooled[&Pool::Booster][0].role_name, "10");

    Ok(())
}

#[tokio::test]
async fn lists_nothing_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let manager = ServerDataManager::load(test.path()).await.unwrap();

    assert!(manager.pooled_roles(&two_guild_directory()).is_empty());

    Ok(())
}
