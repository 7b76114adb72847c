use crate::service::discord::{directory::find_boost_role, permission::member_permissions};
use serenity::all::{GuildId, Permissions, Role, RoleId, UserId};
use std::collections::HashMap;
use test_utils::serenity::{
    create_test_boost_role, create_test_role, create_test_role_with_permissions,
};


fn role_map(roles: Vec<Role>) -> HashMap<RoleId, Role> {
    roles.into_iter().map(|role| (role.id, role)).collect()
}
