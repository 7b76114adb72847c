use serenity::http::Http;

use crate::model::role_change::{RoleAction, RoleChange};

/// Audit log reason attached to every role change made by the bot.
static AUDIT_LOG_REASON: &str = "Role pool sync";

/// Executes planned role changes against the Discord API.
pub struct RoleSyncService<'a> {
    http: &'a Http,
}

impl<'a> RoleSyncService<'a> {
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Applies each change in order.
    ///
    /// A failed change is logged and does not stop the remaining ones, so a missing
    /// permission in one guild does not block propagation to the others.
    ///
    /// # Arguments
    /// - `changes` - Role grants and revocations planned by the data manager
    ///
    /// # Returns
    /// - Number of changes that succeeded
    pub async fn apply(&self, changes: &[RoleChange]) -> usize {
        let mut applied = 0;

        for change in changes {
            let result = match change.action {
                RoleAction::Add => {
                    self.http
                        .add_member_role(
                            change.guild_id,
                            change.user_id,
                            change.role_id,
                            Some(AUDIT_LOG_REASON),
                        )
                        .await
                }
                RoleAction::Remove => {
                    self.http
                        .remove_member_role(
                            change.guild_id,
                            change.user_id,
                            change.role_id,
                            Some(AUDIT_LOG_REASON),
                        )
                        .await
                }
            };

            match result {
                Ok(()) => {
                    applied += 1;
                    tracing::debug!(
                        "{:?} role {} for user {} in guild {}",
                        change.action,
                        change.role_id,
                        change.user_id,
                        change.guild_id
                    );
                }
                Err(e) => tracing::error!(
                    "Failed to {:?} role {} for user {} in guild {}: {:?}",
                    change.action,
                    change.role_id,
                    change.user_id,
                    change.guild_id,
                    e
                ),
            }
        }

        if !changes.is_empty() {
            tracing::info!("Applied {}/{} role changes", applied, changes.len());
        }

        applied
    }
}
