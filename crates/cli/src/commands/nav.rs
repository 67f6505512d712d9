//! Navigation table for a role.

use loyalty_core::Role;
use loyalty_core::navigation::{navigation_for, quick_actions_for};

use super::{CommandError, emit};

/// Print the screens and dashboard shortcuts `role` is offered.
///
/// # Errors
///
/// Returns `CommandError::Io` if stdout cannot be written.
pub fn print(role: Role) -> Result<(), CommandError> {
    emit(&table(role))
}

fn table(role: Role) -> Vec<String> {
    let mut lines = vec![format!("{} ({role})", role.label())];
    lines.extend(
        navigation_for(role)
            .into_iter()
            .map(|item| format!("  {:<12} {}", item.route, item.title)),
    );
    lines.push("Quick actions".to_owned());
    lines.extend(
        quick_actions_for(role)
            .into_iter()
            .map(|action| format!("  {:<18} {}", action.title, action.description)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiter_sees_orders_only() {
        let lines = table(Role::Waiter);
        let routes: Vec<&String> = lines.iter().filter(|l| l.starts_with("  /")).collect();
        assert_eq!(routes.len(), 1);
        assert!(routes[0].contains("/orders"));
    }

    #[test]
    fn test_admin_sees_settings() {
        let lines = table(Role::Admin);
        assert!(lines.iter().any(|l| l.contains("/settings")));
        assert!(lines.iter().any(|l| l.contains("/security")));
    }
}
