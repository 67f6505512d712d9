//! Role-to-screen table.
//!
//! A screen is shown iff its role list contains the viewer's role. The HTTP
//! layer uses the same table to gate the endpoints behind each screen.

use serde::Serialize;

use crate::types::Role;

/// A top-level console screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Analytics,
    Users,
    Loyalty,
    Campaigns,
    Orders,
    Security,
    Settings,
}

use Role::{Admin, Manager, SuperAdmin, Waiter};

impl Screen {
    /// Every screen, in sidebar order.
    pub const ALL: [Self; 7] = [
        Self::Analytics,
        Self::Users,
        Self::Loyalty,
        Self::Campaigns,
        Self::Orders,
        Self::Security,
        Self::Settings,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Users => "User Management",
            Self::Loyalty => "Loyalty Program",
            Self::Campaigns => "Campaigns",
            Self::Orders => "Bookings & Orders",
            Self::Security => "Security",
            Self::Settings => "System Settings",
        }
    }

    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Analytics => "/",
            Self::Users => "/users",
            Self::Loyalty => "/loyalty",
            Self::Campaigns => "/campaigns",
            Self::Orders => "/orders",
            Self::Security => "/security",
            Self::Settings => "/settings",
        }
    }

    /// Roles allowed to open this screen.
    #[must_use]
    pub const fn required_roles(self) -> &'static [Role] {
        match self {
            Self::Analytics | Self::Users | Self::Loyalty | Self::Campaigns => {
                &[SuperAdmin, Admin, Manager]
            }
            Self::Orders => &[SuperAdmin, Admin, Manager, Waiter],
            Self::Security | Self::Settings => &[SuperAdmin, Admin],
        }
    }

    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        self.required_roles().contains(&role)
    }
}

/// A sidebar entry as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub screen: Screen,
    pub title: &'static str,
    pub route: &'static str,
}

impl From<Screen> for NavItem {
    fn from(screen: Screen) -> Self {
        Self {
            screen,
            title: screen.title(),
            route: screen.route(),
        }
    }
}

/// Sidebar entries for `role`, in table order.
#[must_use]
pub fn navigation_for(role: Role) -> Vec<NavItem> {
    Screen::ALL
        .into_iter()
        .filter(|screen| screen.allows(role))
        .map(NavItem::from)
        .collect()
}

/// A dashboard shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub screen: Screen,
}

/// Dashboard shortcuts for `role`. Everyone can jump to orders; roles that
/// manage records also get customer, campaign and points shortcuts.
#[must_use]
pub fn quick_actions_for(role: Role) -> Vec<QuickAction> {
    let mut actions = vec![QuickAction {
        title: "View Orders",
        description: "Check recent orders and bookings",
        screen: Screen::Orders,
    }];

    if role.can_manage_records() {
        actions.extend([
            QuickAction {
                title: "Add User",
                description: "Register new customer",
                screen: Screen::Users,
            },
            QuickAction {
                title: "Create Campaign",
                description: "Launch new loyalty campaign",
                screen: Screen::Campaigns,
            },
            QuickAction {
                title: "Points Adjustment",
                description: "Manually adjust user points",
                screen: Screen::Loyalty,
            },
        ]);
    }

    actions
}
