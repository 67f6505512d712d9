//! Staff roles and the affordances each one unlocks.

use serde::{Deserialize, Serialize};

use super::brand::Brand;

/// Error returned when a string names no known role.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);

/// Console role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Global access to every brand and system setting.
    SuperAdmin,
    /// Full control over one brand's loyalty program.
    Admin,
    /// Manages customers, campaigns and daily operations for one brand.
    Manager,
    /// Front-of-house staff: orders, bookings and redemptions.
    Waiter,
}

impl Role {
    /// Every role, most privileged first.
    pub const ALL: [Self; 4] = [Self::SuperAdmin, Self::Admin, Self::Manager, Self::Waiter];

    /// Roles an admin may hand out through staff registration.
    pub const REGISTRABLE: [Self; 3] = [Self::Admin, Self::Manager, Self::Waiter];

    /// Title-cased label, e.g. `Super Admin`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Waiter => "Waiter",
        }
    }

    /// Whether this role sees every brand and may switch the active one.
    #[must_use]
    pub const fn can_switch_brands(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Whether this role may register new staff accounts.
    #[must_use]
    pub const fn can_register_staff(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Whether this role may add customers, reservations and campaigns.
    #[must_use]
    pub const fn can_manage_records(self) -> bool {
        !matches!(self, Self::Waiter)
    }

    /// Whether the dashboard shows performance charts and extended metrics.
    #[must_use]
    pub const fn sees_performance(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Dashboard greeting for this role at `brand`.
    #[must_use]
    pub fn welcome_message(self, brand: Brand) -> String {
        let name = brand.display_name();
        match self {
            Self::SuperAdmin => "Welcome to the Global Loyalty System Dashboard. You have full access to all brands and system settings.".to_owned(),
            Self::Admin => format!("Welcome to {name} Admin Dashboard. You have full control over your brand's loyalty program."),
            Self::Manager => format!("Welcome to {name} Management Portal. You can manage customers, campaigns, and daily operations."),
            Self::Waiter => format!("Welcome to {name} Staff Portal. You can manage orders, bookings, and customer redemptions."),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::Waiter => write!(f, "waiter"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "waiter" => Ok(Self::Waiter),
            _ => Err(ParseRoleError(s.to_owned())),
        }
    }
}
