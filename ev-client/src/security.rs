//! Authorization checks derived from the bearer token claims

use shared::authorization::{Action, Entity, Role, scope};
use shared::models::UserToken;

/// Tenant components the UI toggles on
pub mod component {
    pub const ORGANIZATION: &str = "organization";
    pub const PRICING: &str = "pricing";
    pub const BILLING: &str = "billing";
    pub const CAR: &str = "car";
    pub const ASSET: &str = "asset";
    pub const SMART_CHARGING: &str = "smartCharging";
}

/// Read-only view over a decoded [`UserToken`]
#[derive(Debug, Clone)]
pub struct SecurityProvider {
    token: UserToken,
    role: Option<Role>,
}

impl SecurityProvider {
    pub fn new(token: UserToken) -> Self {
        let role = token.role.as_deref().and_then(Role::from_code);
        Self { token, role }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Some(Role::SuperAdmin)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn is_basic(&self) -> bool {
        self.role == Some(Role::Basic)
    }

    pub fn is_demo(&self) -> bool {
        self.role == Some(Role::Demo)
    }

    /// Whether the token carries the `"<Entity>:<Action>"` scope
    pub fn can_access(&self, entity: Entity, action: Action) -> bool {
        let wanted = scope(entity, action);
        self.token.scopes.iter().any(|s| *s == wanted)
    }

    pub fn is_component_active(&self, component: &str) -> bool {
        self.token.active_components.iter().any(|c| c == component)
    }

    /// Admins administer every site
    pub fn is_site_admin(&self, site_id: &str) -> bool {
        self.is_admin() || self.token.sites_admin.iter().any(|s| s == site_id)
    }

    pub fn is_site_owner(&self, site_id: &str) -> bool {
        self.token.sites_owner.iter().any(|s| s == site_id)
    }

    pub fn can_list_users(&self) -> bool {
        self.can_access(Entity::User, Action::List)
    }

    pub fn can_list_sites(&self) -> bool {
        self.can_access(Entity::Site, Action::List)
    }

    pub fn can_list_charging_stations(&self) -> bool {
        self.can_access(Entity::ChargingStation, Action::List)
    }

    pub fn can_list_transactions(&self) -> bool {
        self.can_access(Entity::Transaction, Action::List)
    }

    pub fn can_list_cars(&self) -> bool {
        self.is_component_active(component::CAR) && self.can_access(Entity::Car, Action::List)
    }

    pub fn can_list_tags(&self) -> bool {
        self.can_access(Entity::Tag, Action::List)
    }

    pub fn can_list_invoices(&self) -> bool {
        self.is_component_active(component::BILLING)
            && self.can_access(Entity::Invoice, Action::List)
    }

    pub fn can_list_payment_methods(&self) -> bool {
        self.is_component_active(component::BILLING)
            && self.can_access(Entity::PaymentMethod, Action::List)
    }

    pub fn user_token(&self) -> &UserToken {
        &self.token
    }
}
