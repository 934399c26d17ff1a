//! Authorization vocabulary
//!
//! Entities, actions and roles as they appear in the bearer token. Scopes
//! are encoded as `"<Entity>:<Action>"`, e.g. `"ChargingStation:Reset"`.

use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Resource kinds the server authorizes
    pub enum Entity {
        Site => "Site",
        SiteArea => "SiteArea",
        Company => "Company",
        ChargingStation => "ChargingStation",
        Tenant => "Tenant",
        Transaction => "Transaction",
        Report => "Report",
        User => "User",
        UsersSites => "UsersSites",
        Logging => "Logging",
        Pricing => "Pricing",
        PricingDefinition => "PricingDefinition",
        Billing => "Billing",
        Setting => "Setting",
        Token => "Token",
        AsyncTask => "AsyncTask",
        OcpiEndpoint => "OcpiEndpoint",
        OicpEndpoint => "OicpEndpoint",
        Connection => "Connection",
        Asset => "Asset",
        CarCatalog => "CarCatalog",
        Car => "Car",
        Invoice => "Invoice",
        Tax => "Tax",
        RegistrationToken => "RegistrationToken",
        ChargingProfile => "ChargingProfile",
        Notification => "Notification",
        Tag => "Tag",
        PaymentMethod => "PaymentMethod",
    }
}

string_enum! {
    /// Operations on an [`Entity`]
    pub enum Action {
        Read => "Read",
        Create => "Create",
        Update => "Update",
        Revoke => "Revoke",
        Delete => "Delete",
        Logout => "Logout",
        List => "List",
        Reset => "Reset",
        Authorize => "Authorize",
        ClearCache => "ClearCache",
        DataTransfer => "DataTransfer",
        StopTransaction => "StopTransaction",
        RemoteStopTransaction => "RemoteStopTransaction",
        StartTransaction => "StartTransaction",
        RemoteStartTransaction => "RemoteStartTransaction",
        RefundTransaction => "RefundTransaction",
        UnlockConnector => "UnlockConnector",
        GetConfiguration => "GetConfiguration",
        Ping => "Ping",
        TriggerJob => "TriggerJob",
        Register => "Register",
        GenerateLocalToken => "GenerateLocalToken",
        CheckBillingConnection => "CheckBillingConnection",
        SynchronizeUsersBilling => "SynchronizeUsersBilling",
        BillingTransaction => "BillingTransaction",
        ReadBillingTaxes => "ReadBillingTaxes",
        PowerLimitation => "PowerLimitation",
        SetChargingProfile => "SetChargingProfile",
        Export => "Export",
    }
}

string_enum! {
    /// User role, serialized as the single-letter code the server uses
    pub enum Role {
        SuperAdmin => "S",
        Admin => "A",
        Basic => "B",
        Demo => "D",
    }
}

impl Role {
    /// Parse the single-letter code, `None` for anything else
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Self::SuperAdmin),
            "A" => Some(Self::Admin),
            "B" => Some(Self::Basic),
            "D" => Some(Self::Demo),
            _ => None,
        }
    }
}

/// Scope string for an entity/action pair
pub fn scope(entity: Entity, action: Action) -> String {
    format!("{}:{}", entity, action)
}
