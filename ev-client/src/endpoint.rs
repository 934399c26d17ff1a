//! REST endpoint resolution
//!
//! Routes are patterns with `:name` placeholders (`charging-stations/:id/reset`)
//! that get their values substituted URL-encoded and are then appended to a
//! tenant-specific prefix.

use std::fmt;

/// Which backend surface a route belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlPrefix {
    /// `<endpoint>/v1/auth`: unauthenticated account flows
    Auth,
    /// `<endpoint>/v1/api`: secured REST API
    #[default]
    Api,
    /// `<endpoint>/v1/util`: public utilities (images, logos)
    Util,
    /// `<endpoint>/client/api`: legacy action-style API
    ClientApi,
    /// `<endpoint>/client/util`
    ClientUtil,
}

impl UrlPrefix {
    pub fn path(&self) -> &'static str {
        match self {
            UrlPrefix::Auth => "/v1/auth",
            UrlPrefix::Api => "/v1/api",
            UrlPrefix::Util => "/v1/util",
            UrlPrefix::ClientApi => "/client/api",
            UrlPrefix::ClientUtil => "/client/util",
        }
    }

    /// Full prefix for a tenant base URL
    pub fn for_endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), self.path())
    }
}

/// Resolve `route` against `prefix`
///
/// Each `(name, value)` pair replaces the first `:name` placeholder with the
/// URL-encoded value (`!'()*` stay literal, like JavaScript's
/// `encodeURIComponent`). A placeholder only matches whole names, so `:id` never
/// eats the start of `:idTag`. Placeholders without a value stay verbatim.
pub fn resolve(route: &str, path_params: &[(&str, &str)], prefix: &str) -> String {
    let mut resolved = route.to_string();
    for (name, value) in path_params {
        let encoded = encode_component(value);
        if let Some(next) = replace_placeholder(&resolved, name, &encoded) {
            resolved = next;
        }
    }
    format!("{}/{}", prefix, resolved)
}

/// Sub-delimiters the backend's own clients send unescaped
const LITERAL_ESCAPES: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

fn encode_component(value: &str) -> String {
    // a literal '%' is already "%25", so these sequences only come from the five characters
    LITERAL_ESCAPES
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |acc, (escaped, literal)| {
            acc.replace(escaped, literal)
        })
}

fn replace_placeholder(route: &str, name: &str, value: &str) -> Option<String> {
    let needle = format!(":{}", name);
    let mut from = 0;
    while let Some(pos) = route[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        let at_boundary = route[end..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        if at_boundary {
            return Some(format!("{}{}{}", &route[..start], value, &route[end..]));
        }
        from = end;
    }
    None
}

macro_rules! routes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

routes! {
    /// Routes of the `v1` REST surface
    pub enum ServerRoute {
        // Auth
        Signin => "signin",
        Signon => "signon",
        PasswordReset => "password/reset",
        Eula => "eula",
        EulaCheck => "eula/check",
        MailCheck => "mail/check",

        // Charging stations
        ChargingStations => "charging-stations",
        ChargingStation => "charging-stations/:id",
        ChargingStationOcppParameters => "charging-stations/:id/ocpp/parameters",
        ChargingStationRequestOcppParameters => "charging-stations/ocpp/parameters",
        ChargingStationReset => "charging-stations/:id/reset",
        ChargingStationClearCache => "charging-stations/:id/cache/clear",
        ChargingStationRemoteStart => "charging-stations/:id/remote/start",
        ChargingStationRemoteStop => "charging-stations/:id/remote/stop",
        ChargingStationUnlockConnector => "charging-stations/:id/connectors/:connectorId/unlock",
        ChargingStationTransactions => "charging-stations/:id/transactions",

        // Transactions
        TransactionsCompleted => "transactions/status/completed",
        TransactionsActive => "transactions/status/active",
        Transaction => "transactions/:id",
        TransactionConsumptions => "transactions/:id/consumptions",
        TransactionSoftStop => "transactions/:id/soft-stop",

        // Sites
        Sites => "sites",
        SiteImage => "sites/:id/image",
        SiteAreas => "site-areas",

        // Users
        Users => "users",
        User => "users/:id",
        UserDefaultTagCar => "users/:id/default-car-tag",
        UserImage => "users/:id/image",
        UserMobileToken => "users/:id/mobile-token",

        Cars => "cars",
        TenantLogo => "tenants/logo",

        // Billing
        BillingSettings => "billing-setting",
        BillingPaymentMethods => "users/:userID/payment-methods",
        BillingPaymentMethod => "users/:userID/payment-methods/:paymentMethodID",
        BillingPaymentMethodSetup => "users/:userID/payment-methods/setup",
        BillingPaymentMethodAttach => "users/:userID/payment-methods/:paymentMethodID/attach",
        BillingInvoices => "invoices",
        BillingDownloadInvoice => "invoices/:invoiceID/download",

        // Notifications
        EndUserReportError => "notifications/end-user/report-error",
    }
}

routes! {
    /// Action names of the legacy `client/api` surface
    pub enum ServerAction {
        Cars => "Cars",
        CarCatalogs => "CarCatalogs",
        Car => "Car",
        Tags => "Tags",
    }
}

impl ServerRoute {
    /// [`resolve`] this route
    pub fn resolve(&self, path_params: &[(&str, &str)], prefix: &str) -> String {
        resolve(self.as_str(), path_params, prefix)
    }
}

impl ServerAction {
    pub fn resolve(&self, prefix: &str) -> String {
        resolve(self.as_str(), &[], prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://demo.example.com/v1/api";

    #[test]
    fn test_resolve_single_placeholder() {
        assert_eq!(
            resolve("charging-stations/:id/reset", &[("id", "CS-01")], PREFIX),
            "https://demo.example.com/v1/api/charging-stations/CS-01/reset"
        );
    }

    #[test]
    fn test_resolve_encodes_values() {
        assert_eq!(
            resolve("charging-stations/:id", &[("id", "CS 01/A")], PREFIX),
            "https://demo.example.com/v1/api/charging-stations/CS%2001%2FA"
        );
    }

    #[test]
    fn test_resolve_keeps_sub_delimiters_literal() {
        assert_eq!(
            resolve("sites/:id", &[("id", "a(b)!*'")], "p"),
            "p/sites/a(b)!*'"
        );
        assert_eq!(
            resolve("sites/:id", &[("id", "50%21 off")], "p"),
            "p/sites/50%2521%20off"
        );
    }

    #[test]
    fn test_resolve_multiple_placeholders() {
        let url = ServerRoute::ChargingStationUnlockConnector
            .resolve(&[("id", "cs1"), ("connectorId", "2")], PREFIX);
        assert_eq!(url, format!("{}/charging-stations/cs1/connectors/2/unlock", PREFIX));
    }

    #[test]
    fn test_resolve_keeps_unmatched_placeholder() {
        assert_eq!(
            resolve("users/:userID/payment-methods/:paymentMethodID", &[("userID", "u1")], "p"),
            "p/users/u1/payment-methods/:paymentMethodID"
        );
    }

    #[test]
    fn test_resolve_matches_whole_names_only() {
        assert_eq!(
            resolve("a/:idTag/b/:id", &[("id", "7")], "p"),
            "p/a/:idTag/b/7"
        );
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(
            UrlPrefix::Auth.for_endpoint("https://t.example.com/"),
            "https://t.example.com/v1/auth"
        );
        assert_eq!(UrlPrefix::default(), UrlPrefix::Api);
        assert_eq!(ServerAction::Tags.resolve("x/client/api"), "x/client/api/Tags");
    }
}
