//! Console configuration from `RELAYDESK_*` environment variables.

use relaydesk_auth::Role;

use crate::ConsoleError;

pub const HOME_ROUTE_VAR: &str = "RELAYDESK_HOME_ROUTE";
pub const DEMO_PASSWORD_VAR: &str = "RELAYDESK_DEMO_PASSWORD";
pub const LOG_FILTER_VAR: &str = "RELAYDESK_LOG";
pub const DEMO_ROLE_VAR: &str = "RELAYDESK_DEMO_ROLE";
pub const DEMO_USER_VAR: &str = "RELAYDESK_DEMO_USER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Route shown when nothing is selected.
    pub home_route: String,
    /// Password accepted for demo logins and for accounts without one.
    pub demo_password: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Role the demo binary logs in as.
    pub demo_role: Role,
    pub demo_user: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            home_route: "dashboard".to_string(),
            demo_password: "123456a".to_string(),
            log_filter: "info".to_string(),
            demo_role: Role::Platform,
            demo_user: "admin".to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConsoleError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConsoleError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let demo_role = match get(DEMO_ROLE_VAR) {
            Some(raw) => raw.trim().parse::<Role>().map_err(|reason| ConsoleError::Config {
                key: DEMO_ROLE_VAR,
                reason,
            })?,
            None => defaults.demo_role,
        };

        Ok(Self {
            home_route: get(HOME_ROUTE_VAR).unwrap_or(defaults.home_route),
            demo_password: get(DEMO_PASSWORD_VAR).unwrap_or(defaults.demo_password),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
            demo_role,
            demo_user: get(DEMO_USER_VAR).unwrap_or(defaults.demo_user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (HOME_ROUTE_VAR, "station"),
            (DEMO_ROLE_VAR, " Partner "),
            (DEMO_PASSWORD_VAR, "pw"),
            (LOG_FILTER_VAR, "   "),
        ]))
        .unwrap();
        assert_eq!(config.home_route, "station");
        assert_eq!(config.demo_role, Role::Partner);
        assert_eq!(config.demo_password, "pw");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_role_is_a_config_error() {
        let err = ConsoleConfig::from_lookup(lookup(&[(DEMO_ROLE_VAR, "janitor")])).unwrap_err();
        assert!(matches!(err, ConsoleError::Config { key: DEMO_ROLE_VAR, .. }));
    }
}
