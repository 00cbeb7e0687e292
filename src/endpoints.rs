//! Endpoint resolution tables.
//!
//! Pure lookups from `(provider, endpoint, environment, application type)`
//! to base URLs. A combination with no configured upstream resolves to the
//! empty string; callers treat empty as "unconfigured" and disable the
//! dependent action.

use crate::config::{ApplicationType, AuthType, Environment};

/// Base URL for token and app-to-app authorization calls
pub fn auth_base_url(
    auth_type: AuthType,
    endpoint: &str,
    environment: Environment,
    app_type: ApplicationType,
) -> String {
    match auth_type {
        AuthType::Paotang => paotang_base(endpoint, environment, app_type),
        AuthType::Nextpass => nextpass_base(environment, app_type),
    }
}

/// Base URL for the QR/web redirect flow. NextPass has no hosted web-auth
/// page, so it never resolves.
pub fn qr_base_url(
    auth_type: AuthType,
    endpoint: &str,
    environment: Environment,
    app_type: ApplicationType,
) -> String {
    match auth_type {
        AuthType::Paotang => paotang_base(endpoint, environment, app_type),
        AuthType::Nextpass => String::new(),
    }
}

/// Provider profile endpoint for the given tier
pub fn profile_url(
    auth_type: AuthType,
    environment: Environment,
    app_type: ApplicationType,
) -> String {
    match auth_type {
        AuthType::Paotang => paotang_profile_url(environment, app_type),
        AuthType::Nextpass => {
            let base = nextpass_base(environment, app_type);
            if base.is_empty() {
                base
            } else {
                format!("{}/next-pass/v1/open-api/profile", base)
            }
        }
    }
}

fn paotang_host_prefix(endpoint: &str) -> Option<&'static str> {
    match endpoint {
        "paotangid" => Some("paotang-id"),
        "paotangpass" => Some("paotang-pass"),
        _ => None,
    }
}

fn paotang_base(endpoint: &str, environment: Environment, app_type: ApplicationType) -> String {
    let Some(prefix) = paotang_host_prefix(endpoint) else {
        return String::new();
    };
    match (environment, app_type) {
        (Environment::Production, ApplicationType::Public) => {
            format!("https://{}.devops.krungthai.com", prefix)
        }
        (Environment::Production, ApplicationType::Sandbox) => {
            format!("https://{}-sandbox.devops.krungthai.com", prefix)
        }
        (Environment::Development, ApplicationType::Public) => {
            format!("https://{}-external-sit.th-service.co.in", prefix)
        }
        (Environment::Development, ApplicationType::Sandbox) => {
            format!("https://{}-sandbox-external-sit.th-service.co.in", prefix)
        }
        (Environment::Uat, ApplicationType::Public) => {
            format!("https://{}-external-uat.th-service.co.in", prefix)
        }
        (Environment::Uat, ApplicationType::Sandbox) => {
            format!("https://{}-sandbox-external-uat.th-service.co.in", prefix)
        }
        (Environment::Staging, ApplicationType::Public) => {
            format!("https://{}-external-staging.th-service.co.in", prefix)
        }
        // No sandbox upstream is provisioned for staging
        (Environment::Staging, ApplicationType::Sandbox) => String::new(),
    }
}

fn nextpass_base(environment: Environment, app_type: ApplicationType) -> String {
    // NextPass offers no sandbox tier and no staging upstream
    if app_type != ApplicationType::Public {
        return String::new();
    }
    match environment {
        Environment::Development => "https://next-pass-external-sit.th-service.co.in".to_string(),
        Environment::Uat => "https://next-pass-external-uat.th-service.co.in".to_string(),
        Environment::Production => "https://next-pass.devops.krungthai.com".to_string(),
        Environment::Staging => String::new(),
    }
}

fn paotang_region(environment: Environment) -> Option<&'static str> {
    match environment {
        Environment::Development => Some("sit"),
        Environment::Uat => Some("uat"),
        Environment::Production => Some("prd"),
        Environment::Staging => None,
    }
}

/// The profile upstream inserts a `-sandbox` suffix into both the host and
/// the leading path segment, and addresses the environment by region code.
fn paotang_profile_url(environment: Environment, app_type: ApplicationType) -> String {
    let Some(region) = paotang_region(environment) else {
        return String::new();
    };
    let suffix = match app_type {
        ApplicationType::Sandbox => "-sandbox",
        ApplicationType::Public => "",
    };
    format!(
        "https://paotang-id{}.devops.krungthai.com/oauth2{}/{}/api/v1/profile",
        suffix, suffix, region
    )
}
