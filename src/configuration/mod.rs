use serde::{Serialize, Serializer};
use std::fmt;
use tracing::info;

mod environment;
mod error;
pub mod keycloak;
pub mod provider;
pub mod role_mapping;

pub use environment::{Environment, ProcessEnvironment};
pub use error::Error;
pub use keycloak::{Endpoints, KeycloakSettings};
pub use provider::{AccessTokenParams, ClientKwargs, OAuthProvider, RemoteApp};
pub use role_mapping::RoleMapping;

/// Flask-AppBuilder's `AUTH_OAUTH` authentication type.
pub const AUTH_OAUTH: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthType {
    OAuth,
}

impl AuthType {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            AuthType::OAuth => AUTH_OAUTH,
        }
    }
}

impl Serialize for AuthType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A security-critical value still holding its fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsecureDefault {
    EmptyClientSecret,
    PlaceholderExternalHost,
}

impl fmt::Display for InsecureDefault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InsecureDefault::EmptyClientSecret => {
                write!(f, "{} is empty", keycloak::CLIENT_SECRET_VAR)
            }
            InsecureDefault::PlaceholderExternalHost => write!(
                f,
                "{} uses the placeholder {}",
                keycloak::EXTERNAL_HOST_VAR,
                keycloak::DEFAULT_EXTERNAL_HOST
            ),
        }
    }
}

/// Authentication settings handed to the web front-end's security layer.
///
/// Built once at startup and never mutated. The serialized form uses the
/// setting names the security layer looks up.
#[derive(Clone, Debug, Serialize)]
pub struct Configuration {
    #[serde(rename = "AUTH_TYPE")]
    auth_type: AuthType,
    #[serde(rename = "OAUTH_PROVIDERS")]
    oauth_providers: Vec<OAuthProvider>,
    #[serde(rename = "AUTH_USER_REGISTRATION")]
    user_registration: bool,
    #[serde(rename = "AUTH_USER_REGISTRATION_ROLE")]
    user_registration_role: String,
    #[serde(rename = "AUTH_ROLES_MAPPING")]
    roles_mapping: RoleMapping,
    #[serde(skip)]
    keycloak: KeycloakSettings,
}

impl Configuration {
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&ProcessEnvironment)
    }

    #[must_use]
    pub fn load_from<E: Environment + ?Sized>(env: &E) -> Self {
        let keycloak = KeycloakSettings::from_environment(env);
        let provider = OAuthProvider::keycloak(&keycloak);

        info!(
            "Configured OAuth provider '{}' for realm '{}' (issuer {})",
            provider.name,
            keycloak.realm(),
            provider.remote_app.issuer
        );

        Self {
            auth_type: AuthType::OAuth,
            oauth_providers: vec![provider],
            user_registration: true,
            user_registration_role: role_mapping::ADMIN_ROLE.to_string(),
            roles_mapping: RoleMapping::scheduler_defaults(),
            keycloak,
        }
    }

    #[must_use]
    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    #[must_use]
    pub fn oauth_providers(&self) -> &[OAuthProvider] {
        &self.oauth_providers
    }

    #[must_use]
    pub fn user_registration(&self) -> bool {
        self.user_registration
    }

    #[must_use]
    pub fn user_registration_role(&self) -> &str {
        &self.user_registration_role
    }

    #[must_use]
    pub fn roles_mapping(&self) -> &RoleMapping {
        &self.roles_mapping
    }

    #[must_use]
    pub fn keycloak(&self) -> &KeycloakSettings {
        &self.keycloak
    }

    #[must_use]
    pub fn insecure_defaults(&self) -> Vec<InsecureDefault> {
        let mut defaults = Vec::new();
        if self.keycloak.client_secret().expose().is_empty() {
            defaults.push(InsecureDefault::EmptyClientSecret);
        }
        if self.keycloak.external_host() == keycloak::DEFAULT_EXTERNAL_HOST {
            defaults.push(InsecureDefault::PlaceholderExternalHost);
        }
        defaults
    }

    /// # Errors
    ///
    /// Returns [`Error::InsecureDefaults`] listing every value still at its insecure fallback.
    pub fn ensure_secure(&self) -> Result<(), Error> {
        let defaults = self.insecure_defaults();
        if defaults.is_empty() {
            Ok(())
        } else {
            Err(Error::InsecureDefaults(defaults))
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the settings cannot be encoded.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the settings cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
