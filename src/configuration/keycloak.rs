use tracing::debug;

use crate::configuration::Environment;
use crate::secret::Secret;

pub const INTERNAL_HOST_VAR: &str = "KEYCLOAK_INTERNAL_HOST";
pub const EXTERNAL_HOST_VAR: &str = "KEYCLOAK_HOST";
pub const REALM_VAR: &str = "KEYCLOAK_REALM";
pub const CLIENT_ID_VAR: &str = "KEYCLOAK_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "KEYCLOAK_CLIENT_SECRET";

pub const DEFAULT_INTERNAL_HOST: &str = "http://keycloak.keycloak.svc.cluster.local:8080";
pub const DEFAULT_EXTERNAL_HOST: &str = "https://keycloak.local";
pub const DEFAULT_REALM: &str = "mlops";
pub const DEFAULT_CLIENT_ID: &str = "airflow-client";

/// Connection settings for a Keycloak realm.
///
/// Keycloak is reached through two addresses: the internal host is used for
/// server-to-server calls, the external host for anything a browser must reach.
#[derive(Clone, Debug)]
pub struct KeycloakSettings {
    internal_host: String,
    external_host: String,
    realm: String,
    client_id: String,
    client_secret: Secret<String>,
}

/// Endpoints derived from [`KeycloakSettings`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base_url: String,
    pub access_token_url: String,
    pub authorize_url: String,
    pub userinfo_url: String,
    pub jwks_uri: String,
    pub issuer: String,
}

fn lookup<E: Environment + ?Sized>(env: &E, key: &str, fallback: &str) -> String {
    if let Some(value) = env.var(key) {
        value
    } else {
        debug!("{key} is not set, using default");
        fallback.to_string()
    }
}

impl KeycloakSettings {
    #[must_use]
    pub fn from_environment<E: Environment + ?Sized>(env: &E) -> Self {
        let client_secret = env.var(CLIENT_SECRET_VAR).unwrap_or_else(|| {
            debug!("{CLIENT_SECRET_VAR} is not set, using an empty client secret");
            String::new()
        });

        Self {
            internal_host: lookup(env, INTERNAL_HOST_VAR, DEFAULT_INTERNAL_HOST),
            external_host: lookup(env, EXTERNAL_HOST_VAR, DEFAULT_EXTERNAL_HOST),
            realm: lookup(env, REALM_VAR, DEFAULT_REALM),
            client_id: lookup(env, CLIENT_ID_VAR, DEFAULT_CLIENT_ID),
            client_secret: Secret::new(client_secret),
        }
    }

    #[must_use]
    pub fn internal_host(&self) -> &str {
        &self.internal_host
    }

    #[must_use]
    pub fn external_host(&self) -> &str {
        &self.external_host
    }

    #[must_use]
    pub fn realm(&self) -> &str {
        &self.realm
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn client_secret(&self) -> &Secret<String> {
        &self.client_secret
    }

    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        let internal = format!("{}/realms/{}", self.internal_host, self.realm);
        let external = format!("{}/realms/{}", self.external_host, self.realm);

        Endpoints {
            api_base_url: format!("{internal}/protocol/"),
            access_token_url: format!("{internal}/protocol/openid-connect/token"),
            authorize_url: format!("{external}/protocol/openid-connect/auth"),
            userinfo_url: format!("{internal}/protocol/openid-connect/userinfo"),
            jwks_uri: format!("{internal}/protocol/openid-connect/certs"),
            issuer: external,
        }
    }
}
