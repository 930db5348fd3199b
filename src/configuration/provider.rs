use serde::Serialize;

use crate::configuration::KeycloakSettings;
use crate::secret::{serialize_exposed, Secret};

pub const KEYCLOAK_PROVIDER_NAME: &str = "keycloak";
pub const KEYCLOAK_PROVIDER_ICON: &str = "fa-key";
pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub const DEFAULT_SCOPE: &str = "openid email profile";
pub const TOKEN_ENDPOINT_AUTH_METHOD: &str = "client_secret_post";
pub const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

/// Describes how the web front-end performs a federated login against one identity provider.
#[derive(Clone, Debug, Serialize)]
pub struct OAuthProvider {
    pub name: String,
    pub icon: String,
    pub token_key: String,
    pub remote_app: RemoteApp,
}

/// OAuth client parameters of an [`OAuthProvider`].
#[derive(Clone, Debug, Serialize)]
pub struct RemoteApp {
    pub client_id: String,
    #[serde(serialize_with = "serialize_exposed")]
    pub client_secret: Secret<String>,
    pub api_base_url: String,
    pub access_token_url: String,
    pub authorize_url: String,
    pub userinfo_url: String,
    pub jwks_uri: String,
    pub issuer: String,
    pub client_kwargs: ClientKwargs,
    pub access_token_params: AccessTokenParams,
    // OAuth1 field, must be present and null for OAuth2 providers
    pub request_token_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientKwargs {
    pub scope: String,
    pub token_endpoint_auth_method: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessTokenParams {
    pub grant_type: String,
}

impl OAuthProvider {
    #[must_use]
    pub fn keycloak(settings: &KeycloakSettings) -> Self {
        let endpoints = settings.endpoints();

        Self {
            name: KEYCLOAK_PROVIDER_NAME.to_string(),
            icon: KEYCLOAK_PROVIDER_ICON.to_string(),
            token_key: ACCESS_TOKEN_KEY.to_string(),
            remote_app: RemoteApp {
                client_id: settings.client_id().to_string(),
                client_secret: settings.client_secret().clone(),
                api_base_url: endpoints.api_base_url,
                access_token_url: endpoints.access_token_url,
                authorize_url: endpoints.authorize_url,
                userinfo_url: endpoints.userinfo_url,
                jwks_uri: endpoints.jwks_uri,
                issuer: endpoints.issuer,
                client_kwargs: ClientKwargs {
                    scope: DEFAULT_SCOPE.to_string(),
                    token_endpoint_auth_method: TOKEN_ENDPOINT_AUTH_METHOD.to_string(),
                },
                access_token_params: AccessTokenParams {
                    grant_type: AUTHORIZATION_CODE_GRANT.to_string(),
                },
                request_token_url: None,
            },
        }
    }
}
