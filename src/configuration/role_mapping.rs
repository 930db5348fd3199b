use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub const ADMIN_ROLE: &str = "Admin";
pub const USER_ROLE: &str = "User";

/// Translates role claims asserted by the identity provider into the web front-end's own roles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleMapping(BTreeMap<String, Vec<String>>);

impl RoleMapping {
    /// The default mapping for the scheduler's Keycloak client roles.
    #[must_use]
    pub fn scheduler_defaults() -> Self {
        Self(BTreeMap::from([
            ("airflow_user".to_string(), vec![USER_ROLE.to_string()]),
            ("airflow_admin".to_string(), vec![ADMIN_ROLE.to_string()]),
        ]))
    }

    #[must_use]
    pub fn roles_for(&self, external_role: &str) -> Option<&[String]> {
        self.0.get(external_role).map(Vec::as_slice)
    }

    /// Internal roles granted by a set of asserted claims. Unmapped claims are ignored.
    #[must_use]
    pub fn resolve<'a, I>(&self, claims: I) -> BTreeSet<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        claims
            .into_iter()
            .filter_map(|claim| self.roles_for(claim))
            .flatten()
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_defaults() {
        let mapping = RoleMapping::scheduler_defaults();

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.roles_for("airflow_user"),
            Some(&["User".to_string()][..])
        );
        assert_eq!(
            mapping.roles_for("airflow_admin"),
            Some(&["Admin".to_string()][..])
        );
        assert_eq!(mapping.roles_for("airflow_viewer"), None);
    }

    #[test]
    fn test_resolve_claims() {
        let mapping = RoleMapping::scheduler_defaults();

        let roles = mapping.resolve(["airflow_admin", "offline_access", "airflow_user"]);
        assert_eq!(roles, BTreeSet::from(["Admin", "User"]));

        assert!(mapping.resolve(["uma_authorization"]).is_empty());
    }

    #[test]
    fn test_serialization_is_ordered() {
        let json = serde_json::to_string(&RoleMapping::scheduler_defaults()).unwrap();
        assert_eq!(json, r#"{"airflow_admin":["Admin"],"airflow_user":["User"]}"#);
    }
}
