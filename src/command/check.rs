use argh::FromArgs;
use keycloak_webserver_auth::configuration::Configuration;
use tracing::{info, warn};

use crate::command::Error;

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "check",
    description = "Report security-critical settings left at their defaults"
)]
pub struct Options {
    #[argh(switch, short = 's')]
    /// fail if any insecure default remains
    pub strict: bool,
}

pub struct Command<'a> {
    config: &'a Configuration,
    strict: bool,
}

impl<'a> Command<'a> {
    pub fn new(options: &Options, config: &'a Configuration) -> Self {
        Self {
            config,
            strict: options.strict,
        }
    }

    pub fn run(&self) -> Result<(), Error> {
        let defaults = self.config.insecure_defaults();
        for default in &defaults {
            warn!("Insecure default: {default}");
        }

        if self.strict {
            self.config.ensure_secure()?;
        }

        if defaults.is_empty() {
            info!("No insecure defaults found");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycloak_webserver_auth::configuration::keycloak::{CLIENT_SECRET_VAR, EXTERNAL_HOST_VAR};
    use keycloak_webserver_auth::configuration::{self, InsecureDefault};
    use std::collections::HashMap;

    #[test]
    fn test_check_tolerates_defaults_when_not_strict() {
        let config = Configuration::load_from(&HashMap::<String, String>::new());
        let options = Options { strict: false };

        assert!(Command::new(&options, &config).run().is_ok());
    }

    #[test]
    fn test_strict_check_rejects_defaults() {
        let config = Configuration::load_from(&HashMap::from([(
            EXTERNAL_HOST_VAR.to_string(),
            "https://sso.example.org".to_string(),
        )]));
        let options = Options { strict: true };

        let result = Command::new(&options, &config).run();
        match result {
            Err(Error::Configuration(configuration::Error::InsecureDefaults(defaults))) => {
                assert_eq!(defaults, vec![InsecureDefault::EmptyClientSecret]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_strict_check_accepts_overridden_values() {
        let config = Configuration::load_from(&HashMap::from([
            (
                EXTERNAL_HOST_VAR.to_string(),
                "https://sso.example.org".to_string(),
            ),
            (CLIENT_SECRET_VAR.to_string(), "s3cr3t".to_string()),
        ]));
        let options = Options { strict: true };

        assert!(Command::new(&options, &config).run().is_ok());
    }
}
