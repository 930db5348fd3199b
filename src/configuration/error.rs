use crate::configuration::InsecureDefault;
use std::fmt;
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    Serialization(String),
    InsecureDefaults(Vec<InsecureDefault>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Serialization(err) => write!(f, "Serialization error: {err}"),
            Error::InsecureDefaults(defaults) => {
                write!(f, "Insecure defaults in use:")?;
                for default in defaults {
                    write!(f, " {default};")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        debug!("JSON error: {error}");
        Error::Serialization(error.to_string())
    }
}
