use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;
use keycloak_webserver_auth::configuration::Configuration;
use tracing::info;

use crate::command::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    JsonPretty,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "json-pretty" => Ok(Format::JsonPretty),
            other => Err(format!(
                "unknown format '{other}', expected 'json' or 'json-pretty'"
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::JsonPretty => write!(f, "json-pretty"),
        }
    }
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "render",
    description = "Print the authentication settings for the web front-end"
)]
pub struct Options {
    #[argh(option, short = 'f', default = "Format::Json")]
    /// output format, `json` or `json-pretty`, defaults to `json`
    pub format: Format,
    #[argh(option, short = 'o')]
    /// write to this file instead of stdout
    pub output: Option<PathBuf>,
}

pub struct Command<'a> {
    config: &'a Configuration,
    format: Format,
    output: Option<PathBuf>,
}

impl<'a> Command<'a> {
    pub fn new(options: &Options, config: &'a Configuration) -> Self {
        Self {
            config,
            format: options.format,
            output: options.output.clone(),
        }
    }

    pub fn render(&self) -> Result<String, Error> {
        let rendered = match self.format {
            Format::Json => self.config.to_json()?,
            Format::JsonPretty => self.config.to_json_pretty()?,
        };
        Ok(rendered)
    }

    pub fn run(&self) -> Result<(), Error> {
        let rendered = self.render()?;

        if let Some(path) = &self.output {
            fs::write(path, format!("{rendered}\n"))?;
            info!("Wrote authentication settings to {}", path.display());
        } else {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
        }
        Ok(())
    }
}
