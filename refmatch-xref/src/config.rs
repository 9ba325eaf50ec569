use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::XrefError;

/// Connection parameters for the annotation servers, parsed from the legacy
/// comma-separated `key=>value` string (`project`, `host`, `port`, `user`).
///
/// Two project names carry documented defaults, applied only when no host is
/// given explicitly: `ensembl` resolves to `mysql-ens-sta-1:4519` as user
/// `ensro`, `ensemblgenomes` to `mysql-eg-staging-1.ebi.ac.uk:4160` as user
/// `ensro`. Any other project name without a host is a configuration error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionConfig {
    pub project: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
}

impl FromStr for ConnectionConfig {
    type Err = XrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = ConnectionConfig::default();

        for pair in s.split(',') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair
                .split_once("=>")
                .ok_or_else(|| XrefError::Config(format!("expected key=>value, got: {}", pair)))?;

            let value = value.trim();
            match key.trim() {
                "project" => config.project = Some(value.to_string()),
                "host" => config.host = Some(value.to_string()),
                "port" => {
                    let port = value
                        .parse()
                        .map_err(|_| XrefError::Config(format!("invalid port: {}", value)))?;
                    config.port = Some(port);
                }
                "user" => config.user = Some(value.to_string()),
                other => {
                    return Err(XrefError::Config(format!("unknown key: {}", other)));
                }
            }
        }

        config.apply_project_defaults()?;
        Ok(config)
    }
}

impl ConnectionConfig {
    fn apply_project_defaults(&mut self) -> Result<(), XrefError> {
        if self.host.is_some() {
            return Ok(());
        }

        match self.project.as_deref() {
            Some("ensembl") => {
                self.host = Some("mysql-ens-sta-1".to_string());
                self.port.get_or_insert(4519);
                self.user.get_or_insert_with(|| "ensro".to_string());
            }
            Some("ensemblgenomes") => {
                self.host = Some("mysql-eg-staging-1.ebi.ac.uk".to_string());
                self.port.get_or_insert(4160);
                self.user.get_or_insert_with(|| "ensro".to_string());
            }
            Some(other) => {
                return Err(XrefError::Config(format!(
                    "unknown project {} and no host given",
                    other
                )));
            }
            None => {}
        }
        Ok(())
    }
}

/// Parameters one matching run cannot start without. Missing any of them is
/// fatal, checked before any work is done.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub source_name: String,
    pub species: String,
    pub core_path: PathBuf,
    pub otherfeatures_path: PathBuf,
    pub core_proteins: Option<PathBuf>,
    pub otherfeatures_proteins: Option<PathBuf>,
}

impl RunParams {
    pub fn new(
        source_name: Option<String>,
        species: Option<String>,
        core_path: Option<PathBuf>,
        otherfeatures_path: Option<PathBuf>,
    ) -> Result<Self, XrefError> {
        Ok(RunParams {
            source_name: source_name.ok_or(XrefError::MissingParam("source name"))?,
            species: species.ok_or(XrefError::MissingParam("species"))?,
            core_path: core_path.ok_or(XrefError::MissingParam("core annotation input"))?,
            otherfeatures_path: otherfeatures_path
                .ok_or(XrefError::MissingParam("otherfeatures annotation input"))?,
            core_proteins: None,
            otherfeatures_proteins: None,
        })
    }

    pub fn with_proteins(
        mut self,
        core_proteins: Option<PathBuf>,
        otherfeatures_proteins: Option<PathBuf>,
    ) -> Self {
        self.core_proteins = core_proteins;
        self.otherfeatures_proteins = otherfeatures_proteins;
        self
    }
}
