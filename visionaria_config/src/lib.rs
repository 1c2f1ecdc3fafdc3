use std::{
    ffi::OsStr,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;
use visionaria_models::{contact::WhatsappRecipient, email_address::EmailAddress};

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Path list (`:` separated on Unix, `;` on Windows) of config files applied
/// on top of the default one.
pub const CONFIG_PATH_ENV: &str = "VISIONARIA_CONFIG_PATH";

pub fn load() -> anyhow::Result<Config> {
    let extra_paths = std::env::var_os(CONFIG_PATH_ENV);
    load_paths(&config_paths(extra_paths.as_deref()))
}

/// The default config file followed by the entries of a platform path list.
fn config_paths(extra_paths: Option<&OsStr>) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(
            extra_paths
                .into_iter()
                .flat_map(std::env::split_paths)
                .filter(|path| !path.as_os_str().is_empty()),
        )
        .collect()
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub whatsapp: WhatsappConfig,
    pub lead: LeadConfig,
    pub contact: ContactConfig,
    pub location: LocationConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct WhatsappConfig {
    pub base_url: Url,
    pub recipient: WhatsappRecipient,
}

#[derive(Debug, Deserialize)]
pub struct LeadConfig {
    pub greeting: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub email: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub label: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavigationConfig {
    /// Command used to open urls, e.g. `["firefox", "--new-window"]`.
    /// Defaults to the platform's url opener.
    pub opener: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.whatsapp.base_url.as_str(), "https://wa.me/");
        assert_eq!(config.whatsapp.recipient.as_str(), "5511995641753");
        assert_eq!(config.contact.email.as_str(), "visionariaev@gmail.com");
        assert_eq!(config.lead.greeting, "Olá, Visionária Vistorias!");
        assert_eq!(config.navigation.opener, None);
    }

    #[test]
    fn override_config() {
        let path = std::env::temp_dir().join(format!(
            "visionaria-config-override-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[http]\nport = 9000\n\n[navigation]\nopener = [\"firefox\", \"--new-window\"]"
        )
        .unwrap();

        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), path.as_path()]);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(
            config.navigation.opener,
            Some(vec!["firefox".to_owned(), "--new-window".to_owned()])
        );
    }

    #[test]
    fn extra_config_paths() {
        let extra = std::env::join_paths(["/etc/visionaria.toml", "local.toml"]).unwrap();

        assert_eq!(
            config_paths(Some(&extra)),
            [
                PathBuf::from(DEFAULT_CONFIG_PATH),
                PathBuf::from("/etc/visionaria.toml"),
                PathBuf::from("local.toml"),
            ]
        );
        assert_eq!(config_paths(None), [PathBuf::from(DEFAULT_CONFIG_PATH)]);
        assert_eq!(
            config_paths(Some(OsStr::new(""))),
            [PathBuf::from(DEFAULT_CONFIG_PATH)]
        );
    }

    #[cfg(unix)]
    #[test]
    fn extra_config_paths_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let extra = OsStr::from_bytes(b"/tmp/visionaria-\xff.toml");

        assert_eq!(
            config_paths(Some(extra)),
            [PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from(extra)]
        );
    }

    #[test]
    fn invalid_recipient() {
        let path = std::env::temp_dir().join(format!(
            "visionaria-config-invalid-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[whatsapp]\nrecipient = \"+55 11 99564-1753\"\n").unwrap();

        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), path.as_path()]);
        std::fs::remove_file(&path).unwrap();

        assert!(config.is_err());
    }
}
