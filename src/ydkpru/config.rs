use std::fs;
use std::path::Path;
use std::io::Read;

use once_cell::sync::OnceCell;
use serde::Deserialize;

fn default_catalog() -> String { "cards.json".to_string() }
fn default_lflist() -> String { "lflist.conf".to_string() }
fn default_sort_on_export() -> bool { true }

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_lflist")]
    pub lflist: String,
    /// Name of the active list in `lflist`. First list when missing.
    #[serde(default)]
    pub ban_list: Option<String>,
    #[serde(default)]
    pub custom_ban_list: Option<String>,
    #[serde(default)]
    pub genesys: bool,
    #[serde(default = "default_sort_on_export")]
    pub sort_on_export: bool,
}

impl std::default::Default for Configuration {
    fn default() -> Self {
        Configuration {
            catalog: default_catalog(),
            lflist: default_lflist(),
            ban_list: None,
            custom_ban_list: None,
            genesys: false,
            sort_on_export: default_sort_on_export(),
        }
    }
}

pub static CONFIGURATION: OnceCell<Configuration> = OnceCell::new();

pub fn configuration_path() -> String {
    std::env::var("YDKPRU_CONFIG_PATH").unwrap_or(".".to_string())
}

/// Look for `<name>.toml`, `<name>.yaml` or `<name>.json` under `directory`.
pub fn load_configuration_from<T: serde::de::DeserializeOwned>(directory: &str, name: &str) -> anyhow::Result<T> {
    for entry in fs::read_dir(directory)? {
        if let Ok(file) = entry {
            let path_name = file.path();
            let path = Path::new(&path_name);
            let file_name = path.file_stem().unwrap_or_default();
            let extension = path.extension().unwrap_or_default().to_str().unwrap_or_default();
            if file_name != name { continue; }
            if let Ok(mut file) = fs::File::open(&path_name) {
                match extension {
                    "toml" => {
                        let mut data = String::new();
                        file.read_to_string(&mut data)?;
                        return Ok(toml::from_str::<T>(&data)?);
                    }
                    "yaml" => return Ok(serde_yaml::from_reader::<_, T>(file)?),
                    "json" => return Ok(serde_json::from_reader::<_, T>(file)?),
                    _ => {}
                };
            }
        }
    }
    warn!("Can't find proper configuration file for {}. Try to get a default value.", name);
    serde_json::from_str("{}").map_err(|_| anyhow!("Cannot find configuration file for {}", name))
}

pub fn load_configuration() -> anyhow::Result<()> {
    let configuration = load_configuration_from::<Configuration>(&configuration_path(), "ydkpru")?;
    debug!("Loaded configuration: {:?}", configuration);
    CONFIGURATION.set(configuration).map_err(|_| anyhow!("Configuration already set."))?;
    Ok(())
}

/// Get loaded configuration.
#[inline]
pub fn get_configuration() -> &'static Configuration {
    CONFIGURATION.get_or_init(Configuration::default)
}
