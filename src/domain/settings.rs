//! Application settings produced by the config loader.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Fully resolved application settings.
///
/// Built once at startup by [`crate::config::ConfigLoader`]. After a
/// successful load `environment` and `storage_path` are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Deployment environment, e.g. `dev` or `prod`.
    #[serde(rename = "env", default, deserialize_with = "scalar_string")]
    pub environment: String,

    /// Filesystem path used for persistent storage.
    #[serde(default, deserialize_with = "scalar_string")]
    pub storage_path: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub http_server: HttpServer,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServer {
    /// `host:port` to listen on; empty when unset.
    #[serde(rename = "addr", default, deserialize_with = "scalar_string")]
    pub address: String,
}

/// Accept any YAML scalar as its text. A key with no value reads as empty.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Sequence(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a string")),
        Value::Mapping(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a string")),
        Value::Tagged(_) => Err(D::Error::invalid_type(Unexpected::Other("tagged value"), &"a string")),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_keys_map_to_fields() {
        let yaml = "env: prod\nstorage_path: /data\nhttp_server:\n  addr: 0.0.0.0:8080\n";
        let settings: Settings = serde_yaml::from_str(yaml).expect("yaml");
        assert_eq!(settings.environment, "prod");
        assert_eq!(settings.storage_path, "/data");
        assert_eq!(settings.http_server.address, "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let settings: Settings = serde_yaml::from_str("env: dev\n").expect("yaml");
        assert_eq!(settings.environment, "dev");
        assert!(settings.storage_path.is_empty());
        assert!(settings.http_server.address.is_empty());
    }

    #[test]
    fn test_keys_without_values_read_as_empty() {
        let settings: Settings =
            serde_yaml::from_str("env: ~\nstorage_path:\nhttp_server:\n").expect("yaml");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_non_string_scalars_keep_their_text() {
        let yaml = "env: 1\nstorage_path: true\nhttp_server:\n  addr: 8080\n";
        let settings: Settings = serde_yaml::from_str(yaml).expect("yaml");
        assert_eq!(settings.environment, "1");
        assert_eq!(settings.storage_path, "true");
        assert_eq!(settings.http_server.address, "8080");
    }

    #[test]
    fn test_collections_are_rejected_for_string_fields() {
        assert!(serde_yaml::from_str::<Settings>("env: [prod]\n").is_err());
        assert!(serde_yaml::from_str::<Settings>("storage_path:\n  nested: x\n").is_err());
    }

    #[test]
    fn test_serializes_with_file_keys() {
        let settings = Settings {
            environment: "dev".to_string(),
            storage_path: "./storage".to_string(),
            http_server: HttpServer { address: "localhost:8082".to_string() },
        };
        let json = serde_json::to_value(&settings).expect("json");
        assert_eq!(json["env"], "dev");
        assert_eq!(json["storage_path"], "./storage");
        assert_eq!(json["http_server"]["addr"], "localhost:8082");
    }
}
