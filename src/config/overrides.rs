//! Field-level environment overrides.

use crate::domain::Settings;

/// A settings field that an environment variable may replace after parsing.
#[derive(Clone, Copy)]
pub struct FieldOverride {
    /// YAML key of the overridden field.
    pub field: &'static str,
    /// Environment variable consulted.
    pub env: &'static str,
    pub description: &'static str,
    pub apply: fn(&mut Settings, String),
}

/// Every field that can be overridden from the environment.
pub const FIELD_OVERRIDES: &[FieldOverride] = &[FieldOverride {
    field: "env",
    env: "ENV",
    description: "Deployment environment (e.g. dev, prod)",
    apply: set_environment,
}];

fn set_environment(settings: &mut Settings, value: String) {
    settings.environment = value;
}

/// Apply each override whose variable is set to a non-empty value.
///
/// Returns the YAML keys that were replaced, in table order.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = Vec::new();
    for entry in FIELD_OVERRIDES {
        match lookup(entry.env) {
            Some(value) if !value.is_empty() => {
                tracing::debug!("Overriding '{}' from {}", entry.field, entry.env);
                (entry.apply)(settings, value);
                applied.push(entry.field);
            }
            _ => {}
        }
    }
    applied
}

/// Render the environment variables the loader understands, one per line.
pub fn describe_env() -> String {
    let mut rows = vec![(super::CONFIG_PATH_ENV, "Path to the YAML config file".to_string())];
    rows.extend(
        FIELD_OVERRIDES
            .iter()
            .map(|o| (o.env, format!("{} (overrides '{}')", o.description, o.field))),
    );

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, text)| format!("  {:<width$}  {}", name, text, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_env_var_replaces_field() {
        let vars = env(&[("ENV", "staging")]);
        let mut settings = Settings { environment: "prod".to_string(), ..Default::default() };

        let applied = apply_overrides(&mut settings, |k| vars.get(k).cloned());
        assert_eq!(settings.environment, "staging");
        assert_eq!(applied, vec!["env"]);
    }

    #[test]
    fn test_unset_and_empty_vars_leave_field() {
        let mut settings = Settings { environment: "prod".to_string(), ..Default::default() };
        assert!(apply_overrides(&mut settings, |_| None).is_empty());
        assert_eq!(settings.environment, "prod");

        let vars = env(&[("ENV", "")]);
        assert!(apply_overrides(&mut settings, |k| vars.get(k).cloned()).is_empty());
        assert_eq!(settings.environment, "prod");
    }

    #[test]
    fn test_override_table_entries_are_unique() {
        let mut vars: Vec<_> = FIELD_OVERRIDES.iter().map(|o| o.env).collect();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), FIELD_OVERRIDES.len());
        assert!(!vars.contains(&super::super::CONFIG_PATH_ENV));
    }

    #[test]
    fn test_describe_env_lists_every_variable() {
        let text = describe_env();
        assert!(text.contains("CONFIG_PATH"));
        for entry in FIELD_OVERRIDES {
            assert!(text.contains(entry.env));
            assert!(text.contains(entry.description));
        }
    }
}
