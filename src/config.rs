use anyhow::Context;

use crate::catalog::DEFAULT_CATALOG_PATH;

/// Which of the two services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Every route, synthetic "Producto 7" appended to listings.
    Full,
    /// `/productos` only, file contents as-is.
    ListOnly,
}

impl Variant {
    pub fn default_port(self) -> u16 {
        match self {
            Variant::Full => 8080,
            Variant::ListOnly => 8081,
        }
    }

    pub fn service_name(self) -> &'static str {
        match self {
            Variant::Full => "catalog-service",
            Variant::ListOnly => "catalog-list-service",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::ListOnly => "list-only",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: String,
}

impl Config {
    pub fn from_env(variant: Variant) -> anyhow::Result<Self> {
        Self::from_lookup(variant, |key| std::env::var(key).ok())
    }

    fn from_lookup(
        variant: Variant,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => variant.default_port(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            catalog_path: lookup("CATALOG_PATH")
                .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_depend_on_variant() {
        let full = Config::from_lookup(Variant::Full, lookup(&[])).unwrap();
        assert_eq!(full.addr(), "0.0.0.0:8080");
        assert_eq!(full.catalog_path, "productos.json");

        let list = Config::from_lookup(Variant::ListOnly, lookup(&[])).unwrap();
        assert_eq!(list.port, 8081);
    }

    #[test]
    fn env_overrides_defaults() {
        let cfg = Config::from_lookup(
            Variant::Full,
            lookup(&[("HOST", "127.0.0.1"), ("PORT", "9000"), ("CATALOG_PATH", "/tmp/c.json")]),
        )
        .unwrap();
        assert_eq!(cfg.addr(), "127.0.0.1:9000");
        assert_eq!(cfg.catalog_path, "/tmp/c.json");
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(Variant::Full, lookup(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
