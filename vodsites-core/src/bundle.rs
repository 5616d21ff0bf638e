// Site Bundles
//
// A bundle is one configuration module's contribution to the site
// registry. Every bundle declares a namespace so that key collisions
// between independently shipped bundles stay attributable instead of
// silently overwriting each other.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::site::SiteEntry;

/// A named, ordered set of site entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteBundle {
    /// Module identity of this bundle, unique per configuration source
    pub namespace: String,

    /// Entries in declaration order, keyed by site id
    #[serde(deserialize_with = "deserialize_sites")]
    pub sites: IndexMap<String, SiteEntry>,
}

impl SiteBundle {
    pub fn builder(namespace: impl Into<String>) -> SiteBundleBuilder {
        SiteBundleBuilder {
            namespace: namespace.into(),
            sites: Vec::new(),
        }
    }

    /// Load a bundle from a YAML or JSON file, chosen by extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let bundle: Self = serde_yaml::from_str(contents)?;
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let bundle: Self = serde_json::from_str(contents)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Check that every entry has a non-empty api and name
    pub fn validate(&self) -> Result<()> {
        for (id, entry) in &self.sites {
            if entry.api.is_empty() {
                return Err(Error::EmptyField {
                    id: id.clone(),
                    field: "api",
                });
            }
            if entry.name.is_empty() {
                return Err(Error::EmptyField {
                    id: id.clone(),
                    field: "name",
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Builder for constructing bundles in code
pub struct SiteBundleBuilder {
    namespace: String,
    sites: Vec<(String, SiteEntry)>,
}

impl SiteBundleBuilder {
    #[must_use]
    pub fn site(
        mut self,
        id: impl Into<String>,
        api: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.sites.push((id.into(), SiteEntry::new(api, name)));
        self
    }

    /// Finalize the bundle, rejecting duplicate ids and empty fields
    pub fn build(self) -> Result<SiteBundle> {
        let mut sites = IndexMap::with_capacity(self.sites.len());
        for (id, entry) in self.sites {
            if sites.insert(id.clone(), entry).is_some() {
                return Err(Error::DuplicateSite {
                    namespace: self.namespace,
                    id,
                });
            }
        }
        let bundle = SiteBundle {
            namespace: self.namespace,
            sites,
        };
        bundle.validate()?;
        Ok(bundle)
    }
}

// IndexMap's serde impl silently keeps the last value for a repeated
// key, so duplicate detection has to happen during deserialization.
fn deserialize_sites<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, SiteEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SitesVisitor;

    impl<'de> Visitor<'de> for SitesVisitor {
        type Value = IndexMap<String, SiteEntry>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of site id to site entry")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut sites = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((id, entry)) = access.next_entry::<String, SiteEntry>()? {
                if sites.insert(id.clone(), entry).is_some() {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate site id '{id}'"
                    )));
                }
            }
            Ok(sites)
        }
    }

    deserializer.deserialize_map(SitesVisitor)
}
