// Site Registry
//
// Explicit, process-wide registry of provider sites. Bundles are merged
// in with insert-or-overwrite semantics; every overwrite is surfaced in
// the merge report together with the namespace that previously owned
// the key.

use indexmap::IndexMap;
use serde::Serialize;

use crate::bundle::SiteBundle;
use crate::site::SiteEntry;

/// A registered site together with the bundle it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredSite {
    #[serde(flatten)]
    pub entry: SiteEntry,

    /// Namespace of the bundle that last wrote this key
    pub namespace: String,
}

/// The aggregated site registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SiteRegistry {
    sites: IndexMap<String, RegisteredSite>,
}

/// Outcome of merging one bundle into the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Keys that were new to the registry
    pub inserted: Vec<String>,

    /// Keys that already existed and were overwritten
    pub replaced: Vec<ReplacedSite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedSite {
    pub id: String,

    /// Namespace that owned the key before this merge
    pub previous_namespace: String,
}

impl MergeReport {
    /// True when the merge caused no overwrites
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.replaced.is_empty()
    }

    #[must_use]
    pub fn merged(&self) -> usize {
        self.inserted.len() + self.replaced.len()
    }
}

impl SiteRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a bundle into the registry.
    ///
    /// Entries are inserted or overwritten in bundle declaration order,
    /// untransformed. Merging the same bundle twice leaves the registry
    /// unchanged after the first merge.
    pub fn extend(&mut self, bundle: &SiteBundle) -> MergeReport {
        let mut report = MergeReport::default();
        for (id, entry) in &bundle.sites {
            let registered = RegisteredSite {
                entry: entry.clone(),
                namespace: bundle.namespace.clone(),
            };
            match self.sites.insert(id.clone(), registered) {
                Some(previous) => report.replaced.push(ReplacedSite {
                    id: id.clone(),
                    previous_namespace: previous.namespace,
                }),
                None => report.inserted.push(id.clone()),
            }
        }
        tracing::debug!(
            namespace = %bundle.namespace,
            inserted = report.inserted.len(),
            replaced = report.replaced.len(),
            "site bundle merged"
        );
        report
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SiteEntry> {
        self.sites.get(id).map(|s| &s.entry)
    }

    /// Full record including provenance
    #[must_use]
    pub fn record(&self, id: &str) -> Option<&RegisteredSite> {
        self.sites.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.sites.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredSite)> {
        self.sites.iter().map(|(id, site)| (id.as_str(), site))
    }
}
