// Registry Extender Seam
//
// The host registry is handed in explicitly instead of being looked up
// in ambient scope. A missing extender is a startup configuration
// error, logged once and returned as a typed error.

use crate::bundle::SiteBundle;
use crate::error::{Error, Result};
use crate::registry::{MergeReport, SiteRegistry};

/// Host-extension seam through which bundles reach the registry
pub trait SiteExtender {
    fn extend_sites(&mut self, bundle: &SiteBundle) -> MergeReport;
}

impl SiteExtender for SiteRegistry {
    fn extend_sites(&mut self, bundle: &SiteBundle) -> MergeReport {
        self.extend(bundle)
    }
}

/// Contribute a bundle through the host extender.
///
/// Calls the extender exactly once with the bundle untransformed. When
/// no extender is configured, emits one diagnostic and returns
/// [`Error::MissingExtender`] without touching any registry.
pub fn contribute(
    extender: Option<&mut dyn SiteExtender>,
    bundle: &SiteBundle,
) -> Result<MergeReport> {
    let Some(extender) = extender else {
        tracing::error!(
            namespace = %bundle.namespace,
            "site registry extender not configured; load the host configuration before contributing site bundles"
        );
        return Err(Error::MissingExtender);
    };
    Ok(extender.extend_sites(bundle))
}
