pub mod bundle;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extender;
pub mod logging;
pub mod registry;
pub mod site;

pub use bundle::{SiteBundle, SiteBundleBuilder};
pub use catalog::{builtin_registry, customer_sites, CUSTOMER_NAMESPACE};
pub use config::Config;
pub use error::{Error, Result};
pub use extender::{contribute, SiteExtender};
pub use registry::{MergeReport, RegisteredSite, ReplacedSite, SiteRegistry};
pub use site::SiteEntry;
