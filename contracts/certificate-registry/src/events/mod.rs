mod builder;
mod types;

mod certificate;
mod contract;

pub use certificate::*;
pub use contract::*;

pub(crate) const STANDARD: &str = "certificate-registry";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const CERTIFICATE: &str = "CERTIFICATE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
