use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod descriptor;
mod events;
mod ownership;

mod certificate;

mod admin;


pub use certificate::types::{
    BasicInfo, CertificateDetails, CertificateRecord, CertificateStatus, CertificateView,
};
pub use constants::*;
pub use errors::RegistryError;
pub use ownership::{OwnershipChange, OwnershipLedger};
pub use storage::StorageKey;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    pub certificates: IterableMap<u64, CertificateRecord>,
    // Descriptor cache invariant: rewritten by every mutating operation, so the
    // stored text always equals a fresh recomputation from the current groups.
    pub(crate) descriptors: LookupMap<u64, String>,

    pub(crate) ownership: OwnershipLedger,
}
