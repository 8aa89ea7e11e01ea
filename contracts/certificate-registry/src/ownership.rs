use near_sdk::near;
use near_sdk::store::LookupMap;
use near_sdk::AccountId;

use crate::constants::FIRST_CERTIFICATE_ID;
use crate::errors::RegistryError;
use crate::storage::StorageKey;

/// Classification of a holder-map mutation, decided before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipChange {
    Mint,
    Transfer,
    Burn,
}

/// Tracks which account holds which certificate. The metadata store lives in
/// the certificate module; the two are only linked through contract operations.
#[near(serializers = [borsh])]
pub struct OwnershipLedger {
    holders: LookupMap<u64, AccountId>,
    next_id: u64,
}

impl OwnershipLedger {
    pub fn new() -> Self {
        Self {
            holders: LookupMap::new(StorageKey::Holders),
            next_id: FIRST_CERTIFICATE_ID,
        }
    }

    pub(crate) fn allocate_id(&mut self) -> Result<u64, RegistryError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            RegistryError::InvalidInput("Certificate id counter overflow".into())
        })?;
        Ok(id)
    }

    pub fn holder_of(&self, token_id: u64) -> Option<&AccountId> {
        self.holders.get(&token_id)
    }

    /// A certificate exists once minted, even after a burn removed its holder.
    pub fn is_minted(&self, token_id: u64) -> bool {
        token_id >= FIRST_CERTIFICATE_ID && token_id < self.next_id
    }

    pub fn total_minted(&self) -> u64 {
        self.next_id - FIRST_CERTIFICATE_ID
    }

    /// Applies a holder change. The transfer guard runs inside this call,
    /// before the map is touched, so no holder mutation can bypass it. Mint
    /// and burn are always permitted; only holder-to-holder transfers consult
    /// the `transferable` flag.
    pub(crate) fn apply(
        &mut self,
        token_id: u64,
        new_holder: Option<AccountId>,
        transferable: bool,
    ) -> Result<OwnershipChange, RegistryError> {
        let change = match (self.holders.contains_key(&token_id), new_holder.is_some()) {
            (false, true) => OwnershipChange::Mint,
            (true, true) => OwnershipChange::Transfer,
            (true, false) => OwnershipChange::Burn,
            (false, false) => return Err(RegistryError::certificate_not_found()),
        };

        if change == OwnershipChange::Transfer && !transferable {
            return Err(RegistryError::not_transferable("transfer"));
        }

        match new_holder {
            Some(holder) => {
                self.holders.insert(token_id, holder);
            }
            None => {
                self.holders.remove(&token_id);
            }
        }

        Ok(change)
    }
}
