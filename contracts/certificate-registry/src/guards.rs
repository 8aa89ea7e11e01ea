use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), RegistryError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(RegistryError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), RegistryError> {
        if actor_id != &self.owner_id {
            return Err(RegistryError::only_owner("contract owner"));
        }
        Ok(())
    }

    // Existence is tracked by the mint watermark rather than the holder map,
    // so burned certificates stay queryable by id.
    pub(crate) fn check_minted(&self, token_id: u64) -> Result<(), RegistryError> {
        if !self.ownership.is_minted(token_id) {
            return Err(RegistryError::certificate_not_found());
        }
        Ok(())
    }
}
