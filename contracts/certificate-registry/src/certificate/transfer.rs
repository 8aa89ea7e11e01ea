use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.transfer(&sender_id, &receiver_id, token_id)
    }

    /// Removes the holder entry. Burning ignores the transferable flag; the
    /// metadata record and descriptor remain queryable afterwards.
    #[payable]
    #[handle_result]
    pub fn burn(&mut self, token_id: u64) -> Result<(), RegistryError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        let holder_id = self
            .ownership
            .holder_of(token_id)
            .ok_or_else(RegistryError::certificate_not_found)?
            .clone();
        if sender_id != holder_id {
            return Err(RegistryError::only_owner("the current holder"));
        }

        let transferable = self
            .certificates
            .get(&token_id)
            .map(|record| record.details.transferable)
            .unwrap_or(false);
        self.ownership.apply(token_id, None, transferable)?;

        events::emit_certificate_burned(&holder_id, token_id);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        let transferable = self
            .certificates
            .get(&token_id)
            .ok_or_else(RegistryError::certificate_not_found)?
            .details
            .transferable;

        let old_holder_id = self
            .ownership
            .holder_of(token_id)
            .ok_or_else(RegistryError::certificate_not_found)?
            .clone();
        if sender_id != &old_holder_id {
            return Err(RegistryError::Unauthorized(
                "Sender does not hold this certificate".into(),
            ));
        }

        // Guard and holder write happen inside the same call; a failed check
        // leaves the holder map untouched.
        self.ownership
            .apply(token_id, Some(receiver_id.clone()), transferable)?;

        events::emit_certificate_transferred(sender_id, &old_holder_id, receiver_id, token_id);
        Ok(())
    }
}
