use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn update_basic(&mut self, token_id: u64, basic: BasicInfo) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let mut record = self.cloned_record(token_id)?;
        record.basic = basic;
        self.store_record(token_id, record);
        events::emit_certificate_metadata_updated(&self.owner_id, token_id);
        Ok(())
    }

    #[handle_result]
    pub fn update_details(
        &mut self,
        token_id: u64,
        details: CertificateDetails,
    ) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let mut record = self.cloned_record(token_id)?;
        record.details = details;
        self.store_record(token_id, record);
        events::emit_certificate_metadata_updated(&self.owner_id, token_id);
        Ok(())
    }

    #[handle_result]
    pub fn update_status(
        &mut self,
        token_id: u64,
        status: CertificateStatus,
    ) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let mut record = self.cloned_record(token_id)?;
        record.status = status;
        self.store_record(token_id, record);
        events::emit_certificate_metadata_updated(&self.owner_id, token_id);
        Ok(())
    }

    /// Overwrites the verification outcome unconditionally; a prior request is
    /// not required.
    #[handle_result]
    pub fn verify(
        &mut self,
        token_id: u64,
        verified: bool,
        verifier_address: String,
    ) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let mut record = self.cloned_record(token_id)?;
        record.status.verified = verified;
        record.status.verifier_address = verifier_address;
        self.store_record(token_id, record);
        events::emit_certificate_metadata_updated(&self.owner_id, token_id);
        Ok(())
    }

    /// Requires a pending request at call time. Once accepted, clearing
    /// `requested` through `update_status` does not reset the acceptance.
    #[handle_result]
    pub fn accept_request(&mut self, token_id: u64, accepted: bool) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let mut record = self.cloned_record(token_id)?;
        if !record.status.requested {
            return Err(RegistryError::no_pending_request(token_id));
        }
        record.status.request_accepted = accepted;
        self.store_record(token_id, record);
        events::emit_certificate_metadata_updated(&self.owner_id, token_id);
        Ok(())
    }
}

impl Contract {
    fn cloned_record(&self, token_id: u64) -> Result<CertificateRecord, RegistryError> {
        self.certificates
            .get(&token_id)
            .cloned()
            .ok_or_else(RegistryError::certificate_not_found)
    }
}
