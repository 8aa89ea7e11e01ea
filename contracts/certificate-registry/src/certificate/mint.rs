use crate::*;

#[near]
impl Contract {
    /// Issues a new certificate to `recipient_id`. Minting is deliberately
    /// open: any caller may issue on behalf of any recipient. All three
    /// metadata groups are stored verbatim, including empty strings.
    #[handle_result]
    pub fn mint(
        &mut self,
        recipient_id: AccountId,
        basic: BasicInfo,
        details: CertificateDetails,
        status: CertificateStatus,
    ) -> Result<u64, RegistryError> {
        let minter_id = env::predecessor_account_id();

        let token_id = self.ownership.allocate_id()?;
        // Fresh id, so this is always the mint branch of the guard.
        self.ownership
            .apply(token_id, Some(recipient_id.clone()), details.transferable)?;

        let record = CertificateRecord {
            basic,
            details,
            status,
        };
        let descriptor = self.store_record(token_id, record);

        events::emit_certificate_minted(&minter_id, token_id, &recipient_id, &descriptor);
        Ok(token_id)
    }
}

impl Contract {
    /// Writes the record and its recomputed descriptor in one step. Every
    /// mutating path goes through here, which keeps the stored descriptor
    /// equal to a fresh recomputation from the current groups.
    pub(crate) fn store_record(&mut self, token_id: u64, record: CertificateRecord) -> String {
        let descriptor =
            descriptor::build_descriptor(&record.basic, &record.details, &record.status);
        self.certificates.insert(token_id, record);
        self.descriptors.insert(token_id, descriptor.clone());
        descriptor
    }
}
