use crate::*;

#[near]
impl Contract {
    /// Existence is checked against the mint watermark, so burned certificates
    /// keep answering with their last-written metadata.
    #[handle_result]
    pub fn get_metadata(&self, token_id: u64) -> Result<CertificateRecord, RegistryError> {
        self.check_minted(token_id)?;
        self.certificates
            .get(&token_id)
            .cloned()
            .ok_or_else(RegistryError::certificate_not_found)
    }

    /// The stored descriptor; always equal to recomputing from current groups.
    #[handle_result]
    pub fn describe(&self, token_id: u64) -> Result<String, RegistryError> {
        self.descriptors
            .get(&token_id)
            .cloned()
            .ok_or_else(RegistryError::certificate_not_found)
    }

    /// `None` for burned or never-minted certificates.
    pub fn holder_of(&self, token_id: u64) -> Option<&AccountId> {
        self.ownership.holder_of(token_id)
    }

    pub fn total_minted(&self) -> u64 {
        self.ownership.total_minted()
    }

    pub fn list_certificates(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<CertificateView> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit
            .unwrap_or(DEFAULT_ENUMERATION_LIMIT)
            .min(MAX_ENUMERATION_LIMIT) as usize;

        self.certificates
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, record)| CertificateView {
                token_id: *token_id,
                holder_id: self.ownership.holder_of(*token_id).cloned(),
                basic: record.basic.clone(),
                details: record.details.clone(),
                status: record.status.clone(),
                descriptor: self.descriptors.get(token_id).cloned().unwrap_or_default(),
            })
            .collect()
    }
}
