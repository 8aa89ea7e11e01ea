use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum RegistryError {
    Unauthorized(String),
    NotFound(String),
    NotTransferable(String),
    NoPendingRequest(String),
    InvalidInput(String),
    InsufficientDeposit(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::NotTransferable(msg) => write!(f, "Not transferable: {}", msg),
            Self::NoPendingRequest(msg) => write!(f, "No pending request: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
        }
    }
}

impl RegistryError {
    pub fn certificate_not_found() -> Self {
        Self::NotFound("Certificate not found".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn not_transferable(context: &str) -> Self {
        Self::NotTransferable(format!(
            "Cannot {} a non-transferable certificate",
            context
        ))
    }
    pub fn no_pending_request(token_id: u64) -> Self {
        Self::NoPendingRequest(format!(
            "Certificate {} has no pending verification request",
            token_id
        ))
    }
}
