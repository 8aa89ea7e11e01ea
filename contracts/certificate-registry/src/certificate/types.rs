use near_sdk::near;
use near_sdk::AccountId;

/// Display and identity fields. All free-form text, no uniqueness constraints,
/// empty strings accepted.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct BasicInfo {
    pub uri: String,
    pub certificate_type: String,
    pub user_name: String,
    pub title: String,
    pub issuer_name: String,
}

/// Transfer and provenance fields. `wallet_address` is an informational copy
/// and is never reconciled with the holder map; it can diverge after a
/// transfer. `date` and `digital_signature` are opaque, unvalidated text.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateDetails {
    pub wallet_address: String,
    pub date: String,
    pub transferable: bool,
    pub digital_signature: String,
}

/// Verification workflow fields.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateStatus {
    pub requested: bool,
    pub verified: bool,
    pub verifier_address: String,
    pub request_accepted: bool,
}

/// One certificate's metadata. The three groups are created together at mint
/// time and replaced wholesale by the group update operations; the record
/// itself is never deleted, not even on burn.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateRecord {
    pub basic: BasicInfo,
    pub details: CertificateDetails,
    pub status: CertificateStatus,
}

#[near(serializers = [json])]
pub struct CertificateView {
    pub token_id: u64,
    pub holder_id: Option<AccountId>,
    pub basic: BasicInfo,
    pub details: CertificateDetails,
    pub status: CertificateStatus,
    pub descriptor: String,
}
