use near_sdk::NearToken;

// Identifier invariant: ids are sequential from 1, gapless, never reused.
pub const FIRST_CERTIFICATE_ID: u64 = 1;

pub const DESCRIPTOR_SCHEME: &str = "data:application/json;base64,";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_ENUMERATION_LIMIT: u64 = 50;
pub const MAX_ENUMERATION_LIMIT: u64 = 100;
