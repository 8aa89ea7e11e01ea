use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CERTIFICATE;

pub fn emit_certificate_minted(
    minter_id: &AccountId,
    token_id: u64,
    recipient_id: &AccountId,
    descriptor: &str,
) {
    EventBuilder::new(CERTIFICATE, "certificate_mint", minter_id)
        .field("token_id", token_id)
        .field("recipient_id", recipient_id)
        .field("descriptor", descriptor)
        .emit();
}

pub fn emit_certificate_metadata_updated(author: &AccountId, token_id: u64) {
    EventBuilder::new(CERTIFICATE, "certificate_metadata_update", author)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_certificate_transferred(
    sender_id: &AccountId,
    old_holder_id: &AccountId,
    new_holder_id: &AccountId,
    token_id: u64,
) {
    EventBuilder::new(CERTIFICATE, "certificate_transfer", sender_id)
        .field("old_holder_id", old_holder_id)
        .field("new_holder_id", new_holder_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_certificate_burned(holder_id: &AccountId, token_id: u64) {
    EventBuilder::new(CERTIFICATE, "certificate_burn", holder_id)
        .field("token_id", token_id)
        .emit();
}
