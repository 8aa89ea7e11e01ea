use base64::{engine::general_purpose::STANDARD as B64, Engine};

use crate::certificate::types::{BasicInfo, CertificateDetails, CertificateStatus};
use crate::constants::DESCRIPTOR_SCHEME;

/// Builds the self-contained descriptor for a certificate: the fixed JSON
/// document of the external contract, base64-wrapped as an inline data URI.
///
/// Field values are interpolated verbatim, without JSON escaping, to stay
/// bit-compatible with existing consumers. A value containing `"` or `\`
/// therefore produces an unparseable payload.
pub(crate) fn build_descriptor(
    basic: &BasicInfo,
    details: &CertificateDetails,
    status: &CertificateStatus,
) -> String {
    let document = format!(
        concat!(
            "{{\"name\": \"{title}\", ",
            "\"description\": \"created by {issuer}\", ",
            "\"image\": \"{uri}\", ",
            "\"attributes\": [",
            "{{\"trait_type\": \"Type\", \"value\": \"{certificate_type}\"}}, ",
            "{{\"trait_type\": \"Username\", \"value\": \"{user_name}\"}}, ",
            "{{\"trait_type\": \"Issuer\", \"value\": \"{issuer}\"}}, ",
            "{{\"trait_type\": \"Wallet Address\", \"value\": \"{wallet_address}\"}}, ",
            "{{\"trait_type\": \"Date\", \"value\": \"{date}\"}}, ",
            "{{\"trait_type\": \"Transferable\", \"value\": {transferable}}}, ",
            "{{\"trait_type\": \"Digital Signature\", \"value\": \"{digital_signature}\"}}, ",
            "{{\"trait_type\": \"Requested\", \"value\": {requested}}}, ",
            "{{\"trait_type\": \"Verified\", \"value\": {verified}}}, ",
            "{{\"trait_type\": \"Verifier Address\", \"value\": \"{verifier_address}\"}}, ",
            "{{\"trait_type\": \"Request Accepted\", \"value\": {request_accepted}}}",
            "]}}",
        ),
        title = basic.title,
        issuer = basic.issuer_name,
        uri = basic.uri,
        certificate_type = basic.certificate_type,
        user_name = basic.user_name,
        wallet_address = details.wallet_address,
        date = details.date,
        transferable = details.transferable,
        digital_signature = details.digital_signature,
        requested = status.requested,
        verified = status.verified,
        verifier_address = status.verifier_address,
        request_accepted = status.request_accepted,
    );

    format!("{DESCRIPTOR_SCHEME}{}", B64.encode(document))
}
