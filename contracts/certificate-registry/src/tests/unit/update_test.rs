use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- group updates ---

#[test]
fn update_basic_replaces_group_wholesale() {
    let mut contract = new_contract();
    let id = mint_to(&mut contract, &holder(), true);

    let new_basic = BasicInfo {
        uri: "ipfs://QmOther".to_string(),
        certificate_type: "Award".to_string(),
        user_name: "john.roe".to_string(),
        title: "Advanced Rust".to_string(),
        issuer_name: "Other Academy".to_string(),
    };
    testing_env!(context(admin()).build());
    contract.update_basic(id, new_basic.clone()).unwrap();

    let record = contract.get_metadata(id).unwrap();
    assert_eq!(record.basic, new_basic);
    // The other groups are untouched.
    assert_eq!(record.details, details(true));
    assert_eq!(record.status, status(false));
}

#[test]
fn update_details_and_status_are_independent() {
    let mut contract = new_contract();
    let id = mint_to(&mut contract, &holder(), true);

    testing_env!(context(admin()).build());
    let new_details = CertificateDetails {
        wallet_address: "somewhere.near".to_string(),
        date: "2027-01-01".to_string(),
        transferable: false,
        digital_signature: "0xresigned".to_string(),
    };
    contract.update_details(id, new_details.clone()).unwrap();

    let new_status = CertificateStatus {
        requested: true,
        verified: false,
        verifier_address: String::new(),
        request_accepted: false,
    };
    contract.update_status(id, new_status.clone()).unwrap();

    let record = contract.get_metadata(id).unwrap();
    assert_eq!(record.basic, basic_info());
    assert_eq!(record.details, new_details);
    assert_eq!(record.status, new_status);
}

#[test]
fn updates_by_non_owner_fail() {
    let mut contract = new_contract();
    let id = mint_to(&mut contract, &holder(), true);

    testing_env!(context(stranger()).build());
    let err = contract.update_basic(id, basic_info()).unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    let err = contract.update_details(id, details(true)).unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    let err = contract.update_status(id, status(true)).unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    let err = contract.verify(id, true, "v.near".to_string()).unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    let err = contract.accept_request(id, true).unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));

    // Nothing changed.
    let record = contract.get_metadata(id).unwrap();
    assert_eq!(record.basic, basic_info());
    assert_eq!(record.status, status(false));
}

#[test]
fn update_unminted_token_fails() {
    let mut contract = new_contract();

    testing_env!(context(admin()).build());
    let err = contract.update_basic(9, basic_info()).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

// --- verify ---

#[test]
fn verify_overwrites_without_prior_request() {
    let mut contract = new_contract();
    let id = mint_to(&mut contract, &holder(), true);

    testing_env!(context(admin()).build());
    contract.verify(id, true, "verifier.near".to_string()).unwrap();

    let record = contract.get_metadata(id).unwrap();
    assert!(record.status.verified);
    assert_eq!(record.status.verifier_address, "verifier.near");
    // The request flags are untouched.
    assert!(!record.status.requested);
    assert!(!record.status.request_accepted);
}

#[test]
fn verify_can_be_cleared() {
    let mut contract = new_contract();
    let id = mint_to(&mut contract, &holder(), true);

    testing_env!(context(admin()).build());
    contract.verify(id, true, "verifier.near".to_string()).unwrap();
    contract.verify(id, false, String::new()).unwrap();

    let record = contract.get_metadata(id).unwrap();
    assert!(!record.status.verified);
    assert_eq!(record.status.verifier_address, "");
}

// --- accept_request ---

#[test]
fn accept_request_without_pending_request_fails() {
    let mut contract = new_contract();
    let id = mint_to(&mut contract, &holder(), true);

    testing_env!(context(admin()).build());
    let err = contract.accept_request(id, true).unwrap_err();
    assert!(matches!(err, RegistryError::NoPendingRequest(_)));

    let record = contract.get_metadata(id).unwrap();
    assert!(!record.status.request_accepted);
}

#[test]
fn accept_request_with_pending_request_succeeds() {
    let mut contract = new_contract();
    let id = contract
        .mint(holder(), basic_info(), details(true), status(true))
        .unwrap();

    testing_env!(context(admin()).build());
    contract.accept_request(id, true).unwrap();

    let record = contract.get_metadata(id).unwrap();
    assert!(record.status.request_accepted);
}

#[test]
fn clearing_requested_does_not_reset_acceptance() {
    let mut contract = new_contract();
    let id = contract
        .mint(holder(), basic_info(), details(true), status(true))
        .unwrap();

    testing_env!(context(admin()).build());
    contract.accept_request(id, true).unwrap();

    let mut cleared = contract.get_metadata(id).unwrap().status;
    cleared.requested = false;
    contract.update_status(id, cleared).unwrap();

    let record = contract.get_metadata(id).unwrap();
    assert!(!record.status.requested);
    assert!(record.status.request_accepted);
}
