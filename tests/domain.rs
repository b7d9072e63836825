use dsec_monitor::domain::exposure::ExposureCategory;
use dsec_monitor::domain::query::QueryType;

#[test]
fn detects_email_queries() {
    assert_eq!(QueryType::detect("user@example.com"), Some(QueryType::Email));
    assert_eq!(
        QueryType::detect("first.last+tag@sub.example.co.uk"),
        Some(QueryType::Email)
    );
}

#[test]
fn detects_domain_queries() {
    assert_eq!(QueryType::detect("example.com"), Some(QueryType::Domain));
    assert_eq!(
        QueryType::detect("mail.corp.example.co.uk"),
        Some(QueryType::Domain)
    );
}

#[test]
fn rejects_queries_that_are_neither() {
    assert_eq!(QueryType::detect(""), None);
    assert_eq!(QueryType::detect("not a query"), None);
    assert_eq!(QueryType::detect("user@exam ple.com"), None);
    assert_eq!(QueryType::detect("nodot"), None);
    assert_eq!(QueryType::detect("-bad.example.com"), None);
}

#[test]
fn email_wins_over_domain() {
    // An address also matching the domain shape must classify as email.
    assert_eq!(QueryType::detect("user@example.com"), Some(QueryType::Email));
    assert_eq!(QueryType::detect("user@example.com").map(QueryType::as_str), Some("email"));
}

#[test]
fn classifies_stealer_labels_first() {
    assert_eq!(
        ExposureCategory::classify("RedLine Stealer Log"),
        ExposureCategory::Stealer
    );
    assert_eq!(
        ExposureCategory::classify("Infostealer data"),
        ExposureCategory::Stealer
    );
    assert_eq!(
        ExposureCategory::classify("Lumma stealer"),
        ExposureCategory::Stealer
    );
}

#[test]
fn classifies_malware_and_phishing_labels() {
    assert_eq!(
        ExposureCategory::classify("Malware samples"),
        ExposureCategory::Malware
    );
    assert_eq!(
        ExposureCategory::classify("Trojan dropper"),
        ExposureCategory::Malware
    );
    assert_eq!(
        ExposureCategory::classify("Phishing credentials"),
        ExposureCategory::Phishing
    );
    assert_eq!(
        ExposureCategory::classify("Spoofed login page"),
        ExposureCategory::Phishing
    );
}

#[test]
fn phishing_outranks_password() {
    assert_eq!(
        ExposureCategory::classify("Phishing passwords"),
        ExposureCategory::Phishing
    );
}

#[test]
fn classifies_password_financial_and_identity_labels() {
    assert_eq!(
        ExposureCategory::classify("Passwords"),
        ExposureCategory::Password
    );
    assert_eq!(
        ExposureCategory::classify("Credit Card Dump"),
        ExposureCategory::Financial
    );
    assert_eq!(ExposureCategory::classify("SSN"), ExposureCategory::Identity);
    assert_eq!(
        ExposureCategory::classify("Social Security numbers"),
        ExposureCategory::Identity
    );
}

#[test]
fn unmatched_labels_fall_back_to_default() {
    let category = ExposureCategory::classify("Generic Leak");
    assert_eq!(category, ExposureCategory::Other);
    assert_eq!(category.as_str(), "default");
}

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(
        ExposureCategory::classify("RACCOON STEALER"),
        ExposureCategory::Stealer
    );
    assert_eq!(
        ExposureCategory::classify("credit CARDS"),
        ExposureCategory::Financial
    );
}
