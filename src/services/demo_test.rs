use super::*;

// =============================================================================
// lookup
// =============================================================================

#[test]
fn lookup_known_email_returns_account() {
    let account = lookup("admin@enterprise.com").unwrap();
    assert_eq!(account.password, "admin123");
    assert_eq!(account.user.role, Role::Admin);
    assert_eq!(account.user.id, "1");
}

#[test]
fn lookup_is_case_insensitive() {
    let account = lookup("Manager@Enterprise.COM").unwrap();
    assert_eq!(account.user.role, Role::Manager);
}

#[test]
fn lookup_trims_whitespace() {
    assert!(lookup("  user@enterprise.com  ").is_some());
}

#[test]
fn lookup_unknown_email_returns_none() {
    assert!(lookup("nobody@enterprise.com").is_none());
}

// =============================================================================
// resolve_subject
// =============================================================================

#[test]
fn resolve_subject_finds_each_demo_user() {
    for (id, role) in [("1", Role::Admin), ("2", Role::Manager), ("3", Role::User)] {
        let user = resolve_subject(id).unwrap();
        assert_eq!(user.role, role);
    }
}

#[test]
fn resolve_subject_unknown_id_returns_none() {
    assert!(resolve_subject("99").is_none());
}

// =============================================================================
// demo_credentials
// =============================================================================

#[test]
fn demo_credentials_cover_all_roles() {
    let creds = demo_credentials();
    assert_eq!(creds.len(), 3);
    let roles: Vec<Role> = creds.iter().map(|c| c.role).collect();
    assert_eq!(roles, vec![Role::Admin, Role::Manager, Role::User]);
}

#[test]
fn demo_credentials_match_directory() {
    for cred in demo_credentials() {
        let account = lookup(cred.email).unwrap();
        assert_eq!(account.password, cred.password);
        assert_eq!(account.user.role, cred.role);
    }
}

// =============================================================================
// now_rfc3339
// =============================================================================

#[test]
fn now_rfc3339_parses_back() {
    let stamp = now_rfc3339();
    assert!(time::OffsetDateTime::parse(
        &stamp,
        &time::format_description::well_known::Rfc3339
    )
    .is_ok());
}
