use super::*;
use sarpras_shared::Role;

fn user(role: Role) -> User {
    User {
        id: 1,
        name: "Siti".to_string(),
        email: "siti@example.com".to_string(),
        role,
        division: None,
        phone: None,
        address: None,
        photo: None,
    }
}

#[test]
fn restore_requires_both_halves() {
    assert!(restore(None, None).is_none());
    assert!(restore(Some("tok".to_string()), None).is_none());
    assert!(restore(None, Some(user(Role::Staff))).is_none());

    let session = restore(Some("tok".to_string()), Some(user(Role::Admin))).unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.role, Role::Admin);
}
