use super::*;

fn make_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@plant.example".to_owned(),
        role,
        phone: None,
        company_name: None,
        department: None,
        location: None,
        bio: None,
        profile_image: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn admin_lands_on_the_admin_home() {
    assert_eq!(landing_for(Some(&make_user(Role::Admin))), Landing::Admin);
}

#[test]
fn module_roles_redirect_to_their_module_root() {
    let expected = [
        (Role::Npd, "/npd"),
        (Role::Purchase, "/purchase"),
        (Role::Sales, "/sales"),
        (Role::Stores, "/stores"),
        (Role::Planning, "/planning"),
        (Role::Production, "/production"),
        (Role::Quality, "/quality"),
    ];
    for (role, path) in expected {
        assert_eq!(
            landing_for(Some(&make_user(role.clone()))),
            Landing::Module(path),
            "landing for {}",
            role.as_str()
        );
    }
}

#[test]
fn plain_and_shop_roles_land_on_the_generic_dashboard() {
    for role in [Role::User, Role::Engineer, Role::Material] {
        assert_eq!(landing_for(Some(&make_user(role))), Landing::Dashboard);
    }
}

#[test]
fn unrecognized_role_lands_on_access_issue_with_the_raw_value() {
    assert_eq!(
        landing_for(Some(&make_user(Role::Unknown("bogus".to_owned())))),
        Landing::AccessIssue(Some("bogus".to_owned()))
    );
}

#[test]
fn missing_role_lands_on_access_issue_without_a_value() {
    // The wire default for an absent role is the empty unknown.
    assert_eq!(
        landing_for(Some(&make_user(Role::default()))),
        Landing::AccessIssue(None)
    );
}

#[test]
fn missing_user_lands_on_access_issue() {
    assert_eq!(landing_for(None), Landing::AccessIssue(None));
}
