use super::*;

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn login_like() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("email", FieldKind::Email).label("Email Address").required(),
        FieldDescriptor::new("password", FieldKind::Password).label("Password").required(),
    ]
}

// =============================================================
// validate
// =============================================================

#[test]
fn all_filled_yields_no_errors() {
    let errors = validate(&login_like(), &values(&[("email", "a@x.com"), ("password", "pw")]));
    assert!(errors.is_empty());
}

#[test]
fn empty_password_reports_only_password() {
    let errors = validate(&login_like(), &values(&[("email", "a@x.com"), ("password", "")]));
    assert_eq!(errors, values(&[("password", "Password is required")]));
}

#[test]
fn missing_and_blank_values_both_fail() {
    let errors = validate(&login_like(), &values(&[("password", " \t\n")]));
    assert_eq!(
        errors,
        values(&[("email", "Email Address is required"), ("password", "Password is required")])
    );
}

#[test]
fn optional_fields_never_fail() {
    let fields = vec![FieldDescriptor::new("bio", FieldKind::Textarea).label("Bio")];
    assert!(validate(&fields, &FieldValues::new()).is_empty());
}

#[test]
fn unlabeled_field_falls_back_to_name() {
    let fields = vec![FieldDescriptor::new("nickname", FieldKind::Text).required()];
    let errors = validate(&fields, &FieldValues::new());
    assert_eq!(errors.get("nickname").map(String::as_str), Some("nickname is required"));
}

#[test]
fn field_order_does_not_change_result() {
    let mut reversed = login_like();
    reversed.reverse();
    let vals = values(&[("email", "")]);
    assert_eq!(validate(&login_like(), &vals), validate(&reversed, &vals));
}

#[test]
fn error_present_iff_required_and_blank() {
    let fields = vec![
        FieldDescriptor::new("a", FieldKind::Text).required(),
        FieldDescriptor::new("b", FieldKind::Text),
        FieldDescriptor::new("c", FieldKind::Number).required(),
    ];
    for a in ["", " ", "x"] {
        for c in ["", "7"] {
            let errors = validate(&fields, &values(&[("a", a), ("b", ""), ("c", c)]));
            assert_eq!(errors.contains_key("a"), a.trim().is_empty());
            assert!(!errors.contains_key("b"));
            assert_eq!(errors.contains_key("c"), c.is_empty());
        }
    }
}

// =============================================================
// FieldKind
// =============================================================

#[test]
fn number_accepts_only_digits() {
    assert!(FieldKind::Number.accepts(""));
    assert!(FieldKind::Number.accepts("12000"));
    assert!(!FieldKind::Number.accepts("12a"));
    assert!(!FieldKind::Number.accepts("-1"));
    assert!(FieldKind::Text.accepts("anything"));
}

#[test]
fn settle_edit_keeps_stored_value_on_rejection() {
    assert_eq!(FieldKind::Number.settle_edit("120".to_owned(), "12"), Ok("120".to_owned()));
    assert_eq!(FieldKind::Number.settle_edit("12a".to_owned(), "12"), Err("12".to_owned()));
    assert_eq!(FieldKind::Text.settle_edit("12a".to_owned(), "12"), Ok("12a".to_owned()));
}

#[test]
fn password_input_type_follows_reveal_toggle() {
    assert_eq!(FieldKind::Password.input_type(false), "password");
    assert_eq!(FieldKind::Password.input_type(true), "text");
    assert_eq!(FieldKind::Email.input_type(false), "email");
    assert_eq!(FieldKind::Number.input_mode(), Some("numeric"));
}
