use super::*;

#[test]
fn button_defaults_to_primary_plain_button() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    assert_eq!(ButtonType::default().as_str(), "button");
}

#[test]
fn button_class_includes_variant_modifier() {
    assert_eq!(button_class(ButtonVariant::Primary, ""), "button button--primary");
    assert_eq!(button_class(ButtonVariant::Danger, ""), "button button--danger");
}

#[test]
fn button_class_appends_extra_classes() {
    assert_eq!(
        button_class(ButtonVariant::Secondary, "button--block"),
        "button button--secondary button--block"
    );
}

#[test]
fn button_type_maps_to_html_attribute() {
    assert_eq!(ButtonType::Submit.as_str(), "submit");
    assert_eq!(ButtonType::Reset.as_str(), "reset");
}
