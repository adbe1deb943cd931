use super::*;
use chrono::NaiveDate;

fn valid() -> Result<ItemDraft, String> {
    build_draft(
        " INV-001 ",
        "Proyektor Epson",
        "2",
        "4",
        "baik",
        "ruang aula",
        "2023-01-15",
        "4500000",
    )
}

#[test]
fn a_complete_form_builds_a_draft() {
    let draft = valid().unwrap();
    assert_eq!(draft.code, "INV-001");
    assert_eq!(draft.name, "Proyektor Epson");
    assert_eq!(draft.category_id, Some(2));
    assert_eq!(draft.stock, 4);
    assert_eq!(draft.condition, ItemCondition::Good);
    assert_eq!(draft.acquired_at, NaiveDate::from_ymd_opt(2023, 1, 15));
    assert_eq!(draft.acquisition_value, Some(4500000.0));
}

#[test]
fn required_fields_are_enforced() {
    assert!(build_draft("", "x", "", "0", "baik", "", "", "").is_err());
    assert!(build_draft("x", "  ", "", "0", "baik", "", "", "").is_err());
}

#[test]
fn stock_must_be_a_whole_non_negative_number() {
    assert!(build_draft("x", "y", "", "-1", "baik", "", "", "").is_err());
    assert!(build_draft("x", "y", "", "2.5", "baik", "", "", "").is_err());
    let draft = build_draft("x", "y", "", "0", "rusak_ringan", "", "", "").unwrap();
    assert_eq!(draft.stock, 0);
    assert_eq!(draft.condition, ItemCondition::LightDamage);
}

#[test]
fn optional_fields_may_stay_blank() {
    let draft = build_draft("x", "y", "", "1", "rusak_berat", "", "", "").unwrap();
    assert_eq!(draft.category_id, None);
    assert_eq!(draft.acquired_at, None);
    assert_eq!(draft.acquisition_value, None);
}

#[test]
fn malformed_optionals_are_rejected_not_dropped() {
    assert!(build_draft("x", "y", "abc", "1", "baik", "", "", "").is_err());
    assert!(build_draft("x", "y", "", "1", "baik", "", "15/01/2023", "").is_err());
    assert!(build_draft("x", "y", "", "1", "baik", "", "", "mahal").is_err());
    assert!(build_draft("x", "y", "", "1", "bagus sekali", "", "", "").is_err());
}
