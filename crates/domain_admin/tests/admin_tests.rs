//! Tests for the admin document and session

use rust_decimal_macros::dec;
use serde_json::json;

use domain_admin::{AdminConfig, AdminList, Session};
use domain_claims::DepreciationPolicy;

mod defaults_tests {
    use super::*;

    #[test]
    fn test_missing_document_gives_defaults() {
        let admin = AdminConfig::from_document(None);
        assert_eq!(admin.insurers.len(), 5);
        assert_eq!(admin.workshops[0], "ABC Motors");
        assert_eq!(admin.checklist.last().map(String::as_str), Some("Photos"));
        assert_eq!(admin.dep, DepreciationPolicy::default());
    }

    #[test]
    fn test_only_missing_sections_are_filled() {
        let admin = AdminConfig::from_document(Some(json!({
            "insurers": [],
            "workshops": ["Local Garage"],
            "dep": {"parts": 40, "paint": 50, "glass": 0, "fibre": 30, "excess": 2000}
        })));
        assert!(admin.insurers.is_empty());
        assert_eq!(admin.workshops, vec!["Local Garage".to_string()]);
        assert_eq!(admin.checklist.len(), 6);
        assert_eq!(admin.dep.parts_pct, dec!(40));
        assert_eq!(admin.dep.default_excess, dec!(2000));
    }

    #[test]
    fn test_null_section_is_missing() {
        let admin = AdminConfig::from_document(Some(json!({"dep": null})));
        assert_eq!(admin.dep, DepreciationPolicy::default());
    }

    #[test]
    fn test_unreadable_document_gives_defaults() {
        let admin = AdminConfig::from_document(Some(json!("not an object")));
        assert_eq!(admin, AdminConfig::default());
    }

    #[test]
    fn test_bad_entry_keeps_the_rest_of_the_document() {
        let admin = AdminConfig::from_document(Some(json!({
            "insurers": ["My Insurer", 42, null],
            "workshops": ["My Garage"],
            "checklist": "RC",
            "dep": {"parts": 10, "paint": "x", "glass": 5, "fibre": 20, "excess": 250}
        })));
        assert_eq!(admin.insurers, vec!["My Insurer".to_string()]);
        assert_eq!(admin.workshops, vec!["My Garage".to_string()]);
        assert_eq!(admin.checklist.len(), 6);
        assert_eq!(admin.dep, DepreciationPolicy::new(dec!(10), dec!(0), dec!(5), dec!(20), dec!(250)));
    }

    #[test]
    fn test_fill_missing_sections() {
        let mut document = json!({"workshops": ["My Garage"], "dep": null, "theme": "dark"})
            .as_object()
            .cloned()
            .unwrap();
        assert!(AdminConfig::fill_missing_sections(&mut document).unwrap());
        assert_eq!(document["workshops"], json!(["My Garage"]));
        assert_eq!(document["insurers"].as_array().map(Vec::len), Some(5));
        assert_eq!(document["dep"]["excess"], json!("1000"));
        assert_eq!(document["theme"], "dark");

        assert!(!AdminConfig::fill_missing_sections(&mut document).unwrap());
    }

    #[test]
    fn test_round_trip_keeps_stored_shape() {
        let mut admin = AdminConfig::default();
        admin.extra.insert("theme".to_string(), json!("dark"));
        let value = serde_json::to_value(&admin).unwrap();

        assert_eq!(value["dep"]["parts"], json!("30"));
        assert_eq!(value["theme"], "dark");
        assert_eq!(AdminConfig::from_document(Some(value)), admin);
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn test_add_entry_trims_and_ignores_blank() {
        let mut admin = AdminConfig::default();
        assert!(admin.add_entry(AdminList::Insurers, "  United India  "));
        assert!(!admin.add_entry(AdminList::Insurers, "   "));
        assert_eq!(admin.insurers.len(), 6);
        assert_eq!(admin.insurers[5], "United India");
    }

    #[test]
    fn test_remove_entry() {
        let mut admin = AdminConfig::default();
        assert_eq!(admin.remove_entry(AdminList::Checklist, 2).as_deref(), Some("RC"));
        assert_eq!(admin.remove_entry(AdminList::Checklist, 99), None);
        assert_eq!(admin.list(AdminList::Checklist).len(), 5);
    }

    #[test]
    fn test_list_names() {
        assert_eq!("workshops".parse::<AdminList>().unwrap(), AdminList::Workshops);
        assert!("garages".parse::<AdminList>().is_err());
    }

    #[test]
    fn test_set_depreciation() {
        let mut admin = AdminConfig::default();
        admin.set_depreciation(DepreciationPolicy::new(dec!(10), dec!(20), dec!(30), dec!(40), dec!(0)));
        assert_eq!(admin.dep.glass_pct, dec!(30));
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn test_any_credentials_log_in() {
        let session = Session::login(" surveyor@example.com ", "");
        assert_eq!(session.email, "surveyor@example.com");
        assert_eq!(serde_json::to_value(&session).unwrap(), json!({"email": "surveyor@example.com"}));
    }
}
