use std::collections::HashSet;

use datafaker_core::{
    Error, OutputKind, extensions_for, file_extension_types, is_custom, resolve_suffix,
};

#[test]
fn image_extensions_are_fixed_and_ordered() {
    let image = extensions_for("image").expect("image kind");
    assert_eq!(
        image,
        [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".tiff"]
    );
}

#[test]
fn custom_kind_has_no_extensions() {
    assert!(extensions_for("custom").expect("custom kind").is_empty());
    assert!(is_custom("custom"));
    assert!(!is_custom("image"));
    assert!(!is_custom("unknown-kind"));
}

#[test]
fn unknown_kind_is_an_error() {
    assert_eq!(
        extensions_for("unknown-kind"),
        Err(Error::UnknownKind("unknown-kind".to_string()))
    );
}

#[test]
fn table_values_are_unique_and_non_custom_data_is_dotted() {
    let types = file_extension_types();
    assert_eq!(types.len(), OutputKind::ALL.len());

    let values: HashSet<_> = types.iter().map(|entry| entry.value).collect();
    assert_eq!(values.len(), types.len());

    for entry in types {
        if entry.value.is_custom() {
            assert!(entry.data.is_empty());
            continue;
        }
        assert!(!entry.data.is_empty(), "{} has no suffixes", entry.value);
        assert!(entry.data.iter().all(|suffix| suffix.starts_with('.')));
        assert!(!entry.label.is_empty());
    }
}

#[test]
fn suffix_defaults_to_first_entry() {
    assert_eq!(resolve_suffix("image", None), Ok(".jpg".to_string()));
    assert_eq!(resolve_suffix("compression", None), Ok(".zip".to_string()));
    assert_eq!(resolve_suffix("document", Some("")), Ok(".doc".to_string()));
}

#[test]
fn suffix_must_belong_to_kind() {
    assert_eq!(resolve_suffix("image", Some("png")), Ok(".png".to_string()));
    assert_eq!(resolve_suffix("video", Some(".mkv")), Ok(".mkv".to_string()));
    assert!(matches!(
        resolve_suffix("image", Some(".mp3")),
        Err(Error::InvalidSuffix { .. })
    ));
}

#[test]
fn custom_suffix_is_caller_supplied() {
    assert_eq!(resolve_suffix("custom", Some("dat")), Ok(".dat".to_string()));
    assert!(matches!(
        resolve_suffix("custom", None),
        Err(Error::InvalidSuffix { .. })
    ));
    assert_eq!(
        resolve_suffix("nope", Some(".csv")),
        Err(Error::UnknownKind("nope".to_string()))
    );
}
