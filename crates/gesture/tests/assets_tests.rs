use {
    gesture::{AssetMap, GestureError, GestureLabel, label_for_name, parse_asset_bindings},
    std::path::{Path, PathBuf},
};

#[test]
fn test_map_from_names() {
    let map = AssetMap::from_names(&["foo_calabreso.jpg", "bar_avril.png"]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(GestureLabel::Vertical), Some(0));
    assert_eq!(map.get(GestureLabel::Inclined), Some(1));
    assert_eq!(map.get(GestureLabel::PointingLeft), None);
    assert_eq!(map.get(GestureLabel::LRight), None);
}

#[test]
fn test_non_matching_names_are_ignored() {
    let map = AssetMap::from_names(&["cat.jpg", "dog.png", "fazol.bmp"]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(GestureLabel::LRight), Some(2));
}

#[test]
fn test_empty_names() {
    let names: [&str; 0] = [];
    assert!(AssetMap::from_names(&names).is_empty());
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(label_for_name("MACACO.JPG"), Some(GestureLabel::PointingLeft));
    assert_eq!(label_for_name("Macaquinho.png"), Some(GestureLabel::PointingLeft));
    assert_eq!(label_for_name("Faz.jpeg"), Some(GestureLabel::LRight));
    assert_eq!(label_for_name("plain.jpg"), None);
}

#[test]
fn test_first_category_claims_name() {
    assert_eq!(label_for_name("avril_fazol.png"), Some(GestureLabel::Inclined));
    assert_eq!(label_for_name("faz_calabreso.png"), Some(GestureLabel::Vertical));
}

#[test]
fn test_later_name_overwrites() {
    let map = AssetMap::from_names(&["avril1.png", "avril2.png"]);
    assert_eq!(map.get(GestureLabel::Inclined), Some(1));
}

#[test]
fn test_parse_bindings() {
    let json = r#"{"L_right": "l.png", "vertical": "/abs/v.jpg"}"#;
    let bindings = parse_asset_bindings(json, Path::new("assets")).unwrap();
    assert_eq!(
        bindings,
        vec![
            (GestureLabel::Vertical, PathBuf::from("/abs/v.jpg")),
            (GestureLabel::LRight, PathBuf::from("assets/l.png")),
        ]
    );
}

#[test]
fn test_parse_bindings_unknown_label() {
    let result = parse_asset_bindings(r#"{"thumbs_up": "t.png"}"#, Path::new(""));
    assert!(matches!(result, Err(GestureError::UnknownGesture(name)) if name == "thumbs_up"));
}

#[test]
fn test_parse_bindings_malformed() {
    let result = parse_asset_bindings("[1, 2]", Path::new(""));
    assert!(matches!(result, Err(GestureError::Parse(_))));
}
