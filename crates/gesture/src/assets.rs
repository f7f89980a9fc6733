use {
    crate::*,
    std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    },
};

// keywords per label, checked in this order
const KEYWORDS: [(GestureLabel, &[&str]); 4] = [
    (GestureLabel::Vertical, &["calabreso"]),
    (GestureLabel::Inclined, &["avril"]),
    (GestureLabel::PointingLeft, &["macaquinho", "macaco"]),
    (GestureLabel::LRight, &["fazol", "faz"]),
];

/// Label an asset name claims through its keywords, if any. Case-insensitive.
pub fn label_for_name(name: &str) -> Option<GestureLabel> {
    let name = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(label, _)| *label)
}

/// Gesture label to index into the loaded asset list. Fixed after startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    entries: BTreeMap<GestureLabel, usize>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from asset names in load order. When several names claim
    /// the same label the last one wins.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut map = Self::new();
        for (index, name) in names.iter().enumerate() {
            if let Some(label) = label_for_name(name.as_ref()) {
                log::debug!("asset {} -> {}", name.as_ref(), label);
                map.insert(label, index);
            }
        }
        map
    }

    pub fn insert(&mut self, label: GestureLabel, index: usize) {
        self.entries.insert(label, index);
    }

    pub fn get(&self, label: GestureLabel) -> Option<usize> {
        self.entries.get(&label).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GestureLabel, usize)> + '_ {
        self.entries.iter().map(|(label, index)| (*label, *index))
    }
}

/// Parse an explicit `{"<label>": "<path>"}` binding object.
///
/// Relative paths are resolved against `base_dir`. Bindings come back in label
/// order.
pub fn parse_asset_bindings(
    json: &str,
    base_dir: &Path,
) -> Result<Vec<(GestureLabel, PathBuf)>, GestureError> {
    let raw: BTreeMap<String, PathBuf> = serde_json::from_str(json)?;
    let mut bindings = raw
        .into_iter()
        .map(|(label, path)| Ok((label.parse::<GestureLabel>()?, base_dir.join(path))))
        .collect::<Result<Vec<_>, GestureError>>()?;
    bindings.sort_by_key(|(label, _)| *label);
    Ok(bindings)
}

/// Read and parse a binding file. Relative paths resolve against the file's directory.
pub fn load_asset_bindings(
    path: impl AsRef<Path>,
) -> Result<Vec<(GestureLabel, PathBuf)>, GestureError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or(Path::new(""));
    parse_asset_bindings(&json, base_dir)
}
