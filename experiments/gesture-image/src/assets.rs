use {
    crate::config::{AppConfig, MAX_ASSET_SIZE},
    anyhow::{Context, Result},
    gesture::{AssetMap, load_asset_bindings},
    image::{Image, ImageError, load_image, resize_to_fit},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

const ASSET_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// An image ready for display, already resized.
#[derive(Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub image: Image,
}

pub fn is_asset_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ASSET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by file name.
pub fn discover_assets(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_asset_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

pub fn load_asset(path: &Path, max_size: usize) -> Result<Asset, ImageError> {
    let image = resize_to_fit(&load_image(path)?, max_size)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Asset { name, image })
}

/// Load every asset, skipping unreadable files.
pub fn load_assets(paths: &[PathBuf], max_size: usize) -> Vec<Asset> {
    paths
        .iter()
        .filter_map(|path| match load_asset(path, max_size) {
            Ok(asset) => {
                log::info!(
                    "asset {}: {}x{}",
                    asset.name,
                    asset.image.width(),
                    asset.image.height()
                );
                Some(asset)
            }
            Err(error) => {
                log::warn!("skipping {:?}: {}", path, error);
                None
            }
        })
        .collect()
}

/// Load the assets and build the gesture mapping.
///
/// With an explicit binding file exactly the bound images are loaded.
/// Otherwise the asset folder is scanned and labels come from file names. A
/// missing folder gives an empty library.
pub fn load_library(config: &AppConfig) -> Result<(Vec<Asset>, AssetMap)> {
    if let Some(map_path) = &config.asset_map {
        let bindings = load_asset_bindings(map_path)
            .with_context(|| format!("failed to read asset bindings {:?}", map_path))?;
        let mut assets = Vec::new();
        let mut map = AssetMap::new();
        for (label, path) in bindings {
            match load_asset(&path, MAX_ASSET_SIZE) {
                Ok(asset) => {
                    map.insert(label, assets.len());
                    assets.push(asset);
                }
                Err(error) => log::warn!("skipping {} binding {:?}: {}", label, path, error),
            }
        }
        return Ok((assets, map));
    }

    let paths = match discover_assets(&config.asset_dir) {
        Ok(paths) => paths,
        Err(error) => {
            log::warn!("cannot read asset folder {:?}: {}", config.asset_dir, error);
            Vec::new()
        }
    };
    let assets = load_assets(&paths, MAX_ASSET_SIZE);
    let names: Vec<&str> = assets.iter().map(|asset| asset.name.as_str()).collect();
    let map = AssetMap::from_names(&names);
    Ok((assets, map))
}
