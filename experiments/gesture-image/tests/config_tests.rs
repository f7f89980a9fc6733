mod config {
    include!("../src/config.rs");
}

use {
    config::*,
    inference::{Device, InferError},
    std::{collections::HashMap, path::PathBuf},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.asset_dir, PathBuf::from("images"));
    assert_eq!(config.model_path, PathBuf::from("models/hand_landmark.onnx"));
    assert!(config.asset_map.is_none());
    assert!(config.replay.is_none());
    assert!(config.camera.is_none());
    assert_eq!(config.device, Device::Cpu);
    assert!(config.log_dir.is_none());
    assert_eq!(MAX_ASSET_SIZE, 500);
    assert_eq!(CONFIDENCE_THRESHOLD, 0.5);
    assert_eq!(MAX_HANDS, 2);
}

#[test]
fn test_empty_lookup_gives_defaults() {
    assert_eq!(AppConfig::from_lookup(|_| None).unwrap(), AppConfig::default());
}

#[test]
fn test_lookup_overrides() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (ENV_ASSET_DIR, "/srv/pictures"),
        (ENV_ASSET_MAP, "bindings.json"),
        (ENV_MODEL_PATH, "hand.onnx"),
        (ENV_REPLAY, "session.jsonl"),
        (ENV_CAMERA, "/dev/video2"),
        (ENV_DEVICE, "cuda:1"),
        (ENV_LOG_DIR, "logs"),
    ]))
    .unwrap();
    assert_eq!(
        config,
        AppConfig::default()
            .with_asset_dir("/srv/pictures")
            .with_asset_map("bindings.json")
            .with_model_path("hand.onnx")
            .with_replay("session.jsonl")
            .with_camera("/dev/video2")
            .with_device(Device::Cuda { device_id: 1 })
            .with_log_dir("logs")
    );
}

#[test]
fn test_empty_values_are_unset() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (ENV_ASSET_DIR, ""),
        (ENV_REPLAY, ""),
        (ENV_DEVICE, ""),
    ]))
    .unwrap();
    assert_eq!(config.asset_dir, PathBuf::from("images"));
    assert!(config.replay.is_none());
    assert_eq!(config.device, Device::Cpu);
}

#[test]
fn test_invalid_device_is_rejected() {
    let result = AppConfig::from_lookup(lookup_from(&[(ENV_DEVICE, "gpu")]));
    assert!(matches!(result, Err(InferError::InvalidDevice(name)) if name == "gpu"));
}
