mod assets;
mod config;
mod detect;
mod draw;
mod presenter;

use {
    anyhow::{Context, Result},
    assets::{Asset, load_library},
    config::{AppConfig, CONFIDENCE_THRESHOLD, MAX_HANDS},
    detect::detect_hands,
    draw::draw_hand,
    gesture::{GestureLabel, LandmarkSource, ReplaySource, analyze},
    image::{mirror_horizontal, rgb_to_u32},
    inference::HandLandmarker,
    minifb::{Key, Window, WindowOptions},
    presenter::{Presenter, overlay_text},
    video::{VideoIn, VideoInConfig, v4l2::V4l2Config},
};

const CAMERA_TITLE: &str = "Camera - Gesture Detector";
const ASSET_TITLE: &str = "Image - Detected Gesture";

fn print_banner(config: &AppConfig, assets: &[Asset]) {
    println!("{}", "=".repeat(60));
    println!("HAND GESTURE DETECTOR");
    println!("{}", "=".repeat(60));
    println!("Gestures:");
    println!("  two hands straight    -> calabreso");
    println!("  two hands tilted      -> avril");
    println!("  left hand pointing up -> macaco");
    println!("  right hand L          -> faz o L");
    match &config.replay {
        Some(path) => println!("Landmarks: replay {}", path.display()),
        None => println!("Model: {} ({})", config.model_path.display(), config.device),
    }
    println!("Images loaded: {}", assets.len());
    println!();
    println!("Press 'q' to quit");
    println!("{}", "=".repeat(60));
}

fn open_landmark_source(config: &AppConfig) -> Result<Box<dyn LandmarkSource>> {
    if let Some(path) = &config.replay {
        let source = ReplaySource::open(path)
            .with_context(|| format!("failed to open landmark replay {:?}", path))?;
        return Ok(Box::new(source));
    }
    let landmarker = HandLandmarker::new(&config.model_path, &config.device)
        .with_context(|| {
            format!("failed to load hand model {:?} on {}", config.model_path, config.device)
        })?
        .with_conf_threshold(CONFIDENCE_THRESHOLD)
        .with_max_hands(MAX_HANDS);
    Ok(Box::new(landmarker))
}

fn open_camera(config: &AppConfig) -> Result<VideoIn, video::VideoError> {
    let mut v4l2 = V4l2Config::default();
    if let Some(path) = &config.camera {
        v4l2 = v4l2.with_path(path);
    }
    VideoIn::open(Some(VideoInConfig::V4l2(v4l2)))
}

struct AssetWindow {
    window: Window,
    index: usize,
}

fn run(config: AppConfig) -> Result<()> {
    let (assets, map) = load_library(&config)?;
    if assets.is_empty() {
        println!("No images found!");
    }
    for (label, index) in map.iter() {
        log::info!("{} -> {}", label, assets[index].name);
    }
    let names: Vec<String> = assets.iter().map(|asset| asset.name.clone()).collect();
    let packed_assets = assets
        .iter()
        .map(|asset| rgb_to_u32(&asset.image))
        .collect::<Result<Vec<_>, _>>()?;

    let mut camera = match open_camera(&config) {
        Ok(camera) => camera,
        Err(error) => {
            println!("Error: could not open the camera: {}", error);
            return Ok(());
        }
    };
    let mut source = open_landmark_source(&config)?;

    print_banner(&config, &assets);

    let size = camera.size();
    let mut window = Window::new(CAMERA_TITLE, size.x, size.y, WindowOptions::default())?;
    window.set_target_fps(30);

    let mut presenter = Presenter::new(map);
    let mut asset_window: Option<AssetWindow> = None;
    let mut last_label: Option<GestureLabel> = None;

    while window.is_open() && !window.is_key_down(Key::Q) {
        let frame = match camera.capture() {
            Ok(frame) => frame,
            Err(error) => {
                log::error!("capture failed: {}", error);
                break;
            }
        };
        let rgb = match frame.to_rgb() {
            Ok(rgb) => rgb,
            Err(error) => {
                log::warn!("dropping frame: {}", error);
                continue;
            }
        };
        let mut view = mirror_horizontal(&rgb)?;

        let hands = detect_hands(source.as_mut(), &view);
        let analysis = analyze(&hands);
        if analysis.label != last_label {
            log::debug!("gesture: {:?}", analysis.label);
            last_label = analysis.label;
        }
        let shown = presenter.update(analysis.label);

        for hand in &hands {
            draw_hand(&mut view, hand);
        }
        window.set_title(&overlay_text(&analysis, &presenter.status_text(&names)));
        window.update_with_buffer(&rgb_to_u32(&view)?, view.width(), view.height())?;

        match shown {
            Some(index) => {
                if asset_window.as_ref().map(|current| current.index) != Some(index) {
                    let image = &assets[index].image;
                    asset_window = Some(AssetWindow {
                        window: Window::new(
                            ASSET_TITLE,
                            image.width(),
                            image.height(),
                            WindowOptions::default(),
                        )?,
                        index,
                    });
                }
                if let Some(current) = asset_window.as_mut() {
                    let image = &assets[index].image;
                    current.window.update_with_buffer(
                        &packed_assets[index],
                        image.width(),
                        image.height(),
                    )?;
                }
            }
            None => asset_window = None,
        }
    }

    if let Some(label) = presenter.last_gesture() {
        log::info!("last gesture shown: {}", label.display_name());
    }
    println!("Exiting...");
    Ok(())
}

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            base::init_stdout_logger();
            base::log_fatal!("bad configuration: {}", error);
        }
    };
    match &config.log_dir {
        Some(dir) => {
            if let Err(error) = base::init_file_logger(dir) {
                base::init_stdout_logger();
                log::warn!("file logging unavailable, using stdout: {:#}", error);
            }
        }
        None => base::init_stdout_logger(),
    }
    if let Err(error) = run(config) {
        base::log_fatal!("{:#}", error);
    }
}
