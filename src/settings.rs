use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub present_mode: PresentModeSetting,
    #[serde(default)]
    pub camera: CameraSweep,
}

impl RenderSettings {
    pub fn load() -> Self {
        Self::load_from_path(SETTINGS_FILE)
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RenderSettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded render settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default render settings.",
                        path, err
                    );
                    RenderSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Render settings file {:?} not found. Using default settings.",
                    path
                );
                RenderSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default render settings.",
                    path, err
                );
                RenderSettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if self.window.width == 0 || self.window.height == 0 {
            warn!("Window size must be greater than zero. Using default size.");
            let defaults = WindowSettings::default();
            self.window.width = defaults.width;
            self.window.height = defaults.height;
        }

        let sweep = &self.camera;
        let span = sweep.near_offset - sweep.far_offset;
        if !span.is_finite()
            || span <= 0.0
            || sweep.step.is_nan()
            || sweep.step <= 0.0
            || sweep.step > span
        {
            warn!(
                "Camera sweep {:?} is invalid (need near > far and 0 < step <= near - far). Using default sweep.",
                sweep
            );
            self.camera = CameraSweep::default();
        }

        self
    }

    pub fn present_mode(&self, available: &[wgpu::PresentMode]) -> wgpu::PresentMode {
        let desired = self.present_mode.to_wgpu();
        if available.contains(&desired) {
            return desired;
        }

        warn!(
            "Requested present mode {:?} is not supported. Falling back to FIFO.",
            desired
        );

        if available.contains(&wgpu::PresentMode::Fifo) {
            wgpu::PresentMode::Fifo
        } else {
            available
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "gem overlay".to_string(),
            width: 400,
            height: 400,
            x: 100,
            y: 100,
        }
    }
}

/// Depth range and per-frame increment of the bouncing camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSweep {
    pub near_offset: f32,
    pub far_offset: f32,
    pub step: f32,
}

impl Default for CameraSweep {
    fn default() -> Self {
        Self {
            near_offset: -5.0,
            far_offset: -10.0,
            step: 0.003125,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentModeSetting {
    #[default]
    Fifo,
    FifoRelaxed,
    Immediate,
    Mailbox,
    AutoVsync,
    AutoNoVsync,
}

impl PresentModeSetting {
    fn to_wgpu(&self) -> wgpu::PresentMode {
        match self {
            PresentModeSetting::Fifo => wgpu::PresentMode::Fifo,
            PresentModeSetting::FifoRelaxed => wgpu::PresentMode::FifoRelaxed,
            PresentModeSetting::Immediate => wgpu::PresentMode::Immediate,
            PresentModeSetting::Mailbox => wgpu::PresentMode::Mailbox,
            PresentModeSetting::AutoVsync => wgpu::PresentMode::AutoVsync,
            PresentModeSetting::AutoNoVsync => wgpu::PresentMode::AutoNoVsync,
        }
    }
}
