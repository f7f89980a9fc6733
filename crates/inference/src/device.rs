use {
    crate::InferError,
    std::{fmt, str::FromStr},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Cpu,
    Cuda { device_id: i32 },
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
        }
    }
}

/// Parses `cpu`, `cuda` (device 0) or `cuda:<id>`, case-insensitive.
impl FromStr for Device {
    type Err = InferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.split_once(':') {
            None if lower == "cpu" => Ok(Device::Cpu),
            None if lower == "cuda" => Ok(Device::Cuda { device_id: 0 }),
            Some(("cuda", id)) => match id.parse::<i32>() {
                Ok(device_id) if device_id >= 0 => Ok(Device::Cuda { device_id }),
                _ => Err(InferError::InvalidDevice(s.to_string())),
            },
            _ => Err(InferError::InvalidDevice(s.to_string())),
        }
    }
}
