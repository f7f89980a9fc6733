use std::fmt;

#[derive(Debug)]
pub enum GestureError {
    InvalidLandmarks { expected: usize, got: usize },
    UnknownHandedness(String),
    UnknownGesture(String),
    Parse(String),
    Io(std::io::Error),
    Source(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::InvalidLandmarks { expected, got } => {
                write!(f, "invalid landmarks: expected {expected}, got {got}")
            }
            GestureError::UnknownHandedness(name) => write!(f, "unknown handedness: {name}"),
            GestureError::UnknownGesture(name) => write!(f, "unknown gesture: {name}"),
            GestureError::Parse(msg) => write!(f, "parse error: {msg}"),
            GestureError::Io(err) => write!(f, "io error: {err}"),
            GestureError::Source(msg) => write!(f, "landmark source error: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GestureError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GestureError {
    fn from(err: std::io::Error) -> Self {
        GestureError::Io(err)
    }
}

impl From<serde_json::Error> for GestureError {
    fn from(err: serde_json::Error) -> Self {
        GestureError::Parse(err.to_string())
    }
}
