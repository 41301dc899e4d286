use vela_mem::AllocationError;

#[derive(Debug)]
pub enum LogError {
    IoError(std::io::Error),
    AllocError(AllocationError),
    UnknownFormat { index: usize },
    Uninitialized,
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "IO error"),
            Self::AllocError(_) => write!(f, "failed to store log format"),
            Self::UnknownFormat { index } => write!(f, "no custom log format with index {}", index),
            Self::Uninitialized => write!(f, "logger not initialized"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::AllocError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocationError> for LogError {

    fn from(value: AllocationError) -> Self {
        Self::AllocError(value)
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}
