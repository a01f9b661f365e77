use homeroi_core::ConfigError;

/// Failures while reading scenario or tax-table files
#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Parse(String),
    Config(ConfigError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LoadError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for LoadError {
    fn from(err: ConfigError) -> Self {
        LoadError::Config(err)
    }
}
