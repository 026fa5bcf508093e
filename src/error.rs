use std::path::PathBuf;

/// Errors raised while loading vocabulary or configuration resources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resource file could not be read or parsed
    #[error("resource load error: {}: {}", .path.display(), .source)]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn resource_load<P, E>(path: P, source: E) -> Self
    where
        P: Into<PathBuf>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::ResourceLoad {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_load_message_names_path() {
        let err = Error::resource_load("/tmp/udic.csv", "line 3: expected 4 fields");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/udic.csv"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn resource_load_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::resource_load("a.yaml", io);
        let Error::ResourceLoad { source, .. } = err;
        assert_eq!(source.to_string(), "missing");
    }
}
