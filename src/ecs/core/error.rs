use thiserror::Error;

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tuning value `{name}` must be positive and finite, got {value}")]
    InvalidTuning { name: &'static str, value: f32 },

    #[error("sync rate must give a positive, representable tick period, got {0} Hz")]
    InvalidSyncRate(f64),

    #[error("spawn radius must be finite and between 0 and {max}, got {value}")]
    InvalidSpawnRadius { value: f32, max: f32 },

    #[error("debug interval must be a positive, representable number of seconds, got {0}")]
    InvalidDebugInterval(f32),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Snapshot payload that does not match the fixed wire layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot payload must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to bind relay on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to connect to relay {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("malformed control message: {0}")]
    Control(#[from] serde_json::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
