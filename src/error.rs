use thiserror::Error;

/// Input the analyzer must not be asked to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("nothing to verify: the text is empty or only whitespace")]
    Empty,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: InputError,
    },

    #[error("Error reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
