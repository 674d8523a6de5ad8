use std::path::PathBuf;

use fp_graph::GraphError;
use fp_planner::PlannerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type CliResult<T> = Result<T, CliError>;
