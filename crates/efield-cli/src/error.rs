use efield::core::io::grid::GridError;
use efield::core::io::scene_file::SceneFileError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Scene(#[from] SceneFileError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Invalid argument: {0}")]
    Argument(#[from] crate::utils::parser::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
