#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erro de câmera: {0}")]
    CameraError(String),

    #[error("Arquivo inválido: {0}")]
    InvalidFile(String),

    #[error("E-mail inválido: {0}")]
    InvalidEmail(String),

    #[error("Erro de dados: {0}")]
    DataError(String),
}
