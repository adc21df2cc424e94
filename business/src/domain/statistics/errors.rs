#[derive(Debug, thiserror::Error)]
pub enum StatisticsError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
