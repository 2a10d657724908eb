use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Please describe the service you need")]
    MissingDescription,
    #[error("Unknown service: {0}")]
    UnknownService(String),
    #[error("Service currently unavailable: {0}")]
    UnavailableService(String),
    #[error("Unknown address: {0}")]
    UnknownAddress(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}
