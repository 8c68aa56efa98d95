/// Fatal startup and serve errors.
#[derive(Debug)]
pub enum ServerError {
    InvalidAddr(String),
    Bind { addr: String, source: std::io::Error },
    Serve(std::io::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddr(addr) => {
                write!(f, "listen address {addr} is not a valid socket address")
            },
            Self::Bind { addr, source } => write!(f, "failed to bind to {addr}: {source}"),
            Self::Serve(e) => write!(f, "server error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAddr(_) => None,
            Self::Bind { source, .. } => Some(source),
            Self::Serve(e) => Some(e),
        }
    }
}
