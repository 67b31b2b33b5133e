use thiserror::Error;

/// Failure reported by a single geolocation dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Address is valid but the dataset has no record for it
    #[error("address not found in dataset")]
    NotFound,
    /// Dataset access or decoding failure
    #[error("dataset read error: {0}")]
    Read(String),
}

impl From<maxminddb::MaxMindDBError> for SourceError {
    fn from(err: maxminddb::MaxMindDBError) -> Self {
        match err {
            maxminddb::MaxMindDBError::AddressNotFoundError(_) => SourceError::NotFound,
            other => SourceError::Read(other.to_string()),
        }
    }
}

/// Errors surfaced by the resolution core
#[derive(Debug, Error)]
pub enum GeoError {
    /// Malformed or unparseable address text
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),
    /// The place dataset could not resolve the address
    #[error("geoip lookup failed: {0}")]
    LookupFailed(#[source] SourceError),
    /// Dataset could not be opened
    #[error("failed to open dataset {path}: {reason}")]
    Open { path: String, reason: String },
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maxmind_not_found_maps_to_not_found() {
        let err = maxminddb::MaxMindDBError::AddressNotFoundError("10.0.0.1".to_string());
        assert_eq!(SourceError::from(err), SourceError::NotFound);
    }

    #[test]
    fn test_maxmind_other_errors_map_to_read() {
        let err = maxminddb::MaxMindDBError::InvalidDatabaseError("bad tree".to_string());
        match SourceError::from(err) {
            SourceError::Read(msg) => assert!(msg.contains("bad tree")),
            other => panic!("unexpected: {:?}", other),
        }

        let err = maxminddb::MaxMindDBError::DecodingError("bad record".to_string());
        assert!(matches!(SourceError::from(err), SourceError::Read(_)));
    }

    #[test]
    fn test_lookup_failed_keeps_source() {
        use std::error::Error as _;
        let err = GeoError::LookupFailed(SourceError::NotFound);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("not found"));
    }
}
