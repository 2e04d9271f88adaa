use thiserror::Error;

/// An error encoding or decoding a wire payload.
///
/// Decode failures on received payloads are logged and the payload dropped;
/// encode failures on locally-produced messages indicate a local bug but
/// still must not abort replication for the rest of the grid.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("failed to decode message: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
