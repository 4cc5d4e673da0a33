//! Client connection surface.

use crate::error::GatewayError;

/// A client's handle for calling chaincodes on one channel.
///
/// Payloads come back as text: JSON for queries, empty for writes.
pub trait Connection: Send + Sync {
    /// Evaluate a function. Writes it makes are discarded.
    fn query(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, GatewayError>;

    /// Submit a function. Its writes are committed if it succeeds and
    /// discarded if it fails.
    fn invoke(
        &self,
        chaincode: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, GatewayError>;
}
