//! Typed Redis cache operations
//!
//! Values cross the wire as field-named JSON so that entries written by a
//! different build deserialize by field name; a schema mismatch is a miss,
//! never an error surfaced to the request.

use super::pool::RedisTier;
use crate::utils::error::{GatewayError, Result};
use redis::AsyncCommands;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

impl RedisTier {
    /// Fetch and deserialize a value
    ///
    /// Timeouts, connection failures, missing keys, and undecodable
    /// payloads all come back as `None`. The call is never retried.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let Some(conn) = self.conn.clone() else {
            return None;
        };
        let mut conn = conn;

        let raw: Option<String> = match timeout(self.timeout, conn.get(key)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                debug!(%key, error = %e, "distributed tier read failed, treating as miss");
                return None;
            }
            Err(_) => {
                debug!(%key, "distributed tier read timed out, treating as miss");
                return None;
            }
        };

        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%key, error = %e, "discarding undecodable distributed tier entry");
                None
            }
        }
    }

    /// Serialize and store a value with remote-side expiry
    ///
    /// The error is returned so callers can log it; no caller fails a
    /// request on it.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) -> Result<()> {
        let Some(conn) = self.conn.clone() else {
            return Ok(());
        };
        let mut conn = conn;

        let payload = serde_json::to_string(value)?;
        let write: redis::RedisResult<()> = match timeout(
            self.timeout,
            conn.set_ex(key, payload, ttl.as_secs()),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                return Err(GatewayError::Timeout(format!(
                    "distributed tier write for '{}'",
                    key
                )));
            }
        };

        write.map_err(GatewayError::Redis)
    }
}
