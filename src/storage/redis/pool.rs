//! Redis connection setup and liveness probing

use crate::config::RedisConfig;
use redis::Client;
use redis::aio::MultiplexedConnection;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Redis tier client (supports no-op mode when Redis is unavailable)
///
/// Cheap to clone; the multiplexed connection is shared.
#[derive(Clone)]
pub struct RedisTier {
    /// Connection (None in no-op mode)
    pub(crate) conn: Option<MultiplexedConnection>,
    /// Per-call deadline, enforced independently of any caller deadline
    pub(crate) timeout: Duration,
}

impl RedisTier {
    /// Connect to Redis per the configuration
    ///
    /// A disabled tier or a failed connection yields a no-op tier; the
    /// gateway runs without the distributed tier rather than failing.
    pub async fn connect(config: &RedisConfig) -> Self {
        if !config.enabled {
            info!("Redis tier disabled by configuration");
            return Self::noop(config.timeout());
        }

        debug!("Connecting to Redis at {}", Self::sanitize_url(&config.url));

        let connect = async {
            let client = Client::open(config.url.as_str())?;
            client.get_multiplexed_async_connection().await
        };

        match tokio::time::timeout(config.timeout(), connect).await {
            Ok(Ok(conn)) => {
                info!("Redis tier connected");
                Self {
                    conn: Some(conn),
                    timeout: config.timeout(),
                }
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Redis connection failed, continuing without distributed tier");
                Self::noop(config.timeout())
            }
            Err(_) => {
                warn!("Redis connection timed out, continuing without distributed tier");
                Self::noop(config.timeout())
            }
        }
    }

    /// Create a no-op tier; every call is an immediate miss
    pub fn noop(timeout: Duration) -> Self {
        Self {
            conn: None,
            timeout,
        }
    }

    /// Whether this tier is in no-op mode
    pub fn is_noop(&self) -> bool {
        self.conn.is_none()
    }

    /// Cheap liveness probe for health reporting
    pub async fn ping(&self) -> bool {
        let Some(conn) = self.conn.clone() else {
            return false;
        };
        let mut conn = conn;
        let ping = async move {
            let pong: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
            pong.is_ok()
        };
        matches!(tokio::time::timeout(self.timeout, ping).await, Ok(true))
    }

    /// Sanitize a Redis URL for logging (hide password)
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}
