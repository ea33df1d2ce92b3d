/// Configuration for delivery polling behavior.
///
/// Controls how [`MessageTracker`](crate::MessageTracker) polls LayerZero
/// Scan for message delivery. Use the builder methods to customize, or the
/// preset for congested routes.
///
/// # Examples
///
/// ```rust
/// use hubspoke::PollingConfig;
///
/// // Use defaults (30 attempts, 10 second intervals)
/// let config = PollingConfig::default();
///
/// // Customize polling behavior
/// let config = PollingConfig::default()
///     .with_max_attempts(20)
///     .with_poll_interval_secs(30);
///
/// // Use preset for slow routes (60 attempts, 30 second intervals)
/// let config = PollingConfig::slow_route();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Maximum number of polling attempts before giving up.
    pub max_attempts: u32,
    /// Seconds to wait between polling attempts.
    pub poll_interval_secs: u64,
}

impl Default for PollingConfig {
    /// Creates a default polling configuration suitable for the supported
    /// routes.
    ///
    /// - `max_attempts`: 30
    /// - `poll_interval_secs`: 10
    ///
    /// This results in a maximum wait time of ~5 minutes, which accommodates
    /// the typical one-to-two minute delivery time between the paired
    /// networks.
    fn default() -> Self {
        Self {
            max_attempts: 30,
            poll_interval_secs: 10,
        }
    }
}

impl PollingConfig {
    /// Creates a polling configuration for routes with long source-chain
    /// confirmation requirements.
    ///
    /// - `max_attempts`: 60
    /// - `poll_interval_secs`: 30
    pub fn slow_route() -> Self {
        Self {
            max_attempts: 60,
            poll_interval_secs: 30,
        }
    }

    /// Sets the maximum number of polling attempts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hubspoke::PollingConfig;
    ///
    /// let config = PollingConfig::default().with_max_attempts(60);
    /// assert_eq!(config.max_attempts, 60);
    /// ```
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the interval between polling attempts in seconds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hubspoke::PollingConfig;
    ///
    /// let config = PollingConfig::default().with_poll_interval_secs(30);
    /// assert_eq!(config.poll_interval_secs, 30);
    /// ```
    pub fn with_poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// Returns the total maximum wait time in seconds.
    ///
    /// This is calculated as `max_attempts * poll_interval_secs`.
    pub fn total_timeout_secs(&self) -> u64 {
        self.max_attempts as u64 * self.poll_interval_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PollingConfig::default();
        assert_eq!(config.max_attempts, 30);
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.total_timeout_secs(), 300); // 5 minutes
    }

    #[test]
    fn test_slow_route_config() {
        let config = PollingConfig::slow_route();
        assert_eq!(config.max_attempts, 60);
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.total_timeout_secs(), 1800); // 30 minutes
    }

    #[test]
    fn test_builder_methods() {
        let config = PollingConfig::default()
            .with_max_attempts(20)
            .with_poll_interval_secs(30);
        assert_eq!(config.max_attempts, 20);
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.total_timeout_secs(), 600); // 10 minutes
    }

    #[test]
    fn test_config_is_copy() {
        let config = PollingConfig::default();
        let copied = config;
        assert_eq!(config, copied);
    }
}
