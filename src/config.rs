//! Debouncer configuration shared by all engines.

/// Tuning parameters for every engine.
///
/// Each engine only reads its own group of fields and ignores the rest, so one
/// `Config` can be handed to any engine. Values are taken as given when a debouncer is
/// built; use [`Config::validate`] to check them against the intended contract.
///
/// All thresholds are measured in ticks, i.e. calls to `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Integrator saturation ceiling. The accumulator ranges over `0..=integ_max`.
    pub integ_max: u8,

    /// Accumulator value at or above which a released button becomes pressed.
    pub integ_on: u8,

    /// Accumulator value at or below which a pressed button becomes released.
    ///
    /// Must stay below `integ_on` for the integrator to have any hysteresis.
    pub integ_off: u8,

    /// Number of identical newest samples required to change state (1-8).
    pub consec_n: u8,

    /// Edge count in the 8-sample window at or above which the input counts as bouncing.
    pub edge_threshold: u8,

    /// Ticks of confirmed bouncing after which the edge-gated engine recenters.
    pub unstable_timeout: u8,

    /// Consecutive bouncing ticks required before gating takes effect.
    pub bounce_confirm: u8,
}

impl Config {
    /// Defaults tuned for a 5 ms tick.
    pub const DEFAULT: Self = Self {
        integ_max: 6,
        integ_on: 4,
        integ_off: 2,
        consec_n: 3,
        edge_threshold: 4,
        unstable_timeout: 16,
        bounce_confirm: 1,
    };

    /// Sets the integrator ceiling and its press/release thresholds.
    pub const fn with_integrator(mut self, max: u8, on: u8, off: u8) -> Self {
        self.integ_max = max;
        self.integ_on = on;
        self.integ_off = off;
        self
    }

    /// Sets the number of consecutive samples required by the history engines.
    pub const fn with_consecutive(mut self, n: u8) -> Self {
        self.consec_n = n;
        self
    }

    /// Sets the chatter detection parameters of the edge-gated engine.
    pub const fn with_edge_gate(
        mut self,
        edge_threshold: u8,
        unstable_timeout: u8,
        bounce_confirm: u8,
    ) -> Self {
        self.edge_threshold = edge_threshold;
        self.unstable_timeout = unstable_timeout;
        self.bounce_confirm = bounce_confirm;
        self
    }

    /// Checks the configuration against the contract every engine assumes.
    ///
    /// Building a debouncer never calls this. Out-of-contract values still produce
    /// defined behavior, just not useful debouncing.
    ///
    /// # Returns
    /// * `Ok(())` - Every engine will debounce as documented
    /// * `Err` - The first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.integ_off >= self.integ_on {
            return Err(ConfigError::HysteresisInverted {
                on: self.integ_on,
                off: self.integ_off,
            });
        }

        if self.integ_on > self.integ_max {
            return Err(ConfigError::ThresholdAboveMax {
                on: self.integ_on,
                max: self.integ_max,
            });
        }

        if !(1..=8).contains(&self.consec_n) {
            return Err(ConfigError::ConsecutiveOutOfRange(self.consec_n));
        }

        if !(1..=8).contains(&self.edge_threshold) {
            return Err(ConfigError::EdgeThresholdOutOfRange(self.edge_threshold));
        }

        if self.unstable_timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration contract violations reported by [`Config::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Release threshold is not below the press threshold.
    HysteresisInverted { on: u8, off: u8 },

    /// Press threshold can never be reached by the saturating accumulator.
    ThresholdAboveMax { on: u8, max: u8 },

    /// Consecutive sample count outside `1..=8`.
    ConsecutiveOutOfRange(u8),

    /// Edge threshold outside `1..=8`, so the input is always or never bouncing.
    EdgeThresholdOutOfRange(u8),

    /// Zero unstable timeout recenters on every bouncing tick.
    ZeroTimeout,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::HysteresisInverted { on, off } => {
                write!(
                    f,
                    "release threshold {} must be below press threshold {}",
                    off, on
                )
            }
            ConfigError::ThresholdAboveMax { on, max } => {
                write!(
                    f,
                    "press threshold {} exceeds integrator ceiling {}",
                    on, max
                )
            }
            ConfigError::ConsecutiveOutOfRange(n) => {
                write!(f, "consecutive sample count {} must be in 1..=8", n)
            }
            ConfigError::EdgeThresholdOutOfRange(t) => {
                write!(f, "edge threshold {} must be in 1..=8", t)
            }
            ConfigError::ZeroTimeout => {
                write!(f, "unstable timeout must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.integ_max, 6);
        assert_eq!(config.integ_on, 4);
        assert_eq!(config.integ_off, 2);
        assert_eq!(config.consec_n, 3);
        assert_eq!(config.edge_threshold, 4);
        assert_eq!(config.unstable_timeout, 16);
        assert_eq!(config.bounce_confirm, 1);
        assert_eq!(config, Config::DEFAULT);
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn setters_only_touch_their_group() {
        let config = Config::default()
            .with_integrator(10, 7, 3)
            .with_consecutive(5)
            .with_edge_gate(3, 20, 2);

        assert_eq!(config.integ_max, 10);
        assert_eq!(config.integ_on, 7);
        assert_eq!(config.integ_off, 3);
        assert_eq!(config.consec_n, 5);
        assert_eq!(config.edge_threshold, 3);
        assert_eq!(config.unstable_timeout, 20);
        assert_eq!(config.bounce_confirm, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_hysteresis() {
        let config = Config::default().with_integrator(6, 3, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::HysteresisInverted { on: 3, off: 3 })
        );
    }

    #[test]
    fn validate_rejects_unreachable_press_threshold() {
        let config = Config::default().with_integrator(4, 5, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdAboveMax { on: 5, max: 4 })
        );
    }

    #[test]
    fn validate_rejects_consecutive_count_out_of_range() {
        assert_eq!(
            Config::default().with_consecutive(0).validate(),
            Err(ConfigError::ConsecutiveOutOfRange(0))
        );
        assert_eq!(
            Config::default().with_consecutive(9).validate(),
            Err(ConfigError::ConsecutiveOutOfRange(9))
        );
        assert!(Config::default().with_consecutive(8).validate().is_ok());
    }

    #[test]
    fn validate_rejects_edge_gate_extremes() {
        assert_eq!(
            Config::default().with_edge_gate(0, 16, 1).validate(),
            Err(ConfigError::EdgeThresholdOutOfRange(0))
        );
        assert_eq!(
            Config::default().with_edge_gate(9, 16, 1).validate(),
            Err(ConfigError::EdgeThresholdOutOfRange(9))
        );
        assert_eq!(
            Config::default().with_edge_gate(4, 0, 1).validate(),
            Err(ConfigError::ZeroTimeout)
        );
    }

    #[test]
    fn error_messages_format_correctly_for_display() {
        let msg = format!("{}", ConfigError::HysteresisInverted { on: 4, off: 5 });
        assert!(msg.contains("release threshold 5"));
        assert!(msg.contains("press threshold 4"));

        let msg = format!("{}", ConfigError::ConsecutiveOutOfRange(12));
        assert!(msg.contains("12"));

        let msg = format!("{}", ConfigError::ZeroTimeout);
        assert!(msg.contains("non-zero"));
    }
}
