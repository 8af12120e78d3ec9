use std::env;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{Result, SelectError};

pub const DEFAULT_GROUP_SIZE: usize = 5;
pub const DEFAULT_TIE_PERCENT: u32 = 20;

pub const ENV_GROUP_SIZE: &str = "MOMSELECT_GROUP_SIZE";
pub const ENV_SMALL_THRESHOLD: &str = "MOMSELECT_SMALL_THRESHOLD";
pub const ENV_POLICY: &str = "MOMSELECT_POLICY";

/// Decides how a range is split around a chosen pivot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// `<= pivot | pivot | > pivot`. Linear per pass, but a range full of copies of the pivot
    /// only shrinks by one element.
    TwoWay,
    /// `< pivot | == pivot | > pivot`. Up to two predicate calls per element.
    ThreeWay,
    /// Two-way, followed by a three-way pass over the left side if the right side ends up with
    /// fewer than `tie_percent` percent of the range. Only copies of the pivot can push it below
    /// the balance the median of medians guarantees for distinct keys.
    Adaptive { tie_percent: u32 },
}

impl Default for PartitionPolicy {
    fn default() -> Self {
        PartitionPolicy::Adaptive {
            tie_percent: DEFAULT_TIE_PERCENT,
        }
    }
}

impl fmt::Display for PartitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionPolicy::TwoWay => f.write_str("two_way"),
            PartitionPolicy::ThreeWay => f.write_str("three_way"),
            PartitionPolicy::Adaptive { tie_percent } => write!(f, "adaptive:{tie_percent}"),
        }
    }
}

impl FromStr for PartitionPolicy {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "two_way" => return Ok(PartitionPolicy::TwoWay),
            "three_way" => return Ok(PartitionPolicy::ThreeWay),
            "adaptive" => return Ok(PartitionPolicy::default()),
            _ => {}
        }

        let percent = s
            .strip_prefix("adaptive:")
            .ok_or_else(|| SelectError::InvalidConfig(format!("unknown partition policy '{s}'")))?;

        let tie_percent = percent.parse::<u32>().map_err(|err| {
            SelectError::InvalidConfig(format!("bad tie percent '{percent}': {err}"))
        })?;

        Ok(PartitionPolicy::Adaptive { tie_percent })
    }
}

/// Tuning knobs shared by selection and sorting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectConfig {
    /// Elements per group when computing the median of medians. The linear time bound needs at
    /// least 5, 3 still terminates.
    pub group_size: usize,
    /// Ranges with fewer elements are ordered directly instead of partitioned.
    pub small_threshold: usize,
    pub policy: PartitionPolicy,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            small_threshold: DEFAULT_GROUP_SIZE,
            policy: PartitionPolicy::default(),
        }
    }
}

impl SelectConfig {
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    pub fn with_small_threshold(mut self, small_threshold: usize) -> Self {
        self.small_threshold = small_threshold;
        self
    }

    pub fn with_policy(mut self, policy: PartitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(self) -> Result<Self> {
        if self.group_size < 3 {
            return Err(SelectError::InvalidConfig(format!(
                "group size must be at least 3, got {}",
                self.group_size
            )));
        }

        if self.small_threshold == 0 {
            return Err(SelectError::InvalidConfig(
                "small threshold must be at least 1".into(),
            ));
        }

        if let PartitionPolicy::Adaptive { tie_percent } = self.policy {
            if tie_percent > 100 {
                return Err(SelectError::InvalidConfig(format!(
                    "tie percent must be at most 100, got {tie_percent}"
                )));
            }
        }

        Ok(self)
    }

    /// Reads the overrides from the process environment, unset variables keep their default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SelectConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_GROUP_SIZE) {
            config.group_size = parse_usize(ENV_GROUP_SIZE, &val)?;
            // Keep the direct ordering threshold in step unless it is set explicitly.
            config.small_threshold = config.group_size;
        }

        if let Some(val) = lookup(ENV_SMALL_THRESHOLD) {
            config.small_threshold = parse_usize(ENV_SMALL_THRESHOLD, &val)?;
        }

        if let Some(val) = lookup(ENV_POLICY) {
            config.policy = val.parse()?;
        }

        config.validate()
    }

    /// Process wide default, read from the environment on first use.
    pub fn global() -> SelectConfig {
        static GLOBAL: Lazy<SelectConfig> = Lazy::new(|| match SelectConfig::from_env() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring environment overrides: {err}");
                SelectConfig::default()
            }
        });

        *GLOBAL
    }
}

fn parse_usize(key: &str, val: &str) -> Result<usize> {
    val.trim()
        .parse()
        .map_err(|err| SelectError::InvalidConfig(format!("{key}='{val}': {err}")))
}
