//! Array engine configuration.
//!
//! [`ArrayConfig`] is fixed when an array is constructed. The growth factor
//! is carried as a validated [`GrowthFactor`], so the `> 1.05` rule is
//! checked once instead of on every insert.

use crate::error::ContainerError;

/// Multiplicative capacity increase applied when a full array must grow.
///
/// Always finite and strictly greater than [`GrowthFactor::MIN_EXCLUSIVE`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct GrowthFactor(f64);

impl GrowthFactor {
    /// Lower bound (exclusive) for a usable growth factor.
    pub const MIN_EXCLUSIVE: f64 = 1.05;

    /// Doubling.
    pub const DOUBLE: Self = Self(2.0);

    /// Validate a raw factor.
    ///
    /// Rejects NaN, infinities and anything `<= 1.05`.
    pub fn new(factor: f64) -> Result<Self, ContainerError> {
        if !factor.is_finite() {
            return Err(ContainerError::InvalidArg {
                reason: "growth factor must be finite",
            });
        }
        if factor <= Self::MIN_EXCLUSIVE {
            return Err(ContainerError::InvalidArg {
                reason: "growth factor must exceed 1.05",
            });
        }
        Ok(Self(factor))
    }

    /// The raw factor.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Capacity to grow to from a full buffer holding `size` elements with
    /// capacity `cap`.
    ///
    /// `floor(size * factor)`, bumped by one when that would not exceed
    /// `cap`, so capacity strictly increases even for factors near 1.05 or
    /// for an empty buffer.
    pub fn next_capacity(self, size: usize, cap: usize) -> usize {
        // Float-to-int `as` saturates; an oversized result fails in
        // `try_reserve_exact` as AllocFail.
        let mut new_cap = (size as f64 * self.0) as usize;
        if new_cap <= cap {
            new_cap = cap.saturating_add(1);
        }
        new_cap
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        Self::DOUBLE
    }
}

/// Construction parameters for an array engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayConfig {
    /// Number of elements allocated up front. Must be positive.
    pub initial_capacity: usize,
    /// Growth factor applied when the array is full.
    pub growth_factor: GrowthFactor,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Config with the given initial capacity and the default growth factor.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: GrowthFactor::default(),
        }
    }

    /// Config from raw values, validating the growth factor.
    pub fn new(initial_capacity: usize, growth_factor: f64) -> Result<Self, ContainerError> {
        let config = Self {
            initial_capacity,
            growth_factor: GrowthFactor::new(growth_factor)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the config for use with elements of `elem_size` bytes.
    pub fn validate_for(&self, elem_size: usize) -> Result<(), ContainerError> {
        if elem_size == 0 {
            return Err(ContainerError::InvalidArg {
                reason: "element size must be non-zero",
            });
        }
        self.validate()
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ContainerError> {
        if self.initial_capacity == 0 {
            return Err(ContainerError::InvalidArg {
                reason: "initial capacity must be positive",
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
