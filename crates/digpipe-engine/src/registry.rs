//! Closed registries mapping stage names to constructors.
//!
//! Each registry is an enum with one variant per implementation. Lookups
//! by an unregistered name fail with a [`ConfigError`] listing the known
//! names.

use std::fmt;
use std::str::FromStr;

use digpipe_core::{ActionSink, DigitSource, Mapper, SinkError};
use digpipe_mapper::{GbaTenKeyMapper, MapperTiming};
use digpipe_sink::{FrameLogSink, OutputTarget};
use digpipe_source::PiDigitSource;

use crate::error::ConfigError;

fn known<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> String {
    all.iter().map(|&k| name(k)).collect::<Vec<_>>().join(", ")
}

// ── Sources ────────────────────────────────────────────────────────

/// Registered digit sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// [`PiDigitSource`], `"pi"`.
    Pi,
}

impl SourceKind {
    /// Every registered source.
    pub const ALL: [SourceKind; 1] = [SourceKind::Pi];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => PiDigitSource::NAME,
        }
    }

    /// Look up a source by name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ConfigError::UnknownSource {
                name: name.to_string(),
                known: known(&Self::ALL, Self::name),
            })
    }

    /// Construct the source for `total_digits` digits.
    pub fn build(self, total_digits: u64) -> Box<dyn DigitSource> {
        match self {
            Self::Pi => Box::new(PiDigitSource::new(total_digits)),
        }
    }
}

// ── Mappers ────────────────────────────────────────────────────────

/// Registered mappers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapperKind {
    /// [`GbaTenKeyMapper`], `"gba-tenkey"`.
    GbaTenKey,
}

impl MapperKind {
    /// Every registered mapper.
    pub const ALL: [MapperKind; 1] = [MapperKind::GbaTenKey];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GbaTenKey => GbaTenKeyMapper::NAME,
        }
    }

    /// Look up a mapper by name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ConfigError::UnknownMapper {
                name: name.to_string(),
                known: known(&Self::ALL, Self::name),
            })
    }

    /// Construct the mapper with `timing`.
    pub fn build(self, timing: MapperTiming) -> Box<dyn Mapper> {
        match self {
            Self::GbaTenKey => Box::new(GbaTenKeyMapper::new(timing)),
        }
    }
}

// ── Sinks ──────────────────────────────────────────────────────────

/// Registered sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// [`FrameLogSink`], `"frame-log"`.
    FrameLog,
}

impl SinkKind {
    /// Every registered sink.
    pub const ALL: [SinkKind; 1] = [SinkKind::FrameLog];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FrameLog => FrameLogSink::NAME,
        }
    }

    /// Look up a sink by name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ConfigError::UnknownSink {
                name: name.to_string(),
                known: known(&Self::ALL, Self::name),
            })
    }

    /// Open the sink on `output`.
    pub fn build(self, output: &OutputTarget) -> Result<Box<dyn ActionSink>, SinkError> {
        match self {
            Self::FrameLog => Ok(Box::new(FrameLogSink::open(output)?)),
        }
    }
}

macro_rules! impl_name_traits {
    ($($kind:ty),*) => {$(
        impl FromStr for $kind {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    )*};
}

impl_name_traits!(SourceKind, MapperKind, SinkKind);
