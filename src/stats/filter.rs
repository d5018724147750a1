// Threat Telemetry - Event Filtering
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Equality predicates over threat events.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::models::{AttackType, Country, Severity, ThreatEvent};

/// Label that disables a criterion.
pub const ALL: &str = "all";

/// A single criterion: either match everything or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Criterion<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: fmt::Display> fmt::Display for Criterion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Criterion<T>
where
    T: FromStr<Err = anyhow::Error>,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// The three independent dashboard filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub country: Criterion<String>,
    pub attack_type: Criterion<AttackType>,
    pub severity: Criterion<Severity>,
}

impl FilterCriteria {
    /// Build criteria from the labels a dashboard selector produces.
    ///
    /// Each label is `"all"` or an exact, case-sensitive display name.
    pub fn from_labels(country: &str, attack_type: &str, severity: &str) -> Result<Self> {
        let country = if country == ALL {
            Criterion::All
        } else {
            let known = Country::by_name(country)
                .ok_or_else(|| anyhow!("Unknown country: {}", country))?;
            Criterion::Only(known.name.to_string())
        };

        Ok(Self {
            country,
            attack_type: attack_type.parse()?,
            severity: severity.parse()?,
        })
    }

    /// Whether every criterion is `all`.
    pub fn is_unfiltered(&self) -> bool {
        self.country.is_all() && self.attack_type.is_all() && self.severity.is_all()
    }

    pub fn matches(&self, event: &ThreatEvent) -> bool {
        self.country.matches(&event.country)
            && self.attack_type.matches(&event.attack_type)
            && self.severity.matches(&event.severity)
    }
}

/// Events matching `criteria`, in input order.
pub fn apply<'a, I>(events: I, criteria: &FilterCriteria) -> Vec<ThreatEvent>
where
    I: IntoIterator<Item = &'a ThreatEvent>,
{
    events
        .into_iter()
        .filter(|event| criteria.matches(event))
        .cloned()
        .collect()
}
