//! Responsive breakpoint resolution.
//!
//! Maps a viewport width to an items-per-slide value through a table keyed by
//! minimum width. Shared by the bounded and continuous carousels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ItemsPerSlide;

/// Breakpoint table: minimum viewport width (px) -> items per slide.
///
/// Keys are unique by construction. In TOML the table is written with
/// decimal width keys, e.g. `[carousel.responsive]` / `640 = 2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ItemsPerSlide>",
    into = "BTreeMap<String, ItemsPerSlide>"
)]
pub struct ResponsiveTable(BTreeMap<u32, ItemsPerSlide>);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("breakpoint key must be a non-negative pixel width, got {0:?}")]
pub struct InvalidBreakpoint(pub String);

impl ResponsiveTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a breakpoint.
    pub fn insert(&mut self, min_width: u32, items: ItemsPerSlide) -> Option<ItemsPerSlide> {
        self.0.insert(min_width, items)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Breakpoints in ascending width order.
    pub fn breakpoints(&self) -> impl Iterator<Item = (u32, ItemsPerSlide)> + '_ {
        self.0.iter().map(|(&width, &items)| (width, items))
    }

    /// Value of the largest breakpoint `<= width`, or `base` when none applies.
    #[must_use]
    pub fn resolve(&self, width: u32, base: ItemsPerSlide) -> ItemsPerSlide {
        self.0
            .range(..=width)
            .next_back()
            .map_or(base, |(_, &items)| items)
    }
}

impl FromIterator<(u32, ItemsPerSlide)> for ResponsiveTable {
    fn from_iter<I: IntoIterator<Item = (u32, ItemsPerSlide)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<BTreeMap<String, ItemsPerSlide>> for ResponsiveTable {
    type Error = InvalidBreakpoint;

    fn try_from(raw: BTreeMap<String, ItemsPerSlide>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(key, items)| {
                key.trim()
                    .parse::<u32>()
                    .map(|width| (width, items))
                    .map_err(|_| InvalidBreakpoint(key))
            })
            .collect()
    }
}

impl From<ResponsiveTable> for BTreeMap<String, ItemsPerSlide> {
    fn from(table: ResponsiveTable) -> Self {
        table
            .0
            .into_iter()
            .map(|(width, items)| (width.to_string(), items))
            .collect()
    }
}

/// Effective items per slide for an optional table and an optional width.
///
/// With no table, or before the host has reported a width, the base value wins.
#[must_use]
pub fn resolve_items_per_slide(
    table: Option<&ResponsiveTable>,
    base: ItemsPerSlide,
    width: Option<u32>,
) -> ItemsPerSlide {
    match (table, width) {
        (Some(table), Some(width)) => table.resolve(width, base),
        _ => base,
    }
}
