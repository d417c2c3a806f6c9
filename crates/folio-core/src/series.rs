//! Ordered (label, value) series feeding a single chart

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for a series built from raw data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("entry {index} ({label}) has non-finite value {value}")]
    NonFinite {
        index: usize,
        label: String,
        value: f64,
    },
}

/// Projection of a wire record onto a chart entry
pub trait SeriesSource {
    fn label(&self) -> &str;
    fn value(&self) -> f64;
}

/// One chart entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub label: String,
    pub value: f64,
}

impl SeriesEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl SeriesSource for SeriesEntry {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// Ordered sequence of entries. Order is the x-axis order for lines and the
/// display order for bars; labels may repeat.
///
/// Every value is finite. A series is rebuilt on each data load rather than
/// mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    entries: Vec<SeriesEntry>,
}

impl Series {
    /// Empty series (renders as the "no data" placeholder)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from entries, rejecting the whole series on the first
    /// non-finite value.
    pub fn try_new(entries: Vec<SeriesEntry>) -> Result<Self, SeriesError> {
        if let Some((index, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, e)| !e.value.is_finite())
        {
            return Err(SeriesError::NonFinite {
                index,
                label: entry.label.clone(),
                value: entry.value,
            });
        }
        Ok(Self { entries })
    }

    /// Project any record slice into a series
    pub fn from_records<T: SeriesSource>(records: &[T]) -> Result<Self, SeriesError> {
        Self::try_new(
            records
                .iter()
                .map(|r| SeriesEntry::new(r.label(), r.value()))
                .collect(),
        )
    }

    /// Build from `(label, value)` pairs
    pub fn from_pairs<L: Into<String>>(
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Result<Self, SeriesError> {
        Self::try_new(
            pairs
                .into_iter()
                .map(|(label, value)| SeriesEntry::new(label, value))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesEntry> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn first(&self) -> Option<&SeriesEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&SeriesEntry> {
        self.entries.last()
    }

    /// Largest value, `None` when empty
    pub fn max_value(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    /// Smallest value, `None` when empty
    pub fn min_value(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    /// Arithmetic mean, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.values().sum::<f64>() / self.len() as f64)
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesEntry;
    type IntoIter = std::slice::Iter<'a, SeriesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<SeriesEntry>::deserialize(deserializer)?;
        Series::try_new(entries).map_err(serde::de::Error::custom)
    }
}
