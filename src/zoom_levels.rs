//! Zoom ledger - the ordered set of zoom percentages a user can step through.
//!
//! Levels are kept in an ordered set, so iteration is always strictly
//! ascending and duplicate-free. Positional access (`get`, `set`, `remove_at`)
//! addresses the sorted order, never an insertion order.

use crate::constants::DEFAULT_ZOOM_LEVELS;
use crate::error::{ViewError, ViewResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::iter::Copied;
use std::ops::Index;

/// Sorted, duplicate-free zoom percentages (100 = actual size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ZoomLevels {
    levels: BTreeSet<u32>,
}

impl Default for ZoomLevels {
    /// The stock ledger, 7% through 2400%.
    fn default() -> Self {
        Self {
            levels: DEFAULT_ZOOM_LEVELS.into_iter().collect(),
        }
    }
}

impl ZoomLevels {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            levels: BTreeSet::new(),
        }
    }

    /// Create a ledger from a caller-supplied sequence.
    ///
    /// Fails with `InvalidArgument` when no sequence is given and with
    /// `DuplicateZoomLevel` when the sequence repeats a value.
    pub fn with_levels<I>(levels: Option<I>) -> ViewResult<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut ledger = Self::new();
        ledger.add_range(levels)?;
        Ok(ledger)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.levels.contains(&value)
    }

    pub fn first(&self) -> Option<u32> {
        self.levels.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.levels.last().copied()
    }

    pub fn iter(&self) -> Copied<btree_set::Iter<'_, u32>> {
        self.levels.iter().copied()
    }

    /// Value at a sorted position.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.levels.iter().nth(index).copied()
    }

    /// Insert a level, keeping the ledger sorted.
    pub fn add(&mut self, value: u32) -> ViewResult<()> {
        if value == 0 {
            return Err(ViewError::InvalidZoom(0.0));
        }
        if !self.levels.insert(value) {
            return Err(ViewError::DuplicateZoomLevel(value));
        }
        Ok(())
    }

    /// Insert every level of `levels`.
    ///
    /// The batch is validated before anything is inserted, so a rejected
    /// batch leaves the ledger exactly as it was.
    pub fn add_range<I>(&mut self, levels: Option<I>) -> ViewResult<()>
    where
        I: IntoIterator<Item = u32>,
    {
        let Some(levels) = levels else {
            return Err(ViewError::InvalidArgument("zoom level sequence is required"));
        };

        let mut batch = BTreeSet::new();
        for value in levels {
            if value == 0 {
                return Err(ViewError::InvalidZoom(0.0));
            }
            if self.levels.contains(&value) || !batch.insert(value) {
                return Err(ViewError::DuplicateZoomLevel(value));
            }
        }

        self.levels.append(&mut batch);
        Ok(())
    }

    /// Remove and return the level at a sorted position.
    pub fn remove_at(&mut self, index: usize) -> ViewResult<u32> {
        let value = self.get(index).ok_or(ViewError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.levels.remove(&value);
        Ok(value)
    }

    /// Remove a level by value. Returns whether it was present.
    pub fn remove(&mut self, value: u32) -> bool {
        self.levels.remove(&value)
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// Replace the level at `index` with `value`.
    ///
    /// The new value is re-sorted into place, so it may end up at a different
    /// position than `index`.
    pub fn set(&mut self, index: usize, value: u32) -> ViewResult<()> {
        let old = self.get(index).ok_or(ViewError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        if value == 0 {
            return Err(ViewError::InvalidZoom(0.0));
        }
        if value != old && self.levels.contains(&value) {
            return Err(ViewError::DuplicateZoomLevel(value));
        }
        self.levels.remove(&old);
        self.levels.insert(value);
        Ok(())
    }

    /// Positional insert would break the sort order, so it is refused.
    pub fn insert(&mut self, _index: usize, _value: u32) -> ViewResult<()> {
        Err(ViewError::NotSupported(
            "positional insert into a sorted zoom ledger",
        ))
    }

    /// Sorted position of an exact match. No nearest-match fallback.
    pub fn index_of(&self, value: u32) -> Option<usize> {
        if !self.levels.contains(&value) {
            return None;
        }
        Some(self.levels.range(..value).count())
    }

    /// The level closest to `target`; on a tie the smaller level wins.
    pub fn find_nearest(&self, target: u32) -> Option<u32> {
        let mut levels = self.levels.iter().copied();
        let mut nearest = levels.next()?;
        let mut nearest_difference = nearest.abs_diff(target);
        for value in levels {
            let difference = value.abs_diff(target);
            if difference < nearest_difference {
                nearest = value;
                nearest_difference = difference;
            }
        }
        Some(nearest)
    }

    /// Step one level up from the level nearest to `current`, saturating at the top.
    pub fn next_zoom(&self, current: u32) -> Option<u32> {
        let mut index = self.index_of(self.find_nearest(current)?)?;
        if index + 1 < self.len() {
            index += 1;
        }
        self.get(index)
    }

    /// Step one level down from the level nearest to `current`, saturating at the bottom.
    pub fn previous_zoom(&self, current: u32) -> Option<u32> {
        let index = self.index_of(self.find_nearest(current)?)?;
        self.get(index.saturating_sub(1))
    }

    /// Snapshot copy of the ledger in ascending order.
    pub fn to_vec(&self) -> Vec<u32> {
        self.levels.iter().copied().collect()
    }
}

impl Index<usize> for ZoomLevels {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        match self.levels.iter().nth(index) {
            Some(value) => value,
            None => panic!(
                "zoom level index {} out of range ({} levels)",
                index,
                self.levels.len()
            ),
        }
    }
}

impl<'a> IntoIterator for &'a ZoomLevels {
    type Item = u32;
    type IntoIter = Copied<btree_set::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<u32>> for ZoomLevels {
    type Error = ViewError;

    fn try_from(levels: Vec<u32>) -> Result<Self, Self::Error> {
        Self::with_levels(Some(levels))
    }
}

impl From<ZoomLevels> for Vec<u32> {
    fn from(ledger: ZoomLevels) -> Self {
        ledger.levels.into_iter().collect()
    }
}
