//! Weighted values
//!
//! An engine that cannot settle on a single answer returns several
//! candidates, each with a weighting. Two shapes are provided:
//!
//! - [`WeightedValues`]: an owned, already materialized list
//! - [`NativeWeightedValues`]: a borrowed view over a native list that reads
//!   the size and each element from the native side on demand
//!
//! Both are read through [`WeightedValueSequence`], whose iterator is finite,
//! restartable and leaves the sequence untouched.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// One candidate value and its weighting (0.0 ..= 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedValue<T> {
    pub value: T,
    pub weighting: f32,
}

impl<T> WeightedValue<T> {
    pub fn new(value: T, weighting: f32) -> Self {
        Self { value, weighting }
    }
}

impl<T: fmt::Display> fmt::Display for WeightedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.value, self.weighting)
    }
}

/// Read-only, index-addressable sequence of weighted values.
pub trait WeightedValueSequence<T> {
    /// Current length. For native-backed sequences this is read at call time.
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<WeightedValue<T>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterator starting at index 0. Every call starts over.
    fn iter(&self) -> WeightedValueIter<'_, T, Self>
    where
        Self: Sized,
    {
        WeightedValueIter::new(self)
    }

    /// Copy every element out into an owned list.
    fn materialize(&self) -> WeightedValues<T>
    where
        Self: Sized,
    {
        self.iter().collect()
    }

    /// Element with the highest weighting; the first one wins ties.
    fn best(&self) -> Option<WeightedValue<T>>
    where
        Self: Sized,
    {
        self.iter().fold(None, |best, candidate| match best {
            Some(current) if current.weighting >= candidate.weighting => Some(current),
            _ => Some(candidate),
        })
    }
}

/// Iterator over a [`WeightedValueSequence`]: a borrowed sequence plus the
/// next index to read.
pub struct WeightedValueIter<'s, T, S> {
    sequence: &'s S,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'s, T, S: WeightedValueSequence<T>> WeightedValueIter<'s, T, S> {
    pub fn new(sequence: &'s S) -> Self {
        Self {
            sequence,
            index: 0,
            _marker: PhantomData,
        }
    }
}

impl<T, S: WeightedValueSequence<T>> Iterator for WeightedValueIter<'_, T, S> {
    type Item = WeightedValue<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.sequence.len() {
            return None;
        }
        let item = self.sequence.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.index);
        (0, Some(remaining))
    }
}

/// Owned list of weighted values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedValues<T>(Vec<WeightedValue<T>>);

impl<T> WeightedValues<T> {
    pub fn new(values: Vec<WeightedValue<T>>) -> Self {
        Self(values)
    }

    /// A single value with full weighting.
    pub fn single(value: T) -> Self {
        Self(vec![WeightedValue::new(value, 1.0)])
    }

    pub fn as_slice(&self) -> &[WeightedValue<T>] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<WeightedValue<T>> {
        self.0
    }
}

impl<T: Clone> WeightedValueSequence<T> for WeightedValues<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> Option<WeightedValue<T>> {
        self.0.get(index).cloned()
    }
}

impl<T> From<Vec<WeightedValue<T>>> for WeightedValues<T> {
    fn from(values: Vec<WeightedValue<T>>) -> Self {
        Self(values)
    }
}

impl<T> FromIterator<WeightedValue<T>> for WeightedValues<T> {
    fn from_iter<I: IntoIterator<Item = WeightedValue<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 原生加权列表的绑定调用面
pub trait NativeWeightedList {
    type Value;

    fn size(&self) -> u32;

    fn value_at(&self, index: u32) -> Self::Value;

    fn weighting_at(&self, index: u32) -> f32;
}

/// Non-owning view over a native weighted list.
///
/// Nothing is copied up front: `len` asks the native list for its size on
/// every call and `get` builds one element per call. The list is owned by the
/// engine result it came from and the borrow keeps this view from outliving it.
pub struct NativeWeightedValues<'h, L: ?Sized> {
    list: &'h L,
}

impl<'h, L: NativeWeightedList + ?Sized> NativeWeightedValues<'h, L> {
    pub fn new(list: &'h L) -> Self {
        Self { list }
    }
}

impl<L: NativeWeightedList + ?Sized> WeightedValueSequence<L::Value> for NativeWeightedValues<'_, L> {
    fn len(&self) -> usize {
        self.list.size() as usize
    }

    fn get(&self, index: usize) -> Option<WeightedValue<L::Value>> {
        if index >= self.len() {
            return None;
        }
        let native_index = u32::try_from(index).ok()?;
        Some(WeightedValue {
            value: self.list.value_at(native_index),
            weighting: self.list.weighting_at(native_index),
        })
    }
}
