//! KeyframeStore: ordered keyframe storage with explicit capacity management.
//!
//! Model:
//! - Slots `[0, len)` hold live keyframes in non-decreasing time order;
//!   slots `[len, capacity)` are `None`.
//! - Ordering is the caller's contract on `append`; `try_append` checks it.
//! - Growth multiplies capacity by `growth_factor` when full. Bulk loads
//!   reserve once for the whole batch.
//! - After a removal, once `len < capacity / shrink_load_divisor` the
//!   storage shrinks to `capacity / shrink_factor`.
//!
//! Lookups return keyframes by value, so results stay valid across
//! reallocations.

use log::{debug, trace};

use crate::config::StoreConfig;
use crate::error::KeyframeError;
use crate::generate::random_keyframe;
use crate::interp::interpolate;
use crate::keyframe::Keyframe;
use crate::Result;

#[derive(Clone, Debug)]
pub struct KeyframeStore {
    slots: Box<[Option<Keyframe>]>,
    len: usize,
    cfg: StoreConfig,
}

impl Default for KeyframeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn alloc_slots(capacity: usize) -> Box<[Option<Keyframe>]> {
    vec![None; capacity].into_boxed_slice()
}

impl KeyframeStore {
    /// Empty store with the default sizing policy (4 slots).
    pub fn new() -> Self {
        let cfg = StoreConfig::default();
        Self {
            slots: alloc_slots(cfg.initial_capacity),
            len: 0,
            cfg,
        }
    }

    /// Empty store with a custom sizing policy.
    pub fn with_config(cfg: StoreConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            slots: alloc_slots(cfg.initial_capacity),
            len: 0,
            cfg,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Keyframe> {
        if index < self.len {
            self.slots[index]
        } else {
            None
        }
    }

    #[inline]
    pub fn first(&self) -> Option<Keyframe> {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Option<Keyframe> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Live keyframes in storage order.
    pub fn iter(&self) -> impl Iterator<Item = Keyframe> + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }

    /// Drop every keyframe and return to the initial capacity.
    pub fn clear(&mut self) {
        self.slots = alloc_slots(self.cfg.initial_capacity);
        self.len = 0;
    }

    // ---------------------------------------------------------------------
    // Storage management
    // ---------------------------------------------------------------------

    /// Move the live slots into fresh storage of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut slots = alloc_slots(capacity);
        slots[..self.len].copy_from_slice(&self.slots[..self.len]);
        debug!(
            "keyframe store realloc: capacity {} -> {} (len {})",
            self.slots.len(),
            capacity,
            self.len
        );
        self.slots = slots;
    }

    fn grow(&mut self) {
        let capacity = self.capacity().saturating_mul(self.cfg.growth_factor);
        self.reallocate(capacity);
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len >= capacity / self.cfg.shrink_load_divisor {
            return;
        }
        let target = (capacity / self.cfg.shrink_factor).max(1);
        self.reallocate(target);
    }

    // ---------------------------------------------------------------------
    // Insertion
    // ---------------------------------------------------------------------

    /// Append a keyframe at the end.
    ///
    /// `time` must not precede any stored keyframe; this is not checked and
    /// an out-of-order append silently breaks `find_nearest`.
    #[inline]
    pub fn append(&mut self, x: f32, y: f32, z: f32, time: f32) {
        self.push(Keyframe { x, y, z, time });
    }

    pub fn push(&mut self, keyframe: Keyframe) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(keyframe);
        self.len += 1;
    }

    /// Append after checking that `time` is finite and in order.
    /// The store is untouched on error.
    pub fn try_append(&mut self, x: f32, y: f32, z: f32, time: f32) -> Result<()> {
        if !time.is_finite() {
            return Err(KeyframeError::NonFiniteTime { time });
        }
        if let Some(last) = self.last() {
            if time < last.time {
                return Err(KeyframeError::OutOfOrder {
                    time,
                    last: last.time,
                });
            }
        }
        self.append(x, y, z, time);
        Ok(())
    }

    /// Append `count` keyframes produced by `source(i)` for `i` in `0..count`.
    ///
    /// Capacity is settled with at most one reallocation up front: if the
    /// batch does not fit, storage becomes `(capacity + missing) * growth_factor`.
    pub fn append_bulk<F>(&mut self, count: usize, mut source: F)
    where
        F: FnMut(usize) -> Keyframe,
    {
        let free = self.capacity() - self.len;
        if count > free {
            let extra = count - free;
            let capacity = self
                .capacity()
                .saturating_add(extra)
                .saturating_mul(self.cfg.growth_factor);
            self.reallocate(capacity);
        }
        for i in 0..count {
            self.push(source(i));
        }
    }

    /// Bulk-append `count` random keyframes with times `i + jitter`.
    pub fn append_random_bulk(&mut self, count: usize, rng: &mut fastrand::Rng) {
        self.append_bulk(count, |i| random_keyframe(rng, i));
    }

    // ---------------------------------------------------------------------
    // Removal
    // ---------------------------------------------------------------------

    /// Remove the keyframe at `index`, shifting later keyframes left.
    ///
    /// Indices outside `[0, len)` (negative included) are ignored and yield
    /// `None`. May shrink storage once.
    pub fn remove_at(&mut self, index: isize) -> Option<Keyframe> {
        let index = match usize::try_from(index) {
            Ok(i) if i < self.len => i,
            _ => {
                trace!("remove_at({index}) ignored: len {}", self.len);
                return None;
            }
        };

        let removed = self.slots[index];
        self.slots.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.slots[self.len] = None;

        self.shrink_if_sparse();
        removed
    }

    // ---------------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------------

    #[inline]
    fn time_at(&self, index: usize) -> f32 {
        debug_assert!(index < self.len);
        match self.slots[index] {
            Some(k) => k.time,
            None => unreachable!("live slot {index} is empty (len {})", self.len),
        }
    }

    /// Position of the last keyframe with `time <= query_time`.
    ///
    /// Queries at or before the first keyframe clamp to index 0. An exact
    /// time match returns as soon as the search lands on it. The following
    /// keyframe is never considered, even if it is closer.
    pub fn find_nearest_index(&self, query_time: f32) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        if query_time <= self.time_at(0) {
            return Some(0);
        }

        let mut low: isize = 0;
        let mut high: isize = self.len as isize - 1;
        while low <= high {
            let mid = low + (high - low) / 2;
            let t = self.time_at(mid as usize);
            if t == query_time {
                return Some(mid as usize);
            }
            if t < query_time {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        Some(usize::try_from(high).unwrap_or(0))
    }

    /// Nearest-preceding keyframe for `query_time` (see `find_nearest_index`).
    #[inline]
    pub fn find_nearest(&self, query_time: f32) -> Option<Keyframe> {
        self.find_nearest_index(query_time).and_then(|i| self.get(i))
    }

    /// Look up both times and blend the results by `t`.
    pub fn sample(&self, time_a: f32, time_b: f32, t: f32) -> Option<Keyframe> {
        interpolate(self.find_nearest(time_a), self.find_nearest(time_b), t)
    }
}
