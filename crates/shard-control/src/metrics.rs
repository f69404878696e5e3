// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Efficient storage for rolling frame-rate samples.

/// A fixed-size circular buffer for storing numerical samples.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    data: [T; N],
    index: usize,
    count: usize,
}

impl<T: Default + Copy, const N: usize> RingBuffer<T, N> {
    /// Creates a new, empty ring buffer.
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            index: 0,
            count: 0,
        }
    }

    /// Pushes a new value into the buffer, overwriting the oldest if full.
    pub fn push(&mut self, value: T) {
        self.data[self.index] = value;
        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Returns the number of elements currently in the buffer.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the most recently pushed value.
    pub fn latest(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.data[(self.index + N - 1) % N])
        }
    }

    /// Returns an iterator over the values in chronological order (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (left, right) = self.data.split_at(self.index);
        if self.count < N {
            // Not full yet: the oldest value sits at slot 0.
            right[right.len()..].iter().chain(left.iter())
        } else {
            right.iter().chain(left.iter())
        }
    }
}

impl<T: Default + Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingBuffer<f32, N> {
    /// Calculates the arithmetic mean of the values in the buffer.
    pub fn average(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.iter().sum::<f32>() / self.count as f32
    }

    /// Returns the minimum value in the buffer, or `f32::MAX` if empty.
    pub fn min(&self) -> f32 {
        self.iter().copied().fold(f32::MAX, f32::min)
    }

    /// Returns the maximum value in the buffer, or `f32::MIN` if empty.
    pub fn max(&self) -> f32 {
        self.iter().copied().fold(f32::MIN, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_push_and_iter() {
        let mut rb = RingBuffer::<f32, 3>::new();
        rb.push(1.0);
        rb.push(2.0);
        rb.push(3.0);
        rb.push(4.0); // Overwrites 1.0

        let values: Vec<f32> = rb.iter().copied().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(rb.count(), 3);
        assert_eq!(rb.latest(), Some(4.0));
    }

    #[test]
    fn test_ring_buffer_partial_iter() {
        let mut rb = RingBuffer::<f32, 5>::new();
        rb.push(7.0);
        rb.push(8.0);

        let values: Vec<f32> = rb.iter().copied().collect();
        assert_eq!(values, vec![7.0, 8.0]);
    }

    #[test]
    fn test_ring_buffer_average() {
        let mut rb = RingBuffer::<f32, 4>::new();
        assert_eq!(rb.average(), 0.0);
        rb.push(10.0);
        rb.push(20.0);
        rb.push(30.0);
        assert!((rb.average() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_ring_buffer_min_max() {
        let mut rb = RingBuffer::<f32, 4>::new();
        assert_eq!(rb.min(), f32::MAX);
        assert_eq!(rb.max(), f32::MIN);
        for v in [12.0, 60.0, 45.0] {
            rb.push(v);
        }
        assert_eq!(rb.min(), 12.0);
        assert_eq!(rb.max(), 60.0);
    }

    #[test]
    fn test_empty_buffer_has_no_latest() {
        let rb = RingBuffer::<f32, 2>::new();
        assert!(rb.is_empty());
        assert_eq!(rb.latest(), None);
    }
}
