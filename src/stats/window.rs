// Threat Telemetry - Rolling Windows
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Bounded, insertion-ordered buffers for events and chart history.

use std::collections::VecDeque;

/// Where new items are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOrder {
    /// Newest item at index 0.
    NewestFirst,
    /// Oldest item at index 0.
    OldestFirst,
}

/// Insertion-ordered buffer that evicts its oldest items once over capacity.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: Option<usize>,
    order: WindowOrder,
}

impl<T> RollingWindow<T> {
    /// A window holding at most `capacity` items.
    pub fn bounded(capacity: usize, order: WindowOrder) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
            order,
        }
    }

    /// A window that grows for the lifetime of the session.
    pub fn unbounded(order: WindowOrder) -> Self {
        Self {
            items: VecDeque::new(),
            capacity: None,
            order,
        }
    }

    /// Insert an item, then evict the oldest items beyond capacity.
    ///
    /// Returns the number of evicted items.
    pub fn push(&mut self, item: T) -> usize {
        match self.order {
            WindowOrder::NewestFirst => self.items.push_front(item),
            WindowOrder::OldestFirst => self.items.push_back(item),
        }

        let Some(capacity) = self.capacity else {
            return 0;
        };

        let mut evicted = 0;
        while self.items.len() > capacity {
            match self.order {
                WindowOrder::NewestFirst => self.items.pop_back(),
                WindowOrder::OldestFirst => self.items.pop_front(),
            };
            evicted += 1;
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn order(&self) -> WindowOrder {
        self.order
    }

    /// The most recently inserted item.
    pub fn newest(&self) -> Option<&T> {
        match self.order {
            WindowOrder::NewestFirst => self.items.front(),
            WindowOrder::OldestFirst => self.items.back(),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> RollingWindow<T> {
    /// Copy of the items in stored order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_first_evicts_front() {
        let mut window = RollingWindow::bounded(3, WindowOrder::OldestFirst);
        for i in 0..5 {
            window.push(i);
            assert!(window.len() <= 3);
        }
        assert_eq!(window.to_vec(), vec![2, 3, 4]);
        assert_eq!(window.newest(), Some(&4));
    }

    #[test]
    fn test_newest_first_evicts_back() {
        let mut window = RollingWindow::bounded(3, WindowOrder::NewestFirst);
        let mut evicted = 0;
        for i in 0..5 {
            evicted += window.push(i);
        }
        assert_eq!(window.to_vec(), vec![4, 3, 2]);
        assert_eq!(evicted, 2);
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut window = RollingWindow::unbounded(WindowOrder::NewestFirst);
        for i in 0..100 {
            assert_eq!(window.push(i), 0);
        }
        assert_eq!(window.len(), 100);
        assert_eq!(window.capacity(), None);
        assert_eq!(window.iter().next(), Some(&99));
        window.clear();
        assert!(window.is_empty());
    }
}
