use thiserror::Error;

/// Returned when pushing onto a stack that already holds `capacity` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack full ({capacity} entries)")]
pub struct StackFull {
    pub capacity: usize,
}

/// A stack that never grows past the capacity it was created with.
///
/// The capacity is a limit on entries, not a reservation: storage grows with use.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), StackFull> {
        if self.is_full() {
            return Err(StackFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}
