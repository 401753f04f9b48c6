use super::error::{Error, GameResult};

/// Capacity of a container created with [`GrowableArray::new`].
pub const DEFAULT_CAPACITY: usize = 2;

/// Resizable, index addressed sequence with an explicit growth policy.
///
/// Capacity doubles whenever an insertion finds the buffer full and is halved
/// when a deletion leaves fewer than a third of the slots occupied. It never
/// drops below the minimum capacity the container was created with.
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    /// Backing buffer, its length is the capacity. Slots `0..size` are `Some`.
    data: Box<[Option<T>]>,
    size: usize,
    min_capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Create an empty container with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            data: Self::allocate(DEFAULT_CAPACITY),
            size: 0,
            min_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create an empty container with `capacity` slots. The container never
    /// shrinks below this.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonPositiveCapacity` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> GameResult<Self> {
        if capacity < 1 {
            return Err(Error::NonPositiveCapacity);
        }
        Ok(Self {
            data: Self::allocate(capacity),
            size: 0,
            min_capacity: capacity,
        })
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Check if the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= size`.
    pub fn get(&self, index: usize) -> GameResult<&T> {
        if index >= self.size {
            return Err(Error::IndexOutOfBounds(index));
        }
        self.data[index]
            .as_ref()
            .ok_or(Error::IndexOutOfBounds(index))
    }

    /// Replace the element at `index`, returning the previous one. Never grows
    /// the container.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= size`.
    pub fn set(&mut self, index: usize, value: T) -> GameResult<T> {
        if index >= self.size {
            return Err(Error::IndexOutOfBounds(index));
        }
        self.data[index]
            .replace(value)
            .ok_or(Error::IndexOutOfBounds(index))
    }

    /// Add `value` to the end.
    ///
    /// The buffer is grown again when the append fills it, so a free slot is
    /// always available afterwards.
    pub fn append(&mut self, value: T) {
        if self.size == self.capacity() {
            self.resize(self.capacity() * 2);
        }
        self.data[self.size] = Some(value);
        self.size += 1;
        if self.size == self.capacity() {
            self.resize(self.capacity() * 2);
        }
    }

    /// Insert `value` at `index`, shifting later elements one slot toward the
    /// end. `index == size` places it at the end.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > size`.
    pub fn insert_at(&mut self, index: usize, value: T) -> GameResult<()> {
        if index > self.size {
            return Err(Error::IndexOutOfBounds(index));
        }
        if self.size == self.capacity() {
            self.resize(self.capacity() * 2);
        }
        // slot `size` is free, rotating it down to `index` opens the gap
        self.data[index..=self.size].rotate_right(1);
        self.data[index] = Some(value);
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements one
    /// slot toward the start.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= size`.
    pub fn delete_at(&mut self, index: usize) -> GameResult<T> {
        if index >= self.size {
            return Err(Error::IndexOutOfBounds(index));
        }
        let removed = self.data[index]
            .take()
            .ok_or(Error::IndexOutOfBounds(index))?;
        // the emptied slot ends up as the vacated trailing slot
        self.data[index..self.size].rotate_left(1);
        self.size -= 1;

        let halved = self.capacity() / 2;
        if self.size * 3 < self.capacity() && halved >= self.min_capacity {
            self.resize(halved);
        }
        Ok(removed)
    }

    /// Iterate over the live elements, first to last.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data[..self.size].iter().flatten()
    }

    fn allocate(capacity: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    /// Move the live elements into a fresh buffer of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        log::trace!(
            "resizing from {} to {} slots ({} live)",
            self.capacity(),
            capacity,
            self.size
        );
        let mut data = Self::allocate(capacity);
        for (new, old) in data.iter_mut().zip(self.data[..self.size].iter_mut()) {
            *new = old.take();
        }
        self.data = data;
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Column with {} items and a capacity of {}:",
            self.size,
            self.capacity()
        )?;
        for (i, item) in self.iter().enumerate() {
            write!(f, "\n  [{i}]: {item}")?;
        }
        Ok(())
    }
}
