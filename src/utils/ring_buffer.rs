/// Fixed-capacity ring buffer; pushing past capacity drops the oldest item.
#[derive(Debug, Clone)]
pub struct FixedRingBuffer<T, const N: usize> {
    data: [Option<T>; N],
    head: usize,
    len: usize,
}

impl<T: Copy, const N: usize> FixedRingBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            data: [None; N],
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let index = (self.head + self.len) % N;
        if self.len == N {
            self.head = (self.head + 1) % N;
        } else {
            self.len += 1;
        }
        self.data[index] = Some(item);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(move |i| {
            let idx = (self.head + i) % N;
            self.data[idx].as_ref()
        })
    }
}

impl<T: Copy, const N: usize> Default for FixedRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
