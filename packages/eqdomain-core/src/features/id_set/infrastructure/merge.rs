//! K-way merge over sorted id slices
//!
//! Emits the distinct values of k ascending inputs in ascending order. The
//! cursor with the smallest head is kept at position 0; after each emission
//! every cursor sitting on the emitted value advances and the minimum is
//! restored with one linear scan-and-swap. k is small in practice (a handful
//! of columns), so a heap does not pay for itself.

/// Position inside one sorted input
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    values: &'a [u32],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    fn head(&self) -> u32 {
        self.values[self.pos]
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.pos >= self.values.len()
    }
}

/// Iterator over the ascending union of several sorted slices
#[derive(Debug, Clone)]
pub struct KWayMerge<'a> {
    cursors: Vec<Cursor<'a>>,
}

impl<'a> KWayMerge<'a> {
    pub fn new(inputs: impl IntoIterator<Item = &'a [u32]>) -> Self {
        let cursors = inputs
            .into_iter()
            .filter(|values| !values.is_empty())
            .map(|values| Cursor { values, pos: 0 })
            .collect();

        let mut merge = Self { cursors };
        merge.restore_min();
        merge
    }

    /// Move the cursor with the smallest head to position 0
    fn restore_min(&mut self) {
        let mut min_idx = 0;
        for idx in 1..self.cursors.len() {
            if self.cursors[idx].head() < self.cursors[min_idx].head() {
                min_idx = idx;
            }
        }
        if min_idx != 0 {
            self.cursors.swap(0, min_idx);
        }
    }

    /// Number of inputs that still have values
    pub fn active_inputs(&self) -> usize {
        self.cursors.len()
    }
}

impl<'a> Iterator for KWayMerge<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.cursors.first()?.head();

        for cursor in self.cursors.iter_mut() {
            if cursor.head() == value {
                cursor.pos += 1;
            }
        }
        self.cursors.retain(|cursor| !cursor.exhausted());

        if !self.cursors.is_empty() {
            self.restore_min();
        }

        Some(value)
    }
}
