//! Lazy row-major traversal over a grid's rows.

/// Iterator over a grid's rows in row-major order.
///
/// Yields each row as a `&[f64]` slice. Created by
/// [`JaggedGrid::iter_rows`](crate::JaggedGrid::iter_rows).
pub struct Rows<'a> {
    table: &'a [Box<[f64]>],
    next: usize,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(table: &'a [Box<[f64]>]) -> Self {
        Self { table, next: 0 }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.table.get(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
