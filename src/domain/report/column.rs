use std::cmp::Ordering;

/// A displayable cell value. Variants beyond plain text tell the renderer how to decorate
/// the value; they sort by their underlying value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// A money amount rendered with two decimals.
    Amount(f64),
    /// A star rating, rendered as glyphs.
    Stars(f32),
    /// A hyperlink target, rendered as an anchor.
    Link(String),
}

impl CellValue {
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Text(a), Text(b)) | (Link(a), Link(b)) => a.cmp(b),
            (Number(a), Number(b)) | (Amount(a), Amount(b)) => a.total_cmp(b),
            (Stars(a), Stars(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Number(_) => 0,
            CellValue::Amount(_) => 1,
            CellValue::Stars(_) => 2,
            CellValue::Text(_) => 3,
            CellValue::Link(_) => 4,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Link(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Amount(n) => write!(f, "{:.2}", n),
            CellValue::Stars(n) => write!(f, "{}", n),
        }
    }
}

pub type Accessor<R> = fn(&R) -> CellValue;
pub type Comparator<R> = fn(&R, &R) -> Ordering;

enum Sorting<R> {
    Unsorted,
    ByValue,
    Custom(Comparator<R>),
}

/// Column descriptor: key, label, accessor and an optional comparator.
pub struct Column<R> {
    key: &'static str,
    label: &'static str,
    accessor: Accessor<R>,
    sorting: Sorting<R>,
}

impl<R> Column<R> {
    pub fn new(key: &'static str, label: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            key,
            label,
            accessor,
            sorting: Sorting::Unsorted,
        }
    }

    /// Makes the column sortable by its cell values.
    pub fn sortable(mut self) -> Self {
        self.sorting = Sorting::ByValue;
        self
    }

    /// Makes the column sortable by a dedicated comparator.
    pub fn sortable_by(mut self, comparator: Comparator<R>) -> Self {
        self.sorting = Sorting::Custom(comparator);
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self.sorting, Sorting::Unsorted)
    }

    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Orders two rows by this column, `None` if the column is not sortable.
    pub fn compare(&self, a: &R, b: &R) -> Option<Ordering> {
        match &self.sorting {
            Sorting::Unsorted => None,
            Sorting::ByValue => Some(self.value(a).compare(&self.value(b))),
            Sorting::Custom(cmp) => Some(cmp(a, b)),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.is_sortable())
            .finish()
    }
}
