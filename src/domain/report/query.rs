use crate::domain::report::{Column, ReportRow};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, ToSchema, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Lenient parse of a request value: anything but `desc` is ascending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Requested sort column, by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Per-request report query.
#[derive(Debug, Clone, Default)]
pub struct RowQuery {
    pub limit: i64,
    pub name_pattern: String,
    pub secondary_pattern: String,
    pub sort: Option<SortSpec>,
}

/// Filters, sorts and limits `source`.
///
/// A row passes when its name and secondary name contain the respective patterns,
/// ignoring case; an empty pattern passes every row. Rows are ordered by `sort` if given,
/// with ties (and the unsorted case) ordered by name ascending. At most `max(0, limit)`
/// rows are returned.
pub fn select_rows<'a, R, T>(
    source: &'a [T],
    limit: i64,
    name_pattern: &str,
    secondary_pattern: &str,
    sort: Option<(&Column<R>, SortDirection)>,
) -> Vec<&'a R>
where
    R: ReportRow,
    T: Borrow<R>,
{
    let name_lc = name_pattern.to_lowercase();
    let secondary_lc = secondary_pattern.to_lowercase();

    let mut rows: Vec<&R> = source
        .iter()
        .map(|row| <T as Borrow<R>>::borrow(row))
        .filter(|row| contains_folded(row.name(), &name_lc))
        .filter(|row| contains_folded(row.secondary_name(), &secondary_lc))
        .collect();

    rows.sort_by(|a, b| {
        let primary = sort
            .and_then(|(column, direction)| column.compare(a, b).map(|o| direction.apply(o)))
            .unwrap_or(Ordering::Equal);
        primary.then_with(|| a.name().cmp(b.name()))
    });

    rows.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
    rows
}

fn contains_folded(value: &str, pattern_lc: &str) -> bool {
    pattern_lc.is_empty() || value.to_lowercase().contains(pattern_lc)
}

/// A report definition: title, column declarations and the default row limit.
pub struct Report<R> {
    title: &'static str,
    columns: Vec<Column<R>>,
    default_limit: i64,
}

impl<R: ReportRow> Report<R> {
    pub fn new(title: &'static str, default_limit: i64) -> Self {
        Self {
            title,
            columns: Vec::new(),
            default_limit,
        }
    }

    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    /// Resolves a sort key to a sortable column; unknown and unsortable keys resolve to `None`.
    pub fn sortable_column(&self, key: &str) -> Option<&Column<R>> {
        self.columns
            .iter()
            .find(|c| c.key() == key && c.is_sortable())
    }

    /// The sort actually applied for `query`, after resolving its key.
    pub fn effective_sort(&self, query: &RowQuery) -> Option<(&Column<R>, SortDirection)> {
        query.sort.as_ref().and_then(|spec| {
            self.sortable_column(&spec.key)
                .map(|column| (column, spec.direction))
        })
    }

    pub fn select_rows<'a, T: Borrow<R>>(&self, source: &'a [T], query: &RowQuery) -> Vec<&'a R> {
        select_rows(
            source,
            query.limit,
            &query.name_pattern,
            &query.secondary_pattern,
            self.effective_sort(query),
        )
    }
}
