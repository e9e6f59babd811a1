//! Query construction for the OpenAlex list endpoints.

use chrono::NaiveDate;

use crate::config::api;

/// Entity collections exposed by the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Publications.
    Works,
    /// Authors.
    Authors,
    /// Institutions.
    Institutions,
    /// Subject concepts.
    Concepts,
    /// Journals, repositories, conferences.
    Sources,
}

impl EntityKind {
    /// Collection path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Works => "works",
            Self::Authors => "authors",
            Self::Institutions => "institutions",
            Self::Concepts => "concepts",
            Self::Sources => "sources",
        }
    }
}

/// Ordered `key:value` filter collection.
///
/// Later writes to the same key replace the earlier value (last-write-wins),
/// so convenience shortcuts and explicitly supplied entries compose without
/// silently dropping either. Boolean values serialize lower-cased.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    entries: Vec<(String, String)>,
}

impl FilterSet {
    /// Create an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter, replacing any existing value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Check whether any filter is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serialize into the combined `filter` query parameter.
    #[must_use]
    pub fn to_param(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Publication-year shortcut accepted by [`WorksQuery::publication_year`].
#[derive(Debug, Clone)]
pub enum YearFilter {
    /// A single year.
    Single(i32),
    /// A pre-formatted range such as `"2020-2023"`.
    Range(String),
    /// An explicit year list, serialized with `|` separators.
    List(Vec<i32>),
}

impl YearFilter {
    fn to_value(&self) -> String {
        match self {
            Self::Single(year) => year.to_string(),
            Self::Range(range) => range.clone(),
            Self::List(years) => years
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}

impl From<i32> for YearFilter {
    fn from(year: i32) -> Self {
        Self::Single(year)
    }
}

impl From<&str> for YearFilter {
    fn from(range: &str) -> Self {
        Self::Range(range.to_string())
    }
}

impl From<String> for YearFilter {
    fn from(range: String) -> Self {
        Self::Range(range)
    }
}

impl From<Vec<i32>> for YearFilter {
    fn from(years: Vec<i32>) -> Self {
        Self::List(years)
    }
}

/// Builder for `/works` searches.
///
/// The shortcut methods each map to one well-defined filter key and compose
/// with entries supplied through [`filter`](Self::filter).
#[derive(Debug, Clone)]
pub struct WorksQuery {
    search: Option<String>,
    filters: FilterSet,
    sort: Option<String>,
    per_page: u32,
    page: u32,
}

impl Default for WorksQuery {
    fn default() -> Self {
        Self { search: None, filters: FilterSet::new(), sort: None, per_page: 25, page: 1 }
    }
}

impl WorksQuery {
    /// Create a query with default paging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Add an arbitrary filter entry.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.set(key, value);
        self
    }

    /// Filter by publication year (single, range string, or list).
    #[must_use]
    pub fn publication_year(mut self, year: impl Into<YearFilter>) -> Self {
        self.filters.set("publication_year", year.into().to_value());
        self
    }

    /// Filter by a single publication date (`YYYY-MM-DD`).
    #[must_use]
    pub fn publication_date(mut self, date: impl ToString) -> Self {
        self.filters.set("publication_date", date);
        self
    }

    /// Keep works published on or after `date`; open-ended at the present.
    #[must_use]
    pub fn from_publication_date(mut self, date: NaiveDate) -> Self {
        self.filters.set("from_publication_date", date.format("%Y-%m-%d"));
        self
    }

    /// Filter by citation count (exact value or range string like `">50"`).
    #[must_use]
    pub fn cited_by_count(mut self, range: impl ToString) -> Self {
        self.filters.set("cited_by_count", range);
        self
    }

    /// Filter by open-access status.
    #[must_use]
    pub fn open_access(mut self, is_oa: bool) -> Self {
        self.filters.set("is_oa", is_oa);
        self
    }

    /// Filter by work type (`article`, `book-chapter`, ...).
    #[must_use]
    pub fn work_type(mut self, kind: impl ToString) -> Self {
        self.filters.set("type", kind);
        self
    }

    /// Filter by institution id.
    #[must_use]
    pub fn institution(mut self, institution_id: impl ToString) -> Self {
        self.filters.set("institutions.id", institution_id);
        self
    }

    /// Filter by author id.
    #[must_use]
    pub fn author(mut self, author_id: impl ToString) -> Self {
        self.filters.set("authorships.author.id", author_id);
        self
    }

    /// Filter by concept id.
    #[must_use]
    pub fn concept(mut self, concept_id: impl ToString) -> Self {
        self.filters.set("concepts.id", concept_id);
        self
    }

    /// Sort specification (e.g. `cited_by_count:desc`).
    #[must_use]
    pub fn sort(mut self, spec: impl Into<String>) -> Self {
        self.sort = Some(spec.into());
        self
    }

    /// Results per page, clamped to the upstream's accepted range.
    #[must_use]
    pub fn per_page(mut self, count: u32) -> Self {
        self.per_page = count.clamp(1, api::MAX_PER_PAGE);
        self
    }

    /// Page number, 1-based.
    #[must_use]
    pub fn page(mut self, number: u32) -> Self {
        self.page = number.max(1);
        self
    }

    pub(crate) fn into_params(self) -> Vec<(String, String)> {
        serialize_params(self.search, &self.filters, self.sort, self.per_page, self.page)
    }
}

/// Builder for the non-work list endpoints (authors, institutions,
/// concepts, sources). Same paging and filter semantics as [`WorksQuery`]
/// without the works-only shortcuts.
#[derive(Debug, Clone)]
pub struct ListQuery {
    search: Option<String>,
    filters: FilterSet,
    sort: Option<String>,
    per_page: u32,
    page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { search: None, filters: FilterSet::new(), sort: None, per_page: 25, page: 1 }
    }
}

impl ListQuery {
    /// Create a query with default paging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Add a filter entry.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.set(key, value);
        self
    }

    /// Sort specification.
    #[must_use]
    pub fn sort(mut self, spec: impl Into<String>) -> Self {
        self.sort = Some(spec.into());
        self
    }

    /// Results per page, clamped to the upstream's accepted range.
    #[must_use]
    pub fn per_page(mut self, count: u32) -> Self {
        self.per_page = count.clamp(1, api::MAX_PER_PAGE);
        self
    }

    /// Page number, 1-based.
    #[must_use]
    pub fn page(mut self, number: u32) -> Self {
        self.page = number.max(1);
        self
    }

    pub(crate) fn into_params(self) -> Vec<(String, String)> {
        serialize_params(self.search, &self.filters, self.sort, self.per_page, self.page)
    }
}

fn serialize_params(
    search: Option<String>,
    filters: &FilterSet,
    sort: Option<String>,
    per_page: u32,
    page: u32,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("per_page".to_string(), per_page.to_string()),
        ("page".to_string(), page.to_string()),
    ];
    if let Some(search) = search {
        params.push(("search".to_string(), search));
    }
    if !filters.is_empty() {
        params.push(("filter".to_string(), filters.to_param()));
    }
    if let Some(sort) = sort {
        params.push(("sort".to_string(), sort));
    }
    params
}
