//! Query string building: paging and sorting

use std::collections::BTreeMap;

/// Default page size when the caller does not pass paging
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Ordered query parameter map
///
/// Keys are the server's PascalCase parameter names (`Limit`, `SiteID`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Builder form of [`QueryParams::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when `value` is `Some`
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Paging descriptor for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingParams {
    pub limit: u32,
    pub skip: u32,
    pub only_record_count: bool,
}

impl Default for PagingParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            skip: 0,
            only_record_count: false,
        }
    }
}

impl PagingParams {
    pub fn new(limit: u32, skip: u32) -> Self {
        Self {
            limit,
            skip,
            only_record_count: false,
        }
    }

    /// Count-only query: the server returns `count` and an empty result
    pub fn count_only() -> Self {
        Self {
            limit: 0,
            skip: 0,
            only_record_count: true,
        }
    }

    /// Copy the truthy fields into `params`
    ///
    /// Zero `limit`/`skip` and a false `only_record_count` are left out, so
    /// `{10, 0, false}` adds `Limit=10` only.
    pub fn apply(&self, params: &mut QueryParams) {
        if self.limit > 0 {
            params.insert("Limit", self.limit);
        }
        if self.skip > 0 {
            params.insert("Skip", self.skip);
        }
        if self.only_record_count {
            params.insert("OnlyRecordCount", true);
        }
    }
}

/// Set `SortFields` to the comma-joined field list (`-timestamp` sorts descending)
pub fn apply_sorting(sorting: &[&str], params: &mut QueryParams) {
    if !sorting.is_empty() {
        params.insert("SortFields", sorting.join(","));
    }
}

/// Params + paging + sorting, in one call
pub fn build_query(mut params: QueryParams, paging: &PagingParams, sorting: &[&str]) -> QueryParams {
    paging.apply(&mut params);
    apply_sorting(sorting, &mut params);
    params
}
