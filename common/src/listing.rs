//! Client-side dataset listing: text/category/type filtering, sorting,
//! pagination and facet extraction over the full set of loaded records.
//!
//! The portal fetches every approved record once and re-derives the listing
//! on each input change, so everything here is a pure function of
//! `(records, ListingQuery)`.
//!
//! Facets are always computed from the unfiltered collection. Selecting a
//! category never removes the other options from the sidebar.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::debug;

use crate::model::dataset::DatasetRecord;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest `created_at` first.
    #[default]
    Recent,
    /// Title, ascending.
    Name,
    /// Organization, ascending.
    Organization,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recent, SortKey::Name, SortKey::Organization];

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Name => "name",
            SortKey::Organization => "organization",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recent => "Most Recent",
            SortKey::Name => "Name (A-Z)",
            SortKey::Organization => "Organization (A-Z)",
        }
    }

    /// Unknown values select [`SortKey::Recent`].
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.value() == value)
            .unwrap_or_default()
    }
}

/// User-selected filter, sort and page state.
///
/// Every mutator that changes what is shown sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub query: String,
    pub selected_categories: BTreeSet<String>,
    pub selected_types: BTreeSet<String>,
    pub sort: SortKey,
    /// 1-indexed.
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected_categories: BTreeSet::new(),
            selected_types: BTreeSet::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn toggle_category(&mut self, name: &str) {
        if !self.selected_categories.remove(name) {
            self.selected_categories.insert(name.to_string());
        }
        self.page = 1;
    }

    pub fn toggle_type(&mut self, request_type: &str) {
        if !self.selected_types.remove(request_type) {
            self.selected_types.insert(request_type.to_string());
        }
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.selected_categories.clear();
        self.selected_types.clear();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || !self.selected_categories.is_empty()
            || !self.selected_types.is_empty()
    }
}

/// Distinct filter options present in the loaded collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub types: Vec<String>,
}

impl Facets {
    pub fn from_records(records: &[DatasetRecord]) -> Self {
        let categories: BTreeSet<&str> = records
            .iter()
            .flat_map(|r| r.category_names())
            .filter(|name| !name.is_empty())
            .collect();
        let types: BTreeSet<&str> = records
            .iter()
            .map(|r| r.request_type.as_str())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            types: types.into_iter().map(str::to_string).collect(),
        }
    }
}

/// One derived page of the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'a> {
    pub items: Vec<&'a DatasetRecord>,
    pub page: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub available_categories: Vec<String>,
    pub available_types: Vec<String>,
}

impl ListingPage<'_> {
    /// 1-based bounds for "Showing a-b of n"; `(0, 0)` when nothing matched.
    pub fn showing_range(&self) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 0);
        }
        let start = (self.page - 1) * PAGE_SIZE + 1;
        (start, start + self.items.len() - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

pub fn matches_query(record: &DatasetRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&record.title)
        || contains(&record.message)
        || contains(&record.organization)
        || record.tag_names().any(contains)
        || record.category_names().any(contains)
}

pub fn matches_categories(record: &DatasetRecord, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || record.category_names().any(|name| selected.contains(name))
}

pub fn matches_types(record: &DatasetRecord, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.contains(&record.request_type)
}

/// Every record passing all three filters, in collection order.
pub fn filter_records<'a>(
    records: &'a [DatasetRecord],
    query: &ListingQuery,
) -> Vec<&'a DatasetRecord> {
    records
        .iter()
        .filter(|r| matches_query(r, &query.query))
        .filter(|r| matches_categories(r, &query.selected_categories))
        .filter(|r| matches_types(r, &query.selected_types))
        .collect()
}

/// Stable sort; records with equal keys keep their relative order.
pub fn sort_records(records: &mut [&DatasetRecord], key: SortKey) {
    match key {
        SortKey::Recent => records.sort_by(|a, b| compare_recent(a, b)),
        SortKey::Name => records.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Organization => records.sort_by(|a, b| a.organization.cmp(&b.organization)),
    }
}

// Unparseable timestamps count as older than any real one.
fn compare_recent(a: &DatasetRecord, b: &DatasetRecord) -> Ordering {
    b.created_at().cmp(&a.created_at())
}

/// `max(1, ceil(count / PAGE_SIZE))`.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of `items` for a 1-indexed page, empty when out of range.
pub fn paginate<T: Copy>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Records labelled with the category `category_id`, newest first.
pub fn records_in_category(records: &[DatasetRecord], category_id: u64) -> Vec<&DatasetRecord> {
    let mut matched: Vec<&DatasetRecord> = records
        .iter()
        .filter(|r| r.categories.iter().any(|c| c.id == category_id))
        .collect();
    sort_records(&mut matched, SortKey::Recent);
    matched
}

pub fn list_datasets<'a>(records: &'a [DatasetRecord], query: &ListingQuery) -> ListingPage<'a> {
    let facets = Facets::from_records(records);

    let mut filtered = filter_records(records, query);
    sort_records(&mut filtered, query.sort);

    let total_count = filtered.len();
    let items = paginate(&filtered, query.page, PAGE_SIZE);
    debug!(
        "listing: {} of {} records match, page {} holds {}",
        total_count,
        records.len(),
        query.page,
        items.len()
    );

    ListingPage {
        items,
        page: query.page,
        total_count,
        total_pages: total_pages(total_count),
        available_categories: facets.categories,
        available_types: facets.types,
    }
}

/// One slot of the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

/// Page numbers shown by the pager, with gaps once there are more than 7 pages.
pub fn page_window(current: usize, total: usize) -> Vec<PageSlot> {
    use PageSlot::{Gap, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Gap,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Gap,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Gap,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::Label;

    fn record(id: u64, title: &str, org: &str, kind: &str, categories: &[&str], created: &str) -> DatasetRecord {
        DatasetRecord {
            id,
            title: title.to_string(),
            organization: org.to_string(),
            request_type: kind.to_string(),
            categories: categories
                .iter()
                .enumerate()
                .map(|(i, name)| Label::new(i as u64 + 1, *name))
                .collect(),
            created_at: created.to_string(),
            ..Default::default()
        }
    }

    fn titles(page: &ListingPage<'_>) -> Vec<String> {
        page.items.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn facets_ignore_active_filters() {
        let records = vec![
            record(1, "A", "X", "submit_dataset", &["Health"], "2024-01-01"),
            record(2, "B", "Y", "request_dataset", &["Education", "Health"], "2024-01-02"),
        ];
        let mut query = ListingQuery::default();
        let unfiltered = list_datasets(&records, &query);

        query.set_query("zzz");
        query.toggle_category("Health");
        query.toggle_type("feedback");
        query.set_page(4);
        let filtered = list_datasets(&records, &query);

        assert!(filtered.items.is_empty());
        assert_eq!(filtered.available_categories, unfiltered.available_categories);
        assert_eq!(filtered.available_types, unfiltered.available_types);
        assert_eq!(unfiltered.available_categories, vec!["Education", "Health"]);
        assert_eq!(unfiltered.available_types, vec!["request_dataset", "submit_dataset"]);
    }

    #[test]
    fn facets_are_case_sensitive() {
        let records = vec![
            record(1, "A", "", "t", &["health"], ""),
            record(2, "B", "", "t", &["Health"], ""),
        ];
        assert_eq!(Facets::from_records(&records).categories, vec!["Health", "health"]);
    }

    #[test]
    fn category_browse_matches_by_id_newest_first() {
        let mut older = record(1, "Older", "", "t", &[], "2023-01-05 08:00:00");
        older.categories = vec![Label::new(4, "Health")];
        let mut newer = record(2, "Newer", "", "t", &[], "2024-03-01 08:00:00");
        newer.categories = vec![Label::new(2, "Roads"), Label::new(4, "Health")];
        // Same name, different id: not part of category 4.
        let mut renamed = record(3, "Other", "", "t", &[], "2024-06-01 08:00:00");
        renamed.categories = vec![Label::new(9, "Health")];
        let records = vec![older, newer, renamed];

        let titles: Vec<&str> = records_in_category(&records, 4).iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        assert!(records_in_category(&records, 77).is_empty());
    }

    #[test]
    fn facets_skip_blank_values() {
        let mut untyped = record(1, "A", "", "", &[""], "");
        untyped.categories.push(Label::new(9, "Health"));
        let typed = record(2, "B", "", "submit_dataset", &[], "");
        let facets = Facets::from_records(&[untyped, typed]);
        assert_eq!(facets.types, vec!["submit_dataset"]);
        assert_eq!(facets.categories, vec!["Health"]);
    }

    #[test]
    fn text_filter_covers_tags_and_categories() {
        let mut tagged = record(1, "Roads", "DPWH", "submit_dataset", &["Infrastructure"], "");
        tagged.tags = vec![Label::new(1, "Bridges")];
        tagged.message = "Annual Description of Roads maintained by the province".to_string();
        let plain = record(2, "Rainfall", "PAGASA", "submit_dataset", &["Climate"], "");

        assert!(matches_query(&tagged, "bridge"));
        assert!(matches_query(&tagged, "INFRA"));
        assert!(matches_query(&tagged, "dpwh"));
        assert!(matches_query(&tagged, "description of roads"));
        assert!(!matches_query(&plain, "bridge"));
        assert!(!matches_query(&plain, "description of roads"));
        assert!(matches_query(&plain, ""));
    }

    #[test]
    fn category_and_type_selections_are_or_within_and_between() {
        let records = vec![
            record(1, "Health A", "", "submit_dataset", &["Health"], ""),
            record(2, "Edu B", "", "request_dataset", &["Education"], ""),
            record(3, "Env C", "", "submit_dataset", &["Environment"], ""),
        ];
        let mut query = ListingQuery::default();
        query.set_sort(SortKey::Name);
        query.toggle_category("Health");
        query.toggle_category("Education");
        assert_eq!(titles(&list_datasets(&records, &query)), vec!["Edu B", "Health A"]);

        query.toggle_type("submit_dataset");
        assert_eq!(titles(&list_datasets(&records, &query)), vec!["Health A"]);
    }

    #[test]
    fn name_sort_is_stable() {
        let records = vec![
            record(1, "B", "", "", &[], ""),
            record(2, "A", "", "", &[], ""),
            record(3, "A", "", "", &[], ""),
        ];
        let mut query = ListingQuery::default();
        query.set_sort(SortKey::Name);
        let page = list_datasets(&records, &query);
        let ids: Vec<u64> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn recent_sort_puts_unparseable_dates_last() {
        let records = vec![
            record(1, "old", "", "", &[], "2023-05-01"),
            record(2, "broken", "", "", &[], "not a date"),
            record(3, "new", "", "", &[], "2024-05-01 08:00:00"),
        ];
        let page = list_datasets(&records, &ListingQuery::default());
        assert_eq!(titles(&page), vec!["new", "old", "broken"]);
    }

    #[test]
    fn organization_sort_ascends() {
        let records = vec![
            record(1, "1", "DepEd", "", &[], ""),
            record(2, "2", "DENR", "", &[], ""),
        ];
        let mut query = ListingQuery::default();
        query.set_sort(SortKey::Organization);
        assert_eq!(titles(&list_datasets(&records, &query)), vec!["2", "1"]);
    }

    #[test]
    fn pagination_clamps_and_reports_one_page_minimum() {
        let records: Vec<DatasetRecord> = (0..23)
            .map(|i| record(i, &format!("t{i:02}"), "", "", &[], ""))
            .collect();
        let mut query = ListingQuery::default();
        query.set_sort(SortKey::Name);

        query.set_page(3);
        let last = list_datasets(&records, &query);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.showing_range(), (21, 23));

        query.set_page(4);
        assert!(list_datasets(&records, &query).items.is_empty());

        query.set_page(0);
        assert!(list_datasets(&records, &query).items.is_empty());

        let empty = list_datasets(&[], &ListingQuery::default());
        assert_eq!(empty.total_pages, 1);
        assert_eq!(empty.total_count, 0);
        assert!(empty.items.is_empty());
        assert!(empty.available_categories.is_empty());
        assert_eq!(empty.showing_range(), (0, 0));
    }

    #[test]
    fn changing_filters_resets_page() {
        let mut query = ListingQuery::default();
        query.set_page(5);
        query.set_query("x");
        assert_eq!(query.page, 1);

        query.set_page(5);
        query.toggle_category("Health");
        assert_eq!(query.page, 1);

        query.set_page(5);
        query.toggle_type("feedback");
        assert_eq!(query.page, 1);

        query.set_page(5);
        query.set_sort(SortKey::Name);
        assert_eq!(query.page, 1);

        query.set_page(5);
        query.clear_filters();
        assert_eq!(query.page, 1);
        assert!(!query.has_active_filters());
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut query = ListingQuery::default();
        query.toggle_category("Health");
        query.toggle_category("Health");
        assert!(query.selected_categories.is_empty());
    }

    #[test]
    fn sort_key_round_trips_through_select_values() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_value(key.value()), key);
        }
        assert_eq!(SortKey::from_value("downloads"), SortKey::Recent);
    }

    #[test]
    fn page_window_shapes() {
        use PageSlot::{Gap, Page};
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 0), Vec::<PageSlot>::new());
        assert_eq!(
            page_window(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]
        );
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }
}
