use common::listing::{list_datasets, ListingPage, ListingQuery};
use common::model::dataset::DatasetRecord;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    List,
    Grid,
}

pub struct DatasetsListing {
    /// Every approved record, as fetched.
    pub records: Vec<DatasetRecord>,
    pub query: ListingQuery,
    pub loading: bool,
    pub error: Option<String>,
    pub layout: Layout,
    /// Facet sidebar visibility on narrow screens.
    pub filters_open: bool,
}

impl DatasetsListing {
    pub fn new(initial_query: &str) -> Self {
        Self {
            records: Vec::new(),
            query: ListingQuery::with_query(initial_query),
            loading: true,
            error: None,
            layout: Layout::default(),
            filters_open: false,
        }
    }

    pub fn page(&self) -> ListingPage<'_> {
        list_datasets(&self.records, &self.query)
    }
}
