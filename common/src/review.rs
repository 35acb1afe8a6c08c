//! Admin review queue: status filtering, paging and applying accepted updates.

use log::debug;
use thiserror::Error;

use crate::listing::paginate;
use crate::model::dataset::{
    ContributionStatus, DatasetRecord, FileResource, Label, humanize_request_type,
};
use crate::requests::UpdateContributionRequest;

/// Submissions per dashboard page.
pub const REVIEW_PAGE_SIZE: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("submission {0} is not in the review queue")]
    UnknownSubmission(u64),
}

/// A contribution as shown in the dashboard table.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: u64,
    pub title: String,
    pub status: ContributionStatus,
    pub submitted_by: String,
    pub submitted_at: String,
    pub message: String,
    pub categories: Vec<Label>,
    pub tags: Vec<Label>,
    pub organization: String,
    /// Humanized, e.g. `Submit Dataset`.
    pub request_type: String,
    pub files: Vec<FileResource>,
}

impl Submission {
    pub fn from_record(record: &DatasetRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            status: record.status,
            submitted_by: record.submitted_by().to_string(),
            submitted_at: record.created_at.clone(),
            message: record.message.clone(),
            categories: record.categories.clone(),
            tags: record.tags.clone(),
            organization: record.organization.clone(),
            request_type: humanize_request_type(&record.request_type),
            files: record.resources(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn admits(&self, status: ContributionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ContributionStatus::Pending,
            StatusFilter::Approved => status == ContributionStatus::Approved,
            StatusFilter::Rejected => status == ContributionStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Pending => self.pending,
            StatusFilter::Approved => self.approved,
            StatusFilter::Rejected => self.rejected,
        }
    }
}

/// Changes an admin made in the detail dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewUpdate {
    pub status: Option<ContributionStatus>,
    pub categories: Option<Vec<Label>>,
    pub tags: Option<Vec<Label>>,
}

impl ReviewUpdate {
    pub fn status(status: ContributionStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn to_request(&self) -> UpdateContributionRequest {
        let ids = |labels: &Vec<Label>| labels.iter().map(|l| l.id).collect::<Vec<_>>();
        UpdateContributionRequest {
            status: self.status,
            categories: self.categories.as_ref().map(ids),
            tags: self.tags.as_ref().map(ids),
        }
    }
}

/// Confirmation shown after an update went through.
pub fn update_message(previous: ContributionStatus, update: &ReviewUpdate) -> &'static str {
    match update.status.filter(|s| *s != previous) {
        Some(ContributionStatus::Approved) => {
            "Submission has been approved and is now publicly available."
        }
        Some(ContributionStatus::Rejected) => {
            "Submission has been rejected. The contributor will be notified."
        }
        Some(ContributionStatus::Pending) => {
            "Submission status has been changed to pending review."
        }
        None => match (update.categories.is_some(), update.tags.is_some()) {
            (true, true) => "Categories and tags have been successfully updated.",
            (true, false) => "Categories have been successfully updated.",
            (false, true) => "Tags have been successfully updated.",
            (false, false) => "Submission details have been successfully updated.",
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQueue {
    pub submissions: Vec<Submission>,
    pub filter: StatusFilter,
    /// 1-indexed.
    pub page: usize,
}

impl ReviewQueue {
    pub fn from_records(records: &[DatasetRecord]) -> Self {
        Self {
            submissions: records.iter().map(Submission::from_record).collect(),
            filter: StatusFilter::All,
            page: 1,
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn visible(&self) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|s| self.filter.admits(s.status))
            .collect()
    }

    pub fn page_items(&self) -> Vec<&Submission> {
        paginate(&self.visible(), self.page, REVIEW_PAGE_SIZE)
    }

    pub fn total_pages(&self) -> usize {
        self.visible().len().div_ceil(REVIEW_PAGE_SIZE).max(1)
    }

    pub fn counts(&self) -> StatusCounts {
        let count = |status| self.submissions.iter().filter(|s| s.status == status).count();
        StatusCounts {
            all: self.submissions.len(),
            pending: count(ContributionStatus::Pending),
            approved: count(ContributionStatus::Approved),
            rejected: count(ContributionStatus::Rejected),
        }
    }

    pub fn get(&self, id: u64) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Reflects an update the API has accepted and returns the confirmation
    /// message for it. The current page is kept unless it no longer exists.
    pub fn apply_update(
        &mut self,
        id: u64,
        update: &ReviewUpdate,
    ) -> Result<&'static str, ReviewError> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ReviewError::UnknownSubmission(id))?;

        let message = update_message(submission.status, update);
        if let Some(status) = update.status {
            submission.status = status;
        }
        if let Some(categories) = &update.categories {
            submission.categories = categories.clone();
        }
        if let Some(tags) = &update.tags {
            submission.tags = tags.clone();
        }
        debug!("review: submission {id} updated");

        self.page = self.page.clamp(1, self.total_pages());
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::Contributor;

    fn record(id: u64, status: ContributionStatus) -> DatasetRecord {
        DatasetRecord {
            id,
            title: format!("Submission {id}"),
            status,
            request_type: "submit_dataset".into(),
            user: Some(Contributor {
                id: 9,
                name: "Juan".into(),
                email: "juan@example.ph".into(),
            }),
            ..Default::default()
        }
    }

    fn queue() -> ReviewQueue {
        let mut records: Vec<DatasetRecord> = (1..=7).map(|i| record(i, ContributionStatus::Pending)).collect();
        records.push(record(8, ContributionStatus::Approved));
        records.push(record(9, ContributionStatus::Rejected));
        ReviewQueue::from_records(&records)
    }

    #[test]
    fn converts_records() {
        let queue = queue();
        let first = queue.get(1).unwrap();
        assert_eq!(first.submitted_by, "Juan");
        assert_eq!(first.request_type, "Submit Dataset");
    }

    #[test]
    fn counts_and_filtering() {
        let mut queue = queue();
        assert_eq!(
            queue.counts(),
            StatusCounts { all: 9, pending: 7, approved: 1, rejected: 1 }
        );
        assert_eq!(queue.total_pages(), 2);

        queue.set_page(2);
        assert_eq!(queue.page_items().len(), 4);

        queue.set_filter(StatusFilter::Pending);
        assert_eq!(queue.page, 1);
        assert_eq!(queue.visible().len(), 7);

        queue.set_filter(StatusFilter::Rejected);
        assert_eq!(queue.page_items()[0].id, 9);
    }

    #[test]
    fn set_page_clamps() {
        let mut queue = queue();
        queue.set_page(99);
        assert_eq!(queue.page, 2);
        queue.set_page(0);
        assert_eq!(queue.page, 1);
    }

    #[test]
    fn apply_update_changes_status_and_reports() {
        let mut queue = queue();
        let message = queue
            .apply_update(1, &ReviewUpdate::status(ContributionStatus::Approved))
            .unwrap();
        assert_eq!(message, "Submission has been approved and is now publicly available.");
        assert_eq!(queue.get(1).unwrap().status, ContributionStatus::Approved);
        assert_eq!(queue.counts().approved, 2);
    }

    #[test]
    fn unchanged_status_reports_label_edits() {
        let mut queue = queue();
        let update = ReviewUpdate {
            status: Some(ContributionStatus::Pending),
            categories: Some(vec![Label::new(2, "Health")]),
            tags: None,
        };
        assert_eq!(
            queue.apply_update(2, &update).unwrap(),
            "Categories have been successfully updated."
        );
        assert_eq!(queue.get(2).unwrap().categories[0].name, "Health");
        assert_eq!(update.to_request().categories, Some(vec![2]));
    }

    #[test]
    fn page_shrinks_when_filtered_rows_leave() {
        let mut queue = queue();
        queue.set_filter(StatusFilter::Pending);
        queue.set_page(2);
        for id in 1..=3 {
            queue
                .apply_update(id, &ReviewUpdate::status(ContributionStatus::Approved))
                .unwrap();
        }
        assert_eq!(queue.page, 1);
    }

    #[test]
    fn unknown_submission_is_an_error() {
        let mut queue = queue();
        assert_eq!(
            queue.apply_update(42, &ReviewUpdate::default()),
            Err(ReviewError::UnknownSubmission(42))
        );
    }
}
