use yew::NodeRef;

use common::model::category::{Category, CategoryIcon};
use common::model::dataset::Label;
use common::requests::CreateCategoryRequest;
use common::review::{ReviewQueue, ReviewUpdate, Submission};

/// Label edits in the detail sheet that have not been saved yet.
#[derive(Clone, Default, PartialEq)]
pub struct Draft {
    pub categories: Vec<Label>,
    pub tags: Vec<Label>,
}

impl Draft {
    pub fn of(submission: &Submission) -> Self {
        Self {
            categories: submission.categories.clone(),
            tags: submission.tags.clone(),
        }
    }

    /// The label changes against `submission`, `None` when there are none.
    pub fn changes(&self, submission: &Submission) -> Option<ReviewUpdate> {
        let same = |a: &[Label], b: &[Label]| {
            a.len() == b.len() && a.iter().all(|l| b.iter().any(|o| o.id == l.id))
        };
        let categories = (!same(&self.categories, &submission.categories)).then(|| self.categories.clone());
        let tags = (!same(&self.tags, &submission.tags)).then(|| self.tags.clone());
        if categories.is_none() && tags.is_none() {
            return None;
        }
        Some(ReviewUpdate {
            status: None,
            categories,
            tags,
        })
    }
}

pub fn toggle(labels: &mut Vec<Label>, label: Label) {
    if let Some(index) = labels.iter().position(|l| l.id == label.id) {
        labels.remove(index);
    } else {
        labels.push(label);
    }
}

fn with_draft(mut options: Vec<Label>, draft: &[Label]) -> Vec<Label> {
    for label in draft {
        if !options.iter().any(|o| o.id == label.id) {
            options.push(label.clone());
        }
    }
    options
}

pub struct Dashboard {
    pub queue: ReviewQueue,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Incremented for every banner so a stale dismiss timer leaves newer
    /// banners alone.
    pub notice: u32,

    pub categories: Vec<Category>,
    pub tags: Vec<Label>,

    pub selected: Option<u64>,
    pub draft: Draft,
    pub proposal: Option<ReviewUpdate>,
    pub saving: bool,
    pub detail_ref: NodeRef,

    pub category_ref: NodeRef,
    pub new_category: CreateCategoryRequest,
    pub icon_search: String,
    pub category_error: Option<String>,
    pub creating_category: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            queue: ReviewQueue::from_records(&[]),
            loading: true,
            error: None,
            success: None,
            notice: 0,
            categories: Vec::new(),
            tags: Vec::new(),
            selected: None,
            draft: Draft::default(),
            proposal: None,
            saving: false,
            detail_ref: NodeRef::default(),
            category_ref: NodeRef::default(),
            new_category: Self::blank_category(),
            icon_search: String::new(),
            category_error: None,
            creating_category: false,
        }
    }

    pub fn blank_category() -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: String::new(),
            icon: CategoryIcon::Database.name().to_string(),
            description: None,
        }
    }

    pub fn selected_submission(&self) -> Option<&Submission> {
        self.selected.and_then(|id| self.queue.get(id))
    }

    /// Category choices: the known categories plus any already on the draft.
    pub fn category_options(&self) -> Vec<Label> {
        let known = self.categories.iter().map(|c| Label::new(c.id, c.name.clone())).collect();
        with_draft(known, &self.draft.categories)
    }

    pub fn tag_options(&self) -> Vec<Label> {
        with_draft(self.tags.clone(), &self.draft.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::dataset::{ContributionStatus, DatasetRecord};

    fn submission() -> Submission {
        Submission::from_record(&DatasetRecord {
            id: 4,
            status: ContributionStatus::Pending,
            categories: vec![Label::new(1, "Health")],
            tags: vec![Label::new(7, "flood")],
            ..Default::default()
        })
    }

    #[test]
    fn untouched_draft_has_no_changes() {
        let submission = submission();
        assert_eq!(Draft::of(&submission).changes(&submission), None);
    }

    #[test]
    fn only_changed_label_sets_are_sent() {
        let submission = submission();
        let mut draft = Draft::of(&submission);
        toggle(&mut draft.categories, Label::new(2, "Education"));
        let update = draft.changes(&submission).unwrap();
        assert_eq!(update.categories.map(|c| c.len()), Some(2));
        assert_eq!(update.tags, None);
        assert_eq!(update.status, None);
    }

    #[test]
    fn toggling_twice_restores_the_set() {
        let submission = submission();
        let mut draft = Draft::of(&submission);
        toggle(&mut draft.tags, Label::new(7, "flood"));
        assert!(draft.tags.is_empty());
        toggle(&mut draft.tags, Label::new(7, "flood"));
        assert_eq!(draft.changes(&submission), None);
    }
}
