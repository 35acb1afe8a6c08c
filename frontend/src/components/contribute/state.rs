use gloo_file::File;
use yew::NodeRef;

use common::requests::ContributeRequest;
use common::session::Session;
use common::upload::{UploadCandidate, UploadPolicy};

use super::messages::Field;

pub struct ContributePage {
    pub form: ContributeRequest,
    pub files: Vec<web_sys::File>,
    pub policy: UploadPolicy,
    pub file_input_ref: NodeRef,
    /// Problem with the current file selection.
    pub file_error: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submitting: bool,
}

impl ContributePage {
    /// Name and email start from the signed-in profile.
    pub fn new(session: &Session) -> Self {
        let (name, email) = session
            .user
            .as_ref()
            .map(|u| (Some(u.name.clone()), Some(u.email.clone())))
            .unwrap_or_default();
        Self {
            form: ContributeRequest {
                name,
                email,
                ..Default::default()
            },
            files: Vec::new(),
            policy: UploadPolicy::default(),
            file_input_ref: NodeRef::default(),
            file_error: None,
            error: None,
            success: None,
            submitting: false,
        }
    }

    pub fn field(&self, field: Field) -> String {
        let optional = |v: &Option<String>| v.clone().unwrap_or_default();
        match field {
            Field::Title => optional(&self.form.title),
            Field::Name => optional(&self.form.name),
            Field::Email => optional(&self.form.email),
            Field::Organization => self.form.organization.clone(),
            Field::RequestType => self.form.request_type.clone(),
            Field::Message => self.form.message.clone(),
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.form.title = Some(value),
            Field::Name => self.form.name = Some(value),
            Field::Email => self.form.email = Some(value),
            Field::Organization => self.form.organization = value,
            Field::RequestType => self.form.request_type = value,
            Field::Message => self.form.message = value,
        }
    }

    pub fn candidates(files: &[web_sys::File]) -> Vec<UploadCandidate> {
        files
            .iter()
            .map(|file| {
                let file = File::from(file.clone());
                UploadCandidate::new(file.name(), file.size())
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.form.title = None;
        self.form.organization.clear();
        self.form.request_type.clear();
        self.form.message.clear();
        self.files.clear();
        self.file_error = None;
    }
}
