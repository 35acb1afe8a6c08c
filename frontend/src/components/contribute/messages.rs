use common::error::ApiError;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Name,
    Email,
    Organization,
    RequestType,
    Message,
}

pub enum Msg {
    SetField(Field, String),
    FilesSelected(Vec<web_sys::File>),
    RemoveFile(usize),
    OpenFilePicker,
    Submit,
    Submitted(Result<(), ApiError>),
}
