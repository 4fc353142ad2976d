use sqlx::SqlitePool;

mod submit_form;
mod update_status;

pub use submit_form::{ClientInfo, SubmitFormInput};

#[derive(Clone)]
pub struct Command(pub SqlitePool);
