use serde::Serialize;

pub mod contact;
pub mod lead;

#[derive(Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}
