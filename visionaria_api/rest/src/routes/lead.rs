use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing, Form, Json, Router,
};
use tracing::debug;
use url::Url;
use visionaria_core_lead_contracts::{LeadFeatureService, LeadSubmitError};
use visionaria_models::lead::LeadFieldErrors;

use super::error;
use crate::models::lead::{ApiLeadForm, ApiLeadFormErrors, ApiLeadLink};

pub fn router(service: Arc<impl LeadFeatureService>) -> Router<()> {
    Router::new()
        .route("/lead", routing::post(submit))
        .route("/lead/form", routing::post(submit_form))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl LeadFeatureService>>,
    form: Result<Json<ApiLeadForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            debug!("rejected lead request body: {rejection}");
            return error(rejection.status(), rejection.body_text());
        }
    };

    match submit_lead(&**service, form) {
        Ok(url) => Json(ApiLeadLink { url }).into_response(),
        Err(errors) => invalid_form(errors),
    }
}

/// Target of a plain html `<form target="_blank">`, the redirect is the
/// navigation to the messaging app.
async fn submit_form(
    service: State<Arc<impl LeadFeatureService>>,
    form: Result<Form<ApiLeadForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            debug!("rejected lead form body: {rejection}");
            return error(rejection.status(), rejection.body_text());
        }
    };

    match submit_lead(&**service, form) {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(errors) => invalid_form(errors),
    }
}

fn submit_lead(
    service: &impl LeadFeatureService,
    form: ApiLeadForm,
) -> Result<Url, LeadFieldErrors> {
    service.submit(&form.into()).map_err(|err| match err {
        LeadSubmitError::Invalid(errors) => errors,
    })
}

fn invalid_form(errors: LeadFieldErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiLeadFormErrors {
            detail: "Invalid form",
            errors,
        }),
    )
        .into_response()
}
