use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;
use crate::email_template::TemplateError;

#[derive(thiserror::Error)]
pub enum CampaignError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnknownTemplate(#[from] TemplateError),
    #[error("None of the selected influencers could be resolved.")]
    NothingToSend,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CampaignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for CampaignError {
    fn status_code(&self) -> StatusCode {
        match self {
            CampaignError::ValidationError(_)
            | CampaignError::UnknownTemplate(_)
            | CampaignError::NothingToSend => StatusCode::BAD_REQUEST,
            CampaignError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            CampaignError::UnexpectedError(_) => HttpResponse::new(self.status_code()),
            _ => HttpResponse::build(self.status_code()).body(self.to_string()),
        }
    }
}
