use actix_web::{HttpResponse, web};
use uuid::Uuid;

use super::{CampaignError, CampaignRequest, prepare_campaign, types::SendReceipt};
use crate::{catalog::Catalog, configuration::CampaignSettings};

/// Simulated delivery: every rendered email is logged, nothing leaves the
/// process.
#[tracing::instrument(
    name = "Sending campaign emails",
    skip_all,
    fields(
        campaign_name = %body.params.campaign_name,
        batch_id = tracing::field::Empty
    )
)]
pub async fn send_campaign(
    body: web::Json<CampaignRequest>,
    catalog: web::Data<Catalog>,
    settings: web::Data<CampaignSettings>,
) -> Result<HttpResponse, CampaignError> {
    let preview = prepare_campaign(body.into_inner(), &catalog, &settings)?;
    if preview.emails.is_empty() {
        return Err(CampaignError::NothingToSend);
    }

    let batch_id = Uuid::new_v4();
    tracing::Span::current().record("batch_id", tracing::field::display(&batch_id));

    for email in &preview.emails {
        tracing::info!(
            recipient_id = %email.recipient_id,
            contact_email = ?email.contact_email.as_ref().map(|e| e.as_ref()),
            subject = %email.email.subject,
            "Campaign email queued"
        );
    }

    Ok(HttpResponse::Ok().json(SendReceipt {
        batch_id,
        sent: preview.emails.len(),
        total_estimated_cost: preview.summary.total_estimated_cost,
    }))
}
