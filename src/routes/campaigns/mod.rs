mod errors;
mod preview;
mod send;
mod types;

pub use preview::{preview_campaign, preview_campaign_html};
pub use send::send_campaign;

use errors::CampaignError;
use types::{CampaignPreview, CampaignRequest, EmailPreview};

use crate::{
    aggregates::CampaignSummary,
    catalog::Catalog,
    configuration::CampaignSettings,
    domain::CampaignParameters,
    email_template::{render_email, resolve_template_id},
};

/// Resolve the template and the selection against the catalog, then render
/// one email per recipient.
#[tracing::instrument(
    name = "Preparing campaign emails",
    skip_all,
    fields(selected = request.selected.len())
)]
fn prepare_campaign(
    request: CampaignRequest,
    catalog: &Catalog,
    settings: &CampaignSettings,
) -> Result<CampaignPreview, CampaignError> {
    let CampaignRequest {
        selected,
        params,
        base_cpm,
    } = request;

    let template = resolve_template_id(&params.email_template_id, settings.template_fallback())?;
    let params = CampaignParameters {
        campaign_name: params.campaign_name,
        email_template_id: template,
        base_rate: params.base_rate,
        deliverables: params.deliverables,
        timeline: params.timeline,
        custom_message: params.custom_message,
    };

    let base_cpm = base_cpm.unwrap_or(settings.base_cpm);
    if !base_cpm.is_finite() || base_cpm < 0.0 {
        return Err(CampaignError::ValidationError(format!(
            "{base_cpm} is not a valid CPM."
        )));
    }

    let recipients = catalog.resolve(&selected, base_cpm);
    let emails = recipients
        .iter()
        .map(|recipient| EmailPreview {
            recipient_id: recipient.id.clone(),
            display_name: recipient.display_name.clone(),
            market: recipient.market.clone(),
            contact_email: recipient.contact_email.clone(),
            email: render_email(&params, recipient),
        })
        .collect();

    Ok(CampaignPreview {
        campaign_name: params.campaign_name,
        template,
        summary: CampaignSummary::from_recipients(&recipients),
        emails,
    })
}
