use uuid::Uuid;

use crate::{
    aggregates::CampaignSummary,
    domain::{ContactEmail, InfluencerId, TemplateId},
    email_template::RenderedEmail,
    selection::SelectionSet,
};

#[derive(serde::Deserialize, Debug)]
pub struct CampaignRequest {
    #[serde(default)]
    pub selected: SelectionSet,
    pub params: CampaignParamsBody,
    /// Overrides the configured CPM used to price new talent.
    pub base_cpm: Option<f64>,
}

#[derive(serde::Deserialize, Debug)]
pub struct CampaignParamsBody {
    #[serde(default)]
    pub campaign_name: String,
    pub email_template_id: String,
    #[serde(default)]
    pub base_rate: f64,
    #[serde(default)]
    pub deliverables: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub custom_message: String,
}

#[derive(serde::Serialize)]
pub struct EmailPreview {
    pub recipient_id: InfluencerId,
    pub display_name: String,
    pub market: String,
    pub contact_email: Option<ContactEmail>,
    #[serde(flatten)]
    pub email: RenderedEmail,
}

#[derive(serde::Serialize)]
pub struct CampaignPreview {
    pub campaign_name: String,
    pub template: TemplateId,
    pub summary: CampaignSummary,
    pub emails: Vec<EmailPreview>,
}

#[derive(serde::Serialize)]
pub struct SendReceipt {
    pub batch_id: Uuid,
    pub sent: usize,
    pub total_estimated_cost: f64,
}
