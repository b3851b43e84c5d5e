use super::TemplateId;

/// The campaign-level inputs shared by every email of a bulk send. Free text
/// is taken as entered; an empty campaign name or custom message is fine.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CampaignParameters {
    pub campaign_name: String,
    pub email_template_id: TemplateId,
    pub base_rate: f64,
    pub deliverables: String,
    pub timeline: String,
    pub custom_message: String,
}
