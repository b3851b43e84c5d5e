mod campaign_parameters;
mod contact_email;
mod influencer_id;
mod recipient;
mod template_id;

pub use campaign_parameters::CampaignParameters;
pub use contact_email::ContactEmail;
pub use influencer_id::InfluencerId;
pub use recipient::Recipient;
pub use template_id::TemplateId;
