use crate::email_template::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    CollaborationOffer,
    FollowUp,
    RateNegotiation,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::CollaborationOffer,
        TemplateId::FollowUp,
        TemplateId::RateNegotiation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::CollaborationOffer => "collaboration_offer",
            TemplateId::FollowUp => "follow_up",
            TemplateId::RateNegotiation => "rate_negotiation",
        }
    }

    pub fn parse(s: &str) -> Result<Self, TemplateError> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownTemplate(s.to_owned()))
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
