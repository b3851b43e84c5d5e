use crate::domain::TemplateId;

#[derive(Debug, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject_pattern: &'static str,
    pub body_pattern: &'static str,
}

impl EmailTemplate {
    pub fn for_id(id: TemplateId) -> &'static EmailTemplate {
        match id {
            TemplateId::CollaborationOffer => &COLLABORATION_OFFER,
            TemplateId::FollowUp => &FOLLOW_UP,
            TemplateId::RateNegotiation => &RATE_NEGOTIATION,
        }
    }
}

static COLLABORATION_OFFER: EmailTemplate = EmailTemplate {
    subject_pattern: "Partnership Opportunity with {campaign_name}",
    body_pattern: "Hi {influencer_name},

I hope this email finds you well! I'm reaching out from Brand Influence International regarding an exciting collaboration opportunity with {campaign_name}.

We've been following your content and love your engagement with the {category} community. We believe you'd be a perfect fit for our upcoming campaign.

Campaign Details:
- Campaign: {campaign_name}
- Deliverables: {deliverables}
- Timeline: {timeline}
- Proposed Rate: €{proposed_rate}

{custom_message}

We're excited about the possibility of working together and would love to hear your thoughts. Please let me know if you're interested and available for the proposed timeline.

Looking forward to your response!

Best regards,
[Your Name]
Brand Influence International",
};

static FOLLOW_UP: EmailTemplate = EmailTemplate {
    subject_pattern: "Following up on {campaign_name} Collaboration",
    body_pattern: "Hi {influencer_name},

I wanted to follow up on my previous email about the {campaign_name} collaboration opportunity.

Quick recap:
- Deliverables: {deliverables}
- Timeline: {timeline}
- Rate: €{proposed_rate}

{custom_message}

If you have any questions or would like to discuss the details further, I'm happy to jump on a quick call.

Best regards,
[Your Name]",
};

static RATE_NEGOTIATION: EmailTemplate = EmailTemplate {
    subject_pattern: "Re: {campaign_name} - Rate Discussion",
    body_pattern: "Hi {influencer_name},

Thank you for your interest in the {campaign_name} collaboration!

I understand you'd like to discuss the rate. Based on your audience size and engagement, we can offer €{proposed_rate} for the following deliverables:
- {deliverables}
- Timeline: {timeline}

{custom_message}

Let me know if this works for you, and we can move forward with the contract.

Best regards,
[Your Name]",
};
