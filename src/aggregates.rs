use crate::domain::Recipient;

/// Recipients sharing one market, in the order they were first encountered.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MarketGroup {
    pub market: String,
    pub recipients: Vec<Recipient>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CampaignSummary {
    pub recipients: usize,
    pub total_estimated_cost: f64,
    pub total_reach: u64,
    pub markets: usize,
    pub grouped_by_market: Vec<MarketGroup>,
}

impl CampaignSummary {
    pub fn from_recipients(recipients: &[Recipient]) -> Self {
        let grouped_by_market = group_by_market(recipients);
        Self {
            recipients: recipients.len(),
            total_estimated_cost: total_estimated_cost(recipients),
            total_reach: total_reach(recipients),
            markets: grouped_by_market.len(),
            grouped_by_market,
        }
    }
}

/// Recipients without a rate contribute nothing.
pub fn total_estimated_cost(recipients: &[Recipient]) -> f64 {
    recipients.iter().filter_map(|r| r.estimated_rate).sum()
}

pub fn total_reach(recipients: &[Recipient]) -> u64 {
    recipients.iter().map(|r| r.reach).sum()
}

pub fn group_by_market(recipients: &[Recipient]) -> Vec<MarketGroup> {
    let mut groups: Vec<MarketGroup> = Vec::new();
    for recipient in recipients {
        match groups.iter_mut().find(|g| g.market == recipient.market) {
            Some(group) => group.recipients.push(recipient.clone()),
            None => groups.push(MarketGroup {
                market: recipient.market.clone(),
                recipients: vec![recipient.clone()],
            }),
        }
    }
    groups
}
