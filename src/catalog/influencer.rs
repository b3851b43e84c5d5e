use crate::domain::{ContactEmail, InfluencerId, Recipient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Excellent,
    Good,
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Talent the agency has run campaigns with before.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoricalInfluencer {
    pub id: InfluencerId,
    pub name: String,
    pub handle: String,
    pub email: ContactEmail,
    pub category: String,
    pub market: String,
    pub total_campaigns: u32,
    pub total_conversions: u64,
    pub average_conversions: u64,
    pub best_conversions: u64,
    pub average_cac: f64,
    pub total_spend: f64,
    pub average_views: u64,
    pub engagement_rate: f64,
    pub followers_count: u64,
    pub audience_age: String,
    pub audience_gender: String,
    pub location: String,
    pub last_campaign: String,
    pub performance: Performance,
    pub conversion_rate: f64,
    pub priority: Priority,
    pub estimated_rate: f64,
    pub reach: u64,
}

/// Talent discovered through platform data, priced from a CPM.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NewInfluencer {
    pub id: InfluencerId,
    pub name: String,
    pub handle: String,
    pub email: ContactEmail,
    pub manager_email: Option<ContactEmail>,
    pub category: String,
    pub market: String,
    pub platform: String,
    pub followers_count: u64,
    pub average_views: u64,
    pub average_likes: u64,
    pub average_comments: u64,
    pub engagement_rate: f64,
    pub audience_age: String,
    pub audience_gender: String,
    pub location: String,
    pub verified: bool,
    pub data_source: String,
    pub last_updated: String,
    pub estimated_reach: u64,
}

/// A new influencer together with the rate derived from the CPM in effect.
#[derive(Debug, serde::Serialize)]
pub struct PricedInfluencer<'a> {
    #[serde(flatten)]
    pub influencer: &'a NewInfluencer,
    pub calculated_cpm: f64,
    pub suggested_rate: f64,
}

impl HistoricalInfluencer {
    pub fn to_recipient(&self) -> Recipient {
        Recipient {
            id: self.id.clone(),
            display_name: self.name.clone(),
            contact_email: Some(self.email.clone()),
            category: Some(self.category.clone()),
            market: self.market.clone(),
            estimated_rate: Some(self.estimated_rate),
            reach: self.reach,
        }
    }
}

impl NewInfluencer {
    /// `estimated_reach / 1000 * base_cpm`, rounded to whole euros.
    pub fn suggested_rate(&self, base_cpm: f64) -> f64 {
        (self.estimated_reach as f64 / 1000.0 * base_cpm).round()
    }

    pub fn priced(&self, base_cpm: f64) -> PricedInfluencer<'_> {
        PricedInfluencer {
            influencer: self,
            calculated_cpm: base_cpm,
            suggested_rate: self.suggested_rate(base_cpm),
        }
    }

    pub fn to_recipient(&self, base_cpm: f64) -> Recipient {
        Recipient {
            id: self.id.clone(),
            display_name: self.name.clone(),
            contact_email: Some(self.email.clone()),
            category: Some(self.category.clone()),
            market: self.market.clone(),
            estimated_rate: Some(self.suggested_rate(base_cpm)),
            reach: self.estimated_reach,
        }
    }
}

/// Row accessors the list filters work on.
pub trait Listed {
    fn id(&self) -> &InfluencerId;
    fn name(&self) -> &str;
    fn handle(&self) -> &str;
    fn market(&self) -> &str;
    fn category(&self) -> &str;
}

impl Listed for HistoricalInfluencer {
    fn id(&self) -> &InfluencerId {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn handle(&self) -> &str {
        &self.handle
    }
    fn market(&self) -> &str {
        &self.market
    }
    fn category(&self) -> &str {
        &self.category
    }
}

impl Listed for NewInfluencer {
    fn id(&self) -> &InfluencerId {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn handle(&self) -> &str {
        &self.handle
    }
    fn market(&self) -> &str {
        &self.market
    }
    fn category(&self) -> &str {
        &self.category
    }
}
