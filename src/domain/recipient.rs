use super::{ContactEmail, InfluencerId};

/// The slice of an influencer record needed to address one personalized email.
///
/// `category` and `estimated_rate` may be absent on sparse records. Absent
/// values render as an empty string and count as zero in campaign totals.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Recipient {
    pub id: InfluencerId,
    pub display_name: String,
    pub contact_email: Option<ContactEmail>,
    pub category: Option<String>,
    pub market: String,
    pub estimated_rate: Option<f64>,
    pub reach: u64,
}
