/// The fixed placeholder vocabulary. In template text each one is written as
/// its token wrapped in braces, e.g. `{campaign_name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    CampaignName,
    InfluencerName,
    Category,
    Deliverables,
    Timeline,
    ProposedRate,
    CustomMessage,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::CampaignName,
        Placeholder::InfluencerName,
        Placeholder::Category,
        Placeholder::Deliverables,
        Placeholder::Timeline,
        Placeholder::ProposedRate,
        Placeholder::CustomMessage,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::CampaignName => "campaign_name",
            Placeholder::InfluencerName => "influencer_name",
            Placeholder::Category => "category",
            Placeholder::Deliverables => "deliverables",
            Placeholder::Timeline => "timeline",
            Placeholder::ProposedRate => "proposed_rate",
            Placeholder::CustomMessage => "custom_message",
        }
    }

    /// Case-sensitive lookup of the text found between braces.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrences {
    /// Only the first occurrence is replaced; later ones stay verbatim.
    First,
    All,
}

/// Which placeholders a pattern may resolve, and how many times each.
/// Placeholders absent from the table are left verbatim.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRules(&'static [(Placeholder, Occurrences)]);

impl SubstitutionRules {
    pub const SUBJECT: SubstitutionRules = SubstitutionRules(&[
        (Placeholder::CampaignName, Occurrences::First),
        (Placeholder::InfluencerName, Occurrences::First),
    ]);

    pub const BODY: SubstitutionRules = SubstitutionRules(&[
        (Placeholder::InfluencerName, Occurrences::All),
        (Placeholder::CampaignName, Occurrences::All),
        (Placeholder::Category, Occurrences::All),
        (Placeholder::Deliverables, Occurrences::All),
        (Placeholder::Timeline, Occurrences::All),
        (Placeholder::ProposedRate, Occurrences::All),
        (Placeholder::CustomMessage, Occurrences::First),
    ]);

    pub fn occurrences(&self, placeholder: Placeholder) -> Option<Occurrences> {
        self.0
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map(|(_, occurrences)| *occurrences)
    }
}
