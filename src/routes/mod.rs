mod campaigns;
mod health_check;
mod helpers;
mod influencers;
mod rates;
mod selection;

pub use campaigns::{preview_campaign, preview_campaign_html, send_campaign};
pub use health_check::health_check;
pub use helpers::{error_chain_fmt, views};
pub use influencers::{get_profile, list_historical, list_new};
pub use rates::convert_currency;
pub use selection::update_selection;
