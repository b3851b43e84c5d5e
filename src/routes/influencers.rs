use actix_web::{HttpResponse, web};

use crate::{
    catalog::{Catalog, ListFilter, Listed, visible_ids},
    configuration::CampaignSettings,
    domain::InfluencerId,
    selection::SelectionSet,
};

#[derive(serde::Deserialize, Debug)]
pub struct ListQuery {
    search: Option<String>,
    market: Option<String>,
    category: Option<String>,
    /// Comma separated ids currently selected in the discovery session.
    #[serde(default)]
    selected: String,
    base_cpm: Option<f64>,
}

impl ListQuery {
    fn filter(&self) -> ListFilter {
        ListFilter::new(
            self.search.clone(),
            self.market.clone(),
            self.category.clone(),
        )
    }

    fn selection(&self) -> SelectionSet {
        self.selected
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(InfluencerId::from)
            .collect()
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct ProfileQuery {
    base_cpm: Option<f64>,
}

#[derive(serde::Serialize)]
struct ListResponse<T> {
    influencers: Vec<T>,
    visible: usize,
    /// Selected ids among the visible rows.
    visible_selected: usize,
    /// State of the "select all" checkbox.
    all_visible_selected: bool,
}

impl<T> ListResponse<T> {
    fn new<R: Listed>(influencers: Vec<T>, rows: &[&R], selection: &SelectionSet) -> Self {
        let ids = visible_ids(rows);
        let visible_selected = selection.count(ids.iter().copied());
        Self {
            visible: ids.len(),
            all_visible_selected: !ids.is_empty() && visible_selected == ids.len(),
            visible_selected,
            influencers,
        }
    }
}

#[tracing::instrument(name = "Listing historical influencers", skip(catalog))]
pub async fn list_historical(
    query: web::Query<ListQuery>,
    catalog: web::Data<Catalog>,
) -> HttpResponse {
    let rows = query.filter().apply(&catalog.historical);
    let response = ListResponse::new(rows.clone(), &rows, &query.selection());
    HttpResponse::Ok().json(response)
}

#[tracing::instrument(name = "Listing new influencers", skip(catalog, settings))]
pub async fn list_new(
    query: web::Query<ListQuery>,
    catalog: web::Data<Catalog>,
    settings: web::Data<CampaignSettings>,
) -> HttpResponse {
    let Some(base_cpm) = effective_cpm(query.base_cpm, &settings) else {
        return invalid_cpm();
    };
    let rows = query.filter().apply(&catalog.new);
    let priced: Vec<_> = rows.iter().map(|row| row.priced(base_cpm)).collect();
    let response = ListResponse::new(priced, &rows, &query.selection());
    HttpResponse::Ok().json(response)
}

/// One influencer's full record, from either list.
#[tracing::instrument(name = "Fetching influencer profile", skip(catalog, settings))]
pub async fn get_profile(
    id: web::Path<InfluencerId>,
    query: web::Query<ProfileQuery>,
    catalog: web::Data<Catalog>,
    settings: web::Data<CampaignSettings>,
) -> HttpResponse {
    let Some(base_cpm) = effective_cpm(query.base_cpm, &settings) else {
        return invalid_cpm();
    };
    match catalog.profile(&id, base_cpm) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => HttpResponse::NotFound().finish(),
    }
}

/// The per-request CPM override or the configured one, if usable.
fn effective_cpm(requested: Option<f64>, settings: &CampaignSettings) -> Option<f64> {
    let base_cpm = requested.unwrap_or(settings.base_cpm);
    (base_cpm.is_finite() && base_cpm >= 0.0).then_some(base_cpm)
}

fn invalid_cpm() -> HttpResponse {
    HttpResponse::BadRequest().body("The CPM must be a non-negative number.")
}
