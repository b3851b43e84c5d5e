use actix_web::{HttpResponse, web};

use crate::{
    domain::InfluencerId,
    selection::{SelectionAction, SelectionSet},
};

#[derive(serde::Deserialize, Debug)]
pub struct SelectionRequest {
    #[serde(default)]
    selected: SelectionSet,
    action: SelectionAction,
    /// Rows visible in the list view that sent the action.
    #[serde(default)]
    visible: Vec<InfluencerId>,
}

#[derive(serde::Serialize)]
struct SelectionResponse {
    selected: SelectionSet,
    count: usize,
    visible_selected: usize,
}

/// Apply one transition to the client's selection and hand back the new set.
#[tracing::instrument(name = "Updating selection", skip(body), fields(action = ?body.action))]
pub async fn update_selection(body: web::Json<SelectionRequest>) -> HttpResponse {
    let SelectionRequest {
        selected,
        action,
        visible,
    } = body.into_inner();

    let selected = selected.apply(action);
    let response = SelectionResponse {
        count: selected.len(),
        visible_selected: selected.count(&visible),
        selected,
    };
    HttpResponse::Ok().json(response)
}
