use crate::helpers::spawn_app;

fn names(body: &serde_json::Value) -> Vec<String> {
    body["influencers"]
        .as_array()
        .expect("influencers must be an array")
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn historical_list_returns_every_influencer_without_filters() {
    let app = spawn_app().await;

    let response = app.get_historical("").await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["visible"], 5);
    assert_eq!(body["visible_selected"], 0);
    assert_eq!(body["all_visible_selected"], false);
}

#[tokio::test]
async fn historical_list_applies_search_market_and_category() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("search=emma", vec!["Emma Foodie"]),
        ("search=%40NORDIC", vec!["Nordic Chef"]),
        ("market=uk&category=food", vec!["Emma Foodie", "Kitchen Stories"]),
        ("market=all&category=family", vec!["Healthy Family Meals"]),
        ("market=no", vec![]),
    ];

    for (query, expected) in test_cases {
        let body: serde_json::Value = app.get_historical(query).await.json().await.unwrap();
        assert_eq!(names(&body), expected, "The filter {} returned the wrong rows.", query);
    }
}

#[tokio::test]
async fn select_all_checkbox_reflects_visible_rows_only() {
    let app = spawn_app().await;

    let query = "market=uk&category=food&selected=emma-foodie-hist,kitchen-stories-hist,nordic-chef-hist";
    let body: serde_json::Value = app.get_historical(query).await.json().await.unwrap();

    assert_eq!(body["visible"], 2);
    assert_eq!(body["visible_selected"], 2);
    assert_eq!(body["all_visible_selected"], true);

    let body: serde_json::Value = app
        .get_historical("selected=emma-foodie-hist")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["visible_selected"], 1);
    assert_eq!(body["all_visible_selected"], false);
}

#[tokio::test]
async fn empty_list_is_never_all_selected() {
    let app = spawn_app().await;

    let body: serde_json::Value = app
        .get_historical("market=no&selected=emma-foodie-hist")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["visible"], 0);
    assert_eq!(body["all_visible_selected"], false);
}

#[tokio::test]
async fn new_talent_is_priced_from_the_configured_cpm() {
    let app = spawn_app().await;

    let body: serde_json::Value = app.get_new("search=plant").await.json().await.unwrap();
    let plant_based = &body["influencers"][0];

    assert_eq!(plant_based["name"], "Plant Based Recipes");
    assert_eq!(plant_based["calculated_cpm"], 15.0);
    assert_eq!(plant_based["suggested_rate"], 1875.0);
    assert_eq!(plant_based["manager_email"], "mgmt@talentco.com");
}

#[tokio::test]
async fn new_talent_cpm_can_be_overridden_per_request() {
    let app = spawn_app().await;

    let body: serde_json::Value = app
        .get_new("search=plant&base_cpm=20")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["influencers"][0]["suggested_rate"], 2500.0);
}

#[tokio::test]
async fn invalid_cpm_is_rejected() {
    let app = spawn_app().await;

    for query in ["base_cpm=cheap", "base_cpm=-3"] {
        let response = app.get_new(query).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API accepted {} as a CPM.",
            query
        );
    }
}

#[tokio::test]
async fn historical_profile_returns_the_full_record() {
    let app = spawn_app().await;

    let response = app.get_profile("emma-foodie-hist", "").await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"], "historical");
    assert_eq!(body["name"], "Emma Foodie");
    assert_eq!(body["total_campaigns"], 8);
    assert_eq!(body["performance"], "excellent");
}

#[tokio::test]
async fn new_talent_profile_is_priced() {
    let app = spawn_app().await;

    let body: serde_json::Value = app
        .get_profile("plant-based-recipes-new", "base_cpm=20")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["list"], "new");
    assert_eq!(body["suggested_rate"], 2500.0);
    assert_eq!(body["manager_email"], "mgmt@talentco.com");
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let app = spawn_app().await;

    let response = app.get_profile("left-the-agency", "").await;

    assert_eq!(404, response.status().as_u16());
}
