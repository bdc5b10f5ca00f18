use mealdeck_tui::{
    AppActor, FetchCommand, FetchKind, FetchResponse, MealDbClient, NetworkActor, RenderState,
    UiEvent,
};
use tokio::sync::mpsc;
use tokio::time::{timeout, Duration};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const CATEGORIES_BODY: &str = r#"{
    "categories": [
        {"idCategory": "1", "strCategory": "Beef"},
        {"idCategory": "2", "strCategory": "Chicken"}
    ]
}"#;

const BEEF_MEALS_BODY: &str = r#"{
    "meals": [
        {"strMeal": "Beef Wellington", "idMeal": "52803"},
        {"strMeal": "Beef Banh Mi", "idMeal": "52997"}
    ]
}"#;

/// Mounts the two happy-path endpoints on a fresh mock server
async fn mock_mealdb() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CATEGORIES_BODY, "application/json"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("c", "Beef"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BEEF_MEALS_BODY, "application/json"))
        .mount(&server)
        .await;

    server
}

// ============================================================================
// MealDbClient Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_categories_success() {
    let server = mock_mealdb().await;
    let client = MealDbClient::new(server.uri());

    match client.fetch_categories(1).await {
        FetchResponse::Categories { id, categories } => {
            assert_eq!(id, 1);
            assert_eq!(categories.len(), 2);
            assert_eq!(categories[0].name, "Beef");
            assert_eq!(categories[1].name, "Chicken");
        }
        other => panic!("expected categories, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_recipes_sends_category_query() {
    let server = mock_mealdb().await;
    let client = MealDbClient::new(server.uri());

    match client.fetch_recipes(7, "Beef".to_string()).await {
        FetchResponse::Recipes { id, category, meals } => {
            assert_eq!(id, 7);
            assert_eq!(category, "Beef");
            assert_eq!(meals.len(), 2);
            assert_eq!(meals[0].name, "Beef Wellington");
        }
        other => panic!("expected recipes, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_recipes_null_meals_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"meals": null}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = MealDbClient::new(server.uri());
    match client.fetch_recipes(1, "Goat".to_string()).await {
        FetchResponse::Recipes { meals, .. } => assert!(meals.is_empty()),
        other => panic!("expected recipes, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_becomes_failed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MealDbClient::new(server.uri());
    match client.fetch_categories(3).await {
        FetchResponse::Failed { id, kind, reason } => {
            assert_eq!(id, 3);
            assert_eq!(kind, FetchKind::Categories);
            assert!(reason.contains("500"), "reason was: {}", reason);
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_payload_becomes_failed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = MealDbClient::new(server.uri());
    match client.fetch_categories(4).await {
        FetchResponse::Failed { kind, .. } => assert_eq!(kind, FetchKind::Categories),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_becomes_failed_response() {
    // Nothing listens here
    let client = MealDbClient::new("http://127.0.0.1:1");

    match client.fetch_recipes(9, "Beef".to_string()).await {
        FetchResponse::Failed { kind, reason, .. } => {
            assert_eq!(kind, FetchKind::Recipes);
            assert!(!reason.is_empty());
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

// ============================================================================
// NetworkActor Tests
// ============================================================================

#[tokio::test]
async fn test_network_actor_round_trip() {
    let server = mock_mealdb().await;

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<FetchCommand>();
    let (resp_tx, mut resp_rx) = mpsc::unbounded_channel::<FetchResponse>();

    let actor = NetworkActor::with_client(MealDbClient::new(server.uri()), resp_tx);
    let handle = tokio::spawn(actor.run(cmd_rx));

    cmd_tx.send(FetchCommand::Categories { id: 1 }).unwrap();

    let response = timeout(Duration::from_secs(5), resp_rx.recv())
        .await
        .expect("actor should answer")
        .expect("channel open");
    assert!(matches!(response, FetchResponse::Categories { id: 1, .. }));

    cmd_tx.send(FetchCommand::Shutdown).unwrap();
    timeout(Duration::from_secs(5), handle)
        .await
        .expect("actor should stop on shutdown")
        .unwrap();
}

// ============================================================================
// End-to-end smoke test: app + network actors against the mock server
// ============================================================================

/// Waits for render states until `pred` holds or the timeout hits
async fn wait_for_render(
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    pred: impl Fn(&RenderState) -> bool,
) -> RenderState {
    timeout(Duration::from_secs(5), async {
        loop {
            let state = render_rx.recv().await.expect("render channel open");
            if pred(&state) {
                return state;
            }
        }
    })
    .await
    .expect("expected render state never arrived")
}

#[tokio::test]
async fn test_mount_populates_categories_and_beef_recipes() {
    let server = mock_mealdb().await;

    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<FetchCommand>();
    let (resp_tx, resp_rx) = mpsc::unbounded_channel::<FetchResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    let network = NetworkActor::with_client(MealDbClient::new(server.uri()), resp_tx);
    tokio::spawn(network.run(cmd_rx));
    let app = AppActor::new(cmd_tx, render_tx);
    tokio::spawn(app.run(ui_rx, resp_rx));

    let state = wait_for_render(&mut render_rx, |s| {
        !s.categories.is_empty() && !s.meals.is_empty()
    })
    .await;

    assert_eq!(state.active_category, "Beef");
    assert_eq!(state.categories.len(), 2);
    assert_eq!(state.meals.len(), 2);
    assert!(!state.categories_loading);
    assert!(!state.recipes_loading);

    let _ = ui_tx.send(UiEvent::Quit);
}
