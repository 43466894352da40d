mod common;

use common::{profile_json, recommendations_json, trip_plan_json, SAMPLE_INPUT};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};
use std::time::Duration;
use trip_planner_rs::{
    complete_structured, AgentState, ChatModel, OpenAIClient, PersonalityProfile, Pipeline,
    PlannerConfig, PlannerError, Sampling, UserInput,
};

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn client_for(server: &ServerGuard, max_retries: usize) -> OpenAIClient {
    let config = PlannerConfig::new("test-key")
        .with_base_url(server.url())
        .with_max_retries(max_retries);
    OpenAIClient::new(&config).unwrap()
}

fn schema_matcher(schema: &str) -> Matcher {
    Matcher::PartialJson(json!({
        "response_format": { "type": "json_schema", "json_schema": { "name": schema } }
    }))
}

#[tokio::test]
async fn test_structured_completion_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::AllOf(vec![
            schema_matcher("PersonalityProfile"),
            Matcher::PartialJson(json!({ "model": "gpt-4o-mini", "temperature": 0.0 })),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&profile_json().to_string()))
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let profile: PersonalityProfile = complete_structured(
        &client,
        "Extract the traveller's profile.",
        SAMPLE_INPUT.to_string(),
        Sampling::default(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(profile.energy_level, "Medium");
    assert_eq!(profile.interests, vec!["history", "food"]);
}

#[tokio::test]
async fn test_fenced_content_is_accepted() {
    let mut server = Server::new_async().await;
    let fenced = format!("```json\n{}\n```", profile_json());
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body(&fenced))
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let profile: PersonalityProfile = complete_structured(
        &client,
        "Extract the traveller's profile.",
        SAMPLE_INPUT.to_string(),
        Sampling::default(),
    )
    .await
    .unwrap();

    assert_eq!(profile.social_preference, "Small Group");
}

#[tokio::test]
async fn test_rate_limit_reports_retry_after() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("retry-after", "7")
        .with_body(r#"{"error": {"message": "slow down"}}"#)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let err = client.chat_completion(&json!({})).await.unwrap_err();

    assert!(matches!(err, PlannerError::RateLimit { retry_after: 7 }));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_long_retry_after_is_not_slept_on() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("retry-after", "3600")
        .with_body(r#"{"error": {"message": "come back later"}}"#)
        .expect(1)
        .create_async()
        .await;

    let config = PlannerConfig::new("test-key")
        .with_base_url(server.url())
        .with_max_retries(1)
        .with_timeout(Duration::from_secs(5));
    let client = OpenAIClient::new(&config).unwrap();

    let err = tokio::time::timeout(Duration::from_secs(10), client.chat_completion(&json!({})))
        .await
        .expect("client waited on a one-hour Retry-After")
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, PlannerError::RateLimit { retry_after: 3600 }));
}

#[tokio::test]
async fn test_server_errors_are_retried_then_reported() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error": {"message": "upstream exploded"}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, 1);
    let err = client.chat_completion(&json!({})).await.unwrap_err();

    mock.assert_async().await;
    match err {
        PlannerError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": {"message": "invalid api key"}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, 2);
    let err = client.chat_completion(&json!({})).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, PlannerError::Api { status: 401, .. }));
    assert_eq!(err.error_code(), "LLM_API_ERROR");
}

#[tokio::test]
async fn test_missing_content_is_a_validation_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let client = client_for(&server, 0);
    let request = trip_planner_rs::StructuredRequest {
        system: "system".into(),
        user: "user".into(),
        schema: <PersonalityProfile as trip_planner_rs::CompletionSchema>::schema().clone(),
        temperature: 0.0,
        max_tokens: None,
    };
    let err = client.complete(&request).await.unwrap_err();

    assert!(matches!(err, PlannerError::Validation(_)));
}

#[tokio::test]
async fn test_trip_pipeline_against_mock_server() {
    let mut server = Server::new_async().await;
    let answers: [(&str, Value); 3] = [
        ("PersonalityProfile", profile_json()),
        ("ActivitiesAndReason", recommendations_json()),
        ("TripPlan", trip_plan_json(2)),
    ];

    let mut mocks = Vec::new();
    for (schema, payload) in answers {
        mocks.push(
            server
                .mock("POST", "/chat/completions")
                .match_body(schema_matcher(schema))
                .with_status(200)
                .with_body(completion_body(&payload.to_string()))
                .expect(1)
                .create_async()
                .await,
        );
    }

    let config = PlannerConfig::new("test-key").with_base_url(server.url());
    let client = OpenAIClient::new(&config).unwrap();
    let state = Pipeline::trip_planner(&config)
        .run(&client, AgentState::new(UserInput::new(SAMPLE_INPUT)))
        .await
        .unwrap();

    for mock in &mocks {
        mock.assert_async().await;
    }
    assert_eq!(state.final_trip_plan.unwrap().day_count(), 2);
    assert!(state.reason_for_recommendations.unwrap().contains("hawker"));
}

// Talks to a real provider; skipped unless OPENAI_API_KEY is set.
#[tokio::test]
async fn test_live_trip_plan() {
    dotenvy::dotenv().ok();
    let config = match PlannerConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Skipping live test: OPENAI_API_KEY not set");
            return;
        }
    };

    let client = OpenAIClient::new(&config).unwrap();
    let state = Pipeline::trip_planner(&config)
        .run(&client, AgentState::new(UserInput::new(SAMPLE_INPUT)))
        .await
        .unwrap();

    let plan = state.final_trip_plan.unwrap();
    assert!(plan.day_count() >= 1);
    assert!(plan.activity_count() > 0);
}
