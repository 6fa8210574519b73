//! Tests for opendota

use super::*;

fn client(base: &str) -> OpenDotaClient {
    OpenDotaClient::new(base, Duration::from_secs(2)).unwrap()
}

#[test]
fn test_urls() {
    let client = client(DEFAULT_API_URL);
    assert_eq!(
        client.hero_stats_url(),
        "https://api.opendota.com/api/heroStats"
    );
    assert_eq!(
        client.matchups_url(42),
        "https://api.opendota.com/api/heroes/42/matchups"
    );
}

#[test]
fn test_trailing_slash_trimmed() {
    let client = client("http://localhost:8080/api/");
    assert_eq!(client.hero_stats_url(), "http://localhost:8080/api/heroStats");
}

#[test]
fn test_matchup_payload_shape() {
    let json = r#"[{"hero_id": 2, "games_played": 120, "wins": 61}]"#;
    let records: Vec<MatchupRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records, vec![MatchupRecord::new(2, 120, 61)]);
}

#[tokio::test]
async fn test_unreachable_catalog_is_unavailable() {
    let client = client("http://127.0.0.1:1");
    let result = client.fetch_catalog().await;
    assert!(matches!(result, Err(DraftError::CatalogUnavailable(_))));
}

#[tokio::test]
async fn test_unreachable_matchups_are_unavailable() {
    let client = client("http://127.0.0.1:1");
    let result = client.fetch_matchups(7).await;
    assert!(matches!(
        result,
        Err(DraftError::MatchupUnavailable { id: 7, .. })
    ));
}
