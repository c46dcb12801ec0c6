mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_and_round_trip_defaults() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let token = common::auth_token(server).await?;
    let client = reqwest::Client::new();

    let game_id = common::create_game(server, &token, json!({})).await?;

    let res = client
        .post(format!("{}/api/game-players", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "game_id": game_id, "player_number": 2 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = res.json::<serde_json::Value>().await?["id"]
        .as_str()
        .unwrap()
        .to_string();

    let player = client
        .get(format!("{}/api/game-players/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    assert_eq!(player["player_number"], 2);
    assert_eq!(player["player_name"], "");
    assert_eq!(player["is_activated"], true);
    assert_eq!(player["handicap"], 0);
    assert_eq!(player["wolf_birdie_points"], 0);
    assert_eq!(player["non_wolf_birdie_points"], 0);

    Ok(())
}

#[tokio::test]
async fn duplicate_player_number_is_a_conflict() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let token = common::auth_token(server).await?;
    let client = reqwest::Client::new();

    let game_id = common::create_game(server, &token, json!({})).await?;

    let payload = json!({ "game_id": game_id, "player_number": 4, "player_name": "Bobby" });
    let res = client
        .post(format!("{}/api/game-players", server.base_url))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/game-players", server.base_url))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn player_number_out_of_range_is_rejected() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let token = common::auth_token(server).await?;
    let client = reqwest::Client::new();

    let game_id = common::create_game(server, &token, json!({})).await?;

    for bad_number in [0, 10] {
        let res = client
            .post(format!("{}/api/game-players", server.base_url))
            .bearer_auth(&token)
            .json(&json!({ "game_id": game_id, "player_number": bad_number }))
            .send()
            .await?;
        assert_eq!(
            res.status(),
            StatusCode::CONFLICT,
            "player_number {} should be rejected",
            bad_number
        );
    }

    Ok(())
}

#[tokio::test]
async fn profile_update_is_partial() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let token = common::auth_token(server).await?;
    let client = reqwest::Client::new();

    let game_id = common::create_game(server, &token, json!({})).await?;
    let res = client
        .post(format!("{}/api/game-players", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "game_id": game_id, "player_number": 1, "player_name": "Ada", "handicap": 12 }))
        .send()
        .await?;
    let id = res.json::<serde_json::Value>().await?["id"]
        .as_str()
        .unwrap()
        .to_string();

    let res = client
        .put(format!("{}/api/game-players/{}", server.base_url, id))
        .bearer_auth(&token)
        .json(&json!({ "handicap": 10 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let player = client
        .get(format!("{}/api/game-players/{}", server.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    assert_eq!(player["handicap"], 10);
    assert_eq!(player["player_name"], "Ada");

    Ok(())
}

#[tokio::test]
async fn delete_removes_only_that_player() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let token = common::auth_token(server).await?;
    let client = reqwest::Client::new();

    let game_id = common::create_game(server, &token, json!({})).await?;
    let mut ids = Vec::new();
    for n in [1, 2] {
        let res = client
            .post(format!("{}/api/game-players", server.base_url))
            .bearer_auth(&token)
            .json(&json!({ "game_id": game_id, "player_number": n }))
            .send()
            .await?;
        ids.push(
            res.json::<serde_json::Value>().await?["id"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    let res = client
        .delete(format!("{}/api/game-players/{}", server.base_url, ids[0]))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "GamePlayer deleted successfully");

    let res = client
        .get(format!("{}/api/game-players/{}", server.base_url, ids[0]))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/api/game-players/{}", server.base_url, ids[1]))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}
