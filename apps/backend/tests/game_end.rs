//! Game-end behavior: destroy-vs-archive, channel cleanup ordering and
//! tolerance for missing channels.

mod support;

use backend::channels::ChannelKind;
use backend::errors::domain::DomainError;
use backend::repos::{games, players, rounds};
use backend::{AppError, GameService};

use support::{seed_expansion, test_state, RecordingChannels};

#[tokio::test]
async fn end_without_winner_deletes_session_and_channels(
) -> Result<(), Box<dyn std::error::Error>> {
    let channels = RecordingChannels::with_channels(&[
        (1001, ChannelKind::Text),
        (1002, ChannelKind::Voice),
    ]);
    let state = test_state(channels.clone()).await;
    seed_expansion(&state, "base", 2, 8).await;

    let service = GameService::new();
    let game = service
        .create_game(&state, 111, Some(1001), Some(1002))
        .await?;
    players::create_player(&state.db, game.id, 222).await?;
    service.start(&state, game.id).await?;

    service.end(&state, game.id).await?;

    // Session and everything it owned is gone
    assert!(games::find_by_id(&state.db, game.id).await?.is_none());
    assert!(players::list_by_game(&state.db, game.id).await?.is_empty());
    assert_eq!(rounds::count_by_game(&state.db, game.id).await?, 0);

    // Both channels deleted exactly once each
    assert_eq!(channels.delete_count(1001), 1);
    assert_eq!(channels.delete_count(1002), 1);

    Ok(())
}

#[tokio::test]
async fn end_with_winner_archives_session() -> Result<(), Box<dyn std::error::Error>> {
    let channels = RecordingChannels::with_channels(&[
        (2001, ChannelKind::Text),
        (2002, ChannelKind::Voice),
    ]);
    let state = test_state(channels.clone()).await;
    seed_expansion(&state, "base", 2, 8).await;

    let service = GameService::new();
    let game = service
        .create_game(&state, 111, Some(2001), Some(2002))
        .await?;
    let challenger = players::create_player(&state.db, game.id, 222).await?;
    service.start(&state, game.id).await?;

    games::set_czar(&state.db, game.id, Some(challenger.id)).await?;
    let before = games::set_winner(&state.db, game.id, Some(challenger.id)).await?;

    service.end(&state, game.id).await?;

    // Record retained for history, fields untouched
    let after = games::require_game(&state.db, game.id).await?;
    assert_eq!(after, before);
    assert_eq!(after.winner_id, Some(challenger.id));
    assert_eq!(after.czar_id, Some(challenger.id));
    assert!(after.started);

    // Channels still cleaned up, once each
    assert_eq!(channels.delete_count(2001), 1);
    assert_eq!(channels.delete_count(2002), 1);

    Ok(())
}

#[tokio::test]
async fn end_before_start_behaves_like_active_case() -> Result<(), Box<dyn std::error::Error>> {
    let channels = RecordingChannels::with_channels(&[(3001, ChannelKind::Text)]);
    let state = test_state(channels.clone()).await;

    let service = GameService::new();
    let game = service.create_game(&state, 111, Some(3001), None).await?;

    // Never started, no winner: the session is destroyed all the same
    service.end(&state, game.id).await?;

    assert!(games::find_by_id(&state.db, game.id).await?.is_none());
    assert_eq!(channels.delete_count(3001), 1);

    Ok(())
}

#[tokio::test]
async fn end_swallows_channel_platform_outage() -> Result<(), Box<dyn std::error::Error>> {
    // Every delete fails with a non-NotFound error
    let channels = RecordingChannels::with_outage();
    let state = test_state(channels.clone()).await;

    let service = GameService::new();
    let game = service
        .create_game(&state, 111, Some(6001), Some(6002))
        .await?;

    service.end(&state, game.id).await?;

    // Both deletes were attempted and the session was destroyed anyway
    assert!(games::find_by_id(&state.db, game.id).await?.is_none());
    assert_eq!(channels.delete_count(6001), 1);
    assert_eq!(channels.delete_count(6002), 1);

    Ok(())
}

#[tokio::test]
async fn operations_after_end_fail_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(RecordingChannels::new()).await;

    let service = GameService::new();
    let game = service.create_game(&state, 111, None, None).await?;
    service.end(&state, game.id).await?;

    // A stale caller racing the deletion sees NotFound, never live state
    match service.start(&state, game.id).await {
        Err(AppError::Domain(DomainError::NotFound(_, _))) => {}
        other => panic!("expected NotFound after deletion, got {other:?}"),
    }
    match service.end(&state, game.id).await {
        Err(AppError::Domain(DomainError::NotFound(_, _))) => {}
        other => panic!("expected NotFound after deletion, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn end_tolerates_missing_channels() -> Result<(), Box<dyn std::error::Error>> {
    // The platform knows neither channel id; deletion reports NotFound
    let channels = RecordingChannels::new();
    let state = test_state(channels.clone()).await;

    let service = GameService::new();
    let game = service
        .create_game(&state, 111, Some(4001), Some(4002))
        .await?;

    // Channel failures never block the state transition
    service.end(&state, game.id).await?;

    assert!(games::find_by_id(&state.db, game.id).await?.is_none());
    assert_eq!(channels.delete_count(4001), 1);
    assert_eq!(channels.delete_count(4002), 1);

    Ok(())
}
