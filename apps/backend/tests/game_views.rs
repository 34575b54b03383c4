//! Derived read projections and lookup helpers.

mod support;

use backend::channels::ChannelKind;
use backend::repos::expansions;
use backend::GameService;

use support::{seed_expansion, test_state, RecordingChannels};

#[tokio::test]
async fn views_are_empty_without_pools() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(RecordingChannels::new()).await;
    // Content exists in the store but is not linked into the game
    seed_expansion(&state, "base", 3, 5).await;

    let service = GameService::new();
    let game = service.create_game(&state, 111, None, None).await?;

    assert!(service.expansions(&state, game.id).await?.is_empty());
    assert!(service.questions(&state, game.id).await?.is_empty());
    assert!(service.answers(&state, game.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn views_union_pooled_expansion_content() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(RecordingChannels::new()).await;
    let e1 = seed_expansion(&state, "first", 2, 3).await;
    let e2 = seed_expansion(&state, "second", 1, 4).await;
    // A third expansion that stays outside the game
    seed_expansion(&state, "unpooled", 5, 5).await;

    let service = GameService::new();
    let game = service.create_game(&state, 111, None, None).await?;
    expansions::add_to_pool(&state.db, game.id, e1.id).await?;
    expansions::add_to_pool(&state.db, game.id, e2.id).await?;

    let pooled = service.expansions(&state, game.id).await?;
    let mut names: Vec<&str> = pooled.iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["first", "second"]);

    let questions = service.questions(&state, game.id).await?;
    assert_eq!(questions.len(), 3);
    assert!(questions
        .iter()
        .all(|q| q.expansion_id == e1.id || q.expansion_id == e2.id));

    let answers = service.answers(&state, game.id).await?;
    assert_eq!(answers.len(), 7);
    assert!(answers
        .iter()
        .all(|a| a.expansion_id == e1.id || a.expansion_id == e2.id));

    Ok(())
}

#[tokio::test]
async fn owner_lookup_scans_all_sessions() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(RecordingChannels::new()).await;

    let service = GameService::new();
    let first = service.create_game(&state, 111, None, None).await?;
    let second = service.create_game(&state, 222, None, None).await?;

    let found = service
        .find_by_owner_discord_id(&state, 222)
        .await?
        .expect("owner 222 should have a game");
    assert_eq!(found.id, second.id);

    let found = service
        .find_by_owner_discord_id(&state, 111)
        .await?
        .expect("owner 111 should have a game");
    assert_eq!(found.id, first.id);

    assert!(service.find_by_owner_discord_id(&state, 999).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn channel_accessors_pass_through_the_service() -> Result<(), Box<dyn std::error::Error>> {
    let channels = RecordingChannels::with_channels(&[
        (5001, ChannelKind::Text),
        (5002, ChannelKind::Voice),
    ]);
    let state = test_state(channels).await;

    let service = GameService::new();
    let game = service
        .create_game(&state, 111, Some(5001), Some(5002))
        .await?;

    let text = service.text_channel(&state, game.id).await?.unwrap();
    assert_eq!(text.id, 5001);
    assert_eq!(text.kind, ChannelKind::Text);

    let voice = service.voice_channel(&state, game.id).await?.unwrap();
    assert_eq!(voice.id, 5002);
    assert_eq!(voice.kind, ChannelKind::Voice);

    // A session without recorded channels resolves to nothing
    let bare = service.create_game(&state, 222, None, None).await?;
    assert!(service.text_channel(&state, bare.id).await?.is_none());
    assert!(service.voice_channel(&state, bare.id).await?.is_none());

    Ok(())
}
