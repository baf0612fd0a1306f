//! State holder tests with mocked services.

mod common;

use common::*;
use std::sync::Arc;
use vinyls_client::{ArtistRepository, CollectorRepository, ServiceError};
use vinyls_state::{
    AlbumDetailState, AlbumListState, ArtistDetailState, ArtistListState, CollectorDetailState,
    CollectorListState, UiState,
};

// =============================================================================
// Albums list
// =============================================================================

mod album_list {
    use super::*;

    #[tokio::test]
    async fn test_load_publishes_loading_then_success() {
        init_tracing();
        let mut service = MockAlbums::new();
        service
            .expect_get_albums()
            .times(1)
            .returning(|| Ok(vec![album(100, "Buscando América")]));

        let screen = AlbumListState::new(album_repository(service));
        let handle = screen.load();

        assert_eq!(screen.state(), UiState::Loading);

        handle.await.unwrap();
        assert_eq!(screen.state(), UiState::Success(vec![album(100, "Buscando América")]));
    }

    #[tokio::test]
    async fn test_failure_becomes_error_message() {
        let mut service = MockAlbums::new();
        service.expect_get_albums().returning(|| {
            Err(ServiceError::Http {
                status: 404,
                message: "Not Found".to_string(),
                body: None,
            })
        });

        let screen = AlbumListState::new(album_repository(service));
        screen.load().await.unwrap();

        assert_eq!(screen.state(), UiState::Error("Error 404: Not Found".to_string()));
    }

    #[tokio::test]
    async fn test_retry_after_error() {
        let mut service = MockAlbums::new();
        let mut calls = 0;
        service.expect_get_albums().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(ServiceError::Connection("timed out".to_string()))
            } else {
                Ok(vec![album(100, "Buscando América")])
            }
        });

        let screen = AlbumListState::new(album_repository(service));

        screen.load().await.unwrap();
        assert_eq!(
            screen.state().error(),
            Some("Connection error: timed out")
        );

        screen.retry().await.unwrap();
        assert!(screen.state().is_success());
    }

    #[tokio::test]
    async fn test_sequential_loads_reflect_latest_result() {
        let mut service = MockAlbums::new();
        let mut calls = 0;
        service.expect_get_albums().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![album(100, "First")])
            } else {
                Ok(vec![album(101, "Second"), album(102, "Third")])
            }
        });

        let screen = AlbumListState::new(album_repository(service));

        screen.load().await.unwrap();
        screen.load().await.unwrap();

        let albums = screen.state().data().cloned().unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].name, "Second");
    }

    #[tokio::test]
    async fn test_new_load_cancels_the_one_in_flight() {
        let service = GatedAlbums::new(vec![album(200, "Fresh")]);
        let started = Arc::clone(&service.started);
        let screen = AlbumListState::new(album_repository(service));

        let stale = screen.load();
        started.notified().await;

        let fresh = screen.load();
        fresh.await.unwrap();

        assert!(stale.await.unwrap_err().is_cancelled());
        assert_eq!(screen.state(), UiState::Success(vec![album(200, "Fresh")]));
    }

    #[tokio::test]
    async fn test_dropping_screen_cancels_fetch() {
        let service = GatedAlbums::new(Vec::new());
        let started = Arc::clone(&service.started);
        let screen = AlbumListState::new(album_repository(service));

        let handle = screen.load();
        started.notified().await;
        drop(screen);

        assert!(handle.await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_panicking_service_becomes_error() {
        let mut service = MockAlbums::new();
        service
            .expect_get_albums()
            .returning(|| panic!("unexpected payload"));

        let screen = AlbumListState::new(album_repository(service));
        screen.load().await.unwrap();

        let message = screen.state().error().map(str::to_string).unwrap();
        assert!(message.contains("unexpected payload"));
    }

    #[tokio::test]
    async fn test_subscriber_observes_result() {
        let mut service = MockAlbums::new();
        service
            .expect_get_albums()
            .returning(|| Ok(vec![album(100, "Buscando América")]));

        let screen = AlbumListState::new(album_repository(service));
        let mut rx = screen.subscribe();

        let _handle = screen.load();

        let state = rx.wait_for(UiState::is_success).await.unwrap().clone();
        assert_eq!(state.data().map(Vec::len), Some(1));
    }
}

// =============================================================================
// Album detail
// =============================================================================

mod album_detail {
    use super::*;

    async fn loaded_screen(service: MockAlbums) -> AlbumDetailState {
        let screen = AlbumDetailState::new(album_repository(service), 100);
        screen.load(100).await.unwrap();
        screen
    }

    fn service_with_album() -> MockAlbums {
        let mut service = MockAlbums::new();
        service
            .expect_get_album()
            .withf(|id| *id == 100)
            .returning(|id| Ok(album(id, "Buscando América")));
        service
    }

    #[tokio::test]
    async fn test_load_album() {
        let screen = loaded_screen(service_with_album()).await;

        let state = screen.state();
        assert_eq!(state.album.data().map(|a| a.id), Some(100));
        assert!(!state.is_posting_comment);
    }

    #[tokio::test]
    async fn test_not_found_album() {
        let mut service = MockAlbums::new();
        service.expect_get_album().returning(|_| {
            Err(ServiceError::Http {
                status: 404,
                message: "The album with the given id was not found".to_string(),
                body: None,
            })
        });

        let screen = AlbumDetailState::new(album_repository(service), 100);
        screen.load(-1).await.unwrap();

        assert!(screen.state().album.error().unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_retry_reloads_same_album() {
        let mut service = MockAlbums::new();
        service
            .expect_get_album()
            .withf(|id| *id == 7)
            .times(2)
            .returning(|id| Ok(album(id, "Siembra")));

        let screen = AlbumDetailState::new(album_repository(service), 100);
        assert!(screen.retry().is_none());

        screen.load(7).await.unwrap();
        screen.retry().unwrap().await.unwrap();

        assert_eq!(screen.state().album.data().map(|a| a.id), Some(7));
    }

    #[tokio::test]
    async fn test_toggles_are_local() {
        let screen = loaded_screen(service_with_album()).await;

        screen.toggle_playing();
        screen.toggle_liked();
        screen.toggle_saved();
        screen.toggle_saved();

        let state = screen.state();
        assert!(state.is_playing);
        assert!(state.is_liked);
        assert!(!state.is_saved);
    }

    fn service_with_any_album() -> MockAlbums {
        let mut service = MockAlbums::new();
        service
            .expect_get_album()
            .returning(|id| Ok(album(id, "Buscando América")));
        service
    }

    #[tokio::test]
    async fn test_loading_other_album_resets_local_state() {
        let screen = AlbumDetailState::new(album_repository(service_with_any_album()), 100);
        screen.load(100).await.unwrap();

        screen.toggle_liked();
        screen.toggle_saved();
        screen.toggle_playing();
        screen.set_comment_draft("draft for album 100");

        screen.load(7).await.unwrap();

        let state = screen.state();
        assert_eq!(state.album.data().map(|a| a.id), Some(7));
        assert!(!state.is_liked);
        assert!(!state.is_saved);
        assert!(!state.is_playing);
        assert!(state.comment_draft.is_empty());
    }

    #[tokio::test]
    async fn test_retry_keeps_local_state() {
        let screen = AlbumDetailState::new(album_repository(service_with_any_album()), 100);
        screen.load(100).await.unwrap();

        screen.toggle_liked();
        screen.set_comment_draft("still typing");

        screen.retry().unwrap().await.unwrap();

        let state = screen.state();
        assert!(state.album.is_success());
        assert!(state.is_liked);
        assert_eq!(state.comment_draft, "still typing");
    }

    #[tokio::test]
    async fn test_comment_for_previous_album_leaves_new_album_alone() {
        let mut service = service_with_any_album();
        service
            .expect_add_comment()
            .times(1)
            .returning(|_, new| Ok(comment(55, &new.description)));

        let screen = AlbumDetailState::new(album_repository(service), 100);
        screen.load(100).await.unwrap();
        screen.set_comment_draft("Obra maestra");

        let posting = screen.add_comment().unwrap();
        let loading = screen.load(7);
        screen.set_comment_draft("draft for album 7");

        posting.await.unwrap();
        loading.await.unwrap();

        let state = screen.state();
        let album = state.album.data().unwrap();
        assert_eq!(album.id, 7);
        assert!(album.comments.is_empty());
        assert_eq!(state.comment_draft, "draft for album 7");
        assert!(!state.is_posting_comment);
    }

    #[tokio::test]
    async fn test_second_comment_waits_for_first() {
        let mut service = service_with_album();
        service
            .expect_add_comment()
            .times(1)
            .returning(|_, new| Ok(comment(55, &new.description)));

        let screen = loaded_screen(service).await;
        screen.set_comment_draft("Obra maestra");

        let first = screen.add_comment().unwrap();
        assert!(screen.state().is_posting_comment);
        assert!(screen.add_comment().is_none());

        first.await.unwrap();
        assert_eq!(screen.state().album.data().unwrap().comments.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_comment_is_not_sent() {
        let mut service = service_with_album();
        service.expect_add_comment().never();

        let screen = loaded_screen(service).await;
        screen.set_comment_draft("   ");
        let before = screen.state();

        assert!(screen.add_comment().is_none());
        assert_eq!(screen.state(), before);
    }

    #[tokio::test]
    async fn test_add_comment_appends_and_clears_draft() {
        let mut service = service_with_album();
        service
            .expect_add_comment()
            .withf(|album_id, comment| {
                *album_id == 100
                    && comment.description == "Obra maestra"
                    && comment.rating.get() == 5
                    && comment.collector_id == 100
            })
            .times(1)
            .returning(|_, new| Ok(comment(55, &new.description)));

        let screen = loaded_screen(service).await;
        screen.set_comment_draft("  Obra maestra ");
        screen.add_comment().unwrap().await.unwrap();

        let state = screen.state();
        let album = state.album.data().unwrap();
        assert_eq!(album.comments, vec![comment(55, "Obra maestra")]);
        assert!(state.comment_draft.is_empty());
        assert!(!state.is_posting_comment);
        assert!(state.comment_error.is_none());
    }

    #[tokio::test]
    async fn test_add_comment_failure_keeps_draft() {
        let mut service = service_with_album();
        service.expect_add_comment().returning(|_, _| {
            Err(ServiceError::Http {
                status: 412,
                message: "Precondition Failed".to_string(),
                body: Some("collector does not exist".to_string()),
            })
        });

        let screen = loaded_screen(service).await;
        screen.set_comment_draft("Obra maestra");
        screen.add_comment().unwrap().await.unwrap();

        let state = screen.state();
        assert_eq!(state.comment_draft, "Obra maestra");
        assert!(state.album.data().unwrap().comments.is_empty());
        let error = state.comment_error.unwrap();
        assert!(error.contains("412"));
        assert!(error.contains("collector does not exist"));
    }

    #[tokio::test]
    async fn test_add_comment_requires_loaded_album() {
        let mut service = MockAlbums::new();
        service.expect_add_comment().never();

        let screen = AlbumDetailState::new(album_repository(service), 100);
        screen.set_comment_draft("Obra maestra");

        assert!(screen.add_comment().is_none());
    }

    #[tokio::test]
    async fn test_add_track_is_local_only() {
        let screen = loaded_screen(service_with_album()).await;

        let added = screen.add_track(vinyls_core::Track {
            id: 2,
            name: "Desapariciones".to_string(),
            duration: "4:50".to_string(),
        });

        assert!(added);
        let tracks = screen.state().album.data().unwrap().tracks.clone();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].name, "Desapariciones");
    }

    #[tokio::test]
    async fn test_add_track_without_album() {
        let screen = AlbumDetailState::new(album_repository(MockAlbums::new()), 100);

        assert!(!screen.add_track(vinyls_core::Track {
            id: 2,
            name: "Desapariciones".to_string(),
            duration: "4:50".to_string(),
        }));
    }
}

// =============================================================================
// Artists
// =============================================================================

mod artists {
    use super::*;

    fn repository(service: MockArtists) -> Arc<ArtistRepository> {
        Arc::new(ArtistRepository::new(Arc::new(service), cache()))
    }

    #[tokio::test]
    async fn test_artist_list() {
        let mut service = MockArtists::new();
        service
            .expect_get_artists()
            .returning(|| Ok(vec![artist(100, "Rubén Blades"), artist(101, "Queen")]));

        let screen = ArtistListState::new(repository(service));
        screen.load().await.unwrap();

        assert_eq!(screen.state().data().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_artist_list_empty_response() {
        let mut service = MockArtists::new();
        service
            .expect_get_artists()
            .returning(|| Err(ServiceError::EmptyResponse));

        let screen = ArtistListState::new(repository(service));
        screen.retry().await.unwrap();

        assert_eq!(
            screen.state(),
            UiState::Error("Empty response from server".to_string())
        );
    }

    #[tokio::test]
    async fn test_artist_detail() {
        let mut service = MockArtists::new();
        service
            .expect_get_artist()
            .withf(|id| *id == 100)
            .returning(|id| Ok(artist(id, "Rubén Blades")));

        let screen = ArtistDetailState::new(repository(service));
        screen.load(100).await.unwrap();

        assert_eq!(screen.state().data().map(|a| a.name.as_str()), Some("Rubén Blades"));
    }
}

// =============================================================================
// Collectors
// =============================================================================

mod collectors {
    use super::*;

    fn repository(service: MockCollectors) -> Arc<CollectorRepository> {
        Arc::new(CollectorRepository::new(Arc::new(service), cache()))
    }

    #[tokio::test]
    async fn test_collector_list() {
        let mut service = MockCollectors::new();
        service
            .expect_get_collectors()
            .returning(|| Ok(vec![collector(100, "Manolo Bellon")]));

        let screen = CollectorListState::new(repository(service));
        screen.load().await.unwrap();

        assert_eq!(screen.state().data().unwrap()[0].name, "Manolo Bellon");
    }

    #[tokio::test]
    async fn test_collector_detail_combines_calls() {
        let mut service = MockCollectors::new();
        service
            .expect_get_collector()
            .returning(|id| Ok(collector(id, "Manolo Bellon")));
        service
            .expect_get_collector_albums()
            .times(1)
            .returning(|_| Ok(vec![collector_album(1, 100), collector_album(2, 101)]));

        let screen = CollectorDetailState::new(repository(service));
        screen.load(100).await.unwrap();
        screen.retry().unwrap().await.unwrap();

        let detail = screen.state().data().cloned().unwrap();
        assert_eq!(detail.collector.id, 100);
        assert_eq!(detail.albums.len(), 2);
    }

    #[tokio::test]
    async fn test_collector_detail_error() {
        let mut service = MockCollectors::new();
        service.expect_get_collector().returning(|_| {
            Err(ServiceError::Connection("connection refused".to_string()))
        });
        service.expect_get_collector_albums().never();

        let screen = CollectorDetailState::new(repository(service));
        screen.load(100).await.unwrap();

        assert_eq!(
            screen.state().error(),
            Some("Connection error: connection refused")
        );
    }
}
