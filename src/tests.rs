//! Scenarios that run across the editor, font and modal modules

#[cfg(test)]
mod language_tests {
    use crate::editor::snippets::{languages, snippet, snippet_or_placeholder, PLACEHOLDER};
    use crate::editor::{EditorConfig, EditorFacade};
    use crate::testing::RecordingEditor;

    #[test]
    fn test_every_language_loads_its_snippet() {
        let mut facade = EditorFacade::create(RecordingEditor::default(), EditorConfig::default());
        for language in languages() {
            facade.set_language(language);
            assert_eq!(facade.host().language, *language);
            assert_eq!(Some(facade.host().value.as_str()), snippet(language));
            assert_eq!(facade.config().active_language, *language);
        }
    }

    #[test]
    fn test_unknown_language_gets_placeholder() {
        let mut facade = EditorFacade::create(RecordingEditor::default(), EditorConfig::default());
        facade.set_language("cobol");
        assert_eq!(facade.host().language, "cobol");
        assert_eq!(facade.host().value, PLACEHOLDER);
        assert_eq!(snippet_or_placeholder("plaintext"), PLACEHOLDER);
    }
}

#[cfg(test)]
mod typography_tests {
    use crate::core::cli::CliArgs;
    use crate::core::state::AppState;
    use crate::testing::{CountingLayer, RecordingEditor, RecordingLoader};
    use clap::Parser;

    #[test]
    fn test_line_height_follows_size_and_multiplier() {
        let startup = CliArgs::parse_from(["typecase"]).resolve(None);
        let mut state = AppState::new(
            RecordingEditor::default(),
            RecordingLoader::default(),
            CountingLayer::default(),
            startup,
        );
        assert_eq!(state.editor_config().line_height_px, 24);

        assert!(state.set_font_size_input("20"));
        assert_eq!(state.editor.host().line_height, Some(30));

        assert!(state.set_line_height_input("1.0"));
        assert_eq!(state.editor.host().line_height, Some(20));

        assert!(!state.set_font_size_input("abc"));
        assert!(!state.set_line_height_input("5"));
        assert_eq!(state.editor_config().font_size_px, 20);
        assert_eq!(state.editor.host().line_height, Some(20));
    }
}

#[cfg(test)]
mod font_search_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::core::cli::CliArgs;
    use crate::core::state::AppState;
    use crate::fonts::{curated_fonts, search, Font, QueryTicket, RawFontRecord, SearchDebouncer};
    use crate::testing::{CountingLayer, FakeFontSource, RecordingEditor, RecordingLoader};
    use clap::Parser;

    type TestState = AppState<RecordingEditor, RecordingLoader, CountingLayer>;

    fn test_state() -> TestState {
        let startup = CliArgs::parse_from(["typecase"]).resolve(None);
        AppState::new(
            RecordingEditor::default(),
            RecordingLoader::default(),
            CountingLayer::default(),
            startup,
        )
    }

    fn records() -> Vec<RawFontRecord> {
        [("Space Mono", "monospace"), ("Fira Sans", "sans-serif"), ("Lora", "serif")]
            .into_iter()
            .map(|(family, category)| RawFontRecord {
                family: family.to_string(),
                category: Some(category.to_string()),
            })
            .collect()
    }

    fn names(fonts: &[Font]) -> Vec<&str> {
        fonts.iter().map(|font| font.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_query_is_curated_without_remote_call() {
        let source = FakeFontSource::new(records());
        let fonts = search::search(&source, &curated_fonts(), "   ").await;
        assert_eq!(fonts, curated_fonts());
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failing_source_yields_no_fonts() {
        let fonts = search::search(&FakeFontSource::failing(), &curated_fonts(), "mono").await;
        assert!(fonts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_first_query_never_overwrites_newer_results() {
        let source = Arc::new(
            FakeFontSource::new(records())
                .with_delay("fira", Duration::from_secs(2))
                .with_delay("space", Duration::from_millis(50)),
        );
        let (mut debouncer, mut rx) =
            SearchDebouncer::new(Arc::clone(&source), curated_fonts(), Duration::from_millis(500));
        let mut state = test_state();

        for query in ["fira", "space"] {
            let QueryTicket::Remote { generation, query } = state.begin_font_search(query) else {
                panic!("non-empty query should go remote");
            };
            debouncer.schedule(generation, query);
            tokio::time::sleep(Duration::from_millis(700)).await;
        }

        let outcome = rx.recv().await.unwrap();
        assert!(state.apply_search_outcome(outcome));
        assert_eq!(names(state.fonts.visible()), vec!["Space Mono"]);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(names(state.fonts.visible()), vec!["Space Mono"]);
        assert_eq!(state.fonts.current_query(), "space");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_query_drops_late_results() {
        let source = Arc::new(FakeFontSource::new(records()));
        let (mut debouncer, mut rx) =
            SearchDebouncer::new(Arc::clone(&source), curated_fonts(), Duration::from_millis(500));
        let mut state = test_state();

        let QueryTicket::Remote { generation, query } = state.begin_font_search("lora") else {
            panic!("non-empty query should go remote");
        };
        debouncer.schedule(generation, query);
        tokio::time::sleep(Duration::from_millis(600)).await;
        let late = rx.recv().await.unwrap();

        assert_eq!(state.begin_font_search(""), QueryTicket::Immediate);
        debouncer.cancel();
        assert!(!state.apply_search_outcome(late));
        assert_eq!(state.fonts.visible(), curated_fonts().as_slice());
    }

    #[test]
    fn test_remote_font_stylesheet_is_injected_once() {
        let mut state = test_state();
        let lora = Font::from_remote("Lora", Some("serif"));
        assert_eq!(lora.value, "'Lora', serif");

        state.select_font(lora.clone());
        state.select_font(curated_fonts()[1].clone());
        state.select_font(lora);

        assert_eq!(state.loader.requests.len(), 1);
        assert_eq!(state.loader.requests[0].key, "font-lora");
        assert_eq!(state.editor.host().font_family.as_deref(), Some("'Lora', serif"));
    }
}

#[cfg(test)]
mod modal_tests {
    use crate::core::cli::CliArgs;
    use crate::core::state::AppState;
    use crate::testing::{CountingLayer, RecordingEditor, RecordingLoader};
    use clap::Parser;

    #[test]
    fn test_toggle_twice_leaves_no_live_layer() {
        let startup = CliArgs::parse_from(["typecase"]).resolve(None);
        let layer = CountingLayer::default();
        let mut state = AppState::new(
            RecordingEditor::default(),
            RecordingLoader::default(),
            layer.clone(),
            startup,
        );

        assert!(state.toggle_modal_mode());
        assert!(!state.status.is_empty());
        assert!(!state.toggle_modal_mode());
        assert!(state.status.is_empty());

        state.disable_modal_mode();
        state.disable_modal_mode();
        assert_eq!(layer.attached(), 1);
        assert_eq!(layer.disposed(), 1);
        assert_eq!(layer.live_handles(), 0);
        assert!(!state.editor.host().modal_attached);
    }

    #[test]
    fn test_enable_twice_attaches_once() {
        let startup = CliArgs::parse_from(["typecase", "--vim"]).resolve(None);
        let layer = CountingLayer::default();
        let mut state = AppState::new(
            RecordingEditor::default(),
            RecordingLoader::default(),
            layer.clone(),
            startup,
        );

        state.enable_modal_mode();
        state.modal.enable(state.editor.host_mut(), &mut state.status);
        assert_eq!(layer.attached(), 1);
        assert_eq!(layer.live_handles(), 1);
    }
}
