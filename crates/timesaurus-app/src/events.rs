use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use kanal::{AsyncReceiver, AsyncSender};
use timesaurus_config::Config;
use timesaurus_core::types::{AppEvent, UiEvent};
use timesaurus_core::{Dashboard, Decade, Language, LanguageProfile};
use timesaurus_lang_english::EnglishPack;
use timesaurus_lang_french::FrenchPack;

use crate::state::AppState;

pub mod decade_change;
pub mod language_toggle;
pub mod word_commit;
pub mod word_input;

use decade_change::handle_decade_change;
use language_toggle::handle_language_toggle;
use word_commit::handle_word_commit;
use word_input::handle_word_input;

/// Load both language packs and open the dashboard configured in `config`
pub fn build_dashboard(config: &Config) -> anyhow::Result<Dashboard> {
    let language = Language::from_code(&config.language)
        .ok_or_else(|| anyhow!("unsupported language '{}'", config.language))?;
    let decade = Decade::from_year(config.decade)
        .ok_or_else(|| anyhow!("{} is not one of the decades 1920-2010", config.decade))?;

    let english = EnglishPack::with_dataset(config.dataset.english_path.as_ref().map(PathBuf::from));
    let french = FrenchPack::with_dataset(config.dataset.french_path.as_ref().map(PathBuf::from));
    let profiles = [
        LanguageProfile::from_pack(&english)?,
        LanguageProfile::from_pack(&french)?,
    ];

    Ok(Dashboard::new(profiles, language, decade)?)
}

/// App's main loop; owns the dashboard and applies UI events in order
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut dashboard = {
        let config = state.config.read().await;
        build_dashboard(&config)?
    };

    app_to_ui_tx
        .send(AppEvent::SetDocumentLanguage(dashboard.active_language()))
        .await?;
    app_to_ui_tx
        .send(AppEvent::ShowDashboard(Box::new(dashboard.view())))
        .await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    while let Ok(event) = ui_to_app_rx.recv().await {
        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        if handle_events(&mut dashboard, &app_to_ui_tx, event)
            .await?
            .is_break()
        {
            tracing::info!("[EVENT_LOOP] Close requested");
            return Ok(());
        }
    }

    tracing::warn!("[EVENT_LOOP] UI channel closed");
    Ok(())
}

async fn handle_events(
    dashboard: &mut Dashboard,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    let AppEvent::UiEvent(event) = event else {
        // Everything else flows app -> ui only
        return Ok(ControlFlow::Continue(()));
    };

    match event {
        UiEvent::DecadeChange(decade) => {
            handle_decade_change(dashboard, decade, app_to_ui_tx).await?;
        }
        UiEvent::WordInputChange { slot, text } => {
            handle_word_input(dashboard, slot, &text, app_to_ui_tx).await?;
        }
        UiEvent::WordCommit(slot) => {
            handle_word_commit(dashboard, slot, app_to_ui_tx).await?;
        }
        UiEvent::LanguageToggle => {
            handle_language_toggle(dashboard, app_to_ui_tx).await?;
        }
        UiEvent::Refresh => {
            app_to_ui_tx
                .send(AppEvent::ShowDashboard(Box::new(dashboard.view())))
                .await?;
        }
        UiEvent::Close => return Ok(ControlFlow::Break(())),
    }

    Ok(ControlFlow::Continue(()))
}
