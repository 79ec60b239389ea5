use kanal::AsyncSender;
use timesaurus_core::types::AppEvent;
use timesaurus_core::{Dashboard, Slot};

/// Keystroke: only the suggestion list changes, charts stay as committed
pub async fn handle_word_input(
    dashboard: &mut Dashboard,
    slot: Slot,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    dashboard.on_word_input_change(slot, text);

    let suggestions = dashboard.current_suggestions().to_vec();
    tracing::debug!("{} suggestions for slot {}", suggestions.len(), slot);
    app_to_ui_tx
        .send(AppEvent::ShowSuggestions(suggestions))
        .await?;
    Ok(())
}
