use kanal::AsyncSender;
use timesaurus_core::types::AppEvent;
use timesaurus_core::{Dashboard, Slot};

pub async fn handle_word_commit(
    dashboard: &mut Dashboard,
    slot: Slot,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Rejections are silent for the user; the input simply snaps back
    dashboard.on_word_commit(slot);

    app_to_ui_tx
        .send(AppEvent::ShowDashboard(Box::new(dashboard.view())))
        .await?;
    Ok(())
}
