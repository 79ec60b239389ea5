use kanal::AsyncSender;
use timesaurus_core::Dashboard;
use timesaurus_core::types::AppEvent;

pub async fn handle_language_toggle(
    dashboard: &mut Dashboard,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let language = dashboard.on_language_toggle();

    app_to_ui_tx
        .send(AppEvent::SetDocumentLanguage(language))
        .await?;
    app_to_ui_tx
        .send(AppEvent::ShowDashboard(Box::new(dashboard.view())))
        .await?;
    Ok(())
}
