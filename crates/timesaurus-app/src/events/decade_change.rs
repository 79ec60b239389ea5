use kanal::AsyncSender;
use timesaurus_core::types::AppEvent;
use timesaurus_core::{Dashboard, Decade};

pub async fn handle_decade_change(
    dashboard: &mut Dashboard,
    decade: Decade,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    dashboard.on_decade_change(decade);
    app_to_ui_tx
        .send(AppEvent::ShowDashboard(Box::new(dashboard.view())))
        .await?;
    Ok(())
}
