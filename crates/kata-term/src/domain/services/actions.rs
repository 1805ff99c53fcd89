use std::sync::Arc;

use anyhow::Result;
use kata_runner_client::ExecutionRequest;
use kata_runner_client::RunnerClientBox;
use tokio::sync::mpsc;

use super::ThemeRegistry;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::RunKind;
use crate::domain::models::ThemeDescriptor;

async fn run_code(
    runner_client: &RunnerClientBox,
    kind: RunKind,
    code: String,
    token: u64,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let request = ExecutionRequest::new(code);
    let result = match kind {
        RunKind::Execute => runner_client.execute(request).await,
        RunKind::Submit => runner_client.submit(request).await,
    };

    match result {
        Ok(response) => event_tx.send(Event::RunCompleted(kind, token, response))?,
        Err(err) => event_tx.send(Event::RunFailed(kind, token, err))?,
    }

    Ok(())
}

async fn load_theme(
    theme_registry: &ThemeRegistry,
    descriptor: ThemeDescriptor,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match theme_registry.ensure_loaded(&descriptor).await {
        Ok(()) => event_tx.send(Event::ThemeCommitted(descriptor))?,
        Err(err) => event_tx.send(Event::ThemeFailed(descriptor, err))?,
    }

    Ok(())
}

/// Turns actions from the UI loop into async work against the runner and
/// the theme registry, reporting outcomes back as events. Each action runs
/// on its own task so a slow runner call never delays a theme load.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        runner_client: RunnerClientBox,
        theme_registry: Arc<ThemeRegistry>,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let runner_client_arc = Arc::new(runner_client);

        while let Some(action) = rx.recv().await {
            let worker_event_tx = event_tx.clone();
            match action {
                Action::RunRequest(kind, code, token) => {
                    let client_worker = runner_client_arc.clone();
                    tokio::spawn(async move {
                        if let Err(err) =
                            run_code(&client_worker, kind, code, token, &worker_event_tx).await
                        {
                            tracing::error!(error = ?err, "event channel closed during run");
                        }
                    });
                }
                Action::SelectTheme(descriptor) => {
                    let registry_worker = theme_registry.clone();
                    tokio::spawn(async move {
                        if let Err(err) =
                            load_theme(&registry_worker, descriptor, &worker_event_tx).await
                        {
                            tracing::error!(error = ?err, "event channel closed during theme load");
                        }
                    });
                }
            }
        }

        Ok(())
    }
}
