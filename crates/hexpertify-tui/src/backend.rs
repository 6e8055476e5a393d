//! Background task owning the data service.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use hexpertify_core::{Banner, CoreError, ProfileApi};

use crate::event::{BackendCommand, UiEvent};

/// Run the backend loop.
///
/// This function runs in a separate thread with its own tokio runtime. It
/// loads the initial data, then serves commands from the UI thread until
/// told to quit or the UI hangs up.
pub async fn run_backend(
    api: Arc<dyn ProfileApi>,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    info!("Backend started");

    load_profile(api.as_ref(), &ui_tx).await;
    load_services(api.as_ref(), &ui_tx).await;

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::Quit => {
                info!("Received quit command, shutting down backend");
                break;
            }
            BackendCommand::LoadProfile => {
                load_profile(api.as_ref(), &ui_tx).await;
            }
            BackendCommand::LoadServices => {
                load_services(api.as_ref(), &ui_tx).await;
            }
            BackendCommand::UpdateProfile(update) => {
                debug!(skills = update.skills.len(), "Updating profile");
                let event = match api.update_me(update).await {
                    Ok(profile) => UiEvent::ProfileSaved(profile),
                    Err(CoreError::Validation(errors)) => {
                        warn!(%errors, "Profile update rejected");
                        UiEvent::ProfileRejected(errors)
                    }
                    Err(e) => {
                        error!(error = %e, "Profile update failed");
                        UiEvent::ProfileUpdateFailed(e.to_string())
                    }
                };
                let _ = ui_tx.send(event).await;
            }
            BackendCommand::UploadBanner(path) => {
                info!(path = %path.display(), "Uploading banner");
                let result = match Banner::from_path(&path) {
                    Ok(banner) => api.update_banner(banner).await,
                    Err(e) => Err(e),
                };
                let event = match result {
                    Ok(profile) => UiEvent::BannerSaved(profile),
                    Err(e) => {
                        error!(error = %e, "Banner upload failed");
                        UiEvent::BannerFailed(e.to_string())
                    }
                };
                let _ = ui_tx.send(event).await;
            }
        }
    }

    info!("Backend shutdown complete");
}

async fn load_profile(api: &dyn ProfileApi, ui_tx: &mpsc::Sender<UiEvent>) {
    let event = match api.get_me().await {
        Ok(profile) => {
            debug!(id = %profile.id, "Fetched profile");
            UiEvent::ProfileLoaded(profile)
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch profile");
            UiEvent::ProfileLoadFailed(e.to_string())
        }
    };
    let _ = ui_tx.send(event).await;
}

async fn load_services(api: &dyn ProfileApi, ui_tx: &mpsc::Sender<UiEvent>) {
    let event = match api.list_services().await {
        Ok(rows) => {
            debug!(count = rows.len(), "Fetched services");
            UiEvent::ServicesLoaded(rows)
        }
        Err(e) => {
            debug!(error = %e, "Failed to fetch services");
            UiEvent::Error(format!("Services: {}", e))
        }
    };
    let _ = ui_tx.send(event).await;
}
