use tokio::signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Interrupt {
    CtrlC,
    Terminate,
}

#[derive(Debug, thiserror::Error)]
pub enum InterruptError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(std::io::Error),
    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    Sigterm(std::io::Error),
}

/// Resolves with the signal that interrupted the session.
pub async fn interrupted() -> Result<Interrupt, InterruptError> {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .map(|()| Interrupt::CtrlC)
            .map_err(InterruptError::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(InterruptError::Sigterm)?;
        let _ = sigterm.recv().await;
        Ok::<_, InterruptError>(Interrupt::Terminate)
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<Interrupt, InterruptError>>();

    tokio::select! {
        result = ctrl_c => result,
        result = terminate => result,
    }
}
