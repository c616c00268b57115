mod execute;
pub mod menu;
mod timers;

use std::future::Future;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use self::{
    execute::{execute_commands, write_line},
    menu::{FAREWELL, MenuChoice, PROMPT, render_menu},
    timers::CompletionTimers,
};
use crate::{
    shutdown::{Interrupt, InterruptError},
    state::{Appliance, CookerState, Event},
    traits::MealyMachine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Reprint the numbered menu before every prompt.
    pub show_menu: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { show_menu: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SessionEnd {
    Exit,
    InputClosed,
    Interrupted(Interrupt),
}

// ─── Main entry ─────────────────────────────────────────────────────────────

/// Runs one operator session against a fresh appliance.
///
/// Operator lines, completion deadlines and the interrupt signal are
/// multiplexed on this single task, so every event reaches the appliance
/// in arrival order and nothing else ever touches it.
pub async fn run<R, W, S>(
    config: ConsoleConfig,
    input: R,
    output: &mut W,
    interrupt: S,
) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = Result<Interrupt, InterruptError>>,
{
    // Undecodable bytes are bad input, not a read failure
    let mut lines = input.split(b'\n');
    let mut appliance = Appliance::new();
    let mut timers = CompletionTimers::new();
    let mut interrupt_armed = true;
    tokio::pin!(interrupt);

    tracing::info!(state = %appliance.state(), "rice cooker ready");
    prompt(&config, output).await?;

    loop {
        let next_completion = timers.next_deadline();

        tokio::select! {
            segment = lines.next_segment() => {
                let Some(segment) = segment.context("failed to read operator input")? else {
                    tracing::info!("operator input closed");
                    return finish(output, SessionEnd::InputClosed).await;
                };
                let line = String::from_utf8_lossy(&segment);

                match line.parse::<MenuChoice>() {
                    Ok(choice) => {
                        tracing::debug!(%choice, "menu choice");
                        match choice.event() {
                            Some(event) => {
                                appliance = dispatch(appliance, event, &mut timers, output).await?;
                            }
                            None => return finish(output, SessionEnd::Exit).await,
                        }
                    }
                    Err(error) => {
                        tracing::debug!(input = %line.trim(), %error, "menu input rejected");
                        write_line(output, &error.to_string())
                            .await
                            .context("failed to write to console")?;
                    }
                }

                prompt(&config, output).await?;
            }
            _ = async {
                match next_completion {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = tokio::time::Instant::now();
                for (cycle, generation) in timers.take_due(now) {
                    appliance = dispatch(
                        appliance,
                        Event::CompletionDue { cycle, generation },
                        &mut timers,
                        output,
                    )
                    .await?;
                }
            }
            result = &mut interrupt, if interrupt_armed => match result {
                Ok(signal) => {
                    tracing::info!(%signal, "session interrupted");
                    return finish(output, SessionEnd::Interrupted(signal)).await;
                }
                Err(error) => {
                    tracing::warn!(%error, "interrupt listener failed");
                    interrupt_armed = false;
                }
            },
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────────

async fn dispatch<W>(
    appliance: Appliance,
    event: Event,
    timers: &mut CompletionTimers,
    output: &mut W,
) -> Result<Appliance>
where
    W: AsyncWrite + Unpin,
{
    let old_state = appliance.state();
    let (appliance, commands) = appliance.transition(event);
    tracing::debug!(%event, commands = commands.len(), "event processed");
    log_state_transition(old_state, appliance.state(), commands.len());
    execute_commands(&commands, timers, output)
        .await
        .context("failed to write to console")?;
    Ok(appliance)
}

async fn prompt<W>(config: &ConsoleConfig, output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    if config.show_menu {
        output.write_all(render_menu().as_bytes()).await?;
    }
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await.context("failed to write to console")
}

async fn finish<W>(output: &mut W, end: SessionEnd) -> Result<SessionEnd>
where
    W: AsyncWrite + Unpin,
{
    write_line(output, FAREWELL)
        .await
        .context("failed to write to console")?;
    Ok(end)
}

fn log_state_transition(old: CookerState, new: CookerState, commands: usize) {
    match old == new {
        true => {}
        false => {
            tracing::info!(from = %old, to = %new, commands, "state transition");
        }
    }
}
