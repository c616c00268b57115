use tokio::{
    io::{self, AsyncWrite, AsyncWriteExt},
    time::Instant,
};

use super::timers::CompletionTimers;
use crate::state::Command;

pub async fn execute_commands<W>(
    commands: &[Command],
    timers: &mut CompletionTimers,
    output: &mut W,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for cmd in commands {
        match cmd {
            Command::Report(notice) => {
                write_line(output, &notice.to_string()).await?;
            }
            Command::ScheduleCompletion {
                cycle,
                generation,
                after,
            } => {
                timers.schedule(*cycle, *generation, Instant::now() + *after);
                tracing::debug!(%cycle, generation, ?after, "completion scheduled");
            }
            Command::AbandonCompletion { generation } => match timers.abandon(*generation) {
                true => tracing::debug!(generation, "completion abandoned"),
                false => tracing::debug!(generation, "no pending completion to abandon"),
            },
        }
    }
    Ok(())
}

pub async fn write_line<W>(output: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
