use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use super::{BankView, Control};
use crate::errors::BankClientError;
use crate::program::BankProgram;

/// Interactive front end: reads one control per line from `input`, fires the
/// matching action without waiting for it, and redraws the view on `output`
/// each time the bank list is replaced.
///
/// Ends on `q` or end of input. Actions still in flight at that point are
/// awaited before returning.
pub async fn run<P, R, W>(view: BankView<P>, input: R, mut output: W) -> Result<(), BankClientError>
where
    P: BankProgram + ?Sized + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut updates = view.subscribe();
    let mut tasks = JoinSet::new();

    write!(output, "{}", view.render())?;
    output.flush()?;

    loop {
        tokio::select! {
            biased;

            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                write!(output, "{}", view.render())?;
                output.flush()?;
            }
            Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                if let Err(e) = joined {
                    error!("Action task failed: {}", e);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    write!(output, "{}", view.render())?;
                    output.flush()?;
                    continue;
                }

                let action = line
                    .parse::<Control>()
                    .and_then(|control| control.resolve(&view.banks()));
                match action {
                    Ok(Some(action)) => {
                        view.trigger_in(action, &mut tasks);
                    }
                    Ok(None) => break,
                    Err(e) => warn!("{}", e),
                }
            }
        }
    }

    if !tasks.is_empty() {
        debug!("Waiting for {} pending action(s)", tasks.len());
    }
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!("Action task failed: {}", e);
        }
    }

    if updates.has_changed().unwrap_or(false) {
        write!(output, "{}", view.render())?;
        output.flush()?;
    }

    Ok(())
}
