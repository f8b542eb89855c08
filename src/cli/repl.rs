use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::{ChatSession, SubmitOutcome};
use crate::domain::Speaker;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Line-oriented chat loop: each input line is one submit.
///
/// Prints new tutor turns whenever the transcript revision moves, and the
/// session's error message after a failed turn. Ends on EOF or `/quit`.
pub async fn run_chat<R, W>(session: &mut ChatSession, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut shown = session.transcript().len();
    let mut revision = session.state().revision();

    output
        .write_all(b"SocraticAI - type a message, /quit to leave.\n")
        .await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        session.set_input(line);
        if !session.state().accepts(session.state().input()) {
            continue;
        }

        output.write_all(b"Tutor is thinking...\n").await?;
        let outcome = session.submit_input().await;

        if session.state().revision() != revision {
            revision = session.state().revision();
            for turn in &session.transcript().turns()[shown..] {
                if turn.speaker() == Speaker::Assistant {
                    output
                        .write_all(format!("tutor: {}\n", turn.text()).as_bytes())
                        .await?;
                }
            }
            shown = session.transcript().len();
        }

        if outcome == SubmitOutcome::Failed {
            if let Some(error) = session.state().error() {
                output.write_all(format!("error: {error}\n").as_bytes()).await?;
            }
        }
    }

    output.flush().await?;
    Ok(())
}
