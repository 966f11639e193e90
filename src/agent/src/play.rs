use std::io::Write;

use rps_common::{
    model::{game::Side, messages::ClientResponse},
    strategy::StrategyKind,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::{client::Client, error::ClientError, render::render_response};

/// Reads moves line by line until `quit` or end of input. After each match the
/// player is asked whether to play again.
pub async fn run_interactive<R, W>(
    client: &mut Client,
    input: R,
    output: &mut W,
) -> Result<(), ClientError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let winning_score = client.new_match().await?;
    writeln!(
        output,
        "{}",
        render_response(&ClientResponse::MatchStarted { winning_score })
    )?;

    loop {
        write!(output, "Your move (rock, paper, scissors or quit): ")?;
        output.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let value = line.trim();
        match value {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        let mut match_over = false;
        for response in client.play(value).await? {
            writeln!(output, "{}", render_response(&response))?;
            match_over |= matches!(response, ClientResponse::MatchResult { .. });
        }
        if !match_over {
            continue;
        }

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        let again = lines.next_line().await?.unwrap_or_default();
        if !again.trim().eq_ignore_ascii_case("y") {
            break;
        }
        let winning_score = client.new_match().await?;
        writeln!(
            output,
            "{}",
            render_response(&ClientResponse::MatchStarted { winning_score })
        )?;
    }
    Ok(())
}

/// Plays `matches` matches with a fresh `kind` strategy each time; returns the
/// number of matches won.
pub async fn run_automatic<W: Write>(
    client: &mut Client,
    kind: StrategyKind,
    matches: u32,
    output: &mut W,
) -> Result<u32, ClientError> {
    let mut wins = 0;
    for number in 1..=matches {
        let winning_score = client.new_match().await?;
        writeln!(
            output,
            "Match {}: first to {} with {} strategy",
            number, winning_score, kind
        )?;

        let mut strategy = kind.build();
        let mut rendered = Vec::new();
        let winner = client
            .play_match(strategy.as_mut(), |response| {
                rendered.push(render_response(response))
            })
            .await?;
        for line in rendered {
            writeln!(output, "{}", line)?;
        }
        if winner == Side::Player {
            wins += 1;
        }
    }
    info!("Won {} of {} matches", wins, matches);
    writeln!(output, "Won {} of {} matches", wins, matches)?;
    Ok(wins)
}
