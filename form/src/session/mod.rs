//! The interactive loop: one text-entry surface and one trigger.
//!
//! Lines typed at the prompt accumulate as the pending document. `:decode`,
//! or an empty line once the pending text is a complete JSON document,
//! decodes it and redraws the rows. Empty lines inside an unfinished document
//! are kept as part of it. `:show` redraws, `:clear` drops the pending text
//! and `:quit` (or end of input) leaves.

use std::io::Write;

use place::PlaceDecoder;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::config::FormConfig;
use crate::errors::Result;
use crate::state::FormState;
use crate::view::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Decode,
    Show,
    Clear,
    Quit,
    Blank,
    Text(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":decode" => Command::Decode,
            ":show" => Command::Show,
            ":clear" => Command::Clear,
            ":quit" => Command::Quit,
            "" => Command::Blank,
            _ => Command::Text(line),
        }
    }
}

pub async fn run<R, W>(config: &FormConfig, decoder: PlaceDecoder, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = FormState::seeded(decoder, &config.seed);
    render(out, &state.current())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Show => render(out, &state.current())?,
            Command::Clear => state.clear_input(),
            Command::Decode if state.has_input() => submit(config, &mut state, out)?,
            Command::Decode => debug!("nothing to decode"),
            Command::Blank if state.input_is_complete() => submit(config, &mut state, out)?,
            Command::Blank if state.has_input() => state.push_line(""),
            Command::Blank => {}
            Command::Text(text) => state.push_line(text),
        }
    }

    Ok(())
}

fn submit<W: Write>(config: &FormConfig, state: &mut FormState, out: &mut W) -> Result<()> {
    let (outcome, _previous) = state.submit();
    if config.report_outcome {
        writeln!(out, "{outcome}")?;
    }
    render(out, &state.current())?;
    Ok(())
}
