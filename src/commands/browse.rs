use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{ViewOptions, open_browser};
use crate::display::format_view;
use crate::error::Result;
use crate::events::{EVENT_USAGE, EventLine, parse_event_line};

/// Drive the list from an event stream on stdin, one event per line.
///
/// Each event is handled to completion and the view is printed again before
/// the next line is read.
pub async fn cmd_browse(options: ViewOptions<'_>) -> Result<()> {
    let (_, mut browser) = open_browser(&options).await?;
    let interactive = atty::is(atty::Stream::Stdin);

    println!("{}", format_view(browser.view(), browser.options()));
    if interactive {
        println!("{EVENT_USAGE}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_event_line(&line) {
            Ok(EventLine::Quit) => break,
            Ok(EventLine::Show) => {}
            Ok(EventLine::Event(event)) => {
                if let Err(e) = browser.dispatch(event) {
                    eprintln!("{e}");
                    continue;
                }
            }
            Err(e) => {
                eprintln!("{e}");
                eprintln!("{EVENT_USAGE}");
                continue;
            }
        }

        println!("{}", format_view(browser.view(), browser.options()));
    }

    Ok(())
}
