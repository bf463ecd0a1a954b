use crate::commands::{ViewOptions, open_browser};
use crate::display::{format_view_table, view_to_json};
use crate::error::Result;

/// List the catalog, optionally sorted and filtered
pub async fn cmd_ls(options: ViewOptions<'_>, output_json: bool) -> Result<()> {
    let (_, browser) = open_browser(&options).await?;

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view_to_json(browser.view()))?
        );
        return Ok(());
    }

    if browser.view().is_empty() {
        return Ok(());
    }

    println!("{}", format_view_table(browser.view(), browser.options()));
    Ok(())
}
