use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::{config_handler::Config, report_service::ReportService, rest_client::FaceitClient};

/// Match id from a FACEIT room URL: the last path segment, ignoring a
/// trailing slash, query and fragment. A bare id is returned as is.
pub fn parse_match_id(url: &str) -> anyhow::Result<String> {
    let url = url.trim();
    let url = url.split(['?', '#']).next().unwrap_or_default();
    let id = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    anyhow::ensure!(!id.is_empty(), "No match id in {url:?}");
    Ok(id.to_string())
}

fn prompt(msg: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{msg}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)
        .context("Failed to read match URL")?;
    Ok(line)
}

/// Reports on the match URL given as the first argument, or asks for one.
pub async fn run(config: &Config, mut args: impl Iterator<Item = String>) -> anyhow::Result<()> {
    config.ensure_api_key()?;
    let url = match args.next() {
        Some(url) => url,
        None => prompt("Enter match URL: ")?,
    };
    let match_id = parse_match_id(&url)?;

    let client = FaceitClient::from_config(config);
    let report = ReportService::generate(&client, &match_id, &config.lang).await?;
    print!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_match_id;

    #[test]
    fn takes_last_path_segment() {
        let id = parse_match_id("https://www.faceit.com/en/ow2/room/1-7caef5b0-d063-4855-b349-77800a27f6c4").unwrap();
        assert_eq!(id, "1-7caef5b0-d063-4855-b349-77800a27f6c4");
    }

    #[test]
    fn ignores_whitespace_slash_and_query() {
        assert_eq!(parse_match_id("  https://www.faceit.com/en/ow2/room/1-abc/\n").unwrap(), "1-abc");
        assert_eq!(parse_match_id("https://www.faceit.com/en/ow2/room/1-abc?tab=stats#top").unwrap(), "1-abc");
        assert_eq!(parse_match_id("1-abc").unwrap(), "1-abc");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_match_id("").is_err());
        assert!(parse_match_id("  \n").is_err());
        assert!(parse_match_id("///").is_err());
    }
}
