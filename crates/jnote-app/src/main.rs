use anyhow::Result;
use clap::Parser;
use jnote_airtable::AirtableClient;
use jnote_config::Config;
use jnote_lang_japanese::JishoClient;
use tracing_subscriber::EnvFilter;

pub mod pipeline;

#[cfg(test)]
mod tests;

/// Look up a Japanese word on jisho.org and add it to an Airtable table
#[derive(Parser, Debug)]
#[command(name = "jnote", version)]
struct Cli {
    /// Word to look up [default: $POPCLIP_FULL_TEXT]
    keyword: Option<String>,

    /// Airtable token [default: $POPCLIP_OPTION_ARITABLE_API_KEY]
    #[arg(long)]
    api_key: Option<String>,

    /// Airtable table endpoint [default: $POPCLIP_OPTION_AIRTABLE_DB_URL]
    #[arg(long)]
    table_url: Option<String>,

    /// Word search endpoint [default: $JISHO_API_URL or jisho.org]
    #[arg(long)]
    jisho_url: Option<String>,

    /// Print the row that would be inserted instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// Flags win over the environment
    fn apply(&mut self, config: &mut Config) {
        if let Some(keyword) = self.keyword.take() {
            config.keyword = keyword;
        }
        if let Some(api_key) = self.api_key.take() {
            config.airtable.api_key = api_key;
        }
        if let Some(table_url) = self.table_url.take() {
            config.airtable.table_url = table_url;
        }
        if let Some(jisho_url) = self.jisho_url.take() {
            config.jisho.api_url = jisho_url;
        }
    }
}

/// Logs go to stderr; stdout only carries the response.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let mut config = Config::new();
    cli.apply(&mut config);

    init_tracing(cli.json_logs);

    let lexicon = JishoClient::new(config.jisho.api_url.clone());

    let response = if cli.dry_run {
        pipeline::preview(&config.keyword, &lexicon).await?
    } else {
        let sink = AirtableClient::new(
            config.airtable.table_url.clone(),
            config.airtable.api_key.clone(),
        );
        pipeline::run(&config.keyword, &lexicon, &sink).await?
    };

    println!("{response}");
    Ok(())
}
