//! `--once` mode: fetch a single joke, print it and exit.

use jokebox::api::JokeApiClient;
use jokebox::config::Config;
use jokebox::joke::Joke;
use tracing::error;

/// Print one joke for the configured category. Returns the process exit code.
pub(crate) async fn run_once(config: &Config) -> i32 {
    let client = JokeApiClient::new(&config.service);
    let category = config.widget.category;
    match client.fetch(category).await {
        Ok(response) => {
            let failed = response.error;
            println!("{}", response.into_joke().text);
            i32::from(failed)
        }
        Err(err) => {
            error!(%err, %category, "error fetching joke");
            println!("{}", Joke::fetch_failed().text);
            1
        }
    }
}
