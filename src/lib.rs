//! Jokebox: a random joke card for the terminal.
//!
//! The crate fetches jokes from a JokeAPI-compatible service, lets the user
//! browse categories, copy the current joke to the system clipboard, and
//! switch between a light and a dark theme that persists across runs.
//!
//! # Quick start
//!
//! ```no_run
//! use jokebox::api::JokeApiClient;
//! use jokebox::config::load_config;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = JokeApiClient::new(&config.service);
//! let joke = client.fetch(config.widget.category).await.unwrap().into_joke();
//! println!("{}", joke.text);
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod joke;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
pub mod widget;
