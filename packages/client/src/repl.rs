//! Interactive swipe session.
//!
//! A line-oriented loop: the current deck item is printed, the participant
//! answers `l` or `r`, and room events that arrived in the meantime are
//! shown between prompts.

use std::sync::Arc;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::catalog::{CatalogError, CatalogItem, CatalogSource};
use crate::deck::Deck;
use crate::events::{FeedError, FeedEvent, spawn_feed_listener};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Everything a running session needs: where to talk, who we are, and which
/// services constrain the deck.
pub struct SessionContext {
    pub api: ApiClient,
    pub code: String,
    /// None when spectating.
    pub participant_id: Option<String>,
    pub allowed_sources: Vec<String>,
}

/// Run the interactive loop until the deck is exhausted or the user quits.
pub async fn run_session(
    context: SessionContext,
    source: Arc<dyn CatalogSource>,
) -> Result<(), SessionError> {
    let mut deck = Deck::new(source, context.allowed_sources.clone()).await?;
    let mut feed = spawn_feed_listener(&context.api.feed_url(&context.code)).await?;
    let mut editor = DefaultEditor::new()?;

    println!("Room {}", context.code);
    if context.participant_id.is_some() {
        println!("Swipe with 'l' (pass) or 'r' (like). 'm' lists matches, 'q' quits.");
    } else {
        println!(
            "Room is full; watching as a spectator. Browse with 'l'/'r', 'm' lists matches, 'q' quits."
        );
    }

    loop {
        drain_feed(&mut feed);
        deck.absorb_fetched();

        let Some(item) = deck.current() else {
            deck.wait_for_fetch().await;
            if deck.is_exhausted() {
                println!("No more movies to swipe. 'm' lists matches, 'q' quits.");
                run_tail_loop(&context, &mut editor, &mut feed).await?;
                return Ok(());
            }
            continue;
        };
        print_item(item);

        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        match line.trim() {
            "l" | "r" => {
                let direction = if line.trim() == "r" { "right" } else { "left" };
                apply_swipe(&context, &mut deck, direction).await;
            }
            "m" => print_matches(&context).await,
            "q" | "quit" | "exit" => return Ok(()),
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }
}

/// Record the swipe on the current item (participants only) and move on.
/// Spectators have no ledger identity, so their swipes advance the deck
/// locally without a server write.
async fn apply_swipe(context: &SessionContext, deck: &mut Deck, direction: &str) {
    let Some(item) = deck.current() else {
        return;
    };
    if let Some(participant_id) = &context.participant_id {
        let item_id = item.id.clone();
        match context
            .api
            .record_swipe(&context.code, participant_id, &item_id, direction)
            .await
        {
            Ok(ack) => {
                if ack.matched {
                    println!("It's a match!");
                }
            }
            Err(error) => {
                warn!(%error, "swipe was not recorded");
                println!("Could not record that swipe; moving on.");
            }
        }
    } else {
        println!("Spectators cannot swipe; browsing on.");
    }
    deck.advance();
}

/// After the deck runs out the session stays open for matches and events.
async fn run_tail_loop(
    context: &SessionContext,
    editor: &mut DefaultEditor,
    feed: &mut mpsc::UnboundedReceiver<FeedEvent>,
) -> Result<(), SessionError> {
    loop {
        drain_feed(feed);
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        match line.trim() {
            "m" => print_matches(context).await,
            "q" | "quit" | "exit" => return Ok(()),
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }
}

fn drain_feed(feed: &mut mpsc::UnboundedReceiver<FeedEvent>) {
    while let Ok(event) = feed.try_recv() {
        match event {
            FeedEvent::PartnerJoined { .. } => {
                println!("* Your partner joined the room.");
            }
            FeedEvent::SwipeRecorded { .. } => {}
            FeedEvent::MatchFound { item_id } => {
                println!("* Match found on movie {item_id}!");
            }
        }
    }
}

fn print_item(item: &CatalogItem) {
    println!();
    println!("{} ({})", item.title, item.year);
    if !item.genres.is_empty() {
        println!("  {} | rating {:.1}", item.genres.join(", "), item.rating);
    }
    if !item.available_on.is_empty() {
        println!("  on {}", item.available_on.join(", "));
    }
    if !item.synopsis.is_empty() {
        println!("  {}", item.synopsis);
    }
}

async fn print_matches(context: &SessionContext) {
    match context.api.matches(&context.code).await {
        Ok(items) if items.is_empty() => println!("No matches yet."),
        Ok(items) => {
            println!("Matched movies:");
            for id in items {
                println!("  - {id}");
            }
        }
        Err(error) => {
            warn!(%error, "failed to list matches");
            println!("Could not fetch matches.");
        }
    }
}
