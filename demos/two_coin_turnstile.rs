//! Two-Coin Turnstile
//!
//! This example drives the two-coin turnstile through a few admission
//! cycles, printing each side effect as it happens.
//!
//! Key concepts:
//! - The transition table is shared and immutable
//! - Side effects go through an injected `TurnstileActions` implementation
//! - Unmatched (state, event) pairs reach `unhandled_transition` instead of failing
//!
//! Run with: RUST_LOG=fsm_dispatch=debug cargo run --example two_coin_turnstile

use fsm_dispatch::turnstile::{Turnstile, TurnstileActions, TurnstileEvent, TurnstileState};
use tracing_subscriber::EnvFilter;

struct Console;

impl TurnstileActions for Console {
    fn unlock(&mut self) {
        println!("  -> unlock");
    }

    fn lock(&mut self) {
        println!("  -> lock");
    }

    fn alarm_on(&mut self) {
        println!("  -> alarm on");
    }

    fn alarm_off(&mut self) {
        println!("  -> alarm off");
    }

    fn thankyou(&mut self) {
        println!("  -> thank you");
    }

    fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent) {
        println!("  -> ignored {event} while {state}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Two-Coin Turnstile Example ===\n");

    let mut turnstile = Turnstile::with_history(Console);

    let script = [
        TurnstileEvent::Coin,
        TurnstileEvent::Coin,
        TurnstileEvent::Coin,
        TurnstileEvent::Pass,
        TurnstileEvent::Pass,
        TurnstileEvent::Coin,
        TurnstileEvent::Reset,
        TurnstileEvent::Reset,
    ];

    for event in script {
        println!("{event} (in {})", turnstile.state());
        turnstile.process(event);
    }

    println!("\nFinal state: {}", turnstile.state());
    if let Some(history) = turnstile.history() {
        let path: Vec<String> = history.get_path().iter().map(|s| s.to_string()).collect();
        println!("Path: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
