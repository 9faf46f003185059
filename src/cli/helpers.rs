use super::args::SimulateArgs;
use crate::config::Config;
use crate::queue::Ticket;
use crate::roster;
use crate::session::{line_status, CinemaSession};
use crate::theme;
use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Print the effective configuration
pub fn print_config(config: &Config) {
    println!("Web UI config:");
    println!("  enabled: {}", config.web_ui.enabled);
    println!("  host: {}", config.web_ui.host);
    println!("  port: {}", config.web_ui.port);
    println!("\nQueue config:");
    println!("  base_ticket_id: {}", config.queue.base_ticket_id);
    println!("  minutes_per_guest: {}", config.queue.minutes_per_guest);
    println!("  history_display: {}", config.queue.history_display);
    println!("\nGreeting config:");
    println!("  default_message: {}", config.greeting.default_message);
    println!("  fallback_message: {}", config.greeting.fallback_message);
    println!("  timeout: {}", config.greeting.timeout);
    println!("  model: {}", config.greeting.model);
    let credential = match std::env::var(&config.greeting.api_key_env) {
        Ok(key) if !key.trim().is_empty() => "set",
        _ => "not set",
    };
    println!("  api_key_env: {} ({})", config.greeting.api_key_env, credential);
    println!("\nTheme: {}", config.theme);
}

/// Whether guest number `index` (0-based) is a VIP under `vip_every`
pub fn is_vip_turn(index: usize, vip_every: Option<usize>) -> bool {
    match vip_every {
        Some(every) if every > 0 => (index + 1) % every == 0,
        _ => false,
    }
}

/// Admit and serve guests headlessly, printing each step
pub async fn run_simulation(session: &CinemaSession, args: &SimulateArgs) -> Result<Vec<Ticket>> {
    if let Some(id) = &args.theme {
        session.set_theme(id).await.ok_or_else(|| {
            anyhow!(
                "Unknown theme '{}' (expected one of: {})",
                id,
                theme::THEMES
                    .iter()
                    .map(|t| t.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
    }
    println!("🎨 Theme: {}", session.theme().await.name);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for index in 0..args.guests {
        let vip = is_vip_turn(index, args.vip_every);
        let ticket = session.admit(roster::random_guest(&mut rng), vip).await;
        println!(
            "➕ #{} {} {} ({}){}",
            ticket.id(),
            ticket.attributes().avatar,
            ticket.attributes().name,
            ticket.attributes().snack,
            if vip { " 🌟 VIP" } else { "" }
        );
    }

    let mut served = Vec::new();
    for _ in 0..args.serve {
        match session.serve_next().await {
            Some(ticket) => {
                println!(
                    "🎟️ Served #{} {}: \"{}\"",
                    ticket.id(),
                    ticket.attributes().name,
                    ticket.greeting().unwrap_or_default()
                );
                served.push(ticket);
            }
            None => {
                println!("💤 Lobby is empty, nothing to serve");
                break;
            }
        }
    }

    let snapshot = session.snapshot().await;
    println!("\n📋 Line ({} waiting, ~{}m):", snapshot.in_line, snapshot.wait_minutes);
    for (index, entry) in snapshot.line.iter().enumerate() {
        println!(
            "  {:<12} #{} {}{}",
            line_status(index),
            entry.ticket.id(),
            entry.ticket.attributes().name,
            if entry.ticket.is_priority() { " 🌟" } else { "" }
        );
    }
    println!("\n✅ Served (most recent first):");
    for ticket in &snapshot.history {
        println!(
            "  #{} {} {} \"{}\"",
            ticket.id(),
            ticket.attributes().name,
            ticket.attributes().avatar,
            ticket.greeting().unwrap_or_default()
        );
    }

    Ok(served)
}
