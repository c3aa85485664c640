use crate::config::ConfigManager;
use crate::country::CountryRegistry;
use crate::geopoint::GeoPoint;
use crate::logstate::LogState;
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect fleet-tracking duty-log state and country/subdivision codes.", long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON instead of the human layout.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a stored duty-log state line and show its fields.
    Decode {
        /// Stored text, e.g. "lastTS=1432734421 lastSC=0xF401 distKM=0.0".
        text: String,

        /// Show the distance in miles regardless of the configured unit.
        #[arg(long)]
        miles: bool,
    },

    /// Resolve a 2- or 3-letter country code.
    Country {
        code: String,

        /// Code to report when the lookup misses (overrides the configured
        /// fallback).
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Resolve a subdivision display name from "COUNTRY/STATE" or a
    /// country/state code pair.
    Subdiv {
        country: String,
        state: Option<String>,
    },
}

#[derive(Serialize)]
struct SnapshotView {
    last_timestamp: i64,
    last_status_code: i32,
    is_driving: bool,
    distance_km: f64,
    distance_mi: f64,
    geopoint: Option<GeoPoint>,
    encoded: String,
}

impl SnapshotView {
    fn new(state: &LogState) -> Self {
        Self {
            last_timestamp: state.last_timestamp(),
            last_status_code: state.last_status_code(),
            is_driving: state.is_driving(),
            distance_km: state.last_distance_km(),
            distance_mi: state.last_distance_mi(),
            geopoint: state.has_last_geopoint().then(|| state.last_geopoint()),
            encoded: state.encode(),
        }
    }
}

#[derive(Serialize)]
struct CountryView {
    code2: &'static str,
    code3: &'static str,
    name: &'static str,
    subdivisions: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = ConfigManager::new()?.config;
    let registry = CountryRegistry::global();

    match cli.command {
        Command::Decode { text, miles } => {
            let state = LogState::decode(&text);
            let view = SnapshotView::new(&state);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }
            print_field(
                "lastTS",
                &view.last_timestamp.to_string(),
                state.has_last_timestamp(),
            );
            print_field(
                "lastSC",
                &format!("0x{:04X}", view.last_status_code),
                state.has_last_status_code(),
            );
            print_field("isDriving", &view.is_driving.to_string(), true);
            if miles || config.use_miles() {
                print_field("distance", &format!("{:.3} mi", view.distance_mi), true);
            } else {
                print_field("distance", &format!("{:.3} km", view.distance_km), true);
            }
            match view.geopoint {
                Some(gp) => print_field("lastGP", &gp.to_string(), true),
                None => print_field("lastGP", "-", false),
            }
        }

        Command::Country { code, fallback } => {
            let fallback = fallback.or(config.fallback_country);
            match registry.lookup(&code) {
                Some(entry) => {
                    let view = CountryView {
                        code2: entry.code2(),
                        code3: entry.code3(),
                        name: entry.name(),
                        subdivisions: entry.supports_subdivisions(),
                    };
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    } else {
                        let codes = if view.code3.is_empty() {
                            view.code2.to_string()
                        } else {
                            format!("{}/{}", view.code2, view.code3)
                        };
                        println!("{}  {}", codes.bold(), view.name);
                        if view.subdivisions {
                            println!("{}", "subdivision lookup supported".dimmed());
                        }
                    }
                }
                None => match fallback {
                    Some(fb) => {
                        if cli.json {
                            println!("{}", serde_json::json!({ "fallback": fb }));
                        } else {
                            println!("{}  {}", fb.bold(), "(fallback)".dimmed());
                        }
                    }
                    None => return Err(anyhow!("unknown country code: {}", code)),
                },
            }
        }

        Command::Subdiv { country, state } => {
            let name = match state {
                Some(ref state_code) => registry.subdivision_name(&country, state_code),
                None => registry.subdivision_name_combined(&country),
            };
            if cli.json {
                println!("{}", serde_json::json!({ "name": name }));
            } else if name.is_empty() {
                return Err(anyhow!("no subdivision name for: {}", country));
            } else {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn print_field(label: &str, value: &str, defined: bool) {
    // Pad before coloring, escape codes count toward the width otherwise.
    let label = format!("{:<10}", label);
    if defined {
        println!("{} {}", label.bold(), value);
    } else {
        println!("{} {}", label.bold(), value.dimmed());
    }
}
