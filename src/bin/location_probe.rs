// src/bin/location_probe.rs
//! Shows how individual location strings resolve, layer by layer.
//! Useful when tuning FUZZY_SEGMENT_CUTOFF / FUZZY_WHOLE_CUTOFF.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;

use hq_country_lib::reference::StaticCountryReference;
use hq_country_lib::resolution::{CountryResolver, ResolutionTrace};
use hq_country_lib::utils::env::load_env;
use hq_country_lib::utils::resolver_config::ResolverConfig;

#[derive(Parser)]
#[command(author, version, about = "Explains how locations resolve to countries", long_about = None)]
struct ProbeArgs {
    /// Locations to explain; read one per line from stdin when omitted
    locations: Vec<String>,

    /// Print each trace as a JSON object
    #[arg(long)]
    json: bool,

    /// Override the per-segment fuzzy cutoff
    #[arg(long)]
    segment_cutoff: Option<f64>,

    /// Override the whole-string fuzzy cutoff
    #[arg(long)]
    whole_cutoff: Option<f64>,
}

fn print_text(trace: &ResolutionTrace) {
    println!("input:       {:?}", trace.raw);
    println!("normalized:  {:?}", trace.normalized);
    println!("segments:    {:?}", trace.segments);
    println!("synonym:     {}", trace.synonym_hit.unwrap_or("-"));
    println!("city:        {}", trace.city_hit.unwrap_or("-"));
    for candidate in &trace.segment_candidates {
        println!(
            "segment:     {:?} ~ {} ({:.1})",
            candidate.query, candidate.country, candidate.score
        );
    }
    if let Some(candidate) = &trace.whole_string_candidate {
        println!(
            "whole:       {:?} ~ {} ({:.1})",
            candidate.query, candidate.country, candidate.score
        );
    }
    match trace.outcome.layer() {
        Some(layer) => println!("=> {} [{}]", trace.outcome, layer.as_str()),
        None => println!("=> (unresolved)"),
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    load_env();

    let args = ProbeArgs::parse();
    let mut config = ResolverConfig::from_env();
    if let Some(cutoff) = args.segment_cutoff {
        config.fuzzy_segment_cutoff = cutoff;
    }
    if let Some(cutoff) = args.whole_cutoff {
        config.fuzzy_whole_cutoff = cutoff;
    }
    config.log_config();

    let resolver = CountryResolver::new(&StaticCountryReference, &config)?;

    let locations = if args.locations.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read locations from stdin")?
    } else {
        args.locations
    };

    for location in &locations {
        let trace = resolver.explain(location);
        if args.json {
            println!("{}", serde_json::to_string(&trace)?);
        } else {
            print_text(&trace);
        }
    }
    Ok(())
}
