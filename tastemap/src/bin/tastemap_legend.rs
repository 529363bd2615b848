// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the legend and filter summary of a prepared `map_data.json`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tastemap::{Dataset, Event, LOAD_FAILURE_MESSAGE, ViewMode, legend_to_text};
use tastemap_controller::Controller;
use tastemap_legend::{FilterSummary, Legend};
use tastemap_pipeline::Pipeline;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tastemap-legend",
    about = "Print the legend tree and filter summary of prepared map data"
)]
struct Args {
    /// Path to the prepared map data.
    #[arg(default_value = "map_data.json")]
    path: PathBuf,

    /// Expand every legend group.
    #[arg(long)]
    expand_all: bool,

    /// Switch to the Glow view after applying `--hide`.
    #[arg(long)]
    glow: bool,

    /// Hide a category and its descendants. Repeatable.
    #[arg(long = "hide", value_name = "NAME")]
    hide: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dataset = match Dataset::load(&args.path) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("{}", err);
            eprintln!("{LOAD_FAILURE_MESSAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = Controller::new(dataset.shared_hierarchy());
    for name in &args.hide {
        if controller.tree().find_node(name).is_none() {
            warn!("No category named {:?}; hiding exact matches only", name);
        }
        controller.handle(Event::CheckboxToggled {
            name: name.clone(),
            visible: false,
        });
    }
    if args.expand_all {
        controller.handle(Event::ExpandAll);
    }
    if args.glow {
        controller.handle(Event::ModeChanged(ViewMode::Glow));
        if let Some(category) = controller.mode().glow_category() {
            info!("Glowing {}", category);
        }
    }

    let summary = FilterSummary {
        shown: Pipeline::default().shown(&dataset, &controller).len(),
        total: dataset.len(),
    };
    print!("{}", legend_to_text(&Legend::from_controller(&controller)));
    println!();
    println!("{summary}");
    ExitCode::SUCCESS
}
