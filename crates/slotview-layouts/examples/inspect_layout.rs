//! Example printing how a standard layout maps its sections onto container
//! slots.
//!
//! This example shows how to:
//! - Look up a standard layout by name
//! - Walk its named sections
//! - Translate each section's local slots into container slots
//!
//! # Usage
//!
//! List the available layouts:
//!
//! ```sh
//! cargo run --example inspect_layout -- --list
//! ```
//!
//! Inspect one layout (default: player):
//!
//! ```sh
//! cargo run --example inspect_layout -- --layout furnace
//! ```
//!
//! Construction of each layout is logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example inspect_layout -- --layout chest
//! ```

use std::process;

use clap::Parser;
use slotview_core::{SlotMapping as _, View};
use slotview_layouts::Layout;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Layout to inspect.
    #[arg(short, long, value_name = "NAME", default_value = "player")]
    layout: String,

    /// List the available layout names and exit.
    #[arg(long)]
    list: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    if args.list {
        for (name, _) in slotview_layouts::all() {
            println!("{name}");
        }
        return;
    }

    let Some(layout) = slotview_layouts::by_name(&args.layout) else {
        eprintln!("Unknown layout: {}", args.layout);
        eprintln!("Run with --list to see the available layouts.");
        process::exit(2);
    };

    print_layout(&args.layout, layout);
}

fn print_layout(name: &str, layout: &dyn Layout) {
    let root = layout.view();
    println!("Layout:");
    println!("  {name} ({} slots)", root.size());
    println!();

    println!("Sections:");
    for (section, view) in layout.sections() {
        println!("  {section:<18} {}", describe(view));
    }
}

fn describe(view: &View) -> String {
    let slots = view
        .local_slots()
        .filter_map(|local| {
            view.local_to_external(local)
                .map(|external| format!("{local}->{external}"))
        })
        .collect::<Vec<_>>();
    format!("[{}]", slots.join(", "))
}
