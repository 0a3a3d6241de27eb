use anyhow::{anyhow, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridmenu::{theme, ConsoleTerminal, GridMenu, MenuConfig, MenuSpec};

const DEFAULT_ITEMS: [&str; 6] = ["Hello", "World", "my", "name", "is", "Jörn"];

#[derive(Parser, Debug)]
#[command(name = "gridmenu")]
#[command(version)]
#[command(about = "Pick an item from a grid menu in the terminal")]
struct Args {
    /// Menu items (defaults to a small demo set)
    items: Vec<String>,

    /// Title shown above the grid
    #[arg(short, long, default_value = "test")]
    title: String,

    /// Cells per row
    #[arg(short, long)]
    columns: Option<usize>,

    /// Label width in characters
    #[arg(short = 'w', long)]
    cell_width: Option<usize>,

    /// Highlight color (name, #RRGGBB or palette index)
    #[arg(long)]
    color: Option<String>,

    /// Column of the menu's top-left corner
    #[arg(short = 'x', long, default_value_t = 0)]
    offset_x: u16,

    /// Row of the menu's top-left corner
    #[arg(short = 'y', long, default_value_t = 0)]
    offset_y: u16,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Store the effective columns/cell width/color as the new defaults
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so it never lands inside the menu)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = MenuConfig::load().unwrap_or_default();

    // CLI flags win over the config file
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(cell_width) = args.cell_width {
        config.cell_width = cell_width;
    }
    let highlight = match &args.color {
        Some(name) => {
            let color = theme::parse_color(name).ok_or_else(|| anyhow!("Unknown color: {}", name))?;
            config.highlight = name.clone();
            color
        }
        None => config.highlight_color(),
    };

    if args.save_config {
        config.save()?;
        tracing::info!("Saved menu defaults");
    }

    let items = if args.items.is_empty() {
        DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        args.items
    };

    let spec = MenuSpec::new(args.title, items, config.columns, config.cell_width)?
        .with_highlight(highlight)
        .with_cancel_key(config.cancel_key);
    let mut menu = GridMenu::new(spec);

    let selected = {
        // Raw mode only lives as long as the terminal handle
        let mut terminal = ConsoleTerminal::new()?;
        menu.run(&mut terminal, args.offset_x, args.offset_y)?
    };

    print_result(&menu, selected, args.json)
}

fn print_result(menu: &GridMenu, selected: Option<usize>, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "selected": selected,
            "item": selected.and_then(|i| menu.item(i)),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        // -1 mirrors "nothing selected" for shell callers
        let result = selected.map(|i| i as i64).unwrap_or(-1);
        println!("result:{}", result);
    }
    Ok(())
}
