use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use docket_core::{update, DashboardState, DashboardView, Effect, Msg};
use docket_engine::{load_dataset, run_scrape, write_grid, ScrapeSettings, BASE_URL};
use docket_logging::{docket_info, initialize, LogDestination};

#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(about = "Track bills on upcoming Texas legislature committee meetings")]
#[command(version)]
struct Args {
    /// Also write logs to ./docket.log.
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape upcoming committee meetings and overwrite the dataset.
    Scrape {
        /// Directory the dataset file is written to.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Legislature site to scrape.
        #[arg(long, default_value = BASE_URL)]
        base_url: String,
    },
    /// Load the dataset, apply filters, print the grid, optionally export.
    Show {
        /// Directory the dataset file is read from (and exports written to).
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,

        /// Keep only these chambers (repeatable).
        #[arg(long)]
        chamber: Vec<String>,

        /// Keep only these weekdays (repeatable).
        #[arg(long)]
        day: Vec<String>,

        /// Keep only these committees (repeatable).
        #[arg(long)]
        committee: Vec<String>,

        /// Write the displayed rows to the export file.
        #[arg(long)]
        export: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize(if args.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    match args.command {
        Command::Scrape {
            output_dir,
            base_url,
        } => scrape(output_dir, base_url),
        Command::Show {
            data_dir,
            chamber,
            day,
            committee,
            export,
        } => show(data_dir, chamber, day, committee, export),
    }
}

fn scrape(output_dir: PathBuf, base_url: String) -> anyhow::Result<()> {
    let settings = ScrapeSettings {
        base_url,
        output_dir,
        ..ScrapeSettings::default()
    };
    docket_info!("Scraping {}", settings.base_url);
    let summary = run_scrape(&settings).context("scrape run failed")?;
    println!(
        "{} records written to {}",
        summary.record_count,
        summary.output_path.display()
    );
    Ok(())
}

fn show(
    data_dir: PathBuf,
    chambers: Vec<String>,
    days: Vec<String>,
    committees: Vec<String>,
    export: bool,
) -> anyhow::Result<()> {
    let table = load_dataset(&data_dir);

    let mut state = DashboardState::new();
    let messages = [
        Msg::DatasetLoaded {
            headers: table.headers,
            rows: table.rows,
        },
        Msg::ChamberFilterChanged(chambers),
        Msg::DayFilterChanged(days),
        Msg::CommitteeFilterChanged(committees),
    ];
    for msg in messages {
        let (next, _) = update(state, msg);
        state = next;
    }

    let view = state.view();
    print_grid(&view);

    if export {
        let (_, effects) = update(state, Msg::ExportClicked);
        for effect in effects {
            run_effect(&data_dir, effect)?;
        }
    }
    Ok(())
}

fn run_effect(data_dir: &std::path::Path, effect: Effect) -> anyhow::Result<()> {
    match effect {
        Effect::WriteExport {
            filename,
            headers,
            rows,
        } => {
            let path = write_grid(data_dir, &filename, &headers, &rows)
                .context("export write failed")?;
            println!("Exported {} rows to {}", rows.len(), path.display());
        }
    }
    Ok(())
}

fn print_grid(view: &DashboardView) {
    let mut widths: Vec<usize> = view.headers.iter().map(String::len).collect();
    for row in &view.rows {
        for (column, cell) in row.cells.iter().enumerate() {
            if column < widths.len() && cell.len() > widths[column] {
                widths[column] = cell.len();
            }
        }
    }

    print_row(&view.headers, &widths);
    for row in &view.rows {
        print_row(&row.cells, &widths);
    }
    println!("{} of {} rows", view.rows.len(), view.total_rows);
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            let width = widths.get(column).copied().unwrap_or(0);
            format!("{cell:width$}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
