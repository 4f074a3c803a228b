//! Terminal demo: a staff table that re-flows into cards on narrow terminals.
//!
//! Keys: `s` sorts by the selected column (again to flip), `Tab` selects the
//! next sortable column, `q` or `Esc` quits. Options are read from
//! `respgrid.json` in the working directory when present.

use std::fs::{self, File};
use std::io;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};
use respgrid::prelude::*;
use respgrid::{BooleanFormatter, NumberFormatter, TerminalViewport};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tuidom::{Element, Event, Key, Style, Terminal, convert_event};

const OPTIONS_FILE: &str = "respgrid.json";
const LOG_FILE: &str = "respgrid-demo.log";

/// Terminal columns below which the demo condenses when no options file exists.
const DEFAULT_BREAKPOINT: u32 = 100;

#[derive(Debug, Error)]
enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}

fn load_options() -> Result<GridOptions, GridError> {
    match fs::read_to_string(OPTIONS_FILE) {
        Ok(json) => {
            info!("loading grid options from {OPTIONS_FILE}");
            GridOptions::from_json(&json)
        }
        Err(_) => Ok(GridOptions::new().breakpoint(BreakSize::Xs, DEFAULT_BREAKPOINT)),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").width(18).sortable(),
        Column::new("role", "Role").width(16).sortable(),
        Column::new("team", "Team").width(14),
        Column::new("salary", "Salary")
            .width(12)
            .sortable()
            .formatter(NumberFormatter::new(0)),
        Column::new("remote", "Remote")
            .width(7)
            .formatter(BooleanFormatter::default()),
        Column::new("email", "Email").header_class("contact"),
    ]
}

fn records() -> Vec<Record> {
    let rows = [
        ("1", "Grace Hopper", "Admiral", "Compilers", 182_000, false, "grace@example.com"),
        ("2", "Ada Lovelace", "Analyst", "Engines", 154_500, true, "ada@example.com"),
        ("3", "Alan Turing", "Logician", "Research", 171_250, false, "alan@example.com"),
        ("4", "Edsger Dijkstra", "Professor", "Algorithms", 149_000, true, "ewd@example.com"),
        ("5", "Barbara Liskov", "Architect", "Languages", 176_800, true, "liskov@example.com"),
    ];
    rows.into_iter()
        .map(|(id, name, role, team, salary, remote, email)| {
            Record::new(id)
                .field("name", name)
                .field("role", role)
                .field("team", team)
                .field("salary", salary)
                .field("remote", remote)
                .field("email", email)
        })
        .collect()
}

fn screen(grid: &ResponsiveGrid, selected: &str) -> Element {
    let status = format!(
        "mode: {}  |  sort column: {selected}  |  s: sort  tab: next column  q: quit",
        grid.mode()
    );
    Element::col()
        .child(Element::text("Staff directory").style(Style::new().bold()))
        .child(Element::text(status).style(Style::new().dim()))
        .child(Element::text(""))
        .child(grid.element())
}

async fn run() -> Result<(), DemoError> {
    let options = load_options()?;
    let mut grid = ResponsiveGrid::new(columns(), records(), &options, TerminalViewport)?;
    grid.render()?;

    let sortable: Vec<String> = grid
        .columns()
        .iter()
        .filter(|c| c.sortable)
        .map(|c| c.name.clone())
        .collect();
    let mut selected = 0;

    let mut terminal = Terminal::new()?;
    terminal.draw(&screen(&grid, &sortable[selected]))?;

    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        let Some(event) = convert_event(event?) else {
            continue;
        };

        match &event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => break,
            Event::Key {
                key: Key::Char('s'),
                ..
            } => {
                grid.handle_header_click(&sortable[selected])?;
            }
            Event::Key { key: Key::Tab, .. } => {
                selected = (selected + 1) % sortable.len();
                debug!("selected sort column {}", sortable[selected]);
            }
            Event::Resize { width, height } => {
                if grid.handle_event(&event) {
                    info!("resized to {width}x{height}, now {}", grid.mode());
                }
            }
            Event::Key { .. } => continue,
        }

        terminal.draw(&screen(&grid, &sortable[selected]))?;
    }

    grid.destroy();
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create(LOG_FILE).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
    }
}
