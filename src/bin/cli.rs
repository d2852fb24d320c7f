//! Rucksack CLI
//!
//! Interactive menu loop for the backpack inventory core. All I/O lives
//! here; the engine only ever sees parsed commands and returns values.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rucksack::{Command, Config, Criterion, Engine, Reply, RucksackError};
use tracing_subscriber::{fmt, EnvFilter};

/// Rucksack CLI
#[derive(Parser, Debug)]
#[command(name = "rucksack-cli")]
#[command(about = "Bounded backpack inventory manager")]
#[command(version)]
struct Args {
    /// Backpack capacity
    #[arg(short, long, default_value = "10")]
    capacity: usize,

    /// Maximum item name length (longer names are truncated)
    #[arg(long, default_value = "50")]
    max_name_len: usize,

    /// Maximum category length (longer categories are truncated)
    #[arg(long, default_value = "30")]
    max_category_len: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rucksack=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .capacity(args.capacity)
        .max_name_len(args.max_name_len)
        .max_category_len(args.max_category_len)
        .build();

    let mut engine = Engine::with_config(config);

    println!("Rucksack v{} - backpack inventory manager", rucksack::VERSION);

    if let Err(e) = run_menu_loop(&mut engine) {
        tracing::error!("I/O error: {}", e);
        std::process::exit(1);
    }
}

/// Main menu loop: one command is fully processed before the next is read
fn run_menu_loop(engine: &mut Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("======================== MAIN MENU ========================");
        println!("1. Add item (name, category, quantity, priority)");
        println!("2. Remove item by name");
        println!("3. List items");
        println!("4. Sort backpack (name, category, priority)");
        println!("5. Search item by name (binary search, requires sort by name)");
        println!("0. Quit");

        let choice = match prompt_line(&mut input, "Choose an option: ")? {
            Some(line) => line,
            None => break, // EOF
        };

        match choice.as_str() {
            "1" => {
                if let Some(command) = read_add_command(&mut input)? {
                    dispatch(engine, command);
                }
            }
            "2" => {
                if let Some(name) = prompt_line(&mut input, "Name of the item to remove: ")? {
                    dispatch(engine, Command::Remove { name });
                }
            }
            "3" => dispatch(engine, Command::List),
            "4" => {
                if let Some(command) = read_sort_command(&mut input)? {
                    dispatch(engine, command);
                }
            }
            "5" => {
                if let Some(name) = prompt_line(&mut input, "Name of the item to find: ")? {
                    dispatch(engine, Command::Search { name });
                }
            }
            "0" => break,
            other => render_error(&RucksackError::InvalidCommand {
                input: other.to_string(),
            }),
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Prompt for the four item fields and build an add command
///
/// Returns `None` on EOF or unparseable numbers (reported, item discarded).
fn read_add_command(input: &mut impl BufRead) -> io::Result<Option<Command>> {
    println!();
    println!("--- Add Item ---");

    let Some(name) = prompt_line(input, "Name: ")? else {
        return Ok(None);
    };
    let Some(category) = prompt_line(input, "Category: ")? else {
        return Ok(None);
    };
    let Some(quantity) = prompt_integer(input, "Quantity: ")? else {
        return Ok(None);
    };
    let Some(priority) = prompt_integer(input, "Priority (1 to 5, 5 = highest): ")? else {
        return Ok(None);
    };

    Ok(Some(Command::Add {
        name,
        category,
        quantity,
        priority,
    }))
}

/// Sort criterion submenu
fn read_sort_command(input: &mut impl BufRead) -> io::Result<Option<Command>> {
    println!();
    println!("--- Sort Criterion ---");
    println!("1. Name");
    println!("2. Category");
    println!("3. Priority (descending)");

    let Some(choice) = prompt_line(input, "Criterion: ")? else {
        return Ok(None);
    };

    let criterion = match choice.as_str() {
        "1" => Criterion::Name,
        "2" => Criterion::Category,
        "3" => Criterion::Priority,
        other => {
            render_error(&RucksackError::InvalidCommand {
                input: other.to_string(),
            });
            return Ok(None);
        }
    };

    Ok(Some(Command::Sort { criterion }))
}

/// Execute a command and render the reply or the error
fn dispatch(engine: &mut Engine, command: Command) {
    match engine.execute(command) {
        Ok(reply) => render_reply(engine, reply),
        Err(e) => render_error(&e),
    }
}

fn render_reply(engine: &Engine, reply: Reply) {
    match reply {
        Reply::Added { name } => {
            println!(
                "Item '{}' added ({}/{} slots used).",
                name,
                engine.len(),
                engine.capacity()
            );
        }
        Reply::Removed { item } => {
            println!("Item '{}' removed.", item.name);
        }
        Reply::Listing { items, sorted_by } => {
            render_listing(&items, sorted_by);
        }
        Reply::Sorted {
            criterion,
            comparisons,
        } => {
            println!("Backpack sorted by {criterion}.");
            println!("Comparisons performed: {comparisons}");
        }
        Reply::Found {
            item,
            index,
            comparisons,
        } => {
            println!();
            println!("--- Item found at position {} ---", index + 1);
            println!("  Name:     {}", item.name);
            println!("  Category: {}", item.category);
            println!("  Quantity: {}", item.quantity);
            println!("  Priority: {} (1 = lowest, 5 = highest)", item.priority);
            println!("Comparisons performed: {comparisons}");
        }
    }
}

fn render_listing(items: &[rucksack::Item], sorted_by: Option<Criterion>) {
    if items.is_empty() {
        println!("The backpack is empty.");
        return;
    }

    println!();
    println!("BACKPACK ITEMS (total: {})", items.len());
    println!("| #  | {:<35} | {:<12} | Qty | Prio |", "Name", "Category");
    println!("|----|-{:-<35}-|-{:-<12}-|-----|------|", "", "");
    for (i, item) in items.iter().enumerate() {
        println!(
            "| {:<2} | {:<35} | {:<12} | {:<3} | {:<4} |",
            i + 1,
            item.name,
            item.category,
            item.quantity,
            item.priority
        );
    }
    match sorted_by {
        Some(criterion) => println!("State: sorted by {criterion}."),
        None => println!("State: unsorted."),
    }
}

fn render_error(error: &RucksackError) {
    println!("error: {error}");
}

/// Print a prompt and read one line, stripping the trailing line terminator
///
/// Returns `None` on EOF.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(Some(line.to_string()))
}

/// Prompt for an integer; a non-numeric answer is reported and yields `None`
fn prompt_integer(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<i64>> {
    let Some(line) = prompt_line(input, prompt)? else {
        return Ok(None);
    };

    match line.trim().parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            render_error(&RucksackError::InvalidCommand { input: line });
            Ok(None)
        }
    }
}
