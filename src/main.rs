// stacktty: interactive call-stack and register visualizer

mod machine;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use machine::memory::parse_memory_image;
use machine::Machine;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("stacktty");
        eprintln!("Usage: {} [memory-image]", program_name);
        eprintln!();
        eprintln!("The optional memory image seeds the simulated memory table,");
        eprintln!("one 'address value' pair per line (decimal or 0x hex):");
        eprintln!();
        eprintln!("  # example image");
        eprintln!("  0x1000 42");
        eprintln!("  0x1004 100");
        std::process::exit(1);
    }

    let mut machine = Machine::new();

    // Seed memory from an image file if one was given
    if let Some(image_path) = args.get(1) {
        if !Path::new(image_path).exists() {
            eprintln!("Error: File '{}' not found", image_path);
            std::process::exit(1);
        }

        let source = fs::read_to_string(image_path)?;
        match parse_memory_image(&source) {
            Ok(memory) => {
                eprintln!("Seeded {} memory cell(s) from {}", memory.len(), image_path);
                machine.seed_memory(memory);
            }
            Err(e) => {
                eprintln!("Error in memory image '{}': {}", image_path, e);
                std::process::exit(1);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(machine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
