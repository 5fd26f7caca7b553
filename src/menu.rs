//! Interactive console menu.
//!
//! A plain prompt/dispatch loop over a [`Session`]. All catalog state lives
//! in the session; the menu only renders results and collects input. The
//! loop ends on the exit command, end of input, or an interrupt observed
//! between commands.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use yansi::Paint;

use crate::actions::Selection;
use crate::catalog::{probe_dimensions, probe_format, ImageRecord};
use crate::error::ExitCode;
use crate::session::Session;
use crate::signal::ShutdownHandler;

/// Run the menu loop until exit, end of input, or interrupt.
///
/// # Errors
///
/// Returns an error only for unexpected terminal I/O failures; command
/// failures are reported to the operator and the loop continues.
pub fn run(session: &mut Session, shutdown: &ShutdownHandler) -> anyhow::Result<ExitCode> {
    loop {
        if shutdown.is_shutdown_requested() {
            return Ok(ExitCode::Interrupted);
        }

        print_menu();
        let choice = match prompt("Enter your choice: ") {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                println!("\nExiting.");
                return Ok(ExitCode::Success);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Ok(ExitCode::Interrupted);
            }
            Err(e) => return Err(e.into()),
        };
        if shutdown.is_shutdown_requested() {
            return Ok(ExitCode::Interrupted);
        }

        match choice.as_str() {
            "1" => handle_load(session)?,
            "2" => handle_sort(session),
            "3" => handle_scan(session),
            "4" => handle_delete(session)?,
            "5" => handle_list(session),
            "6" => handle_details()?,
            "7" => {
                println!("Exiting.");
                return Ok(ExitCode::Success);
            }
            other => eprintln!("Invalid choice: {other:?}. Try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "======== Image Inventory ========".cyan().bold());
    println!(" [1] Load images from folder");
    println!(" [2] Sort images by file size");
    println!(" [3] Find duplicate images");
    println!(" [4] Delete duplicate images");
    println!(" [5] List image inventory");
    println!(" [6] Show image file details");
    println!(" [7] Exit");
    println!();
}

/// Print a message and read one line. `None` means end of input.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn render_record(record: &ImageRecord) {
    println!(
        "{} - {} - {}",
        record.filename,
        ByteSize::b(record.size),
        record.format
    );
}

fn handle_load(session: &mut Session) -> io::Result<()> {
    let Some(input) = prompt("Folder to load: ")? else {
        return Ok(());
    };
    if input.is_empty() {
        println!("No folder selected.");
        return Ok(());
    }

    let directory = PathBuf::from(input);
    match session.load_directory(&directory) {
        Ok(count) => println!(
            "{} image(s) loaded from {}",
            count.green(),
            directory.display()
        ),
        Err(e) => eprintln!("{}", e.red()),
    }
    Ok(())
}

fn handle_sort(session: &Session) {
    match session.sorted_by_size() {
        Ok(sorted) => {
            println!("\nImages sorted by size:");
            for record in &sorted {
                render_record(record);
            }
        }
        Err(e) => eprintln!("{}", e.red()),
    }
}

fn handle_scan(session: &mut Session) {
    match session.scan_duplicates() {
        Ok(scan) => {
            if scan.has_duplicates() {
                println!("Duplicate images found:");
                for pairing in &scan.pairings {
                    println!(
                        "{} is a duplicate of {}",
                        pairing.duplicate.filename.yellow(),
                        pairing.original.filename
                    );
                }
                println!(
                    "{} duplicate(s), {} reclaimable",
                    scan.pairings.len(),
                    ByteSize::b(scan.reclaimable_bytes())
                );
            } else {
                println!("No duplicates found.");
            }
        }
        Err(e) => eprintln!("{}", e.red()),
    }
}

fn handle_delete(session: &mut Session) -> io::Result<()> {
    let Some(scan) = session.last_scan() else {
        eprintln!("{}", "Scan for duplicates first.".red());
        return Ok(());
    };
    if !scan.has_duplicates() {
        println!("No duplicates to delete.");
        return Ok(());
    }

    println!("\nAvailable duplicates to delete:");
    for (i, pairing) in scan.pairings.iter().enumerate() {
        println!(
            "{}. {} (duplicate of {})",
            i + 1,
            pairing.duplicate.filename,
            pairing.original.filename
        );
    }

    let Some(input) = prompt("\nEnter numbers to delete (comma-separated) or 'all': ")? else {
        return Ok(());
    };
    let selection = match Selection::parse(&input) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("{}", e.red());
            return Ok(());
        }
    };

    match session.delete_duplicates(&selection) {
        Ok(outcome) => {
            for deleted in &outcome.deleted {
                println!("{} {}", "Deleted:".green(), deleted.filename);
            }
            for (path, e) in &outcome.failures {
                eprintln!("Error deleting {}: {}", path.display(), e);
            }
            for index in &outcome.invalid_indices {
                eprintln!("Invalid index: {index}");
            }
            println!("{}", outcome.summary());
        }
        Err(e) => eprintln!("{}", e.red()),
    }
    Ok(())
}

fn handle_list(session: &Session) {
    match session.snapshot() {
        Ok(snapshot) => {
            for record in snapshot {
                render_record(record);
            }
        }
        Err(e) => eprintln!("{}", e.red()),
    }
}

fn handle_details() -> io::Result<()> {
    let Some(input) = prompt("Image file path: ")? else {
        return Ok(());
    };
    if input.is_empty() {
        println!("No file selected.");
        return Ok(());
    }

    let path = PathBuf::from(input);
    show_details(&path);
    Ok(())
}

fn show_details(path: &Path) {
    let format = match probe_format(path) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Unable to read image metadata: {e}");
            return;
        }
    };
    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    println!(
        "\nImage: {}",
        path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
    );
    println!("Format: {format}");
    match probe_dimensions(path) {
        Ok((width, height)) => println!("Dimensions: {width}x{height}"),
        Err(e) => eprintln!("Dimensions unavailable: {e}"),
    }
    println!("Size: {}", ByteSize::b(size));
}
