//! Interactive front end: accumulates source lines, runs the pipeline on
//! `exec`, and prints the rendered grid. The core never terminates the
//! process on a bad script; errors are printed here and the session
//! continues with the buffer intact.

use std::fs;
use std::io::{self, stdout, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

/// scrawl plots ASCII-art rasters from a tiny drawing script.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run a script file and print the result instead of starting the
    /// interactive editor.
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.script {
        Some(path) => batch(&path),
        None => repl(),
    }
}

fn batch(path: &PathBuf) -> anyhow::Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read script `{}`", path.display()))?;
    let canvas = scrawl_lang::run(&source)?;
    print!("{}", scrawl_render::render_styled(&canvas));
    Ok(())
}

// ─── Interactive loop ─────────────────────────────────────────────────────────

fn repl() -> anyhow::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", "[help] for available options, [exec] to run.".green());
        print!("{}", "> ".magenta());
        stdout().flush()?;

        let Some(line) = lines.next() else { return Ok(()) };
        let line = line?;

        match line.trim() {
            "done" => return Ok(()),

            "pop" => {
                pop_last_line(&mut buffer);
                clear_screen()?;
            }

            "clear" => {
                buffer.clear();
                clear_screen()?;
            }

            "preview" => {
                println!("{buffer}");
                pause(&mut lines)?;
                clear_screen()?;
            }

            "help" => {
                clear_screen()?;
                print_help();
                pause(&mut lines)?;
                clear_screen()?;
            }

            "file" => {
                println!("Enter file name:");
                let Some(name) = lines.next() else { return Ok(()) };
                match fs::read_to_string(name?.trim()) {
                    Ok(contents) => buffer.push_str(&contents),
                    Err(e) => eprintln!("{}", format!("could not read file: {e}").red()),
                }
            }

            "exec" => {
                match scrawl_lang::run(&buffer) {
                    Ok(canvas) => {
                        clear_screen()?;
                        print!("{}", scrawl_render::render_styled(&canvas));
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
                println!("{}", "press [enter] to continue, [done] to exit".green());
                let Some(answer) = lines.next() else { return Ok(()) };
                if answer?.trim() == "done" {
                    return Ok(());
                }
                clear_screen()?;
            }

            "" => {}

            // an ordinary source line; make sure it ends with a terminator
            _ => {
                buffer.push_str(&line);
                if !line.trim_end().ends_with(';') {
                    buffer.push(';');
                }
                buffer.push('\n');
                clear_screen()?;
            }
        }
    }
}

/// Drop the last buffered line, trailing newlines included.
fn pop_last_line(buffer: &mut String) {
    while buffer.ends_with('\n') {
        buffer.pop();
    }
    match buffer.rfind('\n') {
        Some(i) => buffer.truncate(i + 1),
        None => buffer.clear(),
    }
}

fn pause(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<()> {
    println!("enter something to continue");
    if let Some(line) = lines.next() {
        line?;
    }
    Ok(())
}

fn clear_screen() -> anyhow::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn print_help() {
    println!(
        "Editor commands: [pop] remove the last line, [preview] show the \
         current input, [clear] reset the input, [file] append a script \
         file, [exec] run, [done] exit."
    );
    println!();
    println!("TYPES:");
    println!(
        "{}: {} | {} | {} | {}",
        "COLOR_CONSTANT".magenta(),
        "BLACK".green(),
        "WHITE".green(),
        "RED".green(),
        "GREEN".green()
    );
    println!(
        "{}: {} | {}",
        "CURVE_CONSTANT".magenta(),
        "LINEAR".green(),
        "EXPONENTIAL".green()
    );
    println!("{} = ({},{})", "POINT".magenta(), "x".green(), "y".green());
    println!();
    println!("FUNCTIONS:");
    println!(
        "{}({} {})",
        "set_color".cyan(),
        "COLOR_CONSTANT".magenta(),
        "color".green()
    );
    println!(
        "{}({} {}, {} {})",
        "set_size".cyan(),
        "INT".magenta(),
        "width".green(),
        "INT".magenta(),
        "height".green()
    );
    println!(
        "{}({} {}, {} {})",
        "set_background".cyan(),
        "\"CHARACTER\"".magenta(),
        "char".green(),
        "COLOR_CONSTANT".magenta(),
        "color".green()
    );
    println!(
        "{}({} {}, {} {}, {} {}, {} {})",
        "plot".cyan(),
        "\"CHARACTER\"".magenta(),
        "char".green(),
        "POINT".magenta(),
        "start".green(),
        "POINT".magenta(),
        "end".green(),
        "CURVE_CONSTANT".magenta(),
        "curve".green()
    );
}

// ─── Tests ───────────────────────────────────────────────────────────────────
