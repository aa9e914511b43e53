use std::io::{self, BufRead, Write};
use std::ops::Range;

use crate::prompt::Console;

pub const PAGE_SIZE: usize = 10;

/// Global index range shown on the one-based `page`, clipped to `len`.
/// Pages past the end are empty.
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}

pub fn total_pages(len: usize) -> usize {
    len / PAGE_SIZE + 1
}

enum Command<'a> {
    Exit,
    Next,
    Prev,
    Pick(&'a str),
    BadNumber,
    Unknown,
}

fn interpret<'a>(input: &str, items: &'a [String]) -> Command<'a> {
    let lowered = input.to_lowercase();
    if lowered == "exit" {
        return Command::Exit;
    }
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return match input.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Command::Pick(&items[n - 1]),
            _ => Command::BadNumber,
        };
    }
    if lowered == "next" {
        return Command::Next;
    }
    if lowered == "prev" {
        return Command::Prev;
    }
    match items.iter().find(|item| item.as_str() == input) {
        Some(item) => Command::Pick(item),
        None => Command::Unknown,
    }
}

fn show_page<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    items: &[String],
    page: usize,
) -> io::Result<()> {
    let range = page_range(items.len(), page);
    let start = range.start;
    for (offset, item) in items[range].iter().enumerate() {
        console.say(format!("[{}] {}", start + offset + 1, item))?;
    }
    console.say(format!("\nPage {} of {}", page, total_pages(items.len())))?;
    console.say("Type 'next' to see more items, 'prev' to go back, or select an item by number or name.")
}

/// Pages through `items` until the user picks one (by global number or exact
/// name) or types `exit`, which yields `None`.
pub fn select_from_list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    items: &[String],
    label: &str,
    default: Option<&str>,
) -> io::Result<Option<String>> {
    let mut page = 1;
    let question = format!(
        "\nEnter the {label} name or number (or press Enter for default '{}'), 'exit' to quit: ",
        default.unwrap_or("")
    );
    loop {
        console.say(format!("\nAvailable {label}:"))?;
        show_page(console, items, page)?;

        let input = console.prompt(&question, default)?;
        match interpret(&input, items) {
            Command::Exit => return Ok(None),
            Command::Pick(item) => return Ok(Some(item.to_string())),
            Command::Next => page += 1,
            Command::Prev => page = page.saturating_sub(1).max(1),
            Command::BadNumber => console.error("Invalid number! Try again.")?,
            Command::Unknown => console.error("Invalid input! Try again.")?,
        }
    }
}
