//! Raw-mode list selection UI.
//!
//! Presents a scrollable option list on the alternate screen: arrow keys
//! move the selection, `/` starts fuzzy filtering, Enter selects, `q`, Esc
//! or Ctrl-C cancel. Drawn on stderr so captured stdout stays clean.

use std::fmt::Display;
use std::io::{stderr, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color::{DarkBlue, DarkGreen, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use mak_core::error::{Error, Result};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let _ = stderr().execute(LeaveAlternateScreen);
    }
}

#[derive(Clone, PartialEq, Debug)]
struct UiState {
    selected_index: usize,
    offset: usize,
    height: u16,
    is_filtering: bool,
    filter_text: String,
}

#[derive(Clone, Copy)]
enum CycleDirection {
    Up,
    Down,
}

enum Step {
    Chosen(usize),
    Cancelled,
    Updated(UiState),
    Idle,
}

/// Prompts the user to choose one of the options under the given title.
///
/// # Errors
///
/// Returns [`Error::NoSelection`] when the user cancels, or a terminal I/O
/// error.
pub fn prompt_for_selection(title: &str, options: &[String]) -> Result<String> {
    let mut output = stderr();

    output.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let (_, height) = terminal::size()?;
    let mut ui_state = UiState {
        selected_index: 0,
        offset: 0,
        height: height.saturating_sub(2), // Subtract 2 for header and filter line
        is_filtering: false,
        filter_text: String::new(),
    };

    let mut filtered = filter_displayed_indexes(options, &ui_state.filter_text);
    redraw_ui(title, &ui_state, options, &filtered)?;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let step = match event::read()? {
            Event::Key(key_event) => handle_key_event(&key_event, &ui_state, filtered.len()),
            Event::Resize(_, new_height) => {
                let mut new_state = ui_state.clone();
                new_state.height = new_height.saturating_sub(2);
                Step::Updated(new_state)
            }
            _ => Step::Idle,
        };

        match step {
            Step::Chosen(position) => {
                if let Some(&option_index) = filtered.get(position) {
                    return Ok(options[option_index].clone());
                }
                // Nothing under the cursor (empty filter result); keep going.
            }
            Step::Cancelled => return Err(Error::NoSelection),
            Step::Updated(new_state) => {
                if new_state != ui_state {
                    let filter_changed = new_state.filter_text != ui_state.filter_text;
                    ui_state = new_state;

                    if filter_changed {
                        filtered = filter_displayed_indexes(options, &ui_state.filter_text);
                        ui_state.selected_index = 0;
                        ui_state.offset = 0;
                    }

                    clamp_viewport(&mut ui_state, filtered.len());
                    redraw_ui(title, &ui_state, options, &filtered)?;
                }
            }
            Step::Idle => {}
        }
    }
}

/// Handle keyboard events in the selection UI
fn handle_key_event(key_event: &KeyEvent, ui_state: &UiState, filtered_len: usize) -> Step {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Step::Cancelled
        }
        KeyCode::Up => Step::Updated(move_selected_index(
            ui_state,
            filtered_len,
            CycleDirection::Up,
        )),
        KeyCode::Down => Step::Updated(move_selected_index(
            ui_state,
            filtered_len,
            CycleDirection::Down,
        )),
        KeyCode::Enter => Step::Chosen(ui_state.selected_index),
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut new_state = ui_state.clone();
            new_state.filter_text.pop();
            Step::Updated(new_state)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut new_state = ui_state.clone();
            new_state.is_filtering = false;
            new_state.filter_text.clear();
            Step::Updated(new_state)
        }
        KeyCode::Esc => Step::Cancelled,
        KeyCode::Char('/') if !ui_state.is_filtering => {
            let mut new_state = ui_state.clone();
            new_state.is_filtering = true;
            Step::Updated(new_state)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut new_state = ui_state.clone();
            new_state.filter_text.push(c);
            Step::Updated(new_state)
        }
        KeyCode::Char('q') => Step::Cancelled,
        _ => Step::Idle,
    }
}

/// Move the selected index in the given direction, wrapping at the ends
fn move_selected_index(
    ui_state: &UiState,
    filtered_len: usize,
    direction: CycleDirection,
) -> UiState {
    let mut ui_state = ui_state.clone();
    if filtered_len == 0 {
        return ui_state;
    }

    ui_state.selected_index = match direction {
        CycleDirection::Up => {
            if ui_state.selected_index == 0 {
                filtered_len - 1
            } else {
                ui_state.selected_index - 1
            }
        }
        CycleDirection::Down => (ui_state.selected_index + 1) % filtered_len,
    };

    ui_state
}

/// Keep the selection inside the visible window
fn clamp_viewport(ui_state: &mut UiState, filtered_len: usize) {
    let height = ui_state.height.max(1) as usize;

    if ui_state.selected_index >= filtered_len {
        ui_state.selected_index = filtered_len.saturating_sub(1);
    }

    if ui_state.selected_index < ui_state.offset {
        ui_state.offset = ui_state.selected_index;
    } else if ui_state.selected_index >= ui_state.offset + height {
        ui_state.offset = ui_state.selected_index + 1 - height;
    }
}

fn redraw_ui(
    title: &str,
    ui_state: &UiState,
    options: &[String],
    filtered: &[usize],
) -> Result<()> {
    let mut output = stderr();

    queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(&mut output, title, ui_state, filtered.len())?;

    if filtered.is_empty() {
        queue!(
            output,
            SetForegroundColor(Red),
            Print("No matching options!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        let height = ui_state.height.max(1) as usize;
        let visible = filtered.iter().skip(ui_state.offset).take(height);

        for (row, &option_index) in visible.enumerate() {
            let position = row + ui_state.offset;
            print_option_row(
                &mut output,
                row as u16 + 1,
                position,
                &options[option_index],
                position == ui_state.selected_index,
                filtered.len(),
            )?;
        }
    }

    if ui_state.is_filtering {
        queue!(
            output,
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    output.flush()?;
    Ok(())
}

/// Print the header line for the selection UI
fn print_header(
    output: &mut impl Write,
    title: &str,
    ui_state: &UiState,
    filtered_len: usize,
) -> Result<()> {
    let (width, _) = terminal::size()?;

    let instructions = if ui_state.is_filtering {
        "<esc>: Stop Filtering".to_string()
    } else {
        format!(
            "/: Filter   |   {}/{}   |   q: Quit",
            pad_to_width_of(ui_state.selected_index + 1, filtered_len),
            filtered_len
        )
    };

    let content = format!("  {title}   |   {instructions}");
    let padding = " ".repeat((width as usize).saturating_sub(content.len()));

    queue!(
        output,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(content),
        Print(padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
        cursor::MoveToNextLine(1)
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Clear and write one option row, highlighting the selection
fn print_option_row(
    output: &mut impl Write,
    row: u16,
    position: usize,
    option: &str,
    is_selected: bool,
    filtered_len: usize,
) -> Result<()> {
    queue!(output, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let index_as_string = pad_to_width_of(position + 1, filtered_len);
    let content = format!("[{index_as_string}] {option}");

    if is_selected {
        queue!(
            output,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(
        output,
        Print(content),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
        cursor::MoveToNextLine(1)
    )?;

    Ok(())
}

/// Filter the displayed option indexes with a fuzzy match on the predicate
fn filter_displayed_indexes(options: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..options.len()).collect();
    }

    let matcher = SkimMatcherV2::default();

    options
        .iter()
        .enumerate()
        .filter_map(|(i, option)| matcher.fuzzy_match(option, predicate).map(|_| i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn state() -> UiState {
        UiState {
            selected_index: 0,
            offset: 0,
            height: 10,
            is_filtering: false,
            filter_text: String::new(),
        }
    }

    #[test]
    fn test_filter_empty_predicate_keeps_everything() {
        let all = options(&["git", "docker", "files"]);
        assert_eq!(filter_displayed_indexes(&all, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_fuzzy_matches_subsequences() {
        let all = options(&["git", "docker", "digit"]);
        assert_eq!(filter_displayed_indexes(&all, "dk"), vec![1]);
        assert_eq!(filter_displayed_indexes(&all, "gi"), vec![0, 2]);
    }

    #[test]
    fn test_move_selected_index_wraps() {
        let up = move_selected_index(&state(), 3, CycleDirection::Up);
        assert_eq!(up.selected_index, 2);

        let down = move_selected_index(&up, 3, CycleDirection::Down);
        assert_eq!(down.selected_index, 0);
    }

    #[test]
    fn test_clamp_viewport_follows_selection() {
        let mut ui_state = state();
        ui_state.height = 3;
        ui_state.selected_index = 5;

        clamp_viewport(&mut ui_state, 10);
        assert_eq!(ui_state.offset, 3);

        ui_state.selected_index = 1;
        clamp_viewport(&mut ui_state, 10);
        assert_eq!(ui_state.offset, 1);
    }
}
