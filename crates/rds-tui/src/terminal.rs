//! Terminal setup and the two-prompt selection loop.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use rds_compare::ParameterGroup;

use crate::picker::{GroupPicker, PickerOutcome};

pub const FIRST_PROMPT: &str = "Select the first parameter group to compare:";
pub const SECOND_PROMPT: &str = "Select the second parameter group to compare:";

/// Ask for two groups on the real terminal.
///
/// Returns `Ok(None)` if the user cancels either prompt. The terminal is
/// restored before returning, including on error.
pub fn select_two(groups: &[ParameterGroup]) -> io::Result<Option<(ParameterGroup, ParameterGroup)>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = select_two_with(&mut terminal, groups, poll_event);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn poll_event() -> io::Result<Option<Event>> {
    if event::poll(Duration::from_millis(100))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Run both prompts on `terminal`, reading events from `next_event`.
pub fn select_two_with<B, E>(
    terminal: &mut Terminal<B>,
    groups: &[ParameterGroup],
    mut next_event: E,
) -> io::Result<Option<(ParameterGroup, ParameterGroup)>>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
{
    let Some(first) = run_prompt(terminal, GroupPicker::new(FIRST_PROMPT, groups), &mut next_event)? else {
        tracing::info!("selection cancelled at first prompt");
        return Ok(None);
    };
    let Some(second) = run_prompt(terminal, GroupPicker::new(SECOND_PROMPT, groups), &mut next_event)? else {
        tracing::info!("selection cancelled at second prompt");
        return Ok(None);
    };

    tracing::debug!(first = %groups[first], second = %groups[second], "groups selected");
    Ok(Some((groups[first].clone(), groups[second].clone())))
}

/// Draw `picker` and feed it key events until it resolves.
///
/// Returns the selected index, or `None` on cancel.
pub fn run_prompt<B, E>(
    terminal: &mut Terminal<B>,
    mut picker: GroupPicker<'_>,
    next_event: &mut E,
) -> io::Result<Option<usize>>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
{
    loop {
        terminal.draw(|frame| frame.render_widget(&picker, frame.area()))?;

        let Some(Event::Key(key)) = next_event()? else {
            continue;
        };
        match picker.handle_key(key) {
            Some(PickerOutcome::Selected(index)) => return Ok(Some(index)),
            Some(PickerOutcome::Cancelled) => return Ok(None),
            None => {}
        }
    }
}
