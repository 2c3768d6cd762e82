//! Selection state for one "pick a group" prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rds_compare::ParameterGroup;

/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: i32 = 10;

/// How a prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Index of the chosen group.
    Selected(usize),
    Cancelled,
}

/// A prompt listing groups with a movable cursor.
#[derive(Debug, Clone)]
pub struct GroupPicker<'a> {
    prompt: &'a str,
    groups: &'a [ParameterGroup],
    cursor: usize,
}

impl<'a> GroupPicker<'a> {
    pub fn new(prompt: &'a str, groups: &'a [ParameterGroup]) -> Self {
        Self {
            prompt,
            groups,
            cursor: 0,
        }
    }

    pub fn prompt(&self) -> &str {
        self.prompt
    }

    pub fn groups(&self) -> &[ParameterGroup] {
        self.groups
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Group under the cursor.
    pub fn current(&self) -> Option<&'a ParameterGroup> {
        self.groups.get(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: i32) {
        if self.groups.is_empty() {
            return;
        }
        let new_pos = self.cursor as i64 + delta as i64;
        self.cursor = new_pos.clamp(0, self.groups.len() as i64 - 1) as usize;
    }

    /// Apply a key press. Returns the outcome once the prompt is resolved.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(PickerOutcome::Cancelled);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-PAGE_STEP),
            KeyCode::PageDown => self.move_cursor(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = self.groups.len().saturating_sub(1),
            KeyCode::Enter if !self.groups.is_empty() => {
                return Some(PickerOutcome::Selected(self.cursor));
            }
            KeyCode::Esc | KeyCode::Char('q') => return Some(PickerOutcome::Cancelled),
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn groups() -> Vec<ParameterGroup> {
        (0..25)
            .map(|i| ParameterGroup::instance(format!("pg-{i}")))
            .collect()
    }

    #[test]
    fn test_cursor_clamps() {
        let groups = groups();
        let mut picker = GroupPicker::new("Pick", &groups);
        assert_eq!(picker.handle_key(key(KeyCode::Up)), None);
        assert_eq!(picker.cursor(), 0);

        picker.handle_key(key(KeyCode::PageDown));
        picker.handle_key(key(KeyCode::PageDown));
        picker.handle_key(key(KeyCode::PageDown));
        assert_eq!(picker.cursor(), 24);

        picker.handle_key(key(KeyCode::Char('k')));
        assert_eq!(picker.cursor(), 23);
        picker.handle_key(key(KeyCode::Home));
        assert_eq!(picker.cursor(), 0);
        picker.handle_key(key(KeyCode::Char('G')));
        assert_eq!(picker.current().unwrap().name, "pg-24");
    }

    #[test]
    fn test_enter_selects_current() {
        let groups = groups();
        let mut picker = GroupPicker::new("Pick", &groups);
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::Char('j')));
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), Some(PickerOutcome::Selected(2)));
    }

    #[test]
    fn test_cancel_keys() {
        let groups = groups();
        let mut picker = GroupPicker::new("Pick", &groups);
        assert_eq!(picker.handle_key(key(KeyCode::Esc)), Some(PickerOutcome::Cancelled));
        assert_eq!(picker.handle_key(key(KeyCode::Char('q'))), Some(PickerOutcome::Cancelled));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(picker.handle_key(ctrl_c), Some(PickerOutcome::Cancelled));
    }

    #[test]
    fn test_empty_list_cannot_select() {
        let mut picker = GroupPicker::new("Pick", &[]);
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::End));
        assert_eq!(picker.cursor(), 0);
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), None);
        assert!(picker.current().is_none());
    }

    #[test]
    fn test_release_events_ignored() {
        let groups = groups();
        let mut picker = GroupPicker::new("Pick", &groups);
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(picker.handle_key(release), None);
    }
}
