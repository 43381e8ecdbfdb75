use crate::constants::{DEFAULT_NAME_A, DEFAULT_NAME_B, NAME_MAX_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    PlayerA,
    PlayerB,
}

/// Edit state for the two name fields on the new-match screen.
#[derive(Debug)]
pub struct NameEditor {
    pub name_a: String,
    pub name_b: String,
    pub focus: NameField,
}

impl NameEditor {
    pub fn new() -> Self {
        Self {
            name_a: String::new(),
            name_b: String::new(),
            focus: NameField::PlayerA,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            NameField::PlayerA => NameField::PlayerB,
            NameField::PlayerB => NameField::PlayerA,
        };
    }

    pub fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let field = self.focused_field_mut();
        if field.chars().count() < NAME_MAX_LEN {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    /// The names to start the match with. Blank fields fall back to the
    /// default names; the core stores whatever it receives.
    pub fn names(&self) -> (String, String) {
        let name_a = self.name_a.trim();
        let name_b = self.name_b.trim();
        (
            if name_a.is_empty() { DEFAULT_NAME_A.to_string() } else { name_a.to_string() },
            if name_b.is_empty() { DEFAULT_NAME_B.to_string() } else { name_b.to_string() },
        )
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::PlayerA => &mut self.name_a,
            NameField::PlayerB => &mut self.name_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_edits_the_focused_field() {
        let mut editor = NameEditor::new();
        editor.insert('A');
        editor.insert('n');
        editor.insert('n');
        assert_eq!(editor.name_a, "Ann");
        assert_eq!(editor.name_b, "");

        editor.toggle_focus();
        editor.insert('B');
        editor.insert('o');
        editor.insert('b');
        assert_eq!(editor.name_a, "Ann");
        assert_eq!(editor.name_b, "Bob");
    }

    #[test]
    fn backspace_removes_from_the_focused_field() {
        let mut editor = NameEditor::new();
        editor.insert('A');
        editor.insert('n');
        editor.backspace();
        assert_eq!(editor.name_a, "A");

        // empty field tolerates further backspaces
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.name_a, "");
    }

    #[test]
    fn blank_fields_fall_back_to_the_default_names() {
        let mut editor = NameEditor::new();
        assert_eq!(
            editor.names(),
            (DEFAULT_NAME_A.to_string(), DEFAULT_NAME_B.to_string())
        );

        // whitespace-only input counts as blank
        editor.insert(' ');
        editor.insert(' ');
        editor.toggle_focus();
        editor.insert('B');
        assert_eq!(editor.names(), (DEFAULT_NAME_A.to_string(), "B".to_string()));
    }

    #[test]
    fn names_are_capped_and_control_chars_ignored() {
        let mut editor = NameEditor::new();
        editor.insert('\u{8}');
        editor.insert('\n');
        assert_eq!(editor.name_a, "");

        for _ in 0..(NAME_MAX_LEN + 5) {
            editor.insert('x');
        }
        assert_eq!(editor.name_a.chars().count(), NAME_MAX_LEN);
    }
}
