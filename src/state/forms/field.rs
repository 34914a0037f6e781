//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
    Path(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new select field over a fixed option list
    pub fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Select {
                options,
                selected: None,
            },
        }
    }

    /// Create a new file-path field
    pub fn path(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Path(String::new()),
        }
    }

    /// Get the text value (returns empty string for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => s,
            FieldValue::Select { .. } => "",
        }
    }

    /// Get the selected option for select fields
    pub fn selected_option(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Select { options, selected } => selected.map(|i| options[i]),
            _ => None,
        }
    }

    /// Whether the field holds no value yet
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => s.trim().is_empty(),
            FieldValue::Select { selected, .. } => selected.is_none(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => *s = value,
            FieldValue::Select { .. } => {}
        }
    }

    /// Push a character to the field value.
    /// On select fields the character jumps to the next option with that
    /// initial, cycling past the current selection.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => s.push(c),
            FieldValue::Select { options, selected } => {
                let start = selected.map(|i| i + 1).unwrap_or(0);
                let total = options.len();
                for offset in 0..total {
                    let idx = (start + offset) % total;
                    if options[idx]
                        .chars()
                        .next()
                        .is_some_and(|o| o.eq_ignore_ascii_case(&c))
                    {
                        *selected = Some(idx);
                        return;
                    }
                }
            }
        }
    }

    /// Remove the last character from the field value.
    /// Backspace on a select field clears the selection.
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => {
                s.pop();
            }
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Select the next option (no-op on non-select fields)
    pub fn select_next(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(selected.map(|i| (i + 1) % options.len()).unwrap_or(0));
        }
    }

    /// Select the previous option (no-op on non-select fields)
    pub fn select_prev(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(
                selected
                    .map(|i| if i == 0 { options.len() - 1 } else { i - 1 })
                    .unwrap_or(options.len() - 1),
            );
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Path(s) => s.clone(),
            FieldValue::Select { options, selected } => selected
                .map(|i| options[i].to_string())
                .unwrap_or_default(),
        }
    }

    /// Whether the field is a select over a fixed option list
    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }
}
