//! Text input fields and focus cycling (pure).

/// The two editable fields at the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// `Conn #`: digits only, commits by connection number.
    Connection,
    /// `Filter:`: free text, space-delimited tokens.
    Filter,
}

impl InputField {
    /// Label drawn in front of the field.
    pub fn label(self) -> &'static str {
        match self {
            InputField::Connection => "Conn #",
            InputField::Filter => "Filter:",
        }
    }

    /// Whether typing `ch` into this field inserts it.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            InputField::Connection => ch.is_ascii_digit(),
            InputField::Filter => !ch.is_control(),
        }
    }
}

/// Character capacity of the `Conn #` field.
pub const CONNECTION_INPUT_CAPACITY: usize = 7;

/// Append-only text buffer with backspace.
///
/// Input is lowercased on entry so filtering is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    capacity: usize,
}

impl TextInput {
    /// Create an empty field holding at most `capacity` characters.
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maximum number of characters.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity. Existing text is never truncated.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Append `ch` lowercased. Returns false when the field is full.
    pub fn push(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= self.capacity {
            return false;
        }
        self.text.extend(ch.to_lowercase());
        true
    }

    /// Append every character of `text` that fits.
    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            if !self.push(ch) {
                break;
            }
        }
    }

    /// Remove the last character. Returns false when already empty.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

/// Fixed ring of focusable fields with an explicit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    fields: [InputField; 2],
    index: usize,
}

impl FocusRing {
    /// Tab order of the fields.
    pub const ORDER: [InputField; 2] = [InputField::Connection, InputField::Filter];

    /// Ring starting at `start`.
    pub fn starting_at(start: InputField) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|field| *field == start)
            .unwrap_or(0);
        Self {
            fields: Self::ORDER,
            index,
        }
    }

    /// Field that currently receives typed characters.
    pub fn current(&self) -> InputField {
        self.fields[self.index]
    }

    /// Move to the next field, wrapping around.
    pub fn advance(&mut self) -> InputField {
        self.index = (self.index + 1) % self.fields.len();
        self.current()
    }
}

impl Default for FocusRing {
    fn default() -> Self {
        Self::starting_at(InputField::Filter)
    }
}
