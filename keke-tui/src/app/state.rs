use keck::domain::InterruptCheck;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Schedule,
    RequestForm,
    SelectProgram,
    SelectInstrument,
    SelectInterruptProj,
    SelectRequest,
    InterruptDialog,
    ConfirmCancel,
}

/// Where the draft is in its lifecycle. Persistence is marked by `tooid`;
/// Submitted and Cancelled are reached only through a successful POST.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DraftState {
    Empty,
    Editing,
    Saved,
    Submitted,
    Cancelled,
}

impl DraftState {
    pub fn label(&self) -> &'static str {
        match self {
            DraftState::Empty => "new",
            DraftState::Editing => "editing (unsaved)",
            DraftState::Saved => "saved",
            DraftState::Submitted => "submitted",
            DraftState::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Program,
    Instrument,
    InterruptType,
    InterruptProj,
    ObsDate,
    StartTime,
    Duration,
    FlexTime,
    Target,
    ObsLocation,
    Notes,
}

impl DraftField {
    pub const ALL: [DraftField; 11] = [
        DraftField::Program,
        DraftField::Instrument,
        DraftField::InterruptType,
        DraftField::InterruptProj,
        DraftField::ObsDate,
        DraftField::StartTime,
        DraftField::Duration,
        DraftField::FlexTime,
        DraftField::Target,
        DraftField::ObsLocation,
        DraftField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Program => "Program",
            DraftField::Instrument => "Instrument",
            DraftField::InterruptType => "Interrupt type",
            DraftField::InterruptProj => "Interrupted program",
            DraftField::ObsDate => "Observation date",
            DraftField::StartTime => "Start time",
            DraftField::Duration => "Duration",
            DraftField::FlexTime => "Flexibility",
            DraftField::Target => "Target",
            DraftField::ObsLocation => "Observer location",
            DraftField::Notes => "Notes",
        }
    }

    /// Text fields are edited inline; Program / Instrument / InterruptProj
    /// open a picker and InterruptType cycles.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            DraftField::ObsDate
                | DraftField::StartTime
                | DraftField::Duration
                | DraftField::FlexTime
                | DraftField::Target
                | DraftField::ObsLocation
                | DraftField::Notes
        )
    }

    pub fn next(&self) -> DraftField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> DraftField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State of the interrupt-eligibility dialog. `pending` with no result
/// renders as "Loading"; each check replaces the result wholesale.
#[derive(Debug, Clone, Default)]
pub struct EligibilityState {
    pub pending: bool,
    pub result: Option<InterruptCheck>,
}

/// A single-line text input with a movable cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(c) = self.value[..self.cursor].chars().next_back() {
            let start = self.cursor - c.len_utf8();
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// The string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::from_str("2:00:00");
        input.home();
        input.insert('1');
        assert_eq!(input.value, "12:00:00");
        input.move_right();
        input.backspace();
        assert_eq!(input.value, "1:00:00");
    }

    #[test]
    fn text_input_handles_multibyte() {
        let mut input = TextInput::from_str("Kepler-α");
        input.backspace();
        assert_eq!(input.value, "Kepler-");
        input.insert('b');
        assert_eq!(input.value, "Kepler-b");
    }

    #[test]
    fn field_order_cycles() {
        assert_eq!(DraftField::Program.next(), DraftField::Instrument);
        assert_eq!(DraftField::Program.prev(), DraftField::Notes);
        assert_eq!(DraftField::Notes.next(), DraftField::Program);
    }
}
