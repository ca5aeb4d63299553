use crate::form::FieldId;

/// Records which fields have been interacted with since the last reset.
///
/// A field moves from untouched to touched once and stays there until
/// the form is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchTracker {
    touched: [bool; FieldId::COUNT],
}

impl TouchTracker {
    /// Mark a field touched. Returns `true` on the first touch.
    pub fn touch(&mut self, field: FieldId) -> bool {
        let slot = &mut self.touched[field.index()];
        let first = !*slot;
        *slot = true;
        first
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched[field.index()]
    }

    pub fn touched_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL
            .into_iter()
            .filter(|field| self.is_touched(*field))
    }
}
