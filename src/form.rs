use crate::models::Gender;

pub const MAX_STYLES: usize = 3;

/// Text fields the input widgets write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ClothingItem,
    Color,
    PendingStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub clothing_item: String,
    pub color: String,
    pub gender: Gender,
    selected_styles: Vec<String>,
    pub pending_style_input: String,
}

impl FormState {
    pub fn selected_styles(&self) -> &[String] { &self.selected_styles }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::ClothingItem => self.clothing_item = value,
            Field::Color => self.color = value,
            Field::PendingStyle => self.pending_style_input = value,
        }
    }

    pub fn set_gender(&mut self, gender: Gender) { self.gender = gender; }

    pub fn can_add_style(&self) -> bool { self.selected_styles.len() < MAX_STYLES }

    /// Appends the trimmed tag and clears the pending input. Empty tags,
    /// duplicates and a full list leave everything untouched.
    pub fn add_style(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || !self.can_add_style() || self.selected_styles.iter().any(|s| s == tag) {
            return false;
        }
        self.selected_styles.push(tag.to_string());
        self.pending_style_input.clear();
        true
    }

    pub fn add_pending_style(&mut self) -> bool {
        let pending = self.pending_style_input.clone();
        self.add_style(&pending)
    }

    pub fn remove_style(&mut self, tag: &str) -> bool {
        match self.selected_styles.iter().position(|s| s == tag) {
            Some(idx) => { self.selected_styles.remove(idx); true }
            None => false,
        }
    }

    pub fn has_clothing_item(&self) -> bool { !self.clothing_item.trim().is_empty() }
}
