use std::cell::RefCell;
use std::collections::HashMap;

use super::{IdInputPort, ListRenderPort, NotifyPort, ProfileField, ProfileFormPort};

/// Form backed by a map; unset fields read as empty text.
#[derive(Default)]
pub struct MemoryForm {
    values: HashMap<ProfileField, String>,
    profile_id: String,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: ProfileField, value: &str) -> Self {
        self.values.insert(field, value.to_string());
        self
    }

    pub fn with_profile_id(mut self, id: &str) -> Self {
        self.profile_id = id.to_string();
        self
    }
}

impl ProfileFormPort for MemoryForm {
    fn value(&self, field: ProfileField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }
}

impl IdInputPort for MemoryForm {
    fn profile_id(&self) -> String {
        self.profile_id.clone()
    }
}

/// List that keeps its lines and counts `clear` calls.
#[derive(Default)]
pub struct MemoryList {
    lines: RefCell<Vec<String>>,
    clears: RefCell<usize>,
}

impl MemoryList {
    pub fn with_lines(lines: &[&str]) -> Self {
        let list = Self::default();
        list.lines
            .borrow_mut()
            .extend(lines.iter().map(|l| l.to_string()));
        list
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clears(&self) -> usize {
        *self.clears.borrow()
    }
}

impl ListRenderPort for MemoryList {
    fn clear(&self) {
        self.lines.borrow_mut().clear();
        *self.clears.borrow_mut() += 1;
    }

    fn append(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }
}

/// Records every notification in order.
#[derive(Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<String>>,
}

impl MemoryNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl NotifyPort for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
