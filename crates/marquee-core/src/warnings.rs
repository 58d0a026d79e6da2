use std::collections::HashSet;

pub fn emit(message: &str) {
    eprintln!("warn: {message}");
}

/// Collects report warnings, printing each distinct message once.
#[derive(Debug, Default)]
pub struct Warnings {
    seen: HashSet<String>,
    messages: Vec<String>,
}

impl Warnings {
    pub fn push(&mut self, message: String) {
        if self.seen.insert(message.clone()) {
            emit(&message);
            self.messages.push(message);
        }
    }

    pub fn empty_field(&mut self, field: &str) {
        self.push(format!("no rows carry a value for {field}"));
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
