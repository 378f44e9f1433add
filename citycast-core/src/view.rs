//! The display surface the widget drives.
//!
//! Controllers never touch a concrete UI; they write text into named slots
//! and toggle panels through [`WeatherView`].

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Text slots on the weather card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    City,
    Temperature,
    Description,
    Icon,
    FeelsLike,
    Humidity,
    Wind,
    Country,
    Error,
}

impl Slot {
    /// Slots that belong to the result view.
    pub const RESULT: [Slot; 8] = [
        Slot::City,
        Slot::Temperature,
        Slot::Description,
        Slot::Icon,
        Slot::FeelsLike,
        Slot::Humidity,
        Slot::Wind,
        Slot::Country,
    ];
}

/// Regions whose visibility can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Card,
    Error,
    Suggestions,
}

pub trait WeatherView: Send + 'static {
    fn input(&self) -> String;
    fn set_input(&mut self, text: &str);
    fn set_slot(&mut self, slot: Slot, text: &str);
    fn set_visible(&mut self, panel: Panel, visible: bool);
    /// Replace the suggestion list with these labels.
    fn render_suggestions(&mut self, labels: &[String]);
}

/// A view shared between the render controller and the suggestion box.
pub type SharedView<V> = Arc<Mutex<V>>;

/// Lock a shared view. A panic while holding the lock leaves only display
/// text behind, so poisoning is ignored.
pub fn lock<V>(view: &Mutex<V>) -> MutexGuard<'_, V> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory view. Keeps the last value written to every slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    input: String,
    slots: HashMap<Slot, String>,
    visible: HashSet<Panel>,
    suggestions: Vec<String>,
}

impl MemoryView {
    pub fn with_input(text: &str) -> Self {
        Self {
            input: text.to_string(),
            ..Self::default()
        }
    }

    pub fn slot(&self, slot: Slot) -> &str {
        self.slots.get(&slot).map(String::as_str).unwrap_or("")
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

impl WeatherView for MemoryView {
    fn input(&self) -> String {
        self.input.clone()
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn set_slot(&mut self, slot: Slot, text: &str) {
        self.slots.insert(slot, text.to_string());
    }

    fn set_visible(&mut self, panel: Panel, visible: bool) {
        if visible {
            self.visible.insert(panel);
        } else {
            self.visible.remove(&panel);
        }
    }

    fn render_suggestions(&mut self, labels: &[String]) {
        self.suggestions = labels.to_vec();
    }
}
