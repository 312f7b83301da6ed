//! Display surface: the query input and the project cards.
//!
//! Both are handles in the DOM sense. Cloning a [`Card`] yields another
//! handle to the same card, so the caller can keep observing cards that were
//! handed to a [`VisibilityController`].

use crate::types::ProjectId;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

/// A rendered element whose CSS classes can be toggled.
pub trait CardElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// Callback invoked with the current text on every input change.
pub type InputListener = Box<dyn FnMut(&str)>;

/// A text field that reports value changes.
pub trait QueryInput {
    fn on_input(&mut self, listener: InputListener);
}

/// Attaches `on_query` so that every input change calls it with the current text.
pub fn bind(input: &mut dyn QueryInput, on_query: impl FnMut(&str) + 'static) {
    input.on_input(Box::new(on_query));
}

/// In-memory card handle.
#[derive(Clone, Debug, Default)]
pub struct Card {
    state: Rc<RefCell<CardState>>,
}

#[derive(Debug, Default)]
struct CardState {
    classes: BTreeSet<String>,
    /// Number of class mutations applied through [`CardElement`].
    mutations: usize,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let card = Self::default();
        card.state
            .borrow_mut()
            .classes
            .extend(classes.into_iter().map(Into::into));
        card
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    pub fn mutations(&self) -> usize {
        self.state.borrow().mutations
    }
}

impl CardElement for Card {
    fn has_class(&self, class: &str) -> bool {
        Card::has_class(self, class)
    }

    fn add_class(&mut self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.mutations += 1;
        state.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.mutations += 1;
        state.classes.remove(class);
    }
}

/// In-memory text field.
///
/// Listeners fire only when the value actually changes, like the DOM
/// `input` event.
#[derive(Default)]
pub struct TextInput {
    value: String,
    listeners: Vec<InputListener>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replaces the whole value (typing over a selection, paste, clear).
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        self.dispatch();
    }

    /// Appends text at the end, as typing would.
    pub fn type_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.value.push_str(text);
        self.dispatch();
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        if self.value.pop().is_some() {
            self.dispatch();
        }
    }

    fn dispatch(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.value);
        }
    }
}

impl QueryInput for TextInput {
    fn on_input(&mut self, listener: InputListener) {
        self.listeners.push(listener);
    }
}

struct TrackedCard<C> {
    id: ProjectId,
    element: C,
    hidden: bool,
}

/// Shows or hides every tracked card from the latest match set.
pub struct VisibilityController<C> {
    cards: Vec<TrackedCard<C>>,
    hidden_class: String,
}

impl<C: CardElement> VisibilityController<C> {
    /// Tracks `cards` without modifying them. A card that already carries
    /// the hidden class counts as hidden until the next update.
    pub fn new(cards: Vec<(ProjectId, C)>, hidden_class: impl Into<String>) -> Self {
        let hidden_class = hidden_class.into();
        Self {
            cards: cards
                .into_iter()
                .map(|(id, element)| TrackedCard {
                    hidden: element.has_class(&hidden_class),
                    id,
                    element,
                })
                .collect(),
            hidden_class,
        }
    }

    /// Re-evaluates every card:
    /// - no query: visible
    /// - id in `matches`: visible
    /// - otherwise: hidden
    pub fn apply_visibility(&mut self, matches: &HashSet<ProjectId>, has_query: bool) {
        for card in &mut self.cards {
            let visible = !has_query || matches.contains(&card.id);
            if visible {
                card.element.remove_class(&self.hidden_class);
            } else {
                card.element.add_class(&self.hidden_class);
            }
            card.hidden = !visible;
        }
    }

    pub fn hidden_class(&self) -> &str {
        &self.hidden_class
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ids of cards left visible by the last update, in card order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &ProjectId> + '_ {
        self.cards.iter().filter(|c| !c.hidden).map(|c| &c.id)
    }

    /// Ids of cards hidden by the last update, in card order.
    pub fn hidden_ids(&self) -> impl Iterator<Item = &ProjectId> + '_ {
        self.cards.iter().filter(|c| c.hidden).map(|c| &c.id)
    }
}
