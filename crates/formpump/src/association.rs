//! Label/input pairing through generated ids.
//!
//! Labels and inputs that share a field name are paired in document order,
//! whichever one comes first. Each side that arrives before its partner
//! mints an id and parks it in a per-name FIFO queue; the partner pops the
//! head of that queue. Two queues per name keep the directions apart:
//!
//! - `input_owes_label`: an input rendered first, a later label takes its id as `for`
//! - `label_owes_input`: a label rendered first, a later input takes its `for` as `id`

use std::collections::{HashMap, VecDeque};
use std::fmt;

use rand::distr::Alphanumeric;
use rand::RngExt;
use tracing::trace;

/// Length of generated ids.
pub const ID_LENGTH: usize = 32;

/// An id shared by one label and one input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HtmlId(String);

impl HtmlId {
    /// Wraps an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HtmlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HtmlId> for String {
    fn from(id: HtmlId) -> Self {
        id.0
    }
}

/// Source of fresh ids for one form session.
pub trait IdGenerator: Send {
    /// Returns an id not handed out before.
    fn next_id(&mut self) -> HtmlId;
}

/// Random alphanumeric ids, [`ID_LENGTH`] characters long.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> HtmlId {
        let id: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect();
        HtmlId(id)
    }
}

/// Predictable ids (`prefix1`, `prefix2`, ...), for exact-output tests.
///
/// Counters restart with every session, so ids repeat across forms.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator producing `{prefix}{n}` starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> HtmlId {
        let id = HtmlId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Per-form pairing state.
pub struct AssociationEngine {
    input_owes_label: HashMap<String, VecDeque<HtmlId>>,
    label_owes_input: HashMap<String, VecDeque<HtmlId>>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for AssociationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssociationEngine")
            .field("input_owes_label", &self.input_owes_label)
            .field("label_owes_input", &self.label_owes_input)
            .finish_non_exhaustive()
    }
}

impl Default for AssociationEngine {
    fn default() -> Self {
        Self::new(Box::new(RandomIds))
    }
}

impl AssociationEngine {
    /// Creates an engine with empty queues.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            input_owes_label: HashMap::new(),
            label_owes_input: HashMap::new(),
            ids,
        }
    }

    /// Returns the `id` for an input named `name`.
    pub fn id_for_input(&mut self, name: &str) -> HtmlId {
        if let Some(id) = pop_front(&mut self.label_owes_input, name) {
            trace!(field = name, id = %id, "input claimed label id");
            return id;
        }
        let id = self.ids.next_id();
        trace!(field = name, id = %id, "input minted id");
        self.input_owes_label
            .entry(name.to_string())
            .or_default()
            .push_back(id.clone());
        id
    }

    /// Returns the `for` value for a label bound to `name`.
    pub fn id_for_label(&mut self, name: &str) -> HtmlId {
        if let Some(id) = pop_front(&mut self.input_owes_label, name) {
            trace!(field = name, id = %id, "label claimed input id");
            return id;
        }
        let id = self.ids.next_id();
        trace!(field = name, id = %id, "label minted id");
        self.label_owes_input
            .entry(name.to_string())
            .or_default()
            .push_back(id.clone());
        id
    }

    /// Field names that still have unmatched labels or inputs.
    pub fn dangling(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .input_owes_label
            .iter()
            .chain(&self.label_owes_input)
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

fn pop_front(queues: &mut HashMap<String, VecDeque<HtmlId>>, name: &str) -> Option<HtmlId> {
    queues.get_mut(name).and_then(VecDeque::pop_front)
}
