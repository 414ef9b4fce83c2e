// Drilldown navigation: a linear Location -> Server -> Storage Node -> Device
// selection state. Selecting or clearing a level resets every level below it.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Level {
    Location,
    Server,
    StorageNode,
    Device,
}

impl Level {
    /// All levels, outermost first.
    pub const ALL: [Level; 4] = [
        Level::Location,
        Level::Server,
        Level::StorageNode,
        Level::Device,
    ];

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Location => None,
            Level::Server => Some(Level::Location),
            Level::StorageNode => Some(Level::Server),
            Level::Device => Some(Level::StorageNode),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Location => "location",
            Level::Server => "server",
            Level::StorageNode => "storage node",
            Level::Device => "device",
        };
        f.write_str(name)
    }
}

/// One navigation event. A `None` (or empty) value clears the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub level: Level,
    #[serde(default)]
    pub value: Option<String>,
}

impl Selection {
    pub fn select(level: Level, value: impl Into<String>) -> Self {
        Self {
            level,
            value: Some(value.into()),
        }
    }

    pub fn clear(level: Level) -> Self {
        Self { level, value: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("cannot select a {level} before a {parent} is selected")]
    ParentNotSelected { level: Level, parent: Level },
}

/// Current selection at each level. Invariant: a level is only set when
/// every level above it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrilldownState {
    pub location: Option<String>,
    pub server: Option<String>,
    pub storage_node: Option<String>,
    pub device: Option<String>,
}

impl DrilldownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state by applying `selections` in order.
    pub fn from_selections<I>(selections: I) -> Result<Self, NavigationError>
    where
        I: IntoIterator<Item = Selection>,
    {
        let mut state = Self::new();
        for selection in selections {
            state.apply(selection)?;
        }
        Ok(state)
    }

    pub fn get(&self, level: Level) -> Option<&str> {
        self.slot(level).as_deref()
    }

    /// Deepest selected level; `None` when nothing is selected.
    pub fn depth(&self) -> Option<Level> {
        Level::ALL
            .into_iter()
            .take_while(|l| self.get(*l).is_some())
            .last()
    }

    pub fn apply(&mut self, selection: Selection) -> Result<(), NavigationError> {
        match selection.value.filter(|v| !v.is_empty()) {
            Some(value) => self.select(selection.level, value),
            None => {
                self.clear(selection.level);
                Ok(())
            }
        }
    }

    /// Selects `value` at `level` and resets all descendants.
    pub fn select(
        &mut self,
        level: Level,
        value: impl Into<String>,
    ) -> Result<(), NavigationError> {
        if let Some(parent) = level.parent()
            && self.get(parent).is_none()
        {
            return Err(NavigationError::ParentNotSelected { level, parent });
        }
        *self.slot_mut(level) = Some(value.into());
        self.reset_below(level);
        Ok(())
    }

    /// Clears `level` and all descendants.
    pub fn clear(&mut self, level: Level) {
        *self.slot_mut(level) = None;
        self.reset_below(level);
    }

    fn reset_below(&mut self, level: Level) {
        for l in Level::ALL.into_iter().filter(|l| *l > level) {
            *self.slot_mut(l) = None;
        }
    }

    fn slot(&self, level: Level) -> &Option<String> {
        match level {
            Level::Location => &self.location,
            Level::Server => &self.server,
            Level::StorageNode => &self.storage_node,
            Level::Device => &self.device,
        }
    }

    fn slot_mut(&mut self, level: Level) -> &mut Option<String> {
        match level {
            Level::Location => &mut self.location,
            Level::Server => &mut self.server,
            Level::StorageNode => &mut self.storage_node,
            Level::Device => &mut self.device,
        }
    }
}
