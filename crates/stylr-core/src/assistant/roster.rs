//! The set of assistants available to the user.

use super::model::Assistant;
use super::preset::get_default_assistants;
use crate::error::{Result, StylrError};

/// Ordered assistants plus the currently active one.
///
/// The roster is never empty: deleting the last assistant is rejected.
#[derive(Debug, Clone)]
pub struct AssistantRoster {
    assistants: Vec<Assistant>,
    active_id: String,
}

impl AssistantRoster {
    /// Creates a roster; the first assistant becomes active.
    pub fn new(assistants: Vec<Assistant>) -> Result<Self> {
        let active_id = assistants
            .first()
            .map(|a| a.id.clone())
            .ok_or_else(|| StylrError::invalid_input("at least one assistant is required"))?;
        Ok(Self {
            assistants,
            active_id,
        })
    }

    pub fn with_defaults() -> Self {
        let assistants = get_default_assistants();
        let active_id = assistants[0].id.clone();
        Self {
            assistants,
            active_id,
        }
    }

    pub fn all(&self) -> &[Assistant] {
        &self.assistants
    }

    pub fn get(&self, id: &str) -> Option<&Assistant> {
        self.assistants.iter().find(|a| a.id == id)
    }

    pub fn active(&self) -> &Assistant {
        // The active id always refers to a member: every mutation re-points it.
        self.get(&self.active_id).unwrap_or(&self.assistants[0])
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn select(&mut self, id: &str) -> Result<&Assistant> {
        if self.get(id).is_none() {
            return Err(StylrError::not_found("assistant", id));
        }
        self.active_id = id.to_string();
        Ok(self.active())
    }

    /// Adds an assistant and makes it active.
    pub fn add(&mut self, assistant: Assistant) -> Result<()> {
        if assistant.name.trim().is_empty() {
            return Err(StylrError::invalid_input("assistant name must not be empty"));
        }
        if self.get(&assistant.id).is_some() {
            return Err(StylrError::invalid_input(format!(
                "assistant '{}' already exists",
                assistant.id
            )));
        }
        self.active_id = assistant.id.clone();
        self.assistants.push(assistant);
        Ok(())
    }

    /// Replaces an existing assistant with the same id.
    pub fn update(&mut self, assistant: Assistant) -> Result<()> {
        let slot = self
            .assistants
            .iter_mut()
            .find(|a| a.id == assistant.id)
            .ok_or_else(|| StylrError::not_found("assistant", assistant.id.clone()))?;
        *slot = assistant;
        Ok(())
    }

    /// Removes an assistant. If it was active, the first remaining one takes over.
    pub fn delete(&mut self, id: &str) -> Result<Assistant> {
        let index = self
            .assistants
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StylrError::not_found("assistant", id))?;
        if self.assistants.len() <= 1 {
            return Err(StylrError::invalid_input("Cannot delete the last assistant"));
        }

        let removed = self.assistants.remove(index);
        if self.active_id == removed.id {
            self.active_id = self.assistants[0].id.clone();
        }
        Ok(removed)
    }
}

impl Default for AssistantRoster {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{find_template, CAR_ASSISTANT_ID, FASHION_ASSISTANT_ID};

    #[test]
    fn test_new_rejects_empty() {
        assert!(AssistantRoster::new(vec![]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_add_makes_active() {
        let mut roster = AssistantRoster::with_defaults();
        let travel = find_template("travel").unwrap().instantiate();
        let id = travel.id.clone();

        roster.add(travel).unwrap();
        assert_eq!(roster.active_id(), id);
        assert_eq!(roster.all().len(), 4);
    }

    #[test]
    fn test_delete_active_falls_back_to_first() {
        let mut roster = AssistantRoster::with_defaults();
        roster.select(CAR_ASSISTANT_ID).unwrap();

        roster.delete(CAR_ASSISTANT_ID).unwrap();
        assert_eq!(roster.active_id(), FASHION_ASSISTANT_ID);
        assert!(roster.get(CAR_ASSISTANT_ID).is_none());
    }

    #[test]
    fn test_cannot_delete_last_assistant() {
        let assistants = get_default_assistants().into_iter().take(1).collect();
        let mut roster = AssistantRoster::new(assistants).unwrap();

        let err = roster.delete(FASHION_ASSISTANT_ID).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(roster.all().len(), 1);
    }

    #[test]
    fn test_update_and_unknown_ids() {
        let mut roster = AssistantRoster::with_defaults();
        let mut fashion = roster.get(FASHION_ASSISTANT_ID).unwrap().clone();
        fashion.name = "VStylr".to_string();
        roster.update(fashion).unwrap();
        assert_eq!(roster.active().name, "VStylr");

        assert!(roster.select("nope").unwrap_err().is_not_found());
        assert!(roster.delete("nope").unwrap_err().is_not_found());
    }
}
