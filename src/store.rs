use crate::error::{CarteiraError, Result};
use crate::models::Client;

/// The in-memory client collection for one session. A new import replaces
/// the whole collection; the only in-place mutation is a per-client comment
/// update keyed by id (last writer wins).
#[derive(Debug, Default)]
pub struct Portfolio {
    clients: Vec<Client>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clients(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Full replacement on import; never merged with the previous list.
    pub fn replace(&mut self, clients: Vec<Client>) {
        self.clients = clients;
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Replace the comment of the client with the given id. Everything else
    /// about the collection is left untouched.
    pub fn update_comment(&mut self, id: &str, comment: &str) -> Result<()> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CarteiraError::UnknownClient(id.to_string()))?;
        let trimmed = comment.trim();
        client.comment = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        Ok(())
    }
}
