/// Pending delete awaiting the user's answer.
///
/// Only [`DeleteConfirmation::confirm`] hands the row back; cancelling or
/// requesting another row drops the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteConfirmation<T> {
    pending: Option<T>,
}

impl<T> Default for DeleteConfirmation<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DeleteConfirmation<T> {
    pub fn request(&mut self, row: T) {
        self.pending = Some(row);
    }

    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_fires_only_after_confirm() {
        let mut deleted = Vec::new();
        let mut prompt = DeleteConfirmation::default();

        prompt.request(7);
        assert!(prompt.is_open());
        assert!(deleted.is_empty());

        if let Some(row) = prompt.confirm() {
            deleted.push(row);
        }
        assert_eq!(deleted, vec![7]);
        assert!(!prompt.is_open());
        assert_eq!(prompt.confirm(), None);
    }

    #[test]
    fn cancel_drops_the_row() {
        let mut prompt = DeleteConfirmation::default();
        prompt.request("Flour");
        prompt.cancel();
        assert!(!prompt.is_open());
        assert_eq!(prompt.confirm(), None);
    }
}
