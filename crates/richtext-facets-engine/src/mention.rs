use std::collections::HashMap;

/// Maps a mention handle to the opaque identity stored in its facet.
///
/// Returning `None` leaves the `@handle` as unannotated text.
pub trait MentionResolver {
    fn resolve(&self, handle: &str) -> Option<String>;
}

/// Uses the handle itself as the mention identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleAsId;

impl MentionResolver for HandleAsId {
    fn resolve(&self, handle: &str) -> Option<String> {
        Some(handle.to_owned())
    }
}

/// A fixed handle to identity table.
impl MentionResolver for HashMap<String, String> {
    fn resolve(&self, handle: &str) -> Option<String> {
        self.get(handle).cloned()
    }
}

impl<F> MentionResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, handle: &str) -> Option<String> {
        self(handle)
    }
}
