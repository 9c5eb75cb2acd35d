//! Loading/ready/failed state shared by every data-backed view

/// State of a view backed by a single request
///
/// Exactly one of the variants holds at a time, so a view can never be
/// loading and showing an error at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<T> {
    /// Request in flight
    #[default]
    Loading,
    /// Request settled with data
    Ready(T),
    /// Request failed; the message is fit for display
    Failed(String),
    /// The requested resource does not exist
    NotFound,
}

impl<T> ViewState<T> {
    /// Whether a request is in flight
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Data, if the request succeeded
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Display message, if the request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

}
