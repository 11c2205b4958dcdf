/// Route handlers
pub mod health;
pub mod pages;
pub mod playlists;
pub mod tracks;

/// A form field counts as present when it holds non-whitespace text
pub(crate) fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
