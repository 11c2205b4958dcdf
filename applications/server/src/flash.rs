//! One-shot messages carried across a redirect in a cookie.
//!
//! A mutating handler sets the cookie on its redirect; the next rendered page
//! reads it through the [`Flash`] extractor and clears it.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use std::convert::Infallible;

pub const COOKIE_NAME: &str = "tubelist_flash";

/// Message severity, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    fn tag(self) -> char {
        match self {
            Level::Success => 's',
            Level::Error => 'e',
        }
    }

    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            's' => Some(Level::Success),
            'e' => Some(Level::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: Level,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }

    /// Cookie value: level tag, a colon, then the percent-encoded text
    fn encode(&self) -> String {
        format!("{}:{}", self.level.tag(), urlencoding::encode(&self.text))
    }

    fn decode(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        let level = Level::from_tag(chars.next()?)?;
        let text = chars.as_str().strip_prefix(':')?;
        let text = urlencoding::decode(text).ok()?.into_owned();
        Some(Self { level, text })
    }
}

/// Messages left by the previous request
#[derive(Debug, Clone, Default)]
pub struct Flash {
    pub messages: Vec<FlashMessage>,
    /// Whether the request carried the cookie at all, decodable or not
    pub cookie_present: bool,
}

impl Flash {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Header that clears the cookie whenever the request sent one
    pub fn clear_header(&self) -> Option<(header::HeaderName, HeaderValue)> {
        if !self.cookie_present {
            return None;
        }
        Some((
            header::SET_COOKIE,
            HeaderValue::from_static("tubelist_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let values: Vec<&str> = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(name, _)| *name == COOKIE_NAME)
            .map(|(_, value)| value)
            .collect();

        let messages = values
            .iter()
            .filter_map(|value| FlashMessage::decode(value))
            .collect();

        Ok(Flash {
            messages,
            cookie_present: !values.is_empty(),
        })
    }
}

/// Redirect to `to`, leaving `message` for the page rendered there
pub fn redirect_with(to: &str, message: FlashMessage) -> Response {
    let cookie = format!(
        "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
        message.encode()
    );

    match HeaderValue::from_str(&cookie) {
        Ok(value) => (
            AppendHeaders([(header::SET_COOKIE, value)]),
            Redirect::to(to),
        )
            .into_response(),
        Err(e) => {
            // Encoded text is ASCII, so this only triggers on a broken invariant
            tracing::warn!("Dropping flash message: {}", e);
            Redirect::to(to).into_response()
        }
    }
}
