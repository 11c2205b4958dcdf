//! Server-rendered HTML pages

pub mod index;
pub mod playlist;

use crate::flash::{FlashMessage, Level};
use std::fmt::Write;
use tubelist_core::{
    video::{thumbnail_url, youtube_id},
    Track,
};

/// Escape text for HTML element content and double-quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Path of a playlist page; the title is percent-encoded as one segment
pub fn playlist_href(title: &str) -> String {
    format!("/playlist/{}", urlencoding::encode(title))
}

/// Wrap page content in the shared shell: navigation, flash messages, scripts
pub(crate) fn layout(playlists: &[String], flash: &[FlashMessage], content: &str) -> String {
    let mut nav = String::new();
    for title in playlists {
        let _ = write!(
            nav,
            r#"<a href="{}" class="hover:underline">{}</a>"#,
            escape(&playlist_href(title)),
            escape(title)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Playlist Viewer</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://www.youtube.com/iframe_api"></script>
</head>
<body class="bg-slate-100 min-h-screen">
    <nav class="bg-sky-800 p-4">
        <div class="container mx-auto space-x-3 flex justify-center text-white">
            <a href="/" class="hover:underline">home</a>
            {nav}
        </div>
    </nav>
    <div class="container mx-auto px-4 py-8">
        {flash}
        {content}
    </div>
    <script src="/static/js/playlist.js"></script>
</body>
</html>
"#,
        flash = render_flash(flash),
    )
}

fn render_flash(messages: &[FlashMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let class = match message.level {
            Level::Success => "bg-emerald-100 text-emerald-800",
            Level::Error => "bg-red-100 text-red-800",
        };
        let _ = write!(
            out,
            r#"<div class="flash mb-4 rounded p-3 {class}">{}</div>"#,
            escape(&message.text)
        );
    }
    out
}

/// Thumbnail, hidden player mount and progress bar for one track.
///
/// Tracks whose URL carries no video id get a plain link instead.
pub(crate) fn track_media(track: &Track) -> String {
    let Some(video_id) = youtube_id(&track.url) else {
        return format!(
            r#"<div class="aspect-video flex items-center justify-center bg-slate-200 text-slate-500">
                <a href="{url}" target="_blank" class="hover:underline">open link</a>
            </div>"#,
            url = escape(&track.url),
        );
    };

    format!(
        r#"<div class="aspect-video relative">
            <img src="{thumb}" alt="{alt}" class="w-full h-full object-cover cursor-pointer"
                 data-video-id="{id}" data-track-id="{track_id}" onclick="playAudio(this)">
            <div id="player-{id}" class="absolute inset-0 hidden"></div>
            <div class="absolute bottom-0 left-0 right-0 h-1 bg-slate-200">
                <div id="progress-{id}" class="h-full bg-red-500 w-0"></div>
            </div>
        </div>"#,
        thumb = escape(&thumbnail_url(video_id)),
        alt = escape(&track.title),
        id = video_id,
        track_id = track.id,
    )
}
