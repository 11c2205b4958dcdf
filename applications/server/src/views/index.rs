/// Home page: a random track plus the create/add forms
use super::{escape, layout, track_media};
use crate::flash::FlashMessage;
use std::fmt::Write;
use tubelist_core::Track;

pub fn render(playlists: &[String], random_track: Option<&Track>, flash: &[FlashMessage]) -> String {
    let featured = match random_track {
        Some(track) => format!(
            r#"<div class="max-w-2xl mx-auto bg-white rounded-lg shadow-md overflow-hidden">
                {media}
                <div class="p-4">
                    <a href="{url}" class="hover:underline" target="_blank">
                        <h2 class="text-xl font-semibold mb-2 text-slate-800">{title}</h2>
                    </a>
                    <p class="text-slate-600 mb-2">{artist}</p>
                    <p class="text-sm text-slate-500">{date}</p>
                </div>
            </div>"#,
            media = track_media(track),
            url = escape(&track.url),
            title = escape(&track.title),
            artist = escape(&track.artist),
            date = escape(&track.date),
        ),
        None => "<p>No videos available.</p>".to_string(),
    };

    let mut options = String::new();
    for title in playlists {
        let _ = write!(
            options,
            r#"<option value="{0}">{0}</option>"#,
            escape(title)
        );
    }

    let content = format!(
        r#"<div class="text-center">
    <h2 class="text-2xl font-semibold mb-4">Random Track</h2>
    {featured}
</div>
<div class="grid md:grid-cols-2 gap-6 mt-10">
    <form method="post" action="/create_playlist" class="bg-white rounded-lg shadow-md p-4 space-y-3">
        <h3 class="font-semibold">Create playlist</h3>
        <input name="playlist_name" placeholder="Playlist name" class="border rounded w-full p-2">
        <button type="submit" class="bg-sky-800 hover:bg-sky-700 text-white py-2 px-4 rounded">Create</button>
    </form>
    <form method="post" action="/add_track" class="bg-white rounded-lg shadow-md p-4 space-y-3">
        <h3 class="font-semibold">Add track</h3>
        <select name="playlist_name" class="border rounded w-full p-2">{options}</select>
        <input name="date" placeholder="Date" class="border rounded w-full p-2">
        <input name="artist" placeholder="Artist" class="border rounded w-full p-2">
        <input name="title" placeholder="Title" class="border rounded w-full p-2">
        <input name="url" placeholder="Video URL" class="border rounded w-full p-2">
        <button type="submit" class="bg-sky-800 hover:bg-sky-700 text-white py-2 px-4 rounded">Add</button>
    </form>
</div>"#
    );

    layout(playlists, flash, &content)
}
