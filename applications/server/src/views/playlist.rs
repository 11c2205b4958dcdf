/// Playlist page: search/sort controls, a page of tracks, and pagination
use super::{escape, layout, playlist_href, track_media};
use crate::flash::FlashMessage;
use std::fmt::Write;
use tubelist_core::{Page, SortDirection, SortField, Track, TrackQuery};

/// Link to `page` of a playlist keeping the current search and sort
pub fn page_href(title: &str, query: &TrackQuery, page: usize) -> String {
    let mut href = format!(
        "{}?sort={}&direction={}&page={}",
        playlist_href(title),
        query.sort.as_str(),
        query.direction.as_str(),
        page
    );
    if let Some(search) = &query.search {
        let _ = write!(href, "&search={}", urlencoding::encode(search));
    }
    href
}

pub fn render(
    playlists: &[String],
    title: &str,
    query: &TrackQuery,
    page: &Page<Track>,
    flash: &[FlashMessage],
) -> String {
    let mut cards = String::new();
    for track in &page.items {
        cards.push_str(&track_card(playlists, title, track));
    }
    if page.items.is_empty() {
        cards.push_str(r#"<p class="col-span-full text-center text-slate-500">No tracks.</p>"#);
    }

    let mut pager = String::new();
    if page.has_previous() {
        let _ = write!(
            pager,
            r#"<a href="{}" class="bg-sky-800 hover:bg-sky-700 text-white font-bold py-2 px-4 rounded-l">Previous</a>"#,
            escape(&page_href(title, query, page.page - 1))
        );
    }
    if page.has_next() {
        let _ = write!(
            pager,
            r#"<a href="{}" class="bg-sky-800 hover:bg-sky-700 text-white font-bold py-2 px-4 rounded-r">Next</a>"#,
            escape(&page_href(title, query, page.page + 1))
        );
    }

    let content = format!(
        r#"<div class="flex flex-wrap items-center justify-between gap-4 mb-6">
    <h2 class="text-2xl font-semibold">{heading}</h2>
    <form method="get" action="{action}" class="flex flex-wrap gap-2">
        <input name="search" value="{search}" placeholder="Search artist or title" class="border rounded p-2">
        <select name="sort" class="border rounded p-2">{sort_options}</select>
        <select name="direction" class="border rounded p-2">{direction_options}</select>
        <button type="submit" class="bg-sky-800 hover:bg-sky-700 text-white py-2 px-4 rounded">Apply</button>
    </form>
    <form method="post" action="/remove_playlist/{encoded}">
        <button type="submit" class="text-red-700 hover:underline">Remove playlist</button>
    </form>
</div>
<p class="text-sm text-slate-500 mb-4">{total} tracks, page {current} of {pages}</p>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6">
    {cards}
</div>
<div class="mt-8 flex justify-center">
    {pager}
</div>"#,
        heading = escape(title),
        action = escape(&playlist_href(title)),
        encoded = escape(&urlencoding::encode(title)),
        search = escape(query.search.as_deref().unwrap_or_default()),
        sort_options = sort_options(query.sort),
        direction_options = direction_options(query.direction),
        total = page.total_items,
        current = page.page,
        pages = page.total_pages.max(1),
    );

    layout(playlists, flash, &content)
}

fn track_card(playlists: &[String], current: &str, track: &Track) -> String {
    let encoded = urlencoding::encode(current);

    let mut destinations = String::new();
    for title in playlists.iter().filter(|t| t.as_str() != current) {
        let _ = write!(
            destinations,
            r#"<option value="{0}">{0}</option>"#,
            escape(title)
        );
    }

    let move_form = if destinations.is_empty() {
        String::new()
    } else {
        format!(
            r#"<form method="post" action="/move_track/{id}" class="flex gap-1 mt-2">
                <input type="hidden" name="from_playlist" value="{from}">
                <select name="to_playlist" class="border rounded text-xs p-1">{destinations}</select>
                <button type="submit" class="bg-sky-800 text-white text-xs px-2 rounded">Move</button>
            </form>"#,
            id = track.id,
            from = escape(current),
        )
    };

    format!(
        r#"<div class="bg-white rounded-lg shadow-md overflow-hidden">
        {media}
        <div class="p-4">
            <a href="{url}" class="hover:underline" target="_blank">
                <h2 class="font-semibold mb-2 text-slate-800 truncate">{title}</h2>
            </a>
            <p class="text-sm text-slate-600 mb-2">{artist}</p>
            <p class="text-xs text-slate-500">{date} &middot; {plays} plays</p>
            <div class="relative mt-2">
                <button type="button" class="bg-sky-800 text-white text-xs px-2 rounded" onclick="toggleDropdown({id})">&hellip;</button>
                <div id="dropdown-{id}" class="origin-top-right hidden mt-1">
                    <form method="post" action="/remove_track/{encoded}/{id}">
                        <button type="submit" class="text-xs text-red-700 hover:underline">Remove from playlist</button>
                    </form>
                    {move_form}
                </div>
            </div>
        </div>
    </div>"#,
        media = track_media(track),
        url = escape(&track.url),
        title = escape(&track.title),
        artist = escape(&track.artist),
        date = escape(&track.date),
        plays = track.play_count,
        id = track.id,
        encoded = escape(&encoded),
    )
}

fn sort_options(selected: SortField) -> String {
    [SortField::Date, SortField::Artist, SortField::Title]
        .into_iter()
        .map(|field| option(field.as_str(), field == selected))
        .collect()
}

fn direction_options(selected: SortDirection) -> String {
    [SortDirection::Asc, SortDirection::Desc]
        .into_iter()
        .map(|direction| option(direction.as_str(), direction == selected))
        .collect()
}

fn option(value: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(r#"<option value="{value}"{selected}>{value}</option>"#)
}
