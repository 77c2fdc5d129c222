use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};

use crate::models::{TagRead, TagSummary};

/// Read the ID3 tag of a single file and summarize the fields the report uses.
/// Never fails: unreadable files and tagless files map to their own variants.
pub fn read_tag(path: &Path) -> TagRead {
    let tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(id3::Error {
            kind: id3::ErrorKind::NoTag,
            ..
        }) => return TagRead::NoTag,
        Err(_) => return TagRead::Unreadable,
    };

    TagRead::Tag(TagSummary {
        album: tag.album().map(str::to_owned),
        artist: tag.artist().map(str::to_owned),
        title: tag.title().map(str::to_owned),
        track: tag.track(),
        year: best_year(&tag),
        tdat: text_frame(&tag, "TDAT"),
        tit3: text_frame(&tag, "TIT3"),
    })
}

/// Best available release year, preferring the release date over the
/// original release date, the recording date, and finally the plain
/// year frame.
fn best_year(tag: &Tag) -> Option<i32> {
    tag.date_released()
        .map(|ts| ts.year)
        .or_else(|| tag.original_date_released().map(|ts| ts.year))
        .or_else(|| tag.date_recorded().map(|ts| ts.year))
        .or_else(|| tag.year())
}

/// Raw text of a frame id, ignoring frames that are not plain text.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    match tag.get(id)?.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}
