/// Outcome of reading the tag block of a single file.
#[derive(Debug, Clone)]
pub enum TagRead {
    /// The file could not be opened or its tag data could not be parsed.
    Unreadable,
    /// The file was readable but carries no tag metadata.
    NoTag,
    Tag(TagSummary),
}

/// The tag fields the report cares about, each absent field left as None.
#[derive(Debug, Clone, Default)]
pub struct TagSummary {
    pub album: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub track: Option<u32>,
    pub year: Option<i32>,
    pub tdat: Option<String>,
    pub tit3: Option<String>,
}

/// One row of the output report, in column order.
/// Tag fields stay empty when `error` is set.
#[derive(Debug, Clone, Default)]
pub struct FileRecord {
    pub full_name: String,
    pub file_name: String,
    pub file_modified: String,
    pub album: String,
    pub artist: String,
    pub title: String,
    pub track: String,
    pub year: String,
    pub tdat: String,
    pub tit3: String,
    pub error: String,
}

impl FileRecord {
    /// The record's fields in report column order.
    pub fn as_row(&self) -> [&str; 11] {
        [
            &self.full_name,
            &self.file_name,
            &self.file_modified,
            &self.album,
            &self.artist,
            &self.title,
            &self.track,
            &self.year,
            &self.tdat,
            &self.tit3,
            &self.error,
        ]
    }

    /// Replace embedded double quotes with apostrophes in every field,
    /// so each value can be emitted inside a quoted CSV cell verbatim.
    pub fn sanitize(&mut self) {
        for field in [
            &mut self.full_name,
            &mut self.file_name,
            &mut self.file_modified,
            &mut self.album,
            &mut self.artist,
            &mut self.title,
            &mut self.track,
            &mut self.year,
            &mut self.tdat,
            &mut self.tit3,
            &mut self.error,
        ] {
            if field.contains('"') {
                *field = field.replace('"', "'");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order() {
        let record = FileRecord {
            full_name: "/music/a.mp3".to_string(),
            file_name: "a.mp3".to_string(),
            file_modified: "2024-01-23 04:56:00".to_string(),
            album: "Tests".to_string(),
            artist: "Tester".to_string(),
            title: "Feeling Testy".to_string(),
            track: "1".to_string(),
            year: "2023".to_string(),
            tdat: "0104".to_string(),
            tit3: "subtitle".to_string(),
            error: String::new(),
        };
        assert_eq!(
            record.as_row(),
            [
                "/music/a.mp3",
                "a.mp3",
                "2024-01-23 04:56:00",
                "Tests",
                "Tester",
                "Feeling Testy",
                "1",
                "2023",
                "0104",
                "subtitle",
                "",
            ]
        );
    }

    #[test]
    fn test_sanitize_replaces_quotes() {
        let mut record = FileRecord {
            title: "Say \"Hello\"".to_string(),
            error: "bad \"frame\"".to_string(),
            ..Default::default()
        };
        record.sanitize();
        assert_eq!(record.title, "Say 'Hello'");
        assert_eq!(record.error, "bad 'frame'");
    }

    #[test]
    fn test_sanitize_leaves_clean_fields_alone() {
        let mut record = FileRecord {
            artist: "Tester".to_string(),
            ..Default::default()
        };
        record.sanitize();
        assert_eq!(record.artist, "Tester");
        assert_eq!(record.album, "");
    }
}
