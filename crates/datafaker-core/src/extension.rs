//! Output kinds and the file-extension suffixes each one allows.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output-file category used to pick a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Image,
    Video,
    Audio,
    Document,
    Compression,
    Custom,
}

impl OutputKind {
    pub const ALL: [OutputKind; 6] = [
        OutputKind::Image,
        OutputKind::Video,
        OutputKind::Audio,
        OutputKind::Document,
        OutputKind::Compression,
        OutputKind::Custom,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "document" => Some(Self::Document),
            "compression" => Some(Self::Compression),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Compression => "compression",
            Self::Custom => "custom",
        }
    }

    pub fn entry(self) -> &'static FileExtensionType {
        // Table rows are declared in `ALL` order.
        &FILE_EXTENSION_TYPES[self as usize]
    }

    pub fn extensions(self) -> &'static [&'static str] {
        self.entry().data
    }

    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Pick the suffix for a file of this kind.
    ///
    /// Fixed kinds default to their first suffix and only accept listed
    /// ones. `Custom` requires the caller to supply a suffix.
    pub fn resolve_suffix(self, requested: Option<&str>) -> Result<String> {
        let requested = requested.map(str::trim).filter(|value| !value.is_empty());
        if self.is_custom() {
            let Some(raw) = requested else {
                return Err(self.invalid_suffix(""));
            };
            let suffix = with_leading_dot(raw);
            if suffix.len() == 1
                || suffix.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\')
            {
                return Err(self.invalid_suffix(raw));
            }
            return Ok(suffix);
        }

        let allowed = self.extensions();
        match requested {
            None => allowed
                .first()
                .map(|suffix| suffix.to_string())
                .ok_or_else(|| self.invalid_suffix("")),
            Some(raw) => {
                let suffix = with_leading_dot(raw);
                if allowed.contains(&suffix.as_str()) {
                    Ok(suffix)
                } else {
                    Err(self.invalid_suffix(raw))
                }
            }
        }
    }

    fn invalid_suffix(self, suffix: &str) -> Error {
        Error::InvalidSuffix {
            kind: self.as_str().to_string(),
            suffix: suffix.to_string(),
        }
    }
}

impl FromStr for OutputKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value).ok_or_else(|| Error::UnknownKind(value.to_string()))
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the output-kind table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileExtensionType {
    pub label: &'static str,
    pub value: OutputKind,
    /// Suffixes beginning with `.`; empty for `custom`.
    pub data: &'static [&'static str],
}

static FILE_EXTENSION_TYPES: [FileExtensionType; 6] = [
    FileExtensionType {
        label: "图片",
        value: OutputKind::Image,
        data: &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".tiff"],
    },
    FileExtensionType {
        label: "视频",
        value: OutputKind::Video,
        data: &[".mp4", ".avi", ".mov", ".wmv", ".flv", ".mkv", ".webm", ".ogv"],
    },
    FileExtensionType {
        label: "音频",
        value: OutputKind::Audio,
        data: &[".mp3", ".wav", ".aac", ".flac", ".ogg", ".wma", ".amr", ".aiff"],
    },
    FileExtensionType {
        label: "文档",
        value: OutputKind::Document,
        data: &[
            ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".odt", ".ods", ".odp",
        ],
    },
    FileExtensionType {
        label: "压缩",
        value: OutputKind::Compression,
        data: &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".z"],
    },
    FileExtensionType {
        label: "自定义",
        value: OutputKind::Custom,
        data: &[],
    },
];

pub fn file_extension_types() -> &'static [FileExtensionType] {
    &FILE_EXTENSION_TYPES
}

/// Suffixes allowed for `kind`, in declared order.
pub fn extensions_for(kind: &str) -> Result<&'static [&'static str]> {
    kind.parse::<OutputKind>().map(OutputKind::extensions)
}

/// True only for the `custom` key; unknown keys are not custom.
pub fn is_custom(kind: &str) -> bool {
    OutputKind::parse(kind).is_some_and(OutputKind::is_custom)
}

pub fn resolve_suffix(kind: &str, requested: Option<&str>) -> Result<String> {
    kind.parse::<OutputKind>()?.resolve_suffix(requested)
}

fn with_leading_dot(raw: &str) -> String {
    if raw.starts_with('.') {
        raw.to_string()
    } else {
        format!(".{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_kind_order() {
        for (index, kind) in OutputKind::ALL.iter().enumerate() {
            assert_eq!(FILE_EXTENSION_TYPES[index].value, *kind);
            assert_eq!(kind.entry().value, *kind);
        }
    }

    #[test]
    fn kinds_round_trip_through_strings() {
        for kind in OutputKind::ALL {
            assert_eq!(kind.as_str().parse::<OutputKind>(), Ok(kind));
        }
        assert_eq!(
            "Image".parse::<OutputKind>(),
            Err(Error::UnknownKind("Image".to_string()))
        );
    }

    #[test]
    fn custom_suffix_rejects_paths_and_blanks() {
        let custom = OutputKind::Custom;
        assert_eq!(custom.resolve_suffix(Some("csv")), Ok(".csv".to_string()));
        assert_eq!(custom.resolve_suffix(Some(" .sql ")), Ok(".sql".to_string()));
        assert!(custom.resolve_suffix(Some("   ")).is_err());
        assert!(custom.resolve_suffix(Some(".")).is_err());
        assert!(custom.resolve_suffix(Some("a/b")).is_err());
        assert!(custom.resolve_suffix(Some(".tar gz")).is_err());
    }
}
