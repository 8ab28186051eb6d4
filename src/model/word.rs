/*!
 * Word-level model types.
 *
 * A lemma owns an ordered list of words; each word may carry a hieroglyph
 * rendering and a transliteration.
 */

use serde::{Deserialize, Serialize};

/// Hieroglyph rendering of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    /// Manuel de Codage encoding
    #[serde(default)]
    pub mdc: String,
    /// Unicode rendering
    #[serde(default)]
    pub unicode: String,
}

impl Glyphs {
    /// Create glyphs from their MdC and Unicode renderings.
    pub fn new(mdc: impl Into<String>, unicode: impl Into<String>) -> Self {
        Glyphs {
            mdc: mdc.into(),
            unicode: unicode.into(),
        }
    }

    /// Whether both renderings are blank.
    pub fn is_empty(&self) -> bool {
        self.mdc.trim().is_empty() && self.unicode.trim().is_empty()
    }
}

/// Transliteration of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// Unicode transliteration
    #[serde(default)]
    pub unicode: String,
    /// MdC transliteration
    #[serde(default)]
    pub mdc: String,
}

/// One word of a dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Backend identifier, absent for synthetic words
    #[serde(default)]
    pub id: Option<String>,
    /// Hieroglyph rendering, if any
    #[serde(default)]
    pub glyphs: Option<Glyphs>,
    /// Transliteration, if any
    #[serde(default)]
    pub transcription: Option<Transcription>,
}

impl Word {
    /// Create a word carrying only a hieroglyph rendering.
    pub fn with_glyphs(glyphs: Glyphs) -> Self {
        Word {
            id: None,
            glyphs: Some(glyphs),
            transcription: None,
        }
    }
}
