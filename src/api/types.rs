//! Wire types for the public Qur'an endpoints.
//!
//! The chapter/verse endpoint serves Indonesian field names (`nomor`,
//! `nama_latin`, `jumlah_ayat`, ...); the tafsir endpoint wraps its payload in
//! a `{code, message, data}` envelope and uses camelCase. Both are mapped onto
//! one set of domain types here so the rest of the crate never sees the raw
//! field names.
//!
//! Text fields arrive with embedded HTML (`<i>`, `<br>`, a couple of
//! entities). [`clean_html`] produces the display form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fmt;

/// Where a surah was revealed. The API spells this `mekah`/`madinah`
/// (the tafsir endpoint capitalizes it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RevelationPlace {
    #[default]
    Mekah,
    Madinah,
}

impl From<String> for RevelationPlace {
    /// Total mapping: anything that isn't recognizably Madinah is Mekah, so a
    /// malformed tag never fails the whole chapter list.
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("madinah") || value.eq_ignore_ascii_case("medina") {
            RevelationPlace::Madinah
        } else {
            RevelationPlace::Mekah
        }
    }
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationPlace::Mekah => write!(f, "Mekah"),
            RevelationPlace::Madinah => write!(f, "Madinah"),
        }
    }
}

/// One surah as served by the chapter list endpoint.
///
/// All text fields default to empty so one record with missing fields does
/// not sink the other 113.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chapter {
    #[serde(rename = "nomor")]
    pub number: u32,
    /// Native-script (Arabic) name.
    #[serde(rename = "nama", default)]
    pub name: String,
    #[serde(rename = "nama_latin", default)]
    pub latin_name: String,
    #[serde(rename = "jumlah_ayat")]
    pub verse_count: u32,
    #[serde(rename = "tempat_turun", default)]
    pub revealed_in: RevelationPlace,
    /// Short meaning/translation of the name ("Pembukaan", "Sapi Betina", ...).
    #[serde(rename = "arti", default)]
    pub meaning: String,
    #[serde(rename = "deskripsi", default)]
    pub description: String,
    /// Full-surah recitation URL as served by the API.
    #[serde(rename = "audio", default)]
    pub audio: String,
}

/// One ayah within a surah.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Verse {
    #[serde(rename = "nomor")]
    pub number: u32,
    #[serde(rename = "surah", default)]
    pub surah: u32,
    #[serde(rename = "ar", default)]
    pub arabic: String,
    #[serde(rename = "tr", default)]
    pub transliteration: String,
    #[serde(rename = "idn", default)]
    pub translation: String,
}

/// Chapter detail endpoint payload: the chapter fields plus its verses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurahDetail {
    #[serde(flatten)]
    pub chapter: Chapter,
    #[serde(rename = "ayat", default)]
    pub verses: Vec<Verse>,
}

/// Envelope the tafsir endpoint wraps everything in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TafsirResponse {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub message: String,
    pub data: Tafsir,
}

/// Tahlili commentary for one surah: an introduction plus per-ayah entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tafsir {
    #[serde(rename = "nama", default)]
    pub name: String,
    #[serde(rename = "namaLatin", default)]
    pub latin_name: String,
    #[serde(rename = "jumlahAyat", default)]
    pub verse_count: u32,
    #[serde(rename = "tempatTurun", default)]
    pub revealed_in: RevelationPlace,
    /// Surah-level introduction ("Pendahuluan").
    #[serde(rename = "deskripsi", default)]
    pub description: String,
    #[serde(rename = "tafsir", default)]
    pub entries: Vec<TafsirEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TafsirEntry {
    #[serde(rename = "ayat")]
    pub verse: u32,
    #[serde(rename = "teks", default)]
    pub text: String,
}

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex literal"));

/// Strips the markup the API embeds in descriptions, transliterations, and
/// tafsir bodies: `<br>` becomes a newline, every other tag is dropped, and
/// the two entities the payloads actually contain are decoded.
pub fn clean_html(text: &str) -> String {
    let text = text
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n");
    HTML_TAG
        .replace_all(&text, "")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Macro to generate multiple cleanup test cases.
    /// $name:ident names the test (describe the rule so failures read well),
    /// $input:expr is the raw API text, $expected:expr the cleaned output.
    macro_rules! test_clean_html_rules {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(clean_html($input), $expected);
                }
            )+
        };
    }

    test_clean_html_rules! {
        test_clean_html_italic_tags: "Surah <i>Makkiyyah</i>" => "Surah Makkiyyah",
        test_clean_html_br_to_newline: "baris satu<br>baris dua" => "baris satu\nbaris dua",
        test_clean_html_self_closing_br: "a<br/>b<br />c" => "a\nb\nc",
        test_clean_html_quote_entity: "disebut &quot;Ummul Kitab&quot;" => "disebut \"Ummul Kitab\"",
        test_clean_html_apostrophe_entity: "Qul a&#39;uzu" => "Qul a'uzu",
        test_clean_html_plain_text_untouched: "tanpa markup" => "tanpa markup",
        test_clean_html_nested_markup: "<b>Al-<i>Fatihah</i></b>" => "Al-Fatihah",
    }

    #[test]
    fn test_chapter_deserializes_from_api_shape() {
        let json = r#"{
            "nomor": 1,
            "nama": "الفاتحة",
            "nama_latin": "Al-Fatihah",
            "jumlah_ayat": 7,
            "tempat_turun": "mekah",
            "arti": "Pembukaan",
            "deskripsi": "Surat <i>Al Faatihah</i>",
            "audio": "https://equran.id/audio/001.mp3"
        }"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.number, 1);
        assert_eq!(chapter.latin_name, "Al-Fatihah");
        assert_eq!(chapter.meaning, "Pembukaan");
        assert_eq!(chapter.verse_count, 7);
        assert_eq!(chapter.revealed_in, RevelationPlace::Mekah);
    }

    #[test]
    fn test_chapter_missing_text_fields_default_to_empty() {
        // One bad record must not block the rest of the list.
        let json = r#"{"nomor": 2, "jumlah_ayat": 286}"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.number, 2);
        assert!(chapter.name.is_empty());
        assert!(chapter.latin_name.is_empty());
        assert!(chapter.meaning.is_empty());
        assert_eq!(chapter.revealed_in, RevelationPlace::Mekah);
    }

    #[test]
    fn test_revelation_place_tolerates_casing_and_garbage() {
        assert_eq!(RevelationPlace::from("Madinah".to_string()), RevelationPlace::Madinah);
        assert_eq!(RevelationPlace::from("madinah".to_string()), RevelationPlace::Madinah);
        assert_eq!(RevelationPlace::from("mekah".to_string()), RevelationPlace::Mekah);
        assert_eq!(RevelationPlace::from("???".to_string()), RevelationPlace::Mekah);
    }

    #[test]
    fn test_surah_detail_flattens_chapter_and_verses() {
        let json = r#"{
            "nomor": 112,
            "nama": "الإخلاص",
            "nama_latin": "Al-Ikhlas",
            "jumlah_ayat": 4,
            "tempat_turun": "mekah",
            "arti": "Ikhlas",
            "deskripsi": "",
            "audio": "",
            "ayat": [
                {"id": 6222, "surah": 112, "nomor": 1, "ar": "قل هو الله أحد", "tr": "qul huwallāhu aḥad", "idn": "Katakanlah (Muhammad), \"Dialah Allah, Yang Maha Esa.\""}
            ]
        }"#;
        let detail: SurahDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.chapter.number, 112);
        assert_eq!(detail.verses.len(), 1);
        assert_eq!(detail.verses[0].number, 1);
        assert_eq!(detail.verses[0].surah, 112);
        assert!(detail.verses[0].translation.starts_with("Katakanlah"));
    }

    #[test]
    fn test_tafsir_envelope_unwraps() {
        let json = r#"{
            "code": 200,
            "message": "Berhasil",
            "data": {
                "nama": "الملك",
                "namaLatin": "Al-Mulk",
                "jumlahAyat": 30,
                "tempatTurun": "Mekah",
                "deskripsi": "Surah <i>Al-Mulk</i>",
                "tafsir": [
                    {"ayat": 1, "teks": "Maha Berkah Allah<br>yang menguasai"}
                ]
            }
        }"#;
        let response: TafsirResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.data.latin_name, "Al-Mulk");
        assert_eq!(response.data.revealed_in, RevelationPlace::Mekah);
        assert_eq!(response.data.entries.len(), 1);
        assert_eq!(clean_html(&response.data.entries[0].text), "Maha Berkah Allah\nyang menguasai");
    }
}
