//! Content sanitizer
//!
//! Removes executable markup from every free-text field of an accepted
//! manifest. Identifiers, enum values, numbers and booleans are copied as-is.
//! All other characters are preserved, including non-Latin scripts, emoji,
//! combining marks and invisible formatting characters.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;

use gamegate_domain::{
    Character, CulturalAdaptation, DialogueScene, DialogueTurn, GameManifest, QuizOption,
    QuizQuestion, QuizScene, Scene,
};

static SCRIPT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex")
});
static IFRAME_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<iframe\b[^>]*>.*?</iframe\s*>").expect("valid regex")
});
static STRAY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*/?\s*(?:script|iframe)\b[^>]*>").expect("valid regex")
});
static JAVASCRIPT_URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript\s*:").expect("valid regex"));
static EVENT_HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("valid regex"));

/// Strip executable content from a single string.
///
/// Passes are repeated until the text stops changing, so removing one
/// construct cannot splice together another. The result is therefore a
/// fixed point: sanitizing it again returns it unchanged.
pub fn sanitize_text(input: &str) -> String {
    let mut current = strip_once(input);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    // Every pattern needs one of these characters to match.
    if !text.contains(['<', ':', '=']) {
        return text.trim().to_string();
    }
    let text = SCRIPT_BLOCK_RE.replace_all(text, "");
    let text = IFRAME_BLOCK_RE.replace_all(&text, "");
    let text = STRAY_TAG_RE.replace_all(&text, "");
    let text = JAVASCRIPT_URI_RE.replace_all(&text, "");
    let text = EVENT_HANDLER_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// Produce a copy with all free text sanitized
pub trait Sanitize {
    fn sanitized(&self) -> Self;
}

impl Sanitize for String {
    fn sanitized(&self) -> Self {
        sanitize_text(self)
    }
}

impl<T: Sanitize> Sanitize for Option<T> {
    fn sanitized(&self) -> Self {
        self.as_ref().map(Sanitize::sanitized)
    }
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitized(&self) -> Self {
        self.iter().map(Sanitize::sanitized).collect()
    }
}

/// Keys and values are both free text. Keys that collide after
/// sanitization keep the value of the last key in sorted order.
impl Sanitize for BTreeMap<String, String> {
    fn sanitized(&self) -> Self {
        self.iter()
            .map(|(k, v)| (sanitize_text(k), sanitize_text(v)))
            .collect()
    }
}

impl Sanitize for GameManifest {
    fn sanitized(&self) -> Self {
        Self {
            game_id: self.game_id.clone(),
            version: self.version,
            title: self.title.sanitized(),
            description: self.description.sanitized(),
            target_audience: self.target_audience.sanitized(),
            learning_objectives: self.learning_objectives.sanitized(),
            scenes: self.scenes.sanitized(),
            total_duration: self.total_duration,
            difficulty_level: self.difficulty_level,
            language: self.language,
            cultural_adaptation: self.cultural_adaptation.sanitized(),
        }
    }
}

impl Sanitize for CulturalAdaptation {
    fn sanitized(&self) -> Self {
        Self {
            municipality: self.municipality.sanitized(),
            region: self.region.sanitized(),
            terminology: self.terminology.sanitized(),
        }
    }
}

impl Sanitize for Scene {
    fn sanitized(&self) -> Self {
        match self {
            Scene::Dialogue(scene) => Scene::Dialogue(scene.sanitized()),
            Scene::Quiz(scene) => Scene::Quiz(scene.sanitized()),
        }
    }
}

impl Sanitize for DialogueScene {
    fn sanitized(&self) -> Self {
        Self {
            scene_id: self.scene_id.clone(),
            title: self.title.sanitized(),
            description: self.description.sanitized(),
            characters: self.characters.sanitized(),
            dialogue: self.dialogue.sanitized(),
            learning_objectives: self.learning_objectives.sanitized(),
            scene_duration: self.scene_duration,
            cultural_context: self.cultural_context,
        }
    }
}

impl Sanitize for Character {
    fn sanitized(&self) -> Self {
        Self {
            character_id: self.character_id.clone(),
            name: self.name.sanitized(),
            role: self.role.sanitized(),
            avatar_description: self.avatar_description.sanitized(),
            personality_traits: self.personality_traits.sanitized(),
        }
    }
}

impl Sanitize for DialogueTurn {
    fn sanitized(&self) -> Self {
        Self {
            speaker: self.speaker.sanitized(),
            character_id: self.character_id.clone(),
            text: self.text.sanitized(),
            emotion: self.emotion,
            timing: self.timing,
        }
    }
}

impl Sanitize for QuizScene {
    fn sanitized(&self) -> Self {
        Self {
            scene_id: self.scene_id.clone(),
            title: self.title.sanitized(),
            description: self.description.sanitized(),
            questions: self.questions.sanitized(),
            passing_score: self.passing_score,
            scene_duration: self.scene_duration,
            immediate_feedback: self.immediate_feedback,
            allow_retry: self.allow_retry,
        }
    }
}

impl Sanitize for QuizQuestion {
    fn sanitized(&self) -> Self {
        Self {
            question_id: self.question_id.clone(),
            question_type: self.question_type,
            question_text: self.question_text.sanitized(),
            options: self.options.sanitized(),
            explanation: self.explanation.sanitized(),
            learning_objective_ref: self.learning_objective_ref.sanitized(),
            points: self.points,
            time_limit: self.time_limit,
        }
    }
}

impl Sanitize for QuizOption {
    fn sanitized(&self) -> Self {
        Self {
            option_id: self.option_id.clone(),
            text: self.text.sanitized(),
            is_correct: self.is_correct,
            feedback: self.feedback.sanitized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_script_blocks() {
        assert_eq!(
            sanitize_text("Hello <script>alert('x')</script>world"),
            "Hello world"
        );
        assert_eq!(
            sanitize_text("a<SCRIPT type=\"text/javascript\">\nsteal()\n</Script >b"),
            "ab"
        );
    }

    #[test]
    fn test_removes_iframes_and_stray_tags() {
        assert_eq!(
            sanitize_text("see <iframe src=\"x\"></iframe>this"),
            "see this"
        );
        assert_eq!(sanitize_text("<script src=evil.js>"), "");
        assert_eq!(sanitize_text("text</iframe>"), "text");
    }

    #[test]
    fn test_removes_javascript_uri_and_handlers() {
        assert_eq!(sanitize_text("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(
            sanitize_text("<img src=x onerror=alert(1)>"),
            "<img src=x alert(1)>"
        );
        assert_eq!(sanitize_text("<b onClick =\"go()\">"), "<b \"go()\">");
    }

    #[test]
    fn test_nested_payload_does_not_reform() {
        let nested = "<scr<script>x</script>ipt>alert(1)</script>";
        let once = sanitize_text(nested);
        assert!(!once.to_lowercase().contains("<script"));
        assert_eq!(sanitize_text(&once), once);

        let uri = "javajavascript:script:alert(1)";
        let once = sanitize_text(uri);
        assert!(!once.to_lowercase().contains("javascript:"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_text("  padded \n"), "padded");
    }

    #[test]
    fn test_preserves_unicode_and_punctuation() {
        for text in [
            "Hyvää päivää, Åsa!",
            "こんにちは 🌍",
            "e\u{301} combining",
            "rtl \u{202E}txet\u{202C} and zero\u{200B}width",
            "quotes \"'` and {braces} [brackets]",
            "time 10:30, a = b",
        ] {
            assert_eq!(sanitize_text(text), text);
        }
    }

    #[test]
    fn test_idempotent() {
        for text in [
            "plain",
            "<script>x</script> <iframe></iframe> javascript: onload=",
            "  <scr<script></script>ipt>  ",
            "onon=load=",
        ] {
            let once = sanitize_text(text);
            assert_eq!(sanitize_text(&once), once, "input {text:?}");
        }
    }

    #[test]
    fn test_terminology_keys_and_values() {
        let mut terms = BTreeMap::new();
        terms.insert(
            "office<script>x</script>".to_string(),
            "Kela javascript:go()".to_string(),
        );
        let clean = terms.sanitized();
        assert_eq!(clean.get("office").map(String::as_str), Some("Kela go()"));
    }
}
