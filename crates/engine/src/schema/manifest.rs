//! The game manifest shape, expressed as decoder methods.
//!
//! Each method decodes one entity. Every field is decoded before the
//! struct is assembled so that all sibling problems are reported together.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::decoder::Decoder;
use super::issue::{IssueKind, PathSegment};
use gamegate_domain::entities::{
    DIALOGUE_DURATION_RANGE, LEARNING_OBJECTIVE_COUNT_RANGE, MAX_AVATAR_DESCRIPTION_LENGTH,
    MAX_CHARACTER_NAME_LENGTH, MAX_DIALOGUE_TEXT_LENGTH, MAX_PERSONALITY_TRAITS,
    QUIZ_DURATION_RANGE, SCENE_COUNT_RANGE, SCENE_TYPES, TOTAL_DURATION_RANGE,
};
use gamegate_domain::{
    Character, CharacterId, CulturalAdaptation, CulturalContext, DialogueScene, DialogueTurn,
    DifficultyLevel, Emotion, GameId, GameManifest, Language, OptionId, QuestionId,
    QuestionType, QuizOption, QuizQuestion, QuizScene, Scene, SceneId, SemanticVersion,
};

const MAX_TITLE_LENGTH: usize = 200;
const MAX_MANIFEST_DESCRIPTION_LENGTH: usize = 2000;
const MAX_SCENE_DESCRIPTION_LENGTH: usize = 1000;
const MAX_AUDIENCE_LENGTH: usize = 200;
const MAX_OBJECTIVE_LENGTH: usize = 500;
const MAX_VERSION_LENGTH: usize = 50;
const MAX_TRAIT_LENGTH: usize = 100;
const MAX_CHARACTERS_PER_SCENE: usize = 10;
const MAX_TURNS_PER_SCENE: usize = 100;
const MAX_QUESTIONS_PER_SCENE: usize = 50;
const OPTION_COUNT_RANGE: (usize, usize) = (2, 6);
const QUESTION_TEXT_RANGE: (usize, usize) = (10, 1000);
const MAX_OPTION_TEXT_LENGTH: usize = 500;
const MAX_FEEDBACK_LENGTH: usize = 1000;
const MAX_EXPLANATION_LENGTH: usize = 2000;
const MAX_PLACE_NAME_LENGTH: usize = 100;
const MAX_TERM_LENGTH: usize = 500;
const POINTS_RANGE: (u32, u32) = (1, 100);
const TIME_LIMIT_RANGE: (u32, u32) = (10, 300);

impl Decoder {
    pub(super) fn manifest(&mut self, value: &Value) -> Option<GameManifest> {
        let obj = self.object(value)?;

        let game_id = self.required(obj, "game_id", "string", |d, v| d.token::<GameId>(v));
        let version = self.required(obj, "version", "string", |d, v| d.version(v));
        let title = self.required(obj, "title", "string", |d, v| {
            d.string(v, 1, MAX_TITLE_LENGTH)
        });
        let description = self.required(obj, "description", "string", |d, v| {
            d.string(v, 1, MAX_MANIFEST_DESCRIPTION_LENGTH)
        });
        let target_audience = self.required(obj, "target_audience", "string", |d, v| {
            d.string(v, 1, MAX_AUDIENCE_LENGTH)
        });
        let learning_objectives = self.required(obj, "learning_objectives", "array", |d, v| {
            let (min, max) = LEARNING_OBJECTIVE_COUNT_RANGE;
            d.list(v, min, max, |d, item| d.string(item, 1, MAX_OBJECTIVE_LENGTH))
        });
        let scenes = self.required(obj, "scenes", "array", |d, v| {
            let (min, max) = SCENE_COUNT_RANGE;
            d.list(v, min, max, |d, item| d.scene(item))
        });
        let total_duration = self.required(obj, "total_duration", "number", |d, v| {
            let (min, max) = TOTAL_DURATION_RANGE;
            d.integer(v, min, max)
        });
        let difficulty_level = self.required(obj, "difficulty_level", "string", |d, v| {
            d.wire_enum::<DifficultyLevel>(v)
        });
        let language = self.required(obj, "language", "string", |d, v| {
            d.wire_enum::<Language>(v)
        });
        let cultural_adaptation = self.optional(obj, "cultural_adaptation", |d, v| {
            d.cultural_adaptation(v)
        });

        Some(GameManifest {
            game_id: game_id?,
            version: version?,
            title: title?,
            description: description?,
            target_audience: target_audience?,
            learning_objectives: learning_objectives?,
            scenes: scenes?,
            total_duration: total_duration?,
            difficulty_level: difficulty_level?,
            language: language?,
            cultural_adaptation: cultural_adaptation?,
        })
    }

    fn version(&mut self, value: &Value) -> Option<SemanticVersion> {
        let raw = self.string(value, 1, MAX_VERSION_LENGTH)?;
        match raw.parse::<SemanticVersion>() {
            Ok(version) => Some(version),
            Err(_) => {
                self.report(IssueKind::InvalidVersion);
                None
            }
        }
    }

    fn cultural_adaptation(&mut self, value: &Value) -> Option<CulturalAdaptation> {
        let obj = self.object(value)?;
        let municipality = self.optional(obj, "municipality", |d, v| {
            d.string(v, 0, MAX_PLACE_NAME_LENGTH)
        });
        let region = self.optional(obj, "region", |d, v| d.string(v, 0, MAX_PLACE_NAME_LENGTH));
        let terminology = self.optional(obj, "terminology", |d, v| d.terminology(v));

        Some(CulturalAdaptation {
            municipality: municipality?,
            region: region?,
            terminology: terminology?,
        })
    }

    fn terminology(&mut self, value: &Value) -> Option<BTreeMap<String, String>> {
        let obj = self.object(value)?;
        let mut terms = BTreeMap::new();
        let mut ok = true;
        for (key, term) in obj {
            match self.at(PathSegment::Key(key.clone()), |d| {
                d.string(term, 0, MAX_TERM_LENGTH)
            }) {
                Some(decoded) => {
                    terms.insert(key.clone(), decoded);
                }
                None => ok = false,
            }
        }
        ok.then_some(terms)
    }

    fn scene(&mut self, value: &Value) -> Option<Scene> {
        let obj = self.object(value)?;
        let scene_type = self.at(PathSegment::Key("scene_type".to_string()), |d| {
            match obj.get("scene_type").and_then(Value::as_str) {
                Some(tag) if SCENE_TYPES.contains(&tag) => Some(tag),
                _ => {
                    d.report(IssueKind::InvalidDiscriminator {
                        options: SCENE_TYPES.to_vec(),
                    });
                    None
                }
            }
        })?;

        match scene_type {
            "dialogue" => self.dialogue_scene(obj).map(Scene::Dialogue),
            _ => self.quiz_scene(obj).map(Scene::Quiz),
        }
    }

    fn dialogue_scene(&mut self, obj: &Map<String, Value>) -> Option<DialogueScene> {
        let scene_id = self.required(obj, "scene_id", "string", |d, v| d.token::<SceneId>(v));
        let title = self.required(obj, "title", "string", |d, v| {
            d.string(v, 1, MAX_TITLE_LENGTH)
        });
        let description = self.optional(obj, "description", |d, v| {
            d.string(v, 0, MAX_SCENE_DESCRIPTION_LENGTH)
        });
        let characters = self.required(obj, "characters", "array", |d, v| {
            d.list(v, 1, MAX_CHARACTERS_PER_SCENE, |d, item| d.character(item))
        });
        let dialogue = self.required(obj, "dialogue", "array", |d, v| {
            d.list(v, 1, MAX_TURNS_PER_SCENE, |d, item| d.dialogue_turn(item))
        });
        let learning_objectives = self.optional(obj, "learning_objectives", |d, v| {
            let (_, max) = LEARNING_OBJECTIVE_COUNT_RANGE;
            d.list(v, 0, max, |d, item| d.string(item, 1, MAX_OBJECTIVE_LENGTH))
        });
        let scene_duration = self.required(obj, "scene_duration", "number", |d, v| {
            let (min, max) = DIALOGUE_DURATION_RANGE;
            d.integer(v, min, max)
        });
        let cultural_context = self.optional(obj, "cultural_context", |d, v| {
            d.wire_enum::<CulturalContext>(v)
        });

        Some(DialogueScene {
            scene_id: scene_id?,
            title: title?,
            description: description?,
            characters: characters?,
            dialogue: dialogue?,
            learning_objectives: learning_objectives?,
            scene_duration: scene_duration?,
            cultural_context: cultural_context?,
        })
    }

    fn character(&mut self, value: &Value) -> Option<Character> {
        let obj = self.object(value)?;
        let character_id = self.required(obj, "character_id", "string", |d, v| {
            d.token::<CharacterId>(v)
        });
        let name = self.required(obj, "name", "string", |d, v| {
            d.string(v, 1, MAX_CHARACTER_NAME_LENGTH)
        });
        let role = self.required(obj, "role", "string", |d, v| {
            d.string(v, 1, MAX_CHARACTER_NAME_LENGTH)
        });
        let avatar_description = self.optional(obj, "avatar_description", |d, v| {
            d.string(v, 0, MAX_AVATAR_DESCRIPTION_LENGTH)
        });
        let personality_traits = self.optional(obj, "personality_traits", |d, v| {
            d.list(v, 0, MAX_PERSONALITY_TRAITS, |d, item| {
                d.string(item, 1, MAX_TRAIT_LENGTH)
            })
        });

        Some(Character {
            character_id: character_id?,
            name: name?,
            role: role?,
            avatar_description: avatar_description?,
            personality_traits: personality_traits?,
        })
    }

    fn dialogue_turn(&mut self, value: &Value) -> Option<DialogueTurn> {
        let obj = self.object(value)?;
        let speaker = self.required(obj, "speaker", "string", |d, v| {
            d.string(v, 1, MAX_CHARACTER_NAME_LENGTH)
        });
        let character_id = self.required(obj, "character_id", "string", |d, v| {
            d.token::<CharacterId>(v)
        });
        let text = self.required(obj, "text", "string", |d, v| {
            d.string(v, 1, MAX_DIALOGUE_TEXT_LENGTH)
        });
        let emotion = self.optional(obj, "emotion", |d, v| d.wire_enum::<Emotion>(v));
        let timing = self.optional(obj, "timing", |d, v| d.non_negative(v));

        Some(DialogueTurn {
            speaker: speaker?,
            character_id: character_id?,
            text: text?,
            emotion: emotion?,
            timing: timing?,
        })
    }

    fn quiz_scene(&mut self, obj: &Map<String, Value>) -> Option<QuizScene> {
        let scene_id = self.required(obj, "scene_id", "string", |d, v| d.token::<SceneId>(v));
        let title = self.required(obj, "title", "string", |d, v| {
            d.string(v, 1, MAX_TITLE_LENGTH)
        });
        let description = self.optional(obj, "description", |d, v| {
            d.string(v, 0, MAX_SCENE_DESCRIPTION_LENGTH)
        });
        let questions = self.required(obj, "questions", "array", |d, v| {
            d.list(v, 1, MAX_QUESTIONS_PER_SCENE, |d, item| d.quiz_question(item))
        });
        let passing_score = self.required(obj, "passing_score", "number", |d, v| {
            d.integer(v, 0, 100)
        });
        let scene_duration = self.required(obj, "scene_duration", "number", |d, v| {
            let (min, max) = QUIZ_DURATION_RANGE;
            d.integer(v, min, max)
        });
        let immediate_feedback = self.optional(obj, "immediate_feedback", |d, v| d.boolean(v));
        let allow_retry = self.optional(obj, "allow_retry", |d, v| d.boolean(v));

        Some(QuizScene {
            scene_id: scene_id?,
            title: title?,
            description: description?,
            questions: questions?,
            passing_score: passing_score?,
            scene_duration: scene_duration?,
            immediate_feedback: immediate_feedback?,
            allow_retry: allow_retry?,
        })
    }

    fn quiz_question(&mut self, value: &Value) -> Option<QuizQuestion> {
        let obj = self.object(value)?;
        let question_id = self.required(obj, "question_id", "string", |d, v| {
            d.token::<QuestionId>(v)
        });
        let question_type = self.required(obj, "question_type", "string", |d, v| {
            d.wire_enum::<QuestionType>(v)
        });
        let question_text = self.required(obj, "question_text", "string", |d, v| {
            let (min, max) = QUESTION_TEXT_RANGE;
            d.string(v, min, max)
        });
        let options = self.required(obj, "options", "array", |d, v| {
            let (min, max) = OPTION_COUNT_RANGE;
            d.list(v, min, max, |d, item| d.quiz_option(item))
        });
        let explanation = self.optional(obj, "explanation", |d, v| {
            d.string(v, 0, MAX_EXPLANATION_LENGTH)
        });
        let learning_objective_ref = self.optional(obj, "learning_objective_ref", |d, v| {
            d.string(v, 0, MAX_OBJECTIVE_LENGTH)
        });
        let points = self.optional(obj, "points", |d, v| {
            let (min, max) = POINTS_RANGE;
            d.integer(v, min, max)
        });
        let time_limit = self.optional(obj, "time_limit", |d, v| {
            let (min, max) = TIME_LIMIT_RANGE;
            d.integer(v, min, max)
        });

        Some(QuizQuestion {
            question_id: question_id?,
            question_type: question_type?,
            question_text: question_text?,
            options: options?,
            explanation: explanation?,
            learning_objective_ref: learning_objective_ref?,
            points: points?,
            time_limit: time_limit?,
        })
    }

    fn quiz_option(&mut self, value: &Value) -> Option<QuizOption> {
        let obj = self.object(value)?;
        let option_id = self.required(obj, "option_id", "string", |d, v| d.token::<OptionId>(v));
        let text = self.required(obj, "text", "string", |d, v| {
            d.string(v, 1, MAX_OPTION_TEXT_LENGTH)
        });
        let is_correct = self.required(obj, "is_correct", "boolean", |d, v| d.boolean(v));
        let feedback = self.optional(obj, "feedback", |d, v| d.string(v, 0, MAX_FEEDBACK_LENGTH));

        Some(QuizOption {
            option_id: option_id?,
            text: text?,
            is_correct: is_correct?,
            feedback: feedback?,
        })
    }
}
