//! The canonical welfare questionnaire: 18 Likert items, three per category.
//!
//! The record store seeds its `questions` table from [`canonical_questions`].

use crate::entities::Question;
use crate::enums::Category;

const ITEMS: [(&str, Category, &str); 18] = [
    (
        "q01",
        Category::Nutrition,
        "Is the animal in good body condition for its species, age, sex and physiological state?",
    ),
    (
        "q02",
        Category::Nutrition,
        "Is the diet nutritionally adequate and safe for the animal?",
    ),
    (
        "q03",
        Category::Nutrition,
        "Is clean water sufficient and accessible at all times?",
    ),
    (
        "q04",
        Category::Housing,
        "Is the enclosure safe and large enough for the animal to move freely?",
    ),
    (
        "q05",
        Category::Housing,
        "Is the substrate suitable for the animal to rest comfortably?",
    ),
    (
        "q06",
        Category::Housing,
        "Does the enclosure provide adequate shelter from the weather?",
    ),
    (
        "q07",
        Category::Health,
        "Is the animal free of injuries or wounds?",
    ),
    (
        "q08",
        Category::Health,
        "Is the animal free of overgrowth or lesions in hooves, claws or teeth?",
    ),
    (
        "q09",
        Category::Health,
        "Does the animal move without difficulty or signs of pain?",
    ),
    (
        "q10",
        Category::Behavior,
        "Is the animal free of abnormal behavior such as stereotypies or apathy?",
    ),
    (
        "q11",
        Category::Behavior,
        "Does the animal show an activity pattern that matches its species?",
    ),
    (
        "q12",
        Category::Behavior,
        "Does the animal interact appropriately with conspecifics and keepers?",
    ),
    (
        "q13",
        Category::Emotional,
        "Does the animal show positive affective states such as play or exploration?",
    ),
    (
        "q14",
        Category::Emotional,
        "Is the animal free of signs of chronic fear or stress?",
    ),
    (
        "q15",
        Category::Emotional,
        "Can the animal withdraw from visitors to reduce stress?",
    ),
    (
        "q16",
        Category::Environment,
        "Are temperature, humidity and ventilation comfortable for the animal?",
    ),
    (
        "q17",
        Category::Environment,
        "Does the animal have access to environmental enrichment?",
    ),
    (
        "q18",
        Category::Environment,
        "Can the animal choose where to be and what to do throughout the day?",
    ),
];

/// Number of items in the canonical questionnaire.
pub const QUESTION_COUNT: usize = ITEMS.len();

/// Build the canonical questionnaire in presentation order.
#[must_use]
pub fn canonical_questions() -> Vec<Question> {
    ITEMS
        .iter()
        .zip(1u32..)
        .map(|(&(id, category, prompt), position)| {
            Question::likert(id, category, prompt, position)
        })
        .collect()
}
