use thiserror::Error;

use crate::model::ids::QuestionKey;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options")]
    TooFewOptions,

    #[error("question options must be distinct")]
    DuplicateOption,

    #[error("question option cannot be empty")]
    EmptyOption,

    #[error("image file name cannot be empty")]
    EmptyImage,

    #[error("catalog cannot be empty")]
    EmptyCatalog,

    #[error("catalog contains duplicate key: {0}")]
    DuplicateKey(QuestionKey),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Immutable once constructed; the catalog defines the full set at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    key: QuestionKey,
    prompt: String,
    options: Vec<String>,
    image: String,
}

impl Question {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or image name is empty, if fewer
    /// than two options are given, or if options repeat.
    pub fn new(
        key: QuestionKey,
        prompt: impl Into<String>,
        options: Vec<String>,
        image: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions);
        }
        for (i, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if options[..i].contains(option) {
                return Err(QuestionError::DuplicateOption);
            }
        }

        let image = image.into();
        if image.trim().is_empty() {
            return Err(QuestionError::EmptyImage);
        }

        Ok(Self {
            key,
            prompt,
            options,
            image,
        })
    }

    // Accessors
    #[must_use]
    pub fn key(&self) -> QuestionKey {
        self.key
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// File name of the illustration shown with this question.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Whether `option` is one of the choices this question offers.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The fixed, ordered sequence of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Creates a catalog from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyCatalog` if no questions are given and
    /// `QuestionError::DuplicateKey` if two questions share a key.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptyCatalog);
        }
        for (i, question) in questions.iter().enumerate() {
            if questions[..i].iter().any(|q| q.key() == question.key()) {
                return Err(QuestionError::DuplicateKey(question.key()));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in community-contributor questionnaire.
    ///
    /// # Panics
    ///
    /// Panics if the built-in question data fails validation, which would be a
    /// programming error in the static tables below.
    #[must_use]
    pub fn community() -> Self {
        let questions = vec![
            Question::new(
                QuestionKey::ENGAGEMENT,
                "1. How do you most enjoy engaging with the community?",
                vec![
                    "Learning and reading from others' experiences".to_owned(),
                    "Creating content, apps or tools".to_owned(),
                    "Answering technical questions or helping others".to_owned(),
                    "Attending in-person events and networking".to_owned(),
                ],
                "ENGAGEMENT.png",
            ),
            Question::new(
                QuestionKey::MOTIVATION,
                "2. What motivates you most to stay involved in the community?",
                vec![
                    "Recognition as a leader and visibility into upcoming product innovations"
                        .to_owned(),
                    "Connecting with others who geek out on the same stuff".to_owned(),
                    "Giving back and helping people learn".to_owned(),
                    "Learning and upskilling".to_owned(),
                ],
                "MOTIVATION.png",
            ),
            Question::new(
                QuestionKey::CONTRIBUTIONS,
                "3. Where do you like to contribute to the community?",
                vec![
                    "Sharing insights and driving thought leadership through speaking engagements and content creation"
                        .to_owned(),
                    "Answering questions or giving feedback".to_owned(),
                    "Collaborating with others in real time, learning from peers, and connecting over shared interests"
                        .to_owned(),
                    "Just attending and learning".to_owned(),
                ],
                "CONTRIBUTIONS.png",
            ),
            Question::new(
                QuestionKey::TECH_LEVEL,
                "4. Which of these best describes your technical comfort level?",
                vec![
                    "Advanced: I am proficient with multiple programming languages and can architect complex systems independently."
                        .to_owned(),
                    "Intermediate: I can use data tools and build apps with some guidance and/or reference material."
                        .to_owned(),
                    "Beginner: I'm still learning and exploring.".to_owned(),
                ],
                "TECHNICAL LEVEL.png",
            ),
        ];

        let questions = questions
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in questions should be valid");
        Self::new(questions).expect("built-in catalog should be valid")
    }

    /// Number of questions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Question with the given key, if it exists.
    #[must_use]
    pub fn by_key(&self, key: QuestionKey) -> Option<&Question> {
        self.questions.iter().find(|q| q.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn two_options() -> Vec<String> {
        vec!["a".to_owned(), "b".to_owned()]
    }

    #[test]
    fn question_rejects_empty_prompt() {
        let err =
            Question::new(QuestionKey::ENGAGEMENT, "   ", two_options(), "x.png").unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_rejects_single_option() {
        let err = Question::new(
            QuestionKey::ENGAGEMENT,
            "Q?",
            vec!["only".to_owned()],
            "x.png",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions);
    }

    #[test]
    fn question_rejects_repeated_option() {
        let err = Question::new(
            QuestionKey::ENGAGEMENT,
            "Q?",
            vec!["same".to_owned(), "same".to_owned()],
            "x.png",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption);
    }

    #[test]
    fn question_rejects_empty_image() {
        let err = Question::new(QuestionKey::ENGAGEMENT, "Q?", two_options(), " ").unwrap_err();
        assert_eq!(err, QuestionError::EmptyImage);
    }

    #[test]
    fn catalog_rejects_duplicate_keys() {
        let q1 = Question::new(QuestionKey::ENGAGEMENT, "Q1?", two_options(), "a.png").unwrap();
        let q2 = Question::new(QuestionKey::ENGAGEMENT, "Q2?", two_options(), "b.png").unwrap();
        let err = QuestionCatalog::new(vec![q1, q2]).unwrap_err();
        assert_eq!(err, QuestionError::DuplicateKey(QuestionKey::ENGAGEMENT));
    }

    #[test]
    fn catalog_rejects_empty_list() {
        let err = QuestionCatalog::new(Vec::new()).unwrap_err();
        assert_eq!(err, QuestionError::EmptyCatalog);
    }

    #[test]
    fn community_catalog_has_four_ordered_questions() {
        let catalog = QuestionCatalog::community();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0).unwrap().key(), QuestionKey::ENGAGEMENT);
        assert_eq!(catalog.get(1).unwrap().key(), QuestionKey::MOTIVATION);
        assert_eq!(catalog.get(2).unwrap().key(), QuestionKey::CONTRIBUTIONS);
        assert_eq!(catalog.get(3).unwrap().key(), QuestionKey::TECH_LEVEL);
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn community_catalog_offers_expected_options() {
        let catalog = QuestionCatalog::community();
        let tech = catalog.by_key(QuestionKey::TECH_LEVEL).unwrap();
        assert_eq!(tech.options().len(), 3);
        assert!(tech.has_option("Beginner: I'm still learning and exploring."));
        assert!(!tech.has_option("Expert"));
        assert_eq!(tech.image(), "TECHNICAL LEVEL.png");
    }
}
