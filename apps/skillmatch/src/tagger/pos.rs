//! Part-of-speech tagging.
//!
//! A deterministic lexicon-and-suffix tagger tuned for résumé prose. It only
//! needs to separate nouns and proper nouns from everything else, so the
//! closed word classes are listed explicitly and open-class words are
//! resolved by capitalisation, suffix and a little left context.

use serde::{Deserialize, Serialize};

use super::tokenizer::{tokenize, Token};

/// Coarse part-of-speech tags (Universal-POS flavoured).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Auxiliary,
    Numeral,
    Other,
}

impl PosTag {
    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "my", "your", "his", "her", "its",
    "our", "their", "much", "many", "several", "few", "various", "multiple",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "we", "us", "you", "he", "him", "she", "it", "they", "them", "myself",
    "ourselves", "yourself", "themselves", "itself", "who", "whom", "whose", "which", "what",
    "someone", "anyone", "everyone", "something", "anything", "everything", "nothing", "one",
];

/// Pronouns that can head a clause; a bare word after them is read as a verb.
const SUBJECT_PRONOUNS: &[&str] = &["i", "we", "you", "he", "she", "they"];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "without", "within", "from", "to", "of", "into",
    "onto", "over", "under", "about", "above", "below", "across", "after", "before", "between",
    "among", "through", "throughout", "during", "towards", "toward", "upon", "via", "per",
    "against", "along", "around", "behind", "beyond", "despite", "except", "inside", "outside",
    "since", "until", "near", "like", "as", "including",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "because", "although", "though", "while", "whereas",
    "if", "unless", "than", "whether", "plus", "&",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "too", "well", "just", "only", "then", "there", "here", "now",
    "always", "never", "often", "already", "still", "again", "more", "most", "less", "least",
    "how", "when", "where", "why", "however", "etc", "even", "ever", "soon", "later",
];

const ADJECTIVES: &[&str] = &[
    "new", "good", "great", "strong", "excellent", "senior", "junior", "large", "small",
    "high", "low", "key", "different", "other", "same", "real", "full", "fast", "best",
    "better", "proficient", "familiar", "skilled", "responsible", "hands-on",
    "cross-functional", "solid", "deep", "advanced", "basic", "able", "top", "modern",
];

/// Irregular past forms and frequent base-form verbs that suffix rules miss.
const VERBS: &[&str] = &[
    "led", "built", "ran", "wrote", "grew", "drove", "made", "won", "took", "gave", "got",
    "began", "became", "brought", "taught", "sold", "kept", "met", "set", "spent", "went",
    "make", "take", "give", "get", "help", "helps", "ensure", "ensures", "enable", "enables",
    "create", "creates", "improve", "improves", "deliver", "delivers", "collaborate",
    "collaborates", "seeking", "seek", "seeks", "looking",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "first",
    "second", "third", "hundred", "thousand", "million",
];

/// Words whose adjective/verb-looking suffix is misleading.
const NOUN_EXCEPTIONS: &[&str] = &[
    "proposal", "approval", "terminal", "portal", "manual", "journal", "signal", "capital",
    "hospital", "tutorial", "material", "professional", "principal", "individual", "rational",
    "executive", "objective", "initiative", "perspective", "detective", "need", "speed",
    "feed", "seed", "bed", "red", "family", "supply", "assembly", "reply", "ansible",
];

/// Tags every token of `text`.
pub fn tag(text: &str) -> Vec<Token> {
    let mut tokens = tokenize(text);
    for i in 0..tokens.len() {
        let prev = if i > 0 && tokens[i - 1].sentence_idx == tokens[i].sentence_idx {
            Some((tokens[i - 1].lower.as_str(), tokens[i - 1].pos))
        } else {
            None
        };
        let pos = tag_token(&tokens[i], prev);
        tokens[i].pos = pos;
    }
    tokens
}

fn tag_token(token: &Token, prev: Option<(&str, PosTag)>) -> PosTag {
    let lower = token.lower.as_str();

    if is_numeric(lower) || NUMBER_WORDS.contains(&lower) {
        return PosTag::Numeral;
    }
    if let Some(closed) = closed_class(lower) {
        return closed;
    }
    if is_all_caps(&token.text) {
        return PosTag::ProperNoun;
    }
    if starts_upper(&token.text) && !token.is_sentence_start() {
        return PosTag::ProperNoun;
    }
    if VERBS.contains(&lower) {
        return PosTag::Verb;
    }
    if ADJECTIVES.contains(&lower) {
        return PosTag::Adjective;
    }
    if NOUN_EXCEPTIONS.contains(&lower) {
        return PosTag::Noun;
    }

    let after_subject = matches!(prev, Some((w, PosTag::Pronoun)) if SUBJECT_PRONOUNS.contains(&w));
    let after_aux = matches!(prev, Some((_, PosTag::Auxiliary)));

    let suffixed = suffix_tag(lower, after_aux);
    if suffixed != PosTag::Noun {
        return suffixed;
    }
    if after_subject || after_aux {
        return PosTag::Verb;
    }
    PosTag::Noun
}

fn closed_class(lower: &str) -> Option<PosTag> {
    let tables: [(&[&str], PosTag); 6] = [
        (DETERMINERS, PosTag::Determiner),
        (PRONOUNS, PosTag::Pronoun),
        (PREPOSITIONS, PosTag::Preposition),
        (CONJUNCTIONS, PosTag::Conjunction),
        (AUXILIARIES, PosTag::Auxiliary),
        (ADVERBS, PosTag::Adverb),
    ];
    tables
        .iter()
        .find(|(words, _)| words.contains(&lower))
        .map(|(_, tag)| *tag)
}

fn suffix_tag(lower: &str, after_aux: bool) -> PosTag {
    let len = lower.chars().count();
    if !lower.chars().all(|c| c.is_alphabetic() || c == '-') {
        return PosTag::Noun;
    }
    if len > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    // Gerunds read as nouns ("monitoring", "prototyping") unless an auxiliary precedes.
    if len > 4 && lower.ends_with("ing") {
        return if after_aux { PosTag::Verb } else { PosTag::Noun };
    }
    if len > 3 && lower.ends_with("ed") {
        return PosTag::Verb;
    }
    if len > 5 && ["ize", "ise", "ify"].iter().any(|s| lower.ends_with(s)) {
        return PosTag::Verb;
    }
    let adjective_suffixes = ["ous", "ful", "ive", "able", "ible", "less", "ish", "al"];
    if len > 4 && adjective_suffixes.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

fn is_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-' | '+' | '%'))
}

fn is_all_caps(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        tag(text).into_iter().map(|t| (t.text, t.pos)).collect()
    }

    fn tag_of(text: &str, word: &str) -> PosTag {
        tag(text)
            .into_iter()
            .find(|t| t.text == word)
            .map(|t| t.pos)
            .unwrap_or_else(|| panic!("{word} not found in {text}"))
    }

    #[test]
    fn test_resume_sentence() {
        let tagged = tags("Experienced Python developer with SQL and Pandas skills");
        assert_eq!(
            tagged,
            vec![
                ("Experienced".to_string(), PosTag::Verb),
                ("Python".to_string(), PosTag::ProperNoun),
                ("developer".to_string(), PosTag::Noun),
                ("with".to_string(), PosTag::Preposition),
                ("SQL".to_string(), PosTag::ProperNoun),
                ("and".to_string(), PosTag::Conjunction),
                ("Pandas".to_string(), PosTag::ProperNoun),
                ("skills".to_string(), PosTag::Noun),
            ]
        );
    }

    #[test]
    fn test_closed_class_words() {
        assert_eq!(tag_of("the data", "the"), PosTag::Determiner);
        assert_eq!(tag_of("we deploy", "we"), PosTag::Pronoun);
        assert_eq!(tag_of("it was fine", "was"), PosTag::Auxiliary);
        assert_eq!(tag_of("not really", "not"), PosTag::Adverb);
    }

    #[test]
    fn test_capitalised_closed_class_word_is_not_proper_noun() {
        assert_eq!(tag_of("Python And Docker", "And"), PosTag::Conjunction);
    }

    #[test]
    fn test_gerund_is_noun_unless_after_auxiliary() {
        assert_eq!(tag_of("Kubernetes monitoring", "monitoring"), PosTag::Noun);
        assert_eq!(tag_of("I was monitoring servers", "monitoring"), PosTag::Verb);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag_of("worked quickly", "quickly"), PosTag::Adverb);
        assert_eq!(tag_of("worked quickly", "worked"), PosTag::Verb);
        assert_eq!(tag_of("a scalable system", "scalable"), PosTag::Adjective);
        assert_eq!(tag_of("to optimize queries", "optimize"), PosTag::Verb);
        assert_eq!(tag_of("a written proposal", "proposal"), PosTag::Noun);
    }

    #[test]
    fn test_base_verb_after_subject_pronoun() {
        assert_eq!(tag_of("we ship code", "ship"), PosTag::Verb);
        assert_eq!(tag_of("the ship sank", "ship"), PosTag::Noun);
    }

    #[test]
    fn test_numerals() {
        assert_eq!(tag_of("5 years", "5"), PosTag::Numeral);
        assert_eq!(tag_of("in 2021", "2021"), PosTag::Numeral);
        assert_eq!(tag_of("three years", "three"), PosTag::Numeral);
    }

    #[test]
    fn test_acronym_at_sentence_start_is_proper_noun() {
        assert_eq!(tag_of("AWS certified", "AWS"), PosTag::ProperNoun);
    }

    #[test]
    fn test_previous_sentence_does_not_leak_context() {
        // "we" ends the first sentence, so "ship" opens a new one.
        assert_eq!(tag_of("Talk to we. ship dates", "ship"), PosTag::Noun);
    }

    #[test]
    fn test_ansible_is_noun() {
        assert_eq!(tag_of("I use ansible daily", "ansible"), PosTag::Noun);
        assert_eq!(tag_of("Ansible playbooks", "Ansible"), PosTag::Noun);
        assert_eq!(tag_of("a visible change", "visible"), PosTag::Adjective);
    }

    #[test]
    fn test_single_word_catalog_skills_are_nominal() {
        let catalog = crate::catalog::RoleCatalog::default();
        let single_words: Vec<String> = catalog
            .vocabulary()
            .into_iter()
            .filter(|s| !s.contains(' '))
            .collect();
        assert!(!single_words.is_empty());

        for skill in &single_words {
            for text in [
                format!("{skill} experience"),
                format!("worked with {skill} daily"),
                format!("we use {skill} in production"),
            ] {
                let pos = tag(&text)
                    .into_iter()
                    .find(|t| &t.lower == skill)
                    .map(|t| t.pos)
                    .unwrap_or_else(|| panic!("{skill} not tokenized in {text:?}"));
                assert!(pos.is_nominal(), "{skill} tagged {pos:?} in {text:?}");
            }
        }
    }

    #[test]
    fn test_is_nominal() {
        assert!(PosTag::Noun.is_nominal());
        assert!(PosTag::ProperNoun.is_nominal());
        assert!(!PosTag::Verb.is_nominal());
    }
}
