/*
vocabulary.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazequiz.

Mazequiz is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazequiz is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazequiz. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! English vocabulary question bank.
//!
//! Each difficulty level has its own word list. At the start of a game the list is shuffled and
//! round `i` asks about the word at `i % len`.

use rand::Rng;
use rand::seq::SliceRandom;

use super::question::{Question, QuestionBank};
use crate::config::Difficulty;
use crate::highscores::GameId;

/// Vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub word: &'static str,
    pub definition: &'static str,
    pub synonym: &'static str,
}

const fn w(word: &'static str, definition: &'static str, synonym: &'static str) -> Word {
    Word {
        word,
        definition,
        synonym,
    }
}

/// Words for the easy level (A2).
pub const EASY_WORDS: [Word; 25] = [
    w("Ambiguous", "Open to more than one interpretation", "Vague"),
    w("Brisk", "Quick and full of energy", "Lively"),
    w("Candid", "Truthful and straightforward", "Frank"),
    w("Conceal", "To keep something out of sight", "Hide"),
    w("Diligent", "Showing care and effort in work", "Hardworking"),
    w("Earnest", "Serious and sincere in intention", "Sincere"),
    w("Elaborate", "Containing many carefully arranged parts", "Detailed"),
    w("Frugal", "Careful not to waste money", "Thrifty"),
    w("Gloomy", "Dark or causing sadness", "Bleak"),
    w("Hasty", "Done too quickly, without thought", "Rash"),
    w("Immense", "Extremely large", "Vast"),
    w("Jovial", "Friendly and full of good humour", "Cheerful"),
    w("Keen", "Very interested and eager", "Eager"),
    w("Lenient", "More tolerant than expected", "Mild"),
    w("Lofty", "Of great height or high ideals", "Noble"),
    w("Meticulous", "Paying great attention to detail", "Careful"),
    w("Mundane", "Dull and ordinary", "Ordinary"),
    w("Novice", "A person new to an activity", "Beginner"),
    w("Obscure", "Not known or hard to understand", "Unclear"),
    w("Prudent", "Acting with care for the future", "Wise"),
    w("Resilient", "Able to recover quickly from difficulty", "Tough"),
    w("Serene", "Calm and peaceful", "Calm"),
    w("Skeptical", "Not easily convinced", "Doubtful"),
    w("Tenacious", "Holding firmly to a goal", "Persistent"),
    w("Vivid", "Producing strong, clear images", "Bright"),
];

/// Words for the medium level (B2).
pub const MEDIUM_WORDS: [Word; 25] = [
    w("Aberration", "A departure from what is normal", "Deviation"),
    w("Astute", "Quick to notice and understand", "Shrewd"),
    w("Benevolent", "Well meaning and kindly", "Kind"),
    w("Complacent", "Uncritically pleased with oneself", "Self-satisfied"),
    w("Daunting", "Seeming difficult to deal with", "Intimidating"),
    w("Disparate", "Essentially different in kind", "Dissimilar"),
    w("Egregious", "Outstandingly bad", "Flagrant"),
    w("Exacerbate", "To make a problem worse", "Worsen"),
    w("Fervent", "Having intense feeling", "Passionate"),
    w("Gratuitous", "Done without good reason", "Unwarranted"),
    w("Harbinger", "A sign of something to come", "Omen"),
    w("Indolent", "Wanting to avoid activity", "Lazy"),
    w("Intrepid", "Not afraid of danger", "Fearless"),
    w("Jeopardize", "To put at risk", "Endanger"),
    w("Lament", "To express grief about something", "Mourn"),
    w("Malevolent", "Wishing to do harm to others", "Sinister"),
    w("Nefarious", "Wicked or criminal", "Wicked"),
    w("Ominous", "Suggesting that something bad will happen", "Threatening"),
    w("Pragmatic", "Dealing with things in a practical way", "Practical"),
    w("Quandary", "A state of uncertainty about what to do", "Dilemma"),
    w("Reclusive", "Avoiding the company of other people", "Solitary"),
    w("Sagacious", "Having good judgement", "Wise"),
    w("Spurious", "False or fake", "Fake"),
    w("Tepid", "Only slightly warm or enthusiastic", "Lukewarm"),
    w("Voluble", "Speaking fluently and at length", "Talkative"),
];

/// Words for the hard level (C1).
pub const HARD_WORDS: [Word; 25] = [
    w("Acrimony", "Bitterness or ill feeling", "Bitterness"),
    w("Belligerent", "Hostile and aggressive", "Aggressive"),
    w("Capricious", "Given to sudden changes of mood", "Fickle"),
    w("Deleterious", "Causing harm or damage", "Harmful"),
    w("Ephemeral", "Lasting for a very short time", "Transient"),
    w("Fastidious", "Very attentive to detail and accuracy", "Picky"),
    w("Garrulous", "Excessively talkative about trivial matters", "Loquacious"),
    w("Hegemony", "Leadership of one group over others", "Dominance"),
    w("Iconoclast", "A person who attacks cherished beliefs", "Rebel"),
    w("Juxtapose", "To place side by side for contrast", "Compare"),
    w("Laconic", "Using very few words", "Terse"),
    w("Mendacious", "Not telling the truth", "Dishonest"),
    w("Obfuscate", "To make something unclear on purpose", "Confuse"),
    w("Pellucid", "Translucently clear", "Clear"),
    w("Perfidious", "Deceitful and untrustworthy", "Treacherous"),
    w("Pernicious", "Having a gradual harmful effect", "Destructive"),
    w("Pugnacious", "Eager to argue or fight", "Combative"),
    w("Querulous", "Complaining in a whining manner", "Whiny"),
    w("Recalcitrant", "Stubbornly uncooperative", "Defiant"),
    w("Sycophant", "A person who flatters to gain advantage", "Flatterer"),
    w("Taciturn", "Saying little, reserved", "Reserved"),
    w("Umbrage", "Offence or annoyance", "Offense"),
    w("Vicarious", "Experienced through another person", "Indirect"),
    w("Vociferous", "Expressing opinions loudly", "Clamorous"),
    w("Whimsical", "Playfully unusual", "Fanciful"),
];

/// What a question asks about the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionShape {
    /// Show the word, find its definition.
    Definition,

    /// Show the definition, find the word.
    WordFromDefinition,

    /// Show the word, find its synonym.
    Synonym,
}

impl QuestionShape {
    /// Return the shape of the question for the given round.
    ///
    /// The medium level alternates between definitions and words.
    pub fn for_round(difficulty: Difficulty, round_index: usize) -> QuestionShape {
        match difficulty {
            Difficulty::Easy => QuestionShape::Definition,
            Difficulty::Medium if round_index % 2 == 1 => QuestionShape::WordFromDefinition,
            Difficulty::Medium => QuestionShape::Definition,
            Difficulty::Hard => QuestionShape::Synonym,
        }
    }

    /// Text displayed as the category of the question.
    pub fn category(&self) -> &'static str {
        match self {
            QuestionShape::Definition => "Find the meaning",
            QuestionShape::WordFromDefinition => "Find the word",
            QuestionShape::Synonym => "Find the synonym",
        }
    }

    /// Field of the entry that answers the question.
    fn answer(&self, entry: &Word) -> &'static str {
        match self {
            QuestionShape::Definition => entry.definition,
            QuestionShape::WordFromDefinition => entry.word,
            QuestionShape::Synonym => entry.synonym,
        }
    }

    fn prompt(&self, entry: &Word) -> String {
        match self {
            QuestionShape::Definition => format!("What does \"{}\" mean?", entry.word),
            QuestionShape::WordFromDefinition => {
                format!("Which word means \"{}\"?", entry.definition)
            }
            QuestionShape::Synonym => format!("Which word is a synonym of \"{}\"?", entry.word),
        }
    }
}

/// Question bank for the vocabulary quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct VocabularyBank;

impl VocabularyBank {
    /// Create a [`VocabularyBank`] object.
    pub fn new() -> Self {
        Self
    }

    /// Return the word list for the given difficulty level.
    pub fn words(difficulty: Difficulty) -> &'static [Word] {
        match difficulty {
            Difficulty::Easy => &EASY_WORDS,
            Difficulty::Medium => &MEDIUM_WORDS,
            Difficulty::Hard => &HARD_WORDS,
        }
    }
}

impl QuestionBank for VocabularyBank {
    type Pool = Vec<Word>;

    fn game_id(&self) -> GameId {
        GameId::Vocabulary
    }

    fn draw_pool<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Self::Pool {
        let mut pool: Vec<Word> = Self::words(difficulty).to_vec();
        pool.shuffle(rng);
        pool
    }

    fn next_question<R: Rng + ?Sized>(
        &self,
        pool: &Self::Pool,
        difficulty: Difficulty,
        round_index: usize,
        rng: &mut R,
    ) -> Question {
        // An empty pool only happens if the caller builds it by hand
        let pool: &[Word] = if pool.is_empty() {
            Self::words(difficulty)
        } else {
            pool
        };
        let entry: Word = pool[round_index % pool.len()];
        let shape = QuestionShape::for_round(difficulty, round_index);

        let mut others: Vec<&Word> = pool.iter().filter(|o| o.word != entry.word).collect();
        others.shuffle(rng);
        let candidates: Vec<String> = others
            .iter()
            .map(|o| shape.answer(o).to_string())
            .collect();

        Question::assemble(
            shape.prompt(&entry),
            shape.category(),
            shape.answer(&entry).to_string(),
            candidates,
            rng,
        )
        .with_explanation(format!("{}: {}", entry.word, entry.definition))
    }
}
