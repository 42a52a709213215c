// src/questions.rs

use std::sync::LazyLock;

use rand::seq::SliceRandom;

use crate::error::AppError;
use crate::models::quiz::{Question, Quiz};

/// How many questions a draw from the built-in pool serves at most.
pub const DEFAULT_DRAW: usize = 15;

/// How many questions a draw from a stored quiz serves at most.
pub const QUIZ_DRAW: usize = 30;

/// Draws up to `limit` questions uniformly at random, without
/// replacement. Order is independently randomized on every call.
pub fn select_questions(pool: &[Question], limit: usize) -> Vec<Question> {
    pool.choose_multiple(&mut rand::thread_rng(), limit.min(pool.len()))
        .cloned()
        .collect()
}

/// Draws from the built-in general-knowledge pool.
pub fn select_default() -> Vec<Question> {
    select_questions(&DEFAULT_POOL, DEFAULT_DRAW)
}

/// Draws from a stored quiz's pool. Refused for inactive quizzes.
pub fn select_from_quiz(quiz: &Quiz) -> Result<Vec<Question>, AppError> {
    if !quiz.is_active {
        return Err(AppError::BadRequest("Quiz is not active".to_string()));
    }
    Ok(select_questions(&quiz.questions, QUIZ_DRAW))
}

fn q(id: u32, question: &str, options: [&str; 4], answer: &str) -> Question {
    Question {
        id,
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        answer: answer.to_string(),
    }
}

/// Built-in default question pool, loaded once at first use and never
/// mutated afterwards.
pub static DEFAULT_POOL: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        q(1, "What is the capital of France?", ["London", "Berlin", "Paris", "Madrid"], "Paris"),
        q(2, "Which planet is known as the Red Planet?", ["Venus", "Mars", "Jupiter", "Saturn"], "Mars"),
        q(3, "What is 2 + 2?", ["3", "4", "5", "6"], "4"),
        q(4, "Who wrote 'Romeo and Juliet'?", ["Charles Dickens", "William Shakespeare", "Jane Austen", "Mark Twain"], "William Shakespeare"),
        q(5, "What is the largest mammal in the world?", ["Elephant", "Blue Whale", "Giraffe", "Hippopotamus"], "Blue Whale"),
        q(6, "Which programming language is known for its use in web development?", ["C++", "Java", "JavaScript", "Assembly"], "JavaScript"),
        q(7, "What is the chemical symbol for gold?", ["Go", "Gd", "Au", "Ag"], "Au"),
        q(8, "Which year did World War II end?", ["1944", "1945", "1946", "1947"], "1945"),
        q(9, "What is the smallest prime number?", ["0", "1", "2", "3"], "2"),
        q(10, "Which continent is the largest by area?", ["Africa", "Asia", "North America", "Europe"], "Asia"),
        q(11, "What is the speed of light in vacuum?", ["300,000 km/s", "150,000 km/s", "450,000 km/s", "600,000 km/s"], "300,000 km/s"),
        q(12, "Who painted the Mona Lisa?", ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Michelangelo"], "Leonardo da Vinci"),
        q(13, "What is the currency of Japan?", ["Yuan", "Won", "Yen", "Rupee"], "Yen"),
        q(14, "Which gas makes up most of Earth's atmosphere?", ["Oxygen", "Carbon Dioxide", "Nitrogen", "Hydrogen"], "Nitrogen"),
        q(15, "What is the hardest natural substance on Earth?", ["Gold", "Iron", "Diamond", "Platinum"], "Diamond"),
        q(16, "Which ocean is the largest?", ["Atlantic", "Indian", "Arctic", "Pacific"], "Pacific"),
        q(17, "What is the square root of 64?", ["6", "7", "8", "9"], "8"),
        q(18, "Who developed the theory of relativity?", ["Isaac Newton", "Albert Einstein", "Galileo Galilei", "Stephen Hawking"], "Albert Einstein"),
        q(19, "What is the longest river in the world?", ["Amazon", "Nile", "Mississippi", "Yangtze"], "Nile"),
        q(20, "Which element has the chemical symbol 'O'?", ["Gold", "Silver", "Oxygen", "Iron"], "Oxygen"),
        q(21, "What is the capital of Australia?", ["Sydney", "Melbourne", "Canberra", "Perth"], "Canberra"),
        q(22, "How many sides does a hexagon have?", ["5", "6", "7", "8"], "6"),
        q(23, "Which planet is closest to the Sun?", ["Venus", "Earth", "Mercury", "Mars"], "Mercury"),
        q(24, "What is the largest organ in the human body?", ["Heart", "Brain", "Liver", "Skin"], "Skin"),
        q(25, "Who wrote '1984'?", ["George Orwell", "Aldous Huxley", "Ray Bradbury", "H.G. Wells"], "George Orwell"),
        q(26, "What is the boiling point of water at sea level?", ["90°C", "95°C", "100°C", "105°C"], "100°C"),
        q(27, "Which country is known as the Land of the Rising Sun?", ["China", "Japan", "South Korea", "Thailand"], "Japan"),
        q(28, "What is the smallest country in the world?", ["Monaco", "Nauru", "Vatican City", "San Marino"], "Vatican City"),
        q(29, "How many bones are in an adult human body?", ["196", "206", "216", "226"], "206"),
        q(30, "What is the most abundant gas in the universe?", ["Oxygen", "Helium", "Hydrogen", "Nitrogen"], "Hydrogen"),
        q(31, "Which instrument measures atmospheric pressure?", ["Thermometer", "Barometer", "Hygrometer", "Anemometer"], "Barometer"),
        q(32, "What is the chemical formula for water?", ["H2O", "CO2", "NaCl", "CH4"], "H2O"),
        q(33, "Which vitamin is produced when skin is exposed to sunlight?", ["Vitamin A", "Vitamin B", "Vitamin C", "Vitamin D"], "Vitamin D"),
        q(34, "What is the tallest mountain in the world?", ["K2", "Kangchenjunga", "Mount Everest", "Lhotse"], "Mount Everest"),
        q(35, "Which blood type is known as the universal donor?", ["A", "B", "AB", "O"], "O"),
    ]
});
