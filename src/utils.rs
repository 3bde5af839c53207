pub mod rank_word_frequencies;
pub mod summarize_word_frequencies;
pub mod tokenize;

pub use rank_word_frequencies::rank_word_frequencies;
pub use summarize_word_frequencies::summarize_word_frequencies;
pub use tokenize::tokenize;
