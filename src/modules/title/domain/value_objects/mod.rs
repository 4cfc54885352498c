mod title_guess;

pub use title_guess::TitleGuess;
