mod link_guess;

pub use link_guess::LinkGuess;
