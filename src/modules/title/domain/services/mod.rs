pub mod title_parser;
