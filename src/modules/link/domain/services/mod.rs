pub mod link_extractor;
