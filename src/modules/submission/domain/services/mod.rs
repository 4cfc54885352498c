pub mod submission_checks;
