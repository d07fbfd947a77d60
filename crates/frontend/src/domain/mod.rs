pub mod a001_project;
pub mod a002_paragraph;
pub mod a003_translation;
pub mod a004_assignment;
